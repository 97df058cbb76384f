pub mod identifier;
pub mod node;
pub mod port;

pub use identifier::*;
pub use node::*;
pub use port::*;

use std::collections::BTreeMap;

/// Custom datatypes: a datatype name mapped to its ordered list of allowed values.
pub type DataTypes = BTreeMap<String, Vec<String>>;
