//! Pure validation rules for the two forms.
//!
//! Validators hold no state between calls and never fail: every call inspects the
//! full current snapshot of a form and reports a [`Verdict`].

mod datatype;
mod node;
mod verdict;

pub use datatype::{DataTypeEntry, DataTypeReport, DataTypeValidator};
pub use node::NodeModelValidator;
pub use verdict::Verdict;
