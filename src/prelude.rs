//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the btforms crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use btforms::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let form = DataTypeForm::new(&catalog.datatypes);
//! println!("Datatype table: {}", form.verdict());
//! # Ok(())
//! # }
//! ```

// Forms and validators
pub use crate::form::{DataTypeForm, DataTypeRow, DefaultValue, NodeForm, PortRow};
pub use crate::validator::{DataTypeEntry, DataTypeValidator, NodeModelValidator, Verdict};

// Model types
pub use crate::model::{
    DataTypes, NodeKind, NodeModel, NodeModels, PortDirection, PortModel, PortModels,
};

// Normalization
pub use crate::normalize::{normalize_text, render_values, split_and_trim};

// Catalog
pub use crate::catalog::Catalog;

// Error types
pub use crate::error::{CatalogError, FormError, IssueCategory, ParseError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
