//! # btforms - Behavior-Tree Editor Form Logic
//!
//! **btforms** holds the validation, normalization and edit-session rules behind the two
//! editor forms of a behavior-tree editor: the custom datatype table and the custom
//! node model form. Rendering is left to the caller; this crate owns the row state and
//! decides, after every edit, whether the form may be accepted and what to tell the user.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Context**: Read the existing datatypes and node models, e.g. with [`catalog::Catalog`].
//! 2.  **Open a Form**: Create a [`form::DataTypeForm`] or build a [`form::NodeForm`] with `NodeForm::builder`.
//! 3.  **Edit**: Forward every cell edit to the form. Each call re-validates the whole form.
//! 4.  **Reflect the Verdict**: Enable OK only while `verdict().valid`, and show `verdict().message`.
//! 5.  **Accept**: `accept()` hands back the normalized result, or the issue that blocks it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use btforms::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut datatypes = DataTypes::new();
//!     datatypes.insert(
//!         "Color".to_string(),
//!         vec!["red".to_string(), "green".to_string()],
//!     );
//!     let models = NodeModels::new();
//!
//!     let mut form = NodeForm::builder(&models, &datatypes).build();
//!     form.set_name("PaintWall");
//!     let row = form.add_port();
//!     form.set_port_key(row, "color")?;
//!     form.set_port_type(row, "Color")?;
//!     form.set_default_value(row, "green")?;
//!
//!     println!("-> {}", form.verdict().message);
//!     let model = form.accept()?;
//!     println!("-> Accepted '{}' with {} port(s)", model.id, model.ports.len());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod form;
pub mod model;
pub mod normalize;
pub mod prelude;
pub mod validator;
