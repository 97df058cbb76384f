//! Edit sessions for the two forms.
//!
//! A form owns its rows and the verdict of the last validation. Each successful
//! mutation re-runs the validator over the whole table before returning, and the
//! committed result is only handed out by `accept()` while that verdict is valid.

mod datatype;
mod node;

pub use datatype::{DataTypeForm, DataTypeRow};
pub use node::{DefaultValue, NodeForm, NodeFormBuilder, PortRow, SHARED_BLACKBOARD_DESCRIPTION};

use crate::error::FormError;
use itertools::Itertools;
use std::cmp::Reverse;

/// Checks every selected row index and returns them highest first, without repeats.
fn removal_order(selection: &[usize], len: usize) -> Result<Vec<usize>, FormError> {
    if let Some(&row) = selection.iter().find(|&&row| row >= len) {
        return Err(FormError::RowOutOfRange { row, len });
    }
    Ok(selection
        .iter()
        .copied()
        .sorted_unstable_by_key(|&row| Reverse(row))
        .dedup()
        .collect())
}
