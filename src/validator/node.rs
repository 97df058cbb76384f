use super::Verdict;
use crate::error::ValidationError;
use crate::model::{NodeModels, is_identifier, is_reserved_node_name, is_reserved_port_key};
use ahash::AHashSet;

/// Rules for the custom node model form.
///
/// The checks run in a fixed order and the first failure is the one reported.
pub struct NodeModelValidator<'a> {
    existing: &'a NodeModels,
    editing: Option<&'a str>,
}

impl<'a> NodeModelValidator<'a> {
    pub fn new(existing: &'a NodeModels) -> Self {
        Self {
            existing,
            editing: None,
        }
    }

    /// Marks the session as editing the existing model `name`, which exempts that
    /// name from the "already taken" check.
    pub fn editing(mut self, name: Option<&'a str>) -> Self {
        self.editing = name;
        self
    }

    pub fn check(&self, name: &str, port_keys: &[&str]) -> Result<(), ValidationError> {
        self.check_name(name)?;
        Self::check_port_keys(port_keys)
    }

    pub fn validate(&self, name: &str, port_keys: &[&str]) -> Verdict {
        self.check(name, port_keys).into()
    }

    fn check_name(&self, name: &str) -> Result<(), ValidationError> {
        if is_reserved_node_name(name) {
            return Err(ValidationError::ReservedNodeName);
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyNodeName);
        }
        if !is_identifier(name) {
            return Err(ValidationError::InvalidNodeName);
        }
        if self.existing.contains_key(name) && self.editing != Some(name) {
            return Err(ValidationError::NodeNameTaken(name.to_string()));
        }
        Ok(())
    }

    fn check_port_keys(port_keys: &[&str]) -> Result<(), ValidationError> {
        let mut empty = false;
        let mut invalid = false;
        let mut reserved = false;
        let mut accepted: AHashSet<&str> = AHashSet::with_capacity(port_keys.len());

        for &key in port_keys {
            if key.is_empty() {
                empty = true;
            } else if !is_identifier(key) {
                invalid = true;
            } else if is_reserved_port_key(key) {
                reserved = true;
            } else {
                accepted.insert(key);
            }
        }

        if empty {
            Err(ValidationError::EmptyPortKey)
        } else if invalid {
            Err(ValidationError::InvalidPortKey)
        } else if reserved {
            Err(ValidationError::ReservedPortKey)
        } else if accepted.len() < port_keys.len() {
            Err(ValidationError::DuplicatedPortKey)
        } else {
            Ok(())
        }
    }
}
