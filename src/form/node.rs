use crate::error::{FormError, ValidationError};
use crate::model::{
    BUILTIN_PORT_TYPE, DataTypes, NodeKind, NodeModel, NodeModels, PortDirection, PortModel,
    PortModels, SHARED_BLACKBOARD_KEY,
};
use crate::validator::{NodeModelValidator, Verdict};
use std::iter;
use tracing::{debug, warn};

/// Description carried by the synthetic shared blackboard port.
pub const SHARED_BLACKBOARD_DESCRIPTION: &str =
    "If false (default), the Subtree has an isolated blackboard and needs port remapping";

/// Key given to a freshly added port row.
const NEW_PORT_KEY: &str = "key_name";

/// Editor state of a port's default value.
///
/// Ports typed with the built-in type take free text; ports typed with a custom
/// datatype pick one of that datatype's values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    FreeText(String),
    Choice {
        selected: String,
        options: Vec<String>,
    },
}

impl DefaultValue {
    pub fn text(&self) -> &str {
        match self {
            Self::FreeText(text) => text,
            Self::Choice { selected, .. } => selected,
        }
    }

    fn choice_of(options: &[String]) -> Self {
        Self::Choice {
            selected: options.first().cloned().unwrap_or_default(),
            options: options.to_vec(),
        }
    }
}

/// One row of the port table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRow {
    pub key: String,
    pub direction: PortDirection,
    pub type_name: String,
    pub default_value: DefaultValue,
    pub description: String,
    locked: bool,
}

impl PortRow {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: PortDirection::Input,
            type_name: BUILTIN_PORT_TYPE.to_string(),
            default_value: DefaultValue::FreeText(String::new()),
            description: String::new(),
            locked: false,
        }
    }

    fn shared_blackboard() -> Self {
        Self {
            default_value: DefaultValue::FreeText("false".to_string()),
            description: SHARED_BLACKBOARD_DESCRIPTION.to_string(),
            locked: true,
            ..Self::new(SHARED_BLACKBOARD_KEY)
        }
    }

    /// Locked rows only allow their default value to be edited, and cannot be removed.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn port_model(&self) -> PortModel {
        PortModel {
            direction: self.direction,
            type_name: self.type_name.clone(),
            default_value: self.default_value.text().to_string(),
            description: self.description.clone(),
        }
    }
}

/// Configures a [`NodeForm`] before opening it.
pub struct NodeFormBuilder<'a> {
    models: &'a NodeModels,
    datatypes: &'a DataTypes,
    to_edit: Option<String>,
}

impl<'a> NodeFormBuilder<'a> {
    pub fn new(models: &'a NodeModels, datatypes: &'a DataTypes) -> Self {
        Self {
            models,
            datatypes,
            to_edit: None,
        }
    }

    /// Opens the form on the existing model `name`. A name with no model behind it
    /// opens a fresh form.
    pub fn editing(mut self, name: &str) -> Self {
        self.to_edit = Some(name.to_string());
        self
    }

    pub fn build(self) -> NodeForm<'a> {
        let mut form = NodeForm {
            models: self.models,
            datatypes: self.datatypes,
            name: String::new(),
            kind: NodeKind::Action,
            kind_locked: false,
            editing: None,
            rows: Vec::new(),
            issue: None,
        };

        if let Some(name) = self.to_edit.as_deref() {
            if let Some(model) = self.models.get(name) {
                form.load(name, model);
            }
        }

        form.revalidate();
        form
    }
}

/// Edit session of the custom node model form.
#[derive(Debug, Clone)]
pub struct NodeForm<'a> {
    models: &'a NodeModels,
    datatypes: &'a DataTypes,
    name: String,
    kind: NodeKind,
    kind_locked: bool,
    editing: Option<String>,
    rows: Vec<PortRow>,
    issue: Option<ValidationError>,
}

impl<'a> NodeForm<'a> {
    pub fn builder(models: &'a NodeModels, datatypes: &'a DataTypes) -> NodeFormBuilder<'a> {
        NodeFormBuilder::new(models, datatypes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_kind_locked(&self) -> bool {
        self.kind_locked
    }

    /// The name of the existing model being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn rows(&self) -> &[PortRow] {
        &self.rows
    }

    pub fn verdict(&self) -> Verdict {
        match &self.issue {
            Some(issue) => Verdict::rejected(issue),
            None => Verdict::ok(),
        }
    }

    /// Types a port may take: the built-in type followed by every custom datatype.
    pub fn type_choices(&self) -> Vec<&str> {
        iter::once(BUILTIN_PORT_TYPE)
            .chain(self.datatypes.keys().map(String::as_str))
            .collect()
    }

    pub fn can_remove(&self, selection: &[usize]) -> bool {
        !selection.is_empty()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.revalidate();
    }

    pub fn set_kind(&mut self, kind: NodeKind) -> Result<(), FormError> {
        if kind == self.kind {
            return Ok(());
        }
        if self.kind_locked {
            return Err(FormError::KindLocked);
        }
        self.kind = kind;
        self.sync_shared_blackboard();
        self.revalidate();
        Ok(())
    }

    /// Appends a placeholder port and returns its index.
    pub fn add_port(&mut self) -> usize {
        self.rows.push(PortRow::new(NEW_PORT_KEY));
        self.revalidate();
        self.rows.len() - 1
    }

    pub fn remove_ports(&mut self, selection: &[usize]) -> Result<(), FormError> {
        let order = super::removal_order(selection, self.rows.len())?;
        if let Some(&row) = order.iter().find(|&&row| self.rows[row].locked) {
            return Err(FormError::ProtectedRow(row));
        }
        for row in order {
            self.rows.remove(row);
        }
        self.revalidate();
        Ok(())
    }

    pub fn set_port_key(&mut self, row: usize, key: &str) -> Result<(), FormError> {
        self.unlocked_row_mut(row, "key")?.key = key.to_string();
        self.revalidate();
        Ok(())
    }

    pub fn set_port_direction(
        &mut self,
        row: usize,
        direction: PortDirection,
    ) -> Result<(), FormError> {
        self.unlocked_row_mut(row, "direction")?.direction = direction;
        self.revalidate();
        Ok(())
    }

    /// Changes a port's type, switching its default value editor to match.
    pub fn set_port_type(&mut self, row: usize, type_name: &str) -> Result<(), FormError> {
        let datatypes = self.datatypes;
        let port = self.unlocked_row_mut(row, "type")?;
        if port.type_name == type_name {
            return Ok(());
        }

        port.default_value = if type_name == BUILTIN_PORT_TYPE {
            DefaultValue::FreeText(String::new())
        } else {
            let options = datatypes
                .get(type_name)
                .ok_or_else(|| FormError::UnknownDataType(type_name.to_string()))?;
            DefaultValue::choice_of(options)
        };
        port.type_name = type_name.to_string();
        debug!(row, type_name, "Port default editor switched");

        self.revalidate();
        Ok(())
    }

    pub fn set_default_value(&mut self, row: usize, value: &str) -> Result<(), FormError> {
        let port = self.row_mut(row)?;
        match &mut port.default_value {
            DefaultValue::FreeText(text) => *text = value.to_string(),
            DefaultValue::Choice { selected, options } => {
                if !options.iter().any(|option| option == value) {
                    return Err(FormError::InvalidChoice {
                        value: value.to_string(),
                        type_name: port.type_name.clone(),
                    });
                }
                *selected = value.to_string();
            }
        }
        self.revalidate();
        Ok(())
    }

    pub fn set_port_description(&mut self, row: usize, description: &str) -> Result<(), FormError> {
        self.unlocked_row_mut(row, "description")?.description = description.to_string();
        self.revalidate();
        Ok(())
    }

    /// Snapshot of the form as a node model, regardless of validity.
    ///
    /// When port keys repeat, the first row with a given key wins.
    pub fn node_model(&self) -> NodeModel {
        let mut ports = PortModels::new();
        for row in &self.rows {
            ports
                .entry(row.key.clone())
                .or_insert_with(|| row.port_model());
        }
        NodeModel {
            kind: self.kind,
            id: self.name.clone(),
            ports,
        }
    }

    /// Commits the form. Fails with the displayed issue while the form is invalid.
    pub fn accept(&self) -> Result<NodeModel, FormError> {
        match &self.issue {
            Some(issue) => {
                warn!(%issue, name = %self.name, "Rejected node form");
                Err(FormError::Rejected(issue.clone()))
            }
            None => Ok(self.node_model()),
        }
    }

    /// Re-enters `model` field by field, as a user would: unlocked rows are cleared,
    /// then the name, kind and every port are set in order. The shared blackboard
    /// port of a SubTree only receives its default value.
    pub fn enter_model(&mut self, model: &NodeModel) -> Result<(), FormError> {
        let unlocked: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !row.locked)
            .map(|(i, _)| i)
            .collect();
        self.remove_ports(&unlocked)?;

        self.set_name(&model.id);
        self.set_kind(model.kind)?;

        for (key, port) in &model.ports {
            let shared = self
                .rows
                .iter()
                .position(|row| row.locked && row.key == SHARED_BLACKBOARD_KEY);
            let row = match shared {
                Some(row) if key == SHARED_BLACKBOARD_KEY => row,
                _ => {
                    let row = self.add_port();
                    self.set_port_key(row, key)?;
                    self.set_port_direction(row, port.direction)?;
                    self.set_port_type(row, &port.type_name)?;
                    self.set_port_description(row, &port.description)?;
                    row
                }
            };
            if !port.default_value.is_empty() {
                self.set_default_value(row, &port.default_value)?;
            }
        }
        Ok(())
    }

    fn load(&mut self, name: &str, model: &NodeModel) {
        self.editing = Some(name.to_string());
        self.name = name.to_string();

        for (key, port) in &model.ports {
            let mut row = PortRow::new(key);
            row.direction = port.direction;
            row.description = port.description.clone();
            row.default_value = match self.datatypes.get(&port.type_name) {
                Some(options) if port.type_name != BUILTIN_PORT_TYPE => {
                    row.type_name = port.type_name.clone();
                    if options.contains(&port.default_value) {
                        DefaultValue::Choice {
                            selected: port.default_value.clone(),
                            options: options.clone(),
                        }
                    } else {
                        DefaultValue::choice_of(options)
                    }
                }
                _ => {
                    if port.type_name != BUILTIN_PORT_TYPE {
                        warn!(port = %key, type_name = %port.type_name, "Unknown port type, falling back to the built-in type");
                    }
                    DefaultValue::FreeText(port.default_value.clone())
                }
            };
            self.rows.push(row);
        }

        // Models without a selectable kind open on the first entry of the selector.
        self.kind = if NodeKind::SELECTABLE.contains(&model.kind) {
            model.kind
        } else {
            NodeKind::Action
        };
        self.sync_shared_blackboard();
        self.kind_locked = self.kind == NodeKind::SubTree;
    }

    /// Adds the shared blackboard port to SubTree nodes and strips it from any other kind.
    ///
    /// A row already keyed like the shared blackboard port is taken over: it is locked
    /// and its fixed cells are reset, keeping only its default value.
    fn sync_shared_blackboard(&mut self) {
        if self.kind == NodeKind::SubTree {
            let existing = self
                .rows
                .iter()
                .position(|row| row.key == SHARED_BLACKBOARD_KEY);
            match existing {
                Some(index) if !self.rows[index].locked => {
                    let row = &mut self.rows[index];
                    let default_value = row.default_value.text().to_string();
                    *row = PortRow {
                        default_value: DefaultValue::FreeText(default_value),
                        ..PortRow::shared_blackboard()
                    };
                    debug!("Locked existing shared blackboard port");
                }
                Some(_) => {}
                None => {
                    self.rows.push(PortRow::shared_blackboard());
                    debug!("Injected shared blackboard port");
                }
            }
        } else {
            let before = self.rows.len();
            self.rows.retain(|row| row.key != SHARED_BLACKBOARD_KEY);
            if self.rows.len() < before {
                debug!(kind = %self.kind, "Removed shared blackboard port");
            }
        }
    }

    fn row_mut(&mut self, row: usize) -> Result<&mut PortRow, FormError> {
        let len = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(FormError::RowOutOfRange { row, len })
    }

    fn unlocked_row_mut(
        &mut self,
        row: usize,
        column: &'static str,
    ) -> Result<&mut PortRow, FormError> {
        let port = self.row_mut(row)?;
        if port.locked {
            return Err(FormError::LockedCell { row, column });
        }
        Ok(port)
    }

    fn revalidate(&mut self) {
        let outcome = {
            let keys: Vec<&str> = self.rows.iter().map(|row| row.key.as_str()).collect();
            NodeModelValidator::new(self.models)
                .editing(self.editing.as_deref())
                .check(&self.name, &keys)
        };
        let issue = outcome.err();
        let changed = issue != self.issue;
        self.issue = issue;
        if changed {
            debug!(verdict = %self.verdict(), "Node form verdict changed");
        }
    }
}
