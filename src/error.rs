use thiserror::Error;

/// Broad classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    EmptyField,
    InvalidCharset,
    DuplicateKey,
    ReservedKeyword,
    UnknownReference,
}

/// A single rule violation found while validating one of the forms.
///
/// The `Display` text is the message shown to the user next to the disabled OK button.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid name: use only letters, digits and underscores")]
    InvalidDataTypeName { row: usize },

    #[error("Invalid values: use only letters, digits and underscores")]
    InvalidDataTypeValues { row: usize },

    #[error("Duplicated datatype name")]
    DuplicatedDataTypeName,

    #[error("The name 'root' is forbidden")]
    ReservedNodeName,

    #[error("The name cannot be empty")]
    EmptyNodeName,

    #[error("Invalid name: use only letters, digits and underscores")]
    InvalidNodeName,

    #[error("Another Node has the same name")]
    NodeNameTaken(String),

    #[error("Empty port key")]
    EmptyPortKey,

    #[error("Invalid key: use only letters, digits and underscores.")]
    InvalidPortKey,

    #[error("Reserved port key: the words \"name\", \"ID\" and \"datatype\" should not be used.")]
    ReservedPortKey,

    #[error("Duplicated port key")]
    DuplicatedPortKey,
}

impl ValidationError {
    pub fn category(&self) -> IssueCategory {
        match self {
            Self::EmptyNodeName | Self::EmptyPortKey => IssueCategory::EmptyField,
            Self::InvalidDataTypeName { .. }
            | Self::InvalidDataTypeValues { .. }
            | Self::InvalidNodeName
            | Self::InvalidPortKey => IssueCategory::InvalidCharset,
            Self::DuplicatedDataTypeName | Self::DuplicatedPortKey => IssueCategory::DuplicateKey,
            Self::ReservedNodeName | Self::ReservedPortKey => IssueCategory::ReservedKeyword,
            Self::NodeNameTaken(_) => IssueCategory::UnknownReference,
        }
    }
}

/// Errors raised by form sessions when an edit cannot be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Row {row} does not exist (the form has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("Column '{column}' of row {row} is read-only")]
    LockedCell { row: usize, column: &'static str },

    #[error("Row {0} cannot be removed")]
    ProtectedRow(usize),

    #[error("The node kind of a SubTree model cannot be changed")]
    KindLocked,

    #[error("Unknown datatype '{0}'")]
    UnknownDataType(String),

    #[error("'{value}' is not one of the values of datatype '{type_name}'")]
    InvalidChoice { value: String, type_name: String },

    #[error("The form is not valid: {0}")]
    Rejected(ValidationError),
}

/// Errors that can occur when parsing model enums from their text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown port direction: '{0}'")]
    UnknownDirection(String),

    #[error("Unknown node kind: '{0}'")]
    UnknownKind(String),
}

/// Errors that can occur when reading or writing a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not access catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
