use super::Verdict;
use crate::error::ValidationError;
use crate::model::{is_datatype_identifier, is_identifier};
use ahash::AHashSet;

/// One row of the custom datatype table, with its values already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeEntry {
    pub name: String,
    pub values: Vec<String>,
}

impl DataTypeEntry {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Result of validating the datatype table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTypeReport {
    /// Every failure, in the order the rules encountered them.
    pub issues: Vec<ValidationError>,
    /// Rows whose value list contains an invalid token.
    pub flagged_rows: Vec<usize>,
}

impl DataTypeReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The failure whose message is displayed. Each failing rule overwrites the message
    /// of the previous one, so this is the last issue found.
    pub fn displayed_issue(&self) -> Option<&ValidationError> {
        self.issues.last()
    }

    pub fn is_flagged(&self, row: usize) -> bool {
        self.flagged_rows.contains(&row)
    }

    pub fn verdict(&self) -> Verdict {
        match self.displayed_issue() {
            Some(issue) => Verdict::rejected(issue),
            None => Verdict::ok(),
        }
    }
}

/// Rules for the custom datatype table.
pub struct DataTypeValidator;

impl DataTypeValidator {
    pub fn validate(entries: &[DataTypeEntry]) -> DataTypeReport {
        let mut report = DataTypeReport::default();
        let mut names: AHashSet<&str> = AHashSet::with_capacity(entries.len());

        for (row, entry) in entries.iter().enumerate() {
            if !is_datatype_identifier(&entry.name) {
                report
                    .issues
                    .push(ValidationError::InvalidDataTypeName { row });
            }

            if !entry.values.iter().all(|value| is_identifier(value)) {
                report
                    .issues
                    .push(ValidationError::InvalidDataTypeValues { row });
                report.flagged_rows.push(row);
            }

            names.insert(entry.name.as_str());
        }

        if names.len() < entries.len() {
            report.issues.push(ValidationError::DuplicatedDataTypeName);
        }

        report
    }
}
