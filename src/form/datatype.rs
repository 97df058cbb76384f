use crate::error::FormError;
use crate::model::DataTypes;
use crate::normalize::{normalize_text, render_values, split_and_trim};
use crate::validator::{DataTypeEntry, DataTypeReport, DataTypeValidator, Verdict};
use tracing::{debug, warn};

/// Name given to a freshly added datatype row.
const NEW_ROW_NAME: &str = "datatype_name";

/// One row of the datatype table as currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeRow {
    pub name: String,
    pub values_text: String,
}

impl DataTypeRow {
    fn entry(&self) -> DataTypeEntry {
        DataTypeEntry::new(self.name.clone(), split_and_trim(&self.values_text))
    }
}

/// Edit session of the custom datatype form.
#[derive(Debug, Clone)]
pub struct DataTypeForm {
    rows: Vec<DataTypeRow>,
    report: DataTypeReport,
}

impl DataTypeForm {
    /// Opens the form on the currently defined datatypes.
    pub fn new(datatypes: &DataTypes) -> Self {
        let rows = datatypes
            .iter()
            .map(|(name, values)| DataTypeRow {
                name: name.clone(),
                values_text: render_values(values),
            })
            .collect();
        let mut form = Self {
            rows,
            report: DataTypeReport::default(),
        };
        form.revalidate();
        form
    }

    pub fn rows(&self) -> &[DataTypeRow] {
        &self.rows
    }

    pub fn report(&self) -> &DataTypeReport {
        &self.report
    }

    pub fn verdict(&self) -> Verdict {
        self.report.verdict()
    }

    /// Whether the remove action applies to the given selection.
    pub fn can_remove(&self, selection: &[usize]) -> bool {
        !selection.is_empty()
    }

    /// Appends a placeholder row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(DataTypeRow {
            name: NEW_ROW_NAME.to_string(),
            values_text: String::new(),
        });
        self.revalidate();
        self.rows.len() - 1
    }

    pub fn remove_rows(&mut self, selection: &[usize]) -> Result<(), FormError> {
        for row in super::removal_order(selection, self.rows.len())? {
            self.rows.remove(row);
        }
        self.revalidate();
        Ok(())
    }

    pub fn set_name(&mut self, row: usize, name: &str) -> Result<(), FormError> {
        self.row_mut(row)?.name = name.to_string();
        self.cell_changed();
        Ok(())
    }

    pub fn set_values(&mut self, row: usize, text: &str) -> Result<(), FormError> {
        self.row_mut(row)?.values_text = text.to_string();
        self.cell_changed();
        Ok(())
    }

    /// Snapshot of the table as a datatype map, regardless of validity.
    ///
    /// When names repeat, the first row with a given name wins.
    pub fn data_types(&self) -> DataTypes {
        let mut result = DataTypes::new();
        for row in &self.rows {
            result
                .entry(row.name.clone())
                .or_insert_with(|| split_and_trim(&row.values_text));
        }
        result
    }

    /// Commits the table. Fails with the displayed issue while the form is invalid.
    pub fn accept(&self) -> Result<DataTypes, FormError> {
        match self.report.displayed_issue() {
            Some(issue) => {
                warn!(%issue, "Rejected datatype form");
                Err(FormError::Rejected(issue.clone()))
            }
            None => Ok(self.data_types()),
        }
    }

    fn row_mut(&mut self, row: usize) -> Result<&mut DataTypeRow, FormError> {
        let len = self.rows.len();
        self.rows
            .get_mut(row)
            .ok_or(FormError::RowOutOfRange { row, len })
    }

    /// Rewrites every value cell in canonical form, then re-validates.
    fn cell_changed(&mut self) {
        for row in &mut self.rows {
            row.values_text = normalize_text(&row.values_text);
        }
        self.revalidate();
    }

    fn revalidate(&mut self) {
        let entries: Vec<DataTypeEntry> = self.rows.iter().map(DataTypeRow::entry).collect();
        let report = DataTypeValidator::validate(&entries);
        if report.verdict() != self.report.verdict() {
            debug!(verdict = %report.verdict(), rows = self.rows.len(), "Datatype form verdict changed");
        }
        self.report = report;
    }
}
