use crate::error::CatalogError;
use crate::model::{DataTypes, NodeModels};
use serde::{Deserialize, Serialize};
use std::fs;

/// The reference context both forms are opened against: the custom datatypes and
/// node models defined so far.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub datatypes: DataTypes,
    #[serde(default)]
    pub models: NodeModels,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the catalog to `path` as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), CatalogError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.to_string(),
            source,
        })
    }
}
