use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Data flow direction of a port.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PortDirection {
    #[default]
    Input,
    Output,
    InOut,
}

impl PortDirection {
    pub const ALL: [PortDirection; 3] = [Self::Input, Self::Output, Self::InOut];

    /// The label shown in the direction selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
            Self::InOut => "In/Out",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Output => write!(f, "Output"),
            Self::InOut => write!(f, "InOut"),
        }
    }
}

impl FromStr for PortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Input" => Ok(Self::Input),
            "Output" => Ok(Self::Output),
            "InOut" | "In/Out" => Ok(Self::InOut),
            other => Err(ParseError::UnknownDirection(other.to_string())),
        }
    }
}

/// A named, directioned, typed parameter slot of a node model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PortModel {
    pub direction: PortDirection,
    pub type_name: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub description: String,
}

/// Ports of a node model keyed by port name.
pub type PortModels = BTreeMap<String, PortModel>;
