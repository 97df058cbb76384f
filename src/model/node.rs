use super::port::PortModels;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Classification of a behavior-tree node.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    #[default]
    Action,
    Condition,
    Control,
    SubTree,
    Decorator,
    Undefined,
}

impl NodeKind {
    /// Kinds offered by the node form's kind selector, in display order.
    pub const SELECTABLE: [NodeKind; 5] = [
        Self::Action,
        Self::Condition,
        Self::Control,
        Self::SubTree,
        Self::Decorator,
    ];
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Action => "Action",
            Self::Condition => "Condition",
            Self::Control => "Control",
            Self::SubTree => "SubTree",
            Self::Decorator => "Decorator",
            Self::Undefined => "Undefined",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Action" => Ok(Self::Action),
            "Condition" => Ok(Self::Condition),
            "Control" => Ok(Self::Control),
            "SubTree" => Ok(Self::SubTree),
            "Decorator" => Ok(Self::Decorator),
            "Undefined" => Ok(Self::Undefined),
            other => Err(ParseError::UnknownKind(other.to_string())),
        }
    }
}

/// A custom node model as committed by the node form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeModel {
    pub kind: NodeKind,
    pub id: String,
    #[serde(default)]
    pub ports: PortModels,
}

/// Existing node models keyed by node name.
pub type NodeModels = BTreeMap<String, NodeModel>;
