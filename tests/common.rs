//! Common test fixtures for the datatype and node model forms.
use btforms::prelude::*;

/// A single datatype: `Color` with three values.
#[allow(dead_code)]
pub fn create_color_datatypes() -> DataTypes {
    let mut datatypes = DataTypes::new();
    datatypes.insert(
        "Color".to_string(),
        vec!["red".to_string(), "green".to_string(), "blue".to_string()],
    );
    datatypes
}

#[allow(dead_code)]
pub fn port(direction: PortDirection, type_name: &str, default_value: &str) -> PortModel {
    PortModel {
        direction,
        type_name: type_name.to_string(),
        default_value: default_value.to_string(),
        description: String::new(),
    }
}

/// Existing models: an action `Foo` with a float and a `Color` port, and a subtree
/// `Sub` that already carries its shared blackboard port.
#[allow(dead_code)]
pub fn create_existing_models() -> NodeModels {
    let mut foo_ports = PortModels::new();
    foo_ports.insert("speed".to_string(), port(PortDirection::Input, "float", "1.5"));
    foo_ports.insert("paint".to_string(), port(PortDirection::Output, "Color", "blue"));

    let mut sub_ports = PortModels::new();
    sub_ports.insert(
        "__shared_blackboard".to_string(),
        port(PortDirection::Input, "float", "true"),
    );

    let mut models = NodeModels::new();
    models.insert(
        "Foo".to_string(),
        NodeModel {
            kind: NodeKind::Action,
            id: "Foo".to_string(),
            ports: foo_ports,
        },
    );
    models.insert(
        "Sub".to_string(),
        NodeModel {
            kind: NodeKind::SubTree,
            id: "Sub".to_string(),
            ports: sub_ports,
        },
    );
    models
}
