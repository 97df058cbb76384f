//! Character-set checks for the names used throughout the forms.

/// Port keys that a user may never introduce by hand.
pub const RESERVED_PORT_KEYS: [&str; 3] = ["ID", "name", "datatype"];

/// Node name reserved for the tree root, compared case-insensitively.
pub const RESERVED_NODE_NAME: &str = "root";

/// Key of the synthetic port carried by every SubTree model.
pub const SHARED_BLACKBOARD_KEY: &str = "__shared_blackboard";

/// The built-in port type, edited as free text.
pub const BUILTIN_PORT_TYPE: &str = "float";

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns `true` if `text` is a non-empty run of letters, digits and underscores.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_word_char)
}

/// Like [`is_identifier`], but also accepts `:` (used by namespaced datatype names).
pub fn is_datatype_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| is_word_char(c) || c == ':')
}

pub fn is_reserved_port_key(key: &str) -> bool {
    RESERVED_PORT_KEYS.contains(&key)
}

pub fn is_reserved_node_name(name: &str) -> bool {
    name.to_lowercase() == RESERVED_NODE_NAME
}
