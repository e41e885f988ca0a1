use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spawn template for a starting item
///
/// The host framework spawns objects from template dictionaries; `attributes`
/// carries whatever free-form fields the prototype declares (damage dice,
/// value, wearable slot, ...) without this crate interpreting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPrototype {
    /// Prototype key, also the spawned object's name
    pub key: String,
    /// Short description shown on look
    #[serde(default)]
    pub desc: String,
    /// Free-form prototype attributes passed through to the spawner
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl ItemPrototype {
    /// Create a bare prototype with no extra attributes
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        ItemPrototype {
            key: key.into(),
            desc: desc.into(),
            attributes: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_land_in_attributes() {
        let proto: ItemPrototype = serde_json::from_str(
            r#"{"key": "short sword", "desc": "a notched short sword", "value": 7}"#,
        )
        .unwrap();
        assert_eq!(proto.key, "short sword");
        assert_eq!(proto.attributes["value"], serde_json::json!(7));
    }
}
