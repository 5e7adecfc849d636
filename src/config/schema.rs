use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "paths": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "require_absolute": { "type": "boolean" }
                }
            },
            "limits": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "max_document_chars": { "type": ["integer", "null"], "minimum": 1 }
                }
            },
            "output": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "create_parent_dirs": { "type": "boolean" },
                    "breakdown": { "type": "boolean" }
                }
            }
        }
    })
});
