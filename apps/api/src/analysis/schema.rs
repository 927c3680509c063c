//! Structured-output schema for the classification call.
//!
//! This is the contract half of the prompt: Gemini is asked to decode
//! directly into this shape. Every field is mandatory and non-nullable;
//! the validator still checks ranges on the way back in.

use serde_json::{json, Value};

use crate::models::analysis::Archetype;

/// The response schema attached to every classification call.
pub fn classification_schema() -> Value {
    let mut secondary_properties = serde_json::Map::new();
    for archetype in Archetype::ALL {
        secondary_properties.insert(
            archetype.key().to_string(),
            json!({
                "type": "NUMBER",
                "description": format!(
                    "Percentage match for {} type (0.0-1.0)",
                    archetype.display_name()
                ),
                "nullable": false,
            }),
        );
    }
    let secondary_keys: Vec<&str> = Archetype::ALL.iter().map(|a| a.key()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "primaryType": {
                "type": "STRING",
                "description": "The primary founder archetype (one of: 'visionary', 'strategic', 'community', 'contrarian', 'relentless')",
                "nullable": false,
            },
            "confidence": {
                "type": "NUMBER",
                "description": "Confidence percentage in the primary type classification (0.0-1.0)",
                "nullable": false,
            },
            "analysis": {
                "type": "STRING",
                "description": "Detailed explanation of why this is their primary type, citing specific patterns and examples from their content",
                "nullable": false,
            },
            "secondaryTypes": {
                "type": "OBJECT",
                "description": "Percentage likelihood of other founder types",
                "properties": Value::Object(secondary_properties),
                "required": secondary_keys,
                "nullable": false,
            }
        },
        "required": ["primaryType", "confidence", "analysis", "secondaryTypes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_fields_are_all_required() {
        let schema = classification_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["primaryType", "confidence", "analysis", "secondaryTypes"]
        );
    }

    #[test]
    fn secondary_types_require_all_five_archetypes() {
        let schema = classification_schema();
        let secondary = &schema["properties"]["secondaryTypes"];
        let required: Vec<&str> = secondary["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["visionary", "strategic", "community", "contrarian", "relentless"]
        );
        for key in required {
            assert_eq!(secondary["properties"][key]["type"], "NUMBER");
            assert_eq!(secondary["properties"][key]["nullable"], false);
        }
    }

    #[test]
    fn no_field_is_nullable() {
        let schema = classification_schema();
        for (_, property) in schema["properties"].as_object().unwrap() {
            assert_eq!(property["nullable"], false);
        }
    }
}
