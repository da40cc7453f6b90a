//! Strict JSON schema describing [`crate::vision::design::DesignData`]

use serde_json::{Map, Value, json};

/// Name under which the schema is registered with the model
pub const SCHEMA_NAME: &str = "design_data";

fn string_list() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn text(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

// Strict mode requires every property to be listed as required
fn strict_object(properties: Value) -> Value {
    let required: Vec<Value> = properties
        .as_object()
        .map(|map| map.keys().cloned().map(Value::String).collect())
        .unwrap_or_default();
    let mut object = Map::new();
    object.insert("type".into(), json!("object"));
    object.insert("properties".into(), properties);
    object.insert("required".into(), Value::Array(required));
    object.insert("additionalProperties".into(), Value::Bool(false));
    Value::Object(object)
}

/// Schema for a single image's design data
pub fn design_data_schema() -> Value {
    let brand_identity = strict_object(json!({
        "brand_name": text("Inferred or explicit brand/product"),
        "design_context": string_list(),
        "core_attributes": string_list(),
        "tagline": text("Headline copy or slogan if visible"),
    }));

    let palette_color = strict_object(json!({
        "name": text("Descriptive label if discernible"),
        "hex": text("Hex approximation pulled from the artwork"),
        "finish": text("Finish or texture hints (matte, gradient, etc.)"),
        "usage": text("Where and how the color appears"),
        "notes": { "type": "string" },
    }));

    let typeface = strict_object(json!({
        "family": { "type": "string" },
        "style": text("Weight or stylistic treatment"),
        "size_range": text("Point sizes or hierarchy if legible"),
        "usage": text("Typical use (e.g., headings, body copy)"),
        "tracking": text("Kerning/letter-spacing observations"),
        "notes": { "type": "string" },
    }));

    let visual_identity = strict_object(json!({
        "color_palette": { "type": "array", "items": palette_color },
        "typography": { "type": "array", "items": typeface },
        "logo_usage": string_list(),
        "imagery_style": strict_object(json!({
            "photography": string_list(),
            "illustration": string_list(),
            "iconography": string_list(),
            "textures_and_patterns": string_list(),
        })),
    }));

    strict_object(json!({
        "brand_identity": brand_identity,
        "visual_identity": visual_identity,
        "layout_and_components": strict_object(json!({
            "grid_and_spacing": string_list(),
            "key_components": string_list(),
            "call_to_action_treatment": string_list(),
            "interaction_notes": string_list(),
        })),
        "voice_and_copy": strict_object(json!({
            "tone_descriptors": string_list(),
            "messaging_pillars": string_list(),
            "dos": string_list(),
            "donts": string_list(),
        })),
        "production_notes": string_list(),
        "confidence": text("Statement on confidence or areas needing confirmation"),
    }))
}
