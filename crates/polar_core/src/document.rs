use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

use crate::error::CoreError;
use crate::schema::{self, FieldKind, TypeSchema};
use crate::value::FieldValue;

pub const FALLBACK_ASSET_NAME: &str = "NewWeapon";

#[derive(Debug, Clone, PartialEq)]
pub struct AssetField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// One asset ready to render: every schema field in order with its final value.
#[derive(Debug, Clone)]
pub struct AssetDocument {
    schema: &'static TypeSchema,
    name: String,
    fields: Vec<AssetField>,
}

impl AssetDocument {
    /// Merge `data` over the defaults of `type_key`.
    ///
    /// Input keys win over defaults; keys the schema does not list are ignored.
    pub fn build(
        type_key: &str,
        data: &JsonMap<String, JsonValue>,
        name: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let schema = schema::require(type_key)?;

        let fields = schema
            .fields
            .iter()
            .map(|&field| AssetField {
                name: field,
                value: merged_value(schema, field, data.get(field)),
            })
            .collect();

        let ignored = data
            .keys()
            .filter(|key| !schema.has_field(key))
            .count();
        if ignored > 0 {
            debug!(type_key, ignored, "input keys outside the schema were ignored");
        }

        Ok(Self {
            schema,
            name: name.into(),
            fields,
        })
    }

    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[AssetField] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|entry| entry.name == field)
            .map(|entry| &entry.value)
    }
}

fn merged_value(schema: &TypeSchema, field: &str, input: Option<&JsonValue>) -> FieldValue {
    match (schema::field_kind(field), input) {
        (FieldKind::AssetLink, input) => FieldValue::asset_link(input),
        (FieldKind::Value, Some(value)) => FieldValue::from_json(value),
        (FieldKind::Value, None) => schema
            .default_for(field)
            .cloned()
            .unwrap_or(FieldValue::Null),
    }
}

/// Asset name used when the caller does not supply one: `id`, then
/// `weaponName`, then [`FALLBACK_ASSET_NAME`].
pub fn resolve_asset_name(data: &JsonMap<String, JsonValue>) -> String {
    ["id", "weaponName"]
        .iter()
        .filter_map(|key| data.get(*key).and_then(JsonValue::as_str))
        .find(|name| !name.is_empty())
        .unwrap_or(FALLBACK_ASSET_NAME)
        .to_string()
}

/// Parse caller JSON, which must be an object keyed by field name.
pub fn parse_field_data(text: &str) -> Result<JsonMap<String, JsonValue>, CoreError> {
    let value: JsonValue = serde_json::from_str(text)
        .map_err(|e| CoreError::malformed(format!("invalid JSON: {e}")))?;
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(CoreError::malformed(format!(
            "expected a JSON object of field values, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
