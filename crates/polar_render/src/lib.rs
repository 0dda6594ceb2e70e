use std::fmt::Write as _;

use polar_core::schema::{self, SchemaCategory, TypeSchema};
use polar_core::value::{
    DEFAULT_REFERENCE_TYPE, MAIN_OBJECT_FILE_ID, ObjectRef, SCRIPT_FILE_ID,
};
use polar_core::{AssetDocument, AssetGuid};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Lines emitted before the first schema field.
pub const PREAMBLE_LINE_COUNT: usize = 14;

const UNRESOLVED_GUID_LABEL: &str = "(unresolved)";
const NO_DEFAULT_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAsset {
    lines: Vec<String>,
}

impl RenderedAsset {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn preamble(&self) -> &[String] {
        &self.lines[..PREAMBLE_LINE_COUNT.min(self.lines.len())]
    }

    pub fn field_lines(&self) -> &[String] {
        &self.lines[PREAMBLE_LINE_COUNT.min(self.lines.len())..]
    }

    /// File contents: lines joined with `\n` plus a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

pub fn render_asset(doc: &AssetDocument) -> RenderedAsset {
    let schema = doc.schema();
    let script = ObjectRef::external(SCRIPT_FILE_ID, schema.script_guid, DEFAULT_REFERENCE_TYPE);

    let mut lines = vec![
        "%YAML 1.1".to_string(),
        "%TAG !u! tag:unity3d.com,2011:".to_string(),
        format!("--- !u!114 &{MAIN_OBJECT_FILE_ID}"),
        "MonoBehaviour:".to_string(),
        "  m_ObjectHideFlags: 0".to_string(),
        "  m_CorrespondingSourceObject: {fileID: 0}".to_string(),
        "  m_PrefabInstance: {fileID: 0}".to_string(),
        "  m_PrefabAsset: {fileID: 0}".to_string(),
        "  m_GameObject: {fileID: 0}".to_string(),
        "  m_Enabled: 1".to_string(),
        "  m_EditorHideFlags: 0".to_string(),
        format!("  m_Script: {script}"),
        format!("  m_Name: {}", doc.name()),
        format!("  m_EditorClassIdentifier: {}", schema.class_identifier),
    ];
    debug_assert_eq!(lines.len(), PREAMBLE_LINE_COUNT);

    lines.extend(
        doc.fields()
            .iter()
            .map(|field| format!("  {}: {}", field.name, field.value)),
    );

    RenderedAsset { lines }
}

pub fn render_meta(guid: &AssetGuid) -> String {
    format!(
        "fileFormatVersion: 2\n\
         guid: {guid}\n\
         NativeFormatImporter:\n  \
         externalObjects: {{}}\n  \
         mainObjectFileID: {MAIN_OBJECT_FILE_ID}\n  \
         userData:\n  \
         assetBundleName:\n  \
         assetBundleVariant:\n"
    )
}

pub fn render_type_list() -> String {
    let mut out = String::new();
    for category in [SchemaCategory::Weapon, SchemaCategory::OptionProfile] {
        writeln!(&mut out, "{}:", category.label()).expect("writing to String cannot fail");
        for schema in schema::of_category(category) {
            writeln!(&mut out, "  - {}", schema.key).expect("writing to String cannot fail");
        }
        out.push('\n');
    }
    out.push_str("Details: polar-asset list --type <type>\n");
    out
}

pub fn render_type_detail(schema: &TypeSchema) -> String {
    let script_guid = if schema.is_resolved() {
        schema.script_guid
    } else {
        UNRESOLVED_GUID_LABEL
    };

    let mut out = String::new();
    writeln!(&mut out, "=== {} ===", schema.key.to_uppercase())
        .expect("writing to String cannot fail");
    writeln!(&mut out, "Script GUID: {script_guid}").expect("writing to String cannot fail");
    writeln!(&mut out, "Class: {}", schema.class_identifier)
        .expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");
    writeln!(&mut out, "Fields:").expect("writing to String cannot fail");
    for field in schema.fields {
        let value = schema
            .default_for(field)
            .map_or_else(|| NO_DEFAULT_LABEL.to_string(), ToString::to_string);
        writeln!(&mut out, "  - {field}: {value}").expect("writing to String cannot fail");
    }
    out
}

pub fn render_schema_json(schema: &TypeSchema) -> JsonValue {
    let mut defaults = JsonMap::new();
    for field in schema.fields {
        let value = schema
            .default_for(field)
            .map_or(JsonValue::Null, |value| JsonValue::String(value.to_string()));
        defaults.insert((*field).to_string(), value);
    }

    let mut out = JsonMap::new();
    out.insert("type".to_string(), JsonValue::String(schema.key.to_string()));
    out.insert(
        "category".to_string(),
        serde_json::to_value(schema.category).unwrap_or(JsonValue::Null),
    );
    out.insert(
        "script_guid".to_string(),
        if schema.is_resolved() {
            JsonValue::String(schema.script_guid.to_string())
        } else {
            JsonValue::Null
        },
    );
    out.insert(
        "class".to_string(),
        JsonValue::String(schema.class_identifier.to_string()),
    );
    out.insert(
        "fields".to_string(),
        JsonValue::Array(
            schema
                .fields
                .iter()
                .map(|field| JsonValue::String((*field).to_string()))
                .collect(),
        ),
    );
    out.insert("defaults".to_string(), JsonValue::Object(defaults));
    JsonValue::Object(out)
}

pub fn render_registry_json() -> JsonValue {
    JsonValue::Array(schema::all().iter().map(render_schema_json).collect())
}
