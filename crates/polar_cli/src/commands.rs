use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use polar_core::schema;
use polar_core::{
    AssetDocument, AssetGuid, CoreError, CoreErrorCode, FieldValue, PatchOutcome,
    parse_field_data, patch_asset_text, resolve_asset_name,
};
use polar_render::{render_asset, render_meta};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, info, warn};

const DEFAULT_BATCH_TYPE: &str = "laser";
const JSON_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct CreatedAsset {
    pub asset_path: PathBuf,
    pub meta_path: PathBuf,
    pub guid: AssetGuid,
}

#[derive(Debug)]
pub struct BatchItem {
    pub source: PathBuf,
    pub result: Result<CreatedAsset, CoreError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn created(&self) -> usize {
        self.items.iter().filter(|item| item.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.created()
    }
}

/// Render the asset and its meta file, then write both into `output_dir`.
///
/// Nothing touches the disk until both texts exist, so an unknown type leaves
/// the output directory as it was. If the meta file cannot be written the
/// asset written just before it is removed again.
pub fn create_asset(
    type_key: &str,
    data: &JsonMap<String, JsonValue>,
    output_dir: &Path,
    name: Option<&str>,
    guid: Option<AssetGuid>,
) -> Result<CreatedAsset, CoreError> {
    let name = name
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| resolve_asset_name(data));
    let doc = AssetDocument::build(type_key, data, name)?;
    if !doc.schema().is_resolved() {
        warn!(
            type_key,
            asset = doc.name(),
            "script GUID is unresolved; Unity will report a missing script"
        );
    }

    let asset_text = render_asset(&doc).to_text();
    let guid = guid.unwrap_or_else(AssetGuid::generate);
    let meta_text = render_meta(&guid);

    fs::create_dir_all(output_dir)
        .map_err(|e| io_error("create output directory", output_dir, e))?;
    let asset_path = output_dir.join(format!("{}.asset", doc.name()));
    let meta_path = output_dir.join(format!("{}.asset.meta", doc.name()));
    fs::write(&asset_path, asset_text).map_err(|e| io_error("write", &asset_path, e))?;
    if let Err(e) = fs::write(&meta_path, meta_text) {
        if let Err(cleanup) = fs::remove_file(&asset_path) {
            warn!(path = %asset_path.display(), error = %cleanup, "could not remove partial asset");
        }
        return Err(io_error("write", &meta_path, e));
    }

    info!(type_key, path = %asset_path.display(), %guid, "created asset");
    Ok(CreatedAsset {
        asset_path,
        meta_path,
        guid,
    })
}

/// Create one asset per `*.json` file in `input_dir`, in file name order.
///
/// A file that fails is recorded in the report and the scan moves on; only a
/// missing or unreadable input directory fails the whole batch.
pub fn batch_create(
    input_dir: &Path,
    output_dir: &Path,
    type_override: Option<&str>,
) -> Result<BatchReport, CoreError> {
    let sources = discover_json_files(input_dir)?;
    info!(count = sources.len(), dir = %input_dir.display(), "found JSON files");

    let mut report = BatchReport::default();
    for source in sources {
        let result = create_from_file(&source, output_dir, type_override);
        if let Err(e) = &result {
            debug!(source = %source.display(), error = %e, "batch item failed");
        }
        report.items.push(BatchItem { source, result });
    }
    Ok(report)
}

fn create_from_file(
    source: &Path,
    output_dir: &Path,
    type_override: Option<&str>,
) -> Result<CreatedAsset, CoreError> {
    let data = load_json_file(source)?;
    let type_key = match type_override {
        Some(type_key) => type_key.to_string(),
        None => type_from_data(&data)?,
    };
    let name = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolve_asset_name(&data));
    create_asset(&type_key, &data, output_dir, Some(&name), None)
}

fn type_from_data(data: &JsonMap<String, JsonValue>) -> Result<String, CoreError> {
    match data.get("type") {
        None => Ok(DEFAULT_BATCH_TYPE.to_string()),
        Some(JsonValue::String(type_key)) => Ok(type_key.clone()),
        Some(other) => {
            let known: Vec<&str> = schema::type_keys().collect();
            Err(CoreError::unknown_type(&other.to_string(), &known))
        }
    }
}

pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
    if !dir.is_dir() {
        return Err(CoreError::new(
            CoreErrorCode::Io,
            format!("input directory not found: {}", dir.display()),
        ));
    }

    let mut files = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| io_error("read", dir, e))?;
    for entry_result in entries {
        let entry = entry_result.map_err(|e| io_error("read entry in", dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == JSON_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Patch `asset_path` in place. The file must already exist.
pub fn update_asset(
    asset_path: &Path,
    updates: &[(String, FieldValue)],
) -> Result<PatchOutcome, CoreError> {
    if !asset_path.is_file() {
        return Err(CoreError::new(
            CoreErrorCode::AssetNotFound,
            format!("asset not found: {}", asset_path.display()),
        ));
    }

    let existing =
        fs::read_to_string(asset_path).map_err(|e| io_error("read", asset_path, e))?;
    let outcome = patch_asset_text(&existing, updates);
    if outcome.is_unchanged() {
        debug!(path = %asset_path.display(), "no matching fields, file left untouched");
        return Ok(outcome);
    }
    fs::write(asset_path, &outcome.text).map_err(|e| io_error("write", asset_path, e))?;

    info!(
        path = %asset_path.display(),
        applied = outcome.applied.len(),
        skipped = outcome.missing.len(),
        "updated asset"
    );
    Ok(outcome)
}

pub fn load_json_file(path: &Path) -> Result<JsonMap<String, JsonValue>, CoreError> {
    let text = fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;
    parse_field_data(&text)
        .map_err(|e| CoreError::new(e.code, format!("{}: {}", path.display(), e.message)))
}

/// Split a `KEY=VALUE` command-line edit.
pub fn parse_assignment(text: &str) -> Result<(String, FieldValue), CoreError> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), FieldValue::parse_scalar(value)))
        }
        _ => Err(CoreError::malformed(format!(
            "expected KEY=VALUE, got '{text}'"
        ))),
    }
}

fn io_error(action: &str, path: &Path, e: io::Error) -> CoreError {
    CoreError::new(
        CoreErrorCode::Io,
        format!("failed to {action} {}: {e}", path.display()),
    )
}
