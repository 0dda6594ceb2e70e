//! In-place field edits on an existing `.asset` text.
//!
//! The file is treated as lines, not parsed as YAML. A key matches the first
//! line whose trimmed text starts with `<key>:`; the line keeps its leading
//! whitespace and gets the newly formatted value. Keys with no line are left
//! out rather than appended.

use tracing::debug;

use crate::value::FieldValue;

#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome {
    pub text: String,
    pub applied: Vec<String>,
    pub missing: Vec<String>,
}

impl PatchOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.applied.is_empty()
    }
}

pub fn patch_asset_text<K: AsRef<str>>(existing: &str, updates: &[(K, FieldValue)]) -> PatchOutcome {
    let mut lines: Vec<String> = existing.split('\n').map(str::to_string).collect();
    let mut applied = Vec::new();
    let mut missing = Vec::new();

    for (key, value) in updates {
        let key = key.as_ref();
        match find_field_line(&lines, key) {
            Some(index) => {
                let line = &lines[index];
                let indent = &line[..line.len() - line.trim_start().len()];
                let replacement = format!("{indent}{key}: {value}");
                debug!(key, line = index + 1, "patched field");
                lines[index] = replacement;
                applied.push(key.to_string());
            }
            None => {
                debug!(key, "field not present in asset, skipped");
                missing.push(key.to_string());
            }
        }
    }

    PatchOutcome {
        text: lines.join("\n"),
        applied,
        missing,
    }
}

fn find_field_line(lines: &[String], key: &str) -> Option<usize> {
    lines.iter().position(|line| {
        line.trim()
            .strip_prefix(key)
            .is_some_and(|rest| rest.starts_with(':'))
    })
}
