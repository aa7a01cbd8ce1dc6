use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::{
    fixes::{replacement_for, TARGET_KEY},
    types::{FixReport, Replacement},
};

pub const CATALOG_FILE: &str = "educational_videos_catalog.json";

/// Loads the catalog, rewrites broken links and writes it back in place.
/// With `dry_run` the file is left untouched and only the report is returned.
pub fn fix_catalog_file(path: &Path, dry_run: bool) -> Result<FixReport> {
    let mut catalog = load_catalog(path)?;
    let report = fix_urls(&mut catalog);

    if !dry_run {
        save_catalog(path, &catalog)?;
    }

    Ok(report)
}

pub fn load_catalog(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    let json = serde_json::from_str(&data)
        .with_context(|| format!("Parsing JSON from {}", path.display()))?;

    Ok(json)
}

/// Two-space indentation, non-ASCII kept as-is, no trailing newline.
pub fn render_catalog(catalog: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Writes through symlinks and keeps the permissions of the existing file.
/// The temporary sibling is removed if anything fails before the rename.
pub fn save_catalog(path: &Path, catalog: &Value) -> Result<()> {
    let payload = render_catalog(catalog)
        .with_context(|| format!("Serializing {}", path.display()))?;

    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Creating temporary file in {}", dir.display()))?;
    tmp.write_all(payload.as_bytes())
        .with_context(|| format!("Writing {}", tmp.path().display()))?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .with_context(|| format!("Copying permissions of {}", target.display()))?;
    }

    tmp.persist(&target)
        .with_context(|| format!("Replacing {}", target.display()))?;

    Ok(())
}

// A catalog that does not exist yet has nothing to resolve.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Replaces every `youtube_url` string found in the URL fix table, at any
/// depth. Strings under other keys, and bare strings in arrays, are never
/// looked up.
pub fn fix_urls(node: &mut Value) -> FixReport {
    let mut report = FixReport::default();
    walk(node, "", &mut report.replacements);
    report
}

fn walk(node: &mut Value, pointer: &str, replacements: &mut Vec<Replacement>) {
    match node {
        Value::Object(map) => {
            for (key, value) in map.iter_mut() {
                let child = format!("{}/{}", pointer, escape_pointer_token(key));

                if key.as_str() == TARGET_KEY {
                    if let Value::String(url) = &mut *value {
                        if let Some(fixed) = replacement_for(url) {
                            let from = std::mem::replace(url, fixed.to_string());
                            debug!("{}: {} -> {}", child, from, fixed);

                            replacements.push(Replacement {
                                pointer: child,
                                from,
                                to: fixed.to_string(),
                            });
                            continue;
                        }
                    }
                }

                walk(value, &child, replacements);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                walk(item, &format!("{}/{}", pointer, index), replacements);
            }
        }
        _ => {}
    }
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
