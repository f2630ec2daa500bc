//! Manifest entry filtering
//!
//! Turns a raw bundler manifest (logical name to emitted path) into the
//! asset list exposed to the host application.

use std::collections::HashMap;
use std::path::Path;

use crate::config::defaults::SOURCEMAP_SUFFIX;

/// Resolve the asset list from a raw manifest
///
/// Source-map entries are dropped and a leading root-path prefix is
/// stripped from the remaining values. The manifest is an unordered
/// string-keyed map, so the result is sorted for stable output.
pub fn resolve_assets(manifest: &HashMap<String, String>, root_path: &Path) -> Vec<String> {
    let root = root_path.to_string_lossy();
    let mut assets: Vec<String> = manifest
        .values()
        .filter(|path| !path.ends_with(SOURCEMAP_SUFFIX))
        .map(|path| path.strip_prefix(root.as_ref()).unwrap_or(path).to_string())
        .collect();
    assets.sort();
    assets
}
