//! Bundler manifest reading
//!
//! The bundler writes a manifest per asset kind mapping logical asset
//! names to the emitted file paths. The manifest is read fresh on every
//! successful build signal, never cached.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::defaults::MANIFEST_FILENAME;
use crate::core::protocol::AssetKind;
use crate::error::ManifestError;

/// Read the manifest for one asset kind under the build output directory
pub fn read_kind_manifest(
    output_dir: &Path,
    kind: AssetKind,
) -> Result<HashMap<String, String>, ManifestError> {
    let path = output_dir.join(kind.dir()).join(MANIFEST_FILENAME);
    tracing::debug!("Reading {} manifest at {}", kind.dir(), path.display());

    let contents = fs::read_to_string(&path).map_err(|e| ManifestError::Read {
        path: path.clone(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
        path,
        error: e.to_string(),
    })
}
