// SPDX-License-Identifier: AGPL-3.0-only

//! Data root discovery for sample soils and weather records.
//!
//! No hardcoded absolute paths: the root is discovered at runtime.
//!
//! # Discovery order
//!
//! 0. Injected override (tests, `--data-root`)
//! 1. Environment variable (`BIOPHYSICS_DATA_ROOT`)
//! 2. `CARGO_MANIFEST_DIR` parent (development layout)
//! 3. Current working directory
//!
//! A directory is a valid root when it contains a `data/` subdirectory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BiophysicsError;

/// Environment variable overriding the data root.
pub const DATA_ROOT_ENV: &str = "BIOPHYSICS_DATA_ROOT";

/// Well-known paths within the data root.
pub mod paths {
    /// Data subdirectory
    pub const DATA: &str = "data";
    /// Sample soil textures
    pub const SOIL_SAMPLES: &str = "data/soil_samples.json";
    /// Sample daily weather
    pub const WEATHER_DAYS: &str = "data/weather_days.json";
}

/// Discover the data root.
///
/// # Errors
///
/// Returns `BiophysicsError::DataLoad` if no path with a `data/` directory
/// can be found via any discovery strategy.
pub fn try_discover_data_root() -> Result<PathBuf, BiophysicsError> {
    try_discover_with_override(None)
}

/// Discover the data root with an optional override checked first.
///
/// # Errors
///
/// Returns `BiophysicsError::DataLoad` if no valid root is found.
pub fn try_discover_with_override(
    override_root: Option<&Path>,
) -> Result<PathBuf, BiophysicsError> {
    if let Some(root) = override_root {
        if is_valid_root(root) {
            return Ok(root.to_path_buf());
        }
        debug!(root = %root.display(), "override root has no data/ directory");
    }

    if let Ok(root) = std::env::var(DATA_ROOT_ENV) {
        let p = PathBuf::from(&root);
        if is_valid_root(&p) {
            return Ok(p);
        }
        debug!(root = %root, "{DATA_ROOT_ENV} has no data/ directory");
    }

    let manifest_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if let Some(parent) = manifest_root.parent() {
        if is_valid_root(parent) {
            return Ok(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if is_valid_root(&cwd) {
            return Ok(cwd);
        }
    }

    Err(BiophysicsError::DataLoad(
        "no data root found (need a directory with a data/ subdirectory)".into(),
    ))
}

pub(crate) fn is_valid_root(path: &Path) -> bool {
    path.join(paths::DATA).is_dir()
}

/// Path to the bundled soil samples under `root`.
#[must_use]
pub fn soil_samples_path(root: &Path) -> PathBuf {
    root.join(paths::SOIL_SAMPLES)
}

/// Path to the bundled weather records under `root`.
#[must_use]
pub fn weather_days_path(root: &Path) -> PathBuf {
    root.join(paths::WEATHER_DAYS)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn override_with_data_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("data")).unwrap();
        let root = try_discover_with_override(Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn override_without_data_dir_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let root = try_discover_with_override(Some(dir.path()));
        if let Ok(root) = root {
            assert_ne!(root, dir.path());
            assert!(is_valid_root(&root));
        }
    }

    #[test]
    fn development_layout_is_discovered() {
        let root = try_discover_data_root().expect("workspace root has data/");
        assert!(soil_samples_path(&root).is_file());
        assert!(weather_days_path(&root).is_file());
    }

    #[test]
    fn paths_live_under_data() {
        assert!(paths::SOIL_SAMPLES.starts_with(paths::DATA));
        assert!(paths::WEATHER_DAYS.starts_with(paths::DATA));
    }
}
