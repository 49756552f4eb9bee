//! Catalog of license identifiers offered by the `licenses` prompt

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Licenses available when no license directory is configured
pub const BUILTIN_LICENSES: &[&str] = &["Apache-2.0", "GPL-2.0", "MIT"];

const LICENSE_FILE_PREFIX: &str = "LICENSE-";

/// Available license identifiers, optionally backed by a directory of
/// `LICENSE-<id>` text files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseCatalog {
    dir: Option<PathBuf>,
    ids: Vec<String>,
}

impl Default for LicenseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LicenseCatalog {
    pub fn builtin() -> Self {
        Self {
            dir: None,
            ids: BUILTIN_LICENSES.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// List `LICENSE-*` files directly inside `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut ids = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if let Some(id) = file_name.strip_prefix(LICENSE_FILE_PREFIX) {
                if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
        }
        ids.sort();

        Ok(Self {
            dir: Some(dir.to_path_buf()),
            ids,
        })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Path of the license text for `id`, when the catalog is directory-backed
    pub fn license_path(&self, id: &str) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}{}", LICENSE_FILE_PREFIX, id)))
    }

    /// Warning shown when the `licenses` answer is rejected
    pub fn warning(&self) -> String {
        format!(
            "Must be zero or more space-separated licenses. Built-in licenses are: {}, \
             but you may specify any number of custom licenses.",
            self.ids.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = LicenseCatalog::builtin();
        assert!(catalog.contains("MIT"));
        assert_eq!(catalog.license_path("MIT"), None);
        assert!(catalog.warning().contains("Apache-2.0 GPL-2.0 MIT"));
    }

    #[test]
    fn test_from_dir_lists_license_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("LICENSE-MIT"), "MIT text").unwrap();
        std::fs::write(dir.path().join("LICENSE-BSD-3-Clause"), "BSD text").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a license").unwrap();
        std::fs::create_dir(dir.path().join("LICENSE-dir")).unwrap();

        let catalog = LicenseCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.ids(), &["BSD-3-Clause".to_string(), "MIT".to_string()]);
        assert_eq!(
            catalog.license_path("MIT"),
            Some(dir.path().join("LICENSE-MIT"))
        );
    }

    #[test]
    fn test_from_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LicenseCatalog::from_dir(&dir.path().join("missing")).is_err());
    }
}
