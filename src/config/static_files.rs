//! Static frontend asset configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Static file serving configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory holding the built frontend assets
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl StaticFilesConfig {
    /// Path of the SPA entry point, served for unmatched routes.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join("index.html")
    }

    /// Returns the asset directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("static")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_static_directory() {
        let config = StaticFilesConfig::default();
        assert_eq!(config.dir(), Path::new("static"));
    }

    #[test]
    fn index_path_appends_index_html() {
        let config = StaticFilesConfig {
            dir: PathBuf::from("dist"),
        };
        assert_eq!(config.index_path(), PathBuf::from("dist/index.html"));
    }
}
