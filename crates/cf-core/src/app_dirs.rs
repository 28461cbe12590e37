use std::path::PathBuf;

/// Directories the application reads from or writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    /// Where the optional `config.toml` lives.
    pub config_root: PathBuf,
    /// Where `clipfile.log` is written.
    pub logs_root: PathBuf,
    /// Per-run directory that receives converted PNG files.
    pub temp_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.config_root.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_config_root() {
        let dirs = AppDirs {
            config_root: PathBuf::from("/tmp/clipfile/config"),
            logs_root: PathBuf::from("/tmp/clipfile/logs"),
            temp_root: PathBuf::from("/tmp/clipfile/files"),
        };
        assert_eq!(
            dirs.config_file(),
            PathBuf::from("/tmp/clipfile/config/config.toml")
        );
    }
}
