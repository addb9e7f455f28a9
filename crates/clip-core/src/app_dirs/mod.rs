use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.app_config_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn app_dirs_derives_concrete_locations() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/data/clipper"),
            app_config_root: PathBuf::from("/tmp/config/clipper"),
        };
        assert_eq!(
            dirs.config_file(),
            PathBuf::from("/tmp/config/clipper/config.toml")
        );
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/data/clipper/logs"));
    }
}
