use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::{Error, Result};

pub struct AppPaths {
    project_dirs: ProjectDirs,
    config_override: Option<PathBuf>,
}

impl AppPaths {
    pub fn new() -> Result<Self> {
        let project_dirs = ProjectDirs::from("dev", "aiml-course", "AimlCourse")
            .ok_or_else(|| Error::platform("Failed to determine application directories"))?;

        Ok(Self {
            project_dirs,
            config_override: None,
        })
    }

    /// Uses `path` instead of the platform config file.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_override = Some(path.into());
        self
    }

    pub fn config_dir(&self) -> PathBuf {
        self.project_dirs.config_dir().to_path_buf()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.project_dirs.data_dir().to_path_buf()
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_override
            .clone()
            .unwrap_or_else(|| self.config_dir().join("config.toml"))
    }

    /// Whether the config file is the platform default rather than one
    /// supplied on the command line.
    pub fn uses_default_config(&self) -> bool {
        self.config_override.is_none()
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    pub fn ensure_dirs_exist(&self) -> Result<()> {
        std::fs::create_dir_all(self.config_dir())?;
        std::fs::create_dir_all(self.data_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}
