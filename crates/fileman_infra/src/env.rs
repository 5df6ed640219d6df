use std::path::PathBuf;

use fileman_app::EnvironmentInfra;
use fileman_domain::Environment;

/// Captures the process environment once at construction.
pub struct FilemanEnvironmentInfra {
    env: Environment,
}

impl FilemanEnvironmentInfra {
    pub fn new(cwd: PathBuf) -> Self {
        let log_path = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("fileman")
            .join("logs");

        Self {
            env: Environment { cwd, os: std::env::consts::OS.to_string(), log_path },
        }
    }
}

impl EnvironmentInfra for FilemanEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        self.env.clone()
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
