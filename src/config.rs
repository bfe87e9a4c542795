use std::{env, path::PathBuf};

pub const STORAGE_FILE_NAME: &str = "local_storage.json";

const DATA_DIR_VAR: &str = "BAKEBOOK_DATA_DIR";
const DEBUG_VAR: &str = "BAKEBOOK_DEBUG";

/// Runtime settings resolved from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// `fallback_dir` is used when `BAKEBOOK_DATA_DIR` is unset or empty.
    pub fn from_env(fallback_dir: PathBuf) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), fallback_dir)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, fallback_dir: PathBuf) -> Self {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(fallback_dir);
        let debug = lookup(DEBUG_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self { data_dir, debug }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Initialize logging. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &AppConfig) {
    let _ = env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), PathBuf::from("/fallback"))
    }

    #[test]
    fn defaults_to_fallback_dir_and_info() {
        let config = config_with(&[]);
        assert_eq!(config.data_dir, PathBuf::from("/fallback"));
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/fallback/local_storage.json")
        );
    }

    #[test]
    fn env_overrides_apply() {
        let config = config_with(&[("BAKEBOOK_DATA_DIR", "/tmp/bake"), ("BAKEBOOK_DEBUG", "TRUE")]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/bake"));
        assert!(config.debug);

        let config = config_with(&[("BAKEBOOK_DATA_DIR", "  "), ("BAKEBOOK_DEBUG", "0")]);
        assert_eq!(config.data_dir, PathBuf::from("/fallback"));
        assert!(!config.debug);
    }
}
