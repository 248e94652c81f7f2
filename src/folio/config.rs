use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";
const PORT_ENV: &str = "FOLIO_PORT";
const BASE_URL_ENV: &str = "FOLIO_URL";

/// Server configuration, read from the environment with documented
/// defaults: `FOLIO_DATA_DIR` (platform data dir) and `FOLIO_PORT` (5000).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub data_dir: PathBuf,
    pub port: u16,
}

impl FolioConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let port = env::var(PORT_ENV)
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { data_dir, port }
    }

    /// CLI flags win over environment variables.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, port: Option<u16>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("com", "folio", "folio") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".folio"),
    }
}

/// Base URL the client commands talk to: `FOLIO_URL`, falling back to
/// the local default.
pub fn base_url(flag: Option<String>) -> String {
    flag.or_else(|| env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win() {
        let config = FolioConfig {
            data_dir: PathBuf::from("/a"),
            port: 5000,
        };
        let config = config.with_overrides(Some(PathBuf::from("/b")), Some(8080));
        assert_eq!(config.data_dir, PathBuf::from("/b"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn no_overrides_keep_config() {
        let config = FolioConfig {
            data_dir: PathBuf::from("/a"),
            port: 5000,
        };
        assert_eq!(config.clone().with_overrides(None, None), config);
    }

    #[test]
    fn base_url_flag_wins_and_is_normalized() {
        assert_eq!(
            base_url(Some("http://example.com:9000/".into())),
            "http://example.com:9000"
        );
    }
}
