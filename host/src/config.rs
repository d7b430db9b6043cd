//! Host settings, read from `PHARMALEDGER_*` environment variables.

use std::io;
use std::path::PathBuf;

use log::info;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Serve this directory instead of the bundle embedded at build time.
    pub dist: Option<PathBuf>,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_lookup<L>(lookup: L) -> io::Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let host = lookup("PHARMALEDGER_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PHARMALEDGER_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                invalid(format!("PHARMALEDGER_PORT must be a port number, got {raw:?}: {e}"))
            })?,
            None => {
                info!("PHARMALEDGER_PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let dist = lookup("PHARMALEDGER_DIST")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .map(PathBuf::from);

        let open_browser = match lookup("PHARMALEDGER_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| invalid(format!("PHARMALEDGER_OPEN_BROWSER must be a boolean, got {raw:?}")))?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            dist,
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> io::Result<HostConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_serve_embedded_bundle_on_localhost() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.dist, None);
        assert!(config.open_browser);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PHARMALEDGER_HOST", "0.0.0.0"),
            ("PHARMALEDGER_PORT", " 9090 "),
            ("PHARMALEDGER_DIST", "frontend/dist"),
            ("PHARMALEDGER_OPEN_BROWSER", "off"),
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9090");
        assert_eq!(config.dist, Some(PathBuf::from("frontend/dist")));
        assert!(!config.open_browser);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = config_from(&[("PHARMALEDGER_PORT", "eighty")]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(config_from(&[("PHARMALEDGER_OPEN_BROWSER", "maybe")]).is_err());
    }
}
