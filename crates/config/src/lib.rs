//! Configuration loading for margin.
//!
//! Three layers, later ones winning: built-in defaults, a TOML file (either
//! an explicit path or `margin.toml` in the platform config directory), and
//! `MARGIN_`-prefixed environment variables.

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Raw `Cookie` header value captured from an authenticated browser
    /// session. Empty means unauthenticated; every API call will fail.
    pub cookies: String,
    /// API origin override. `None` uses the client's built-in default.
    pub base_url: Option<String>,
    /// Disables TLS certificate verification. Off unless deliberately
    /// switched on for sessions behind interception proxies.
    pub accept_invalid_certs: bool,
    /// Where downloaded covers and exports land. `None` means the current
    /// directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cookies: String::new(),
            base_url: None,
            accept_invalid_certs: false,
            output_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration with the standard layering.
    ///
    /// With an explicit `path` the file must exist; without one, a missing
    /// `margin.toml` in the platform config directory is fine and the
    /// defaults-plus-environment layers stand alone.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        match path {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                if let Some(path) = Self::default_file() {
                    figment = figment.merge(Toml::file(path));
                }
            },
        }
        figment.merge(Env::prefixed("MARGIN_")).extract().or_raise(|| ErrorKind::Invalid)
    }

    /// `margin.toml` in the platform-conventional config directory.
    pub fn default_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "margin").map(|dirs| dirs.config_dir().join("margin.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_safe() {
        let config = Config::default();
        assert!(config.cookies.is_empty());
        assert!(!config.accept_invalid_certs);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("margin.toml");
        std::fs::write(&path, "cookies = \"wr_vid=1\"\naccept_invalid_certs = true\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.cookies, "wr_vid=1");
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("margin.toml", "cookies = \"from-file\"")?;
            jail.set_env("MARGIN_COOKIES", "from-env");
            let config = Config::load(Some(Path::new("margin.toml"))).expect("config loads");
            assert_eq!(config.cookies, "from-env");
            Ok(())
        });
    }
}
