//! Project settings.
//!
//! Settings come from an env file (`conf/dev.env` by default) with the
//! process environment layered on top: a variable that is already set in
//! the environment wins over the file. Loading never mutates the process
//! environment.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Env file read when none is given.
pub const DEFAULT_ENV_FILE: &str = "conf/dev.env";

/// Property name used when `HOA_PROPERTY_NAME` is not set.
pub const DEFAULT_PROPERTY_NAME: &str = "Crystal Falls";

const PROJECT_NAME: &str = "PROJECT_NAME";
const ENVIRONMENT: &str = "ENVIRONMENT";
const PROPERTY_NAME: &str = "HOA_PROPERTY_NAME";

/// Read-only project settings, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Project name (`PROJECT_NAME`)
    pub project_name: Option<String>,

    /// Deployment environment, e.g. `dev` (`ENVIRONMENT`)
    pub environment: Option<String>,

    /// HOA property the documents belong to (`HOA_PROPERTY_NAME`)
    pub property_name: String,
}

impl Settings {
    /// Load settings from `env_file` and the process environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load<P: AsRef<Path>>(env_file: P) -> Result<Self> {
        let env_file = env_file.as_ref();
        let mut vars = HashMap::new();

        match dotenvy::from_path_iter(env_file) {
            Ok(iter) => {
                for item in iter {
                    let (key, value) = item?;
                    vars.insert(key, value);
                }
                log::debug!("loaded {} settings from {}", vars.len(), env_file.display());
            }
            Err(e) if e.not_found() => {
                log::debug!("no env file at {}, using environment only", env_file.display());
            }
            Err(e) => return Err(e.into()),
        }

        vars.extend(env::vars());
        Ok(Self::from_vars(vars))
    }

    /// Load settings from the process environment only.
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    /// Build settings from key/value pairs; later pairs win.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            project_name: vars.get(PROJECT_NAME).cloned(),
            environment: vars.get(ENVIRONMENT).cloned(),
            property_name: vars
                .get(PROPERTY_NAME)
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROPERTY_NAME.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_vars(std::iter::empty::<(String, String)>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn test_from_vars() {
        let settings = Settings::from_vars([
            ("PROJECT_NAME", "hoa_property"),
            ("ENVIRONMENT", "dev"),
            ("UNRELATED", "ignored"),
        ]);
        assert_eq!(settings.project_name.as_deref(), Some("hoa_property"));
        assert_eq!(settings.environment.as_deref(), Some("dev"));
        assert_eq!(settings.property_name, DEFAULT_PROPERTY_NAME);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.project_name.is_none());
        assert_eq!(settings.property_name, "Crystal Falls");
    }

    #[test]
    fn test_from_env_has_property_name() {
        let expected =
            env::var(PROPERTY_NAME).unwrap_or_else(|_| DEFAULT_PROPERTY_NAME.to_string());
        assert_eq!(Settings::from_env().property_name, expected);
    }

    #[test]
    fn test_load_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.env");
        fs::write(&path, "HOA_PROPERTY_NAME=\"Cap Rock\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        // HOA_PROPERTY_NAME is not expected in the test environment
        if env::var(PROPERTY_NAME).is_err() {
            assert_eq!(settings.property_name, "Cap Rock");
        }
    }

    #[test]
    fn test_load_default_env_file() {
        let settings =
            Settings::load(concat!(env!("CARGO_MANIFEST_DIR"), "/conf/dev.env")).unwrap();
        if env::var(PROJECT_NAME).is_err() {
            assert_eq!(settings.project_name.as_deref(), Some("hoa_property"));
        }
        if env::var(ENVIRONMENT).is_err() {
            assert_eq!(settings.environment.as_deref(), Some("dev"));
        }
    }

    #[test]
    fn test_load_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(dir.path().join("missing.env")).is_ok());
    }

    #[test]
    fn test_load_malformed_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.env");
        fs::write(&path, "PROJECT_NAME='unterminated\n").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
