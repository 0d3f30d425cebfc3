use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ACTION: &str = "deploy";
pub const DEFAULT_SCHEMA_VERSION: &str = "3.19.0";
pub const DEFAULT_UPDATE_MODE: &str = "selective";
pub const DEFAULT_TEMPLATE: &str = "generic";

/// Fixed envelope values written into every declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSettings {
    pub action: String,
    pub schema_version: String,
    pub update_mode: String,
    pub template: String,
}

impl Default for DeclarationSettings {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            update_mode: DEFAULT_UPDATE_MODE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    declaration: DeclarationSection,
    application: ApplicationSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DeclarationSection {
    action: Option<String>,
    schema_version: Option<String>,
    update_mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ApplicationSection {
    template: Option<String>,
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load declaration settings from a TOML file.
///
/// Keys absent from the file keep their built-in defaults.
pub fn load_settings(path: &Path) -> Result<DeclarationSettings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

fn parse_settings(raw: &str, path: String) -> Result<DeclarationSettings, SettingsLoadError> {
    let parsed: SettingsFile =
        toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })?;

    let defaults = DeclarationSettings::default();
    Ok(DeclarationSettings {
        action: parsed.declaration.action.unwrap_or(defaults.action),
        schema_version: parsed
            .declaration
            .schema_version
            .unwrap_or(defaults.schema_version),
        update_mode: parsed.declaration.update_mode.unwrap_or(defaults.update_mode),
        template: parsed.application.template.unwrap_or(defaults.template),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{load_settings, parse_settings, DeclarationSettings, SettingsLoadError};

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("", "test".to_string()).expect("parse");
        assert_eq!(settings, DeclarationSettings::default());
        assert_eq!(settings.schema_version, "3.19.0");
        assert_eq!(settings.update_mode, "selective");
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let settings = parse_settings(
            r#"
            [declaration]
            schema_version = "3.36.0"

            [application]
            template = "shared"
            "#,
            "test".to_string(),
        )
        .expect("parse");

        assert_eq!(settings.schema_version, "3.36.0");
        assert_eq!(settings.template, "shared");
        assert_eq!(settings.action, "deploy");
        assert_eq!(settings.update_mode, "selective");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse_settings(
            "[declaration]\nschemaVersion = \"3.0.0\"\n",
            "x.toml".to_string(),
        )
        .expect_err("unknown key");
        assert!(matches!(err, SettingsLoadError::Parse { .. }));
        assert!(err.to_string().contains("x.toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_settings(&dir.path().join("absent.toml")).expect_err("missing");
        assert!(matches!(err, SettingsLoadError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[declaration]\naction = \"dry-run\"\n").expect("write");

        let settings = load_settings(&path).expect("load");
        assert_eq!(settings.action, "dry-run");
    }
}
