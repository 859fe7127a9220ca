use crate::acronyms::AcronymSet;
use crate::orthography::{Orthography, StyleError};
use crate::presets::Preset;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".identcase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extra acronyms on top of the built-in list
    #[serde(default)]
    pub acronyms: Vec<String>,

    /// Newline-separated acronym list
    #[serde(default)]
    pub acronyms_file: Option<PathBuf>,

    #[serde(default = "default_common_acronyms")]
    pub common_acronyms: bool,

    #[serde(default)]
    pub id_is_acronym: bool,

    /// Style used by `convert` when `--to` is not given
    #[serde(default)]
    pub default_target: Option<String>,

    /// Custom named orthographies
    #[serde(default)]
    pub styles: BTreeMap<String, Orthography>,
}

fn default_common_acronyms() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acronyms: Vec::new(),
            acronyms_file: None,
            common_acronyms: default_common_acronyms(),
            id_is_acronym: false,
            default_target: None,
            styles: BTreeMap::new(),
        }
    }
}

/// Settings given on the command line; they win over every file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub acronyms: Vec<String>,
    pub id_is_acronym: bool,
    pub no_common_acronyms: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "Loading global config");
                let global_config = Self::from_file(global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        if local.exists() {
            tracing::debug!(path = %local.display(), "Loading local config");
            let local_config = Self::from_file(local)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        config.acronyms.extend(overrides.acronyms);
        if overrides.id_is_acronym {
            config.id_is_acronym = true;
        }
        if overrides.no_common_acronyms {
            config.common_acronyms = false;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        self.acronyms.extend(other.acronyms);
        if other.acronyms_file.is_some() {
            self.acronyms_file = other.acronyms_file;
        }
        if other.common_acronyms != default_common_acronyms() {
            self.common_acronyms = other.common_acronyms;
        }
        if other.id_is_acronym {
            self.id_is_acronym = true;
        }
        if other.default_target.is_some() {
            self.default_target = other.default_target;
        }
        self.styles.extend(other.styles);
        self
    }

    /// The acronym list every parse in this run should use.
    pub fn acronym_list(&self) -> Result<AcronymSet> {
        let mut set = if self.common_acronyms {
            AcronymSet::with_common()
        } else {
            AcronymSet::new()
        };
        set.extend(&self.acronyms);
        if self.id_is_acronym {
            set.insert("id");
        }
        if let Some(path) = &self.acronyms_file {
            set.extend_from_path(path)?;
        }
        Ok(set)
    }

    /// Resolve a style name: custom styles first, then built-in presets.
    pub fn resolve_style(&self, name: &str) -> Result<Orthography, StyleError> {
        if let Some(orthography) = self.styles.get(name) {
            return Ok(orthography.clone());
        }
        name.parse::<Preset>().map(Preset::orthography)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "identcase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acronyms::AcronymList;
    use crate::orthography::{AcronymHandling, Casing};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.common_acronyms);
        assert!(!config.id_is_acronym);
        assert!(config.styles.is_empty());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            acronyms: vec!["gpu".to_string()],
            default_target: Some("snake_case".to_string()),
            ..Default::default()
        };
        let override_config = Config {
            acronyms: vec!["tpu".to_string()],
            common_acronyms: false,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.acronyms, vec!["gpu", "tpu"]);
        assert!(!merged.common_acronyms);
        assert_eq!(merged.default_target.as_deref(), Some("snake_case"));
    }

    #[test]
    fn test_load_layers() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(
            &global,
            r#"
            acronyms = ["gpu"]
            default_target = "camelCase"

            [styles.dotted]
            separator = "."
            casing = "lower"
            "#,
        )
        .unwrap();
        fs::write(
            &local,
            r#"
            default_target = "dotted"

            [styles.python-const]
            separator = "_"
            casing = "screaming"
            acronyms = "upper"
            "#,
        )
        .unwrap();

        let config = Config::load_from(
            Some(&global),
            &local,
            Overrides {
                acronyms: vec!["npu".to_string()],
                id_is_acronym: true,
                no_common_acronyms: false,
            },
        )
        .unwrap();

        assert_eq!(config.default_target.as_deref(), Some("dotted"));
        assert_eq!(config.styles.len(), 2);
        assert_eq!(config.acronyms, vec!["gpu", "npu"]);
        assert!(config.id_is_acronym);
        assert_eq!(
            config.resolve_style("python-const").unwrap(),
            Orthography::new(Casing::Screaming)
                .with_separator('_')
                .with_acronyms(AcronymHandling::Upper)
        );
    }

    #[test]
    fn test_missing_files_are_skipped() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(
            Some(&dir.path().join("nope.toml")),
            &dir.path().join("nope-either.toml"),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("local.toml");
        fs::write(&local, "[styles.broken]\ncasing = \"wobbly\"\n").unwrap();
        let err = Config::load_from(None, &local, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_letter_separator_fails_to_load() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("local.toml");
        fs::write(&local, "[styles.broken]\nseparator = \"a\"\ncasing = \"lower\"\n").unwrap();

        let err = Config::load_from(None, &local, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(format!("{:#}", err).contains("Invalid separator: 'a'"), "{err:#}");
    }

    #[test]
    fn test_acronym_list() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("acronyms.txt");
        fs::write(&file, "sql\n").unwrap();

        let config = Config {
            acronyms: vec!["gpu".to_string()],
            acronyms_file: Some(file),
            id_is_acronym: true,
            ..Default::default()
        };
        let list = config.acronym_list().unwrap();
        assert!(list.is_acronym("GPU"));
        assert!(list.is_acronym("Sql"));
        assert!(list.is_acronym("id"));
        assert!(list.is_acronym("json"));

        let bare = Config {
            common_acronyms: false,
            ..Default::default()
        };
        assert!(!bare.acronym_list().unwrap().is_acronym("json"));
    }

    #[test]
    fn test_resolve_style() {
        let mut config = Config::default();
        assert_eq!(
            config.resolve_style("swift.var").unwrap(),
            Preset::SwiftVar.orthography()
        );
        assert!(config.resolve_style("unknown").is_err());

        // custom styles shadow presets
        config
            .styles
            .insert("snake_case".to_string(), Orthography::new(Casing::Title));
        assert_eq!(
            config.resolve_style("snake_case").unwrap(),
            Orthography::new(Casing::Title)
        );
    }
}
