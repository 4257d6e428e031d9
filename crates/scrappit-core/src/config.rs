use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Per-project override file, looked up in the project folder root.
pub const PROJECT_CONFIG_NAME: &str = ".scrappit.toml";

/// Layered plugin settings. Global defaults are shallow-merged with the
/// per-project override file; project keys win.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapConfig {
    /// Absolute override for the scrap root. Empty = derive from the project.
    pub scrap_folder_name: String,
    /// Parent directory collecting one scrap tree per project. Empty = unused.
    pub all_scraps_parent_dir: String,
    /// Suffix for scrap log files; surrounding punctuation is ignored.
    pub scrap_suffix: String,
    /// "horizontal", "vertical", or anything else for no split.
    pub scrap_compare_window_split: String,
}

impl Default for ScrapConfig {
    fn default() -> Self {
        ScrapConfig {
            scrap_folder_name: String::new(),
            all_scraps_parent_dir: String::new(),
            scrap_suffix: "scrap".to_string(),
            scrap_compare_window_split: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    None,
    Horizontal,
    Vertical,
}

impl ScrapConfig {
    /// Scrap log suffix with any surrounding punctuation stripped
    /// (a configured ".scrap" and "scrap" mean the same thing).
    pub fn dotless_suffix(&self) -> String {
        let stripped = self
            .scrap_suffix
            .trim_matches(|c: char| c.is_ascii_punctuation());
        if stripped.is_empty() {
            "scrap".to_string()
        } else {
            stripped.to_string()
        }
    }

    pub fn compare_split(&self) -> SplitMode {
        match self.scrap_compare_window_split.as_str() {
            "horizontal" => SplitMode::Horizontal,
            "vertical" => SplitMode::Vertical,
            _ => SplitMode::None,
        }
    }
}

/// Load the effective settings for one command invocation: the global
/// settings file overlaid with the project's `.scrappit.toml`, if any.
pub fn load_configuration(project_folder: Option<&Path>) -> Result<ScrapConfig, ConfigError> {
    let project_file = project_folder.map(|p| p.join(PROJECT_CONFIG_NAME));
    load_layered(global_config_path().as_deref(), project_file.as_deref())
}

/// Global settings path: `SCRAPPIT_CONFIG` if set, else
/// `<user config dir>/scrappit/Scrappit.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("SCRAPPIT_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("scrappit").join("Scrappit.toml"))
}

fn load_layered(
    global: Option<&Path>,
    project: Option<&Path>,
) -> Result<ScrapConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(global) = global {
        builder = builder.add_source(ConfigFile::from(global.to_path_buf()).required(false));
    }
    if let Some(project) = project {
        builder = builder.add_source(ConfigFile::from(project.to_path_buf()).required(false));
    }
    let merged = builder.build()?;
    merged.try_deserialize::<ScrapConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_files() {
        let config = load_layered(None, None).unwrap();
        assert_eq!(config.scrap_folder_name, "");
        assert_eq!(config.all_scraps_parent_dir, "");
        assert_eq!(config.scrap_suffix, "scrap");
        assert_eq!(config.compare_split(), SplitMode::None);
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = tempdir().unwrap();
        let global = tmp.path().join("Scrappit.toml");
        let project = tmp.path().join(".scrappit.toml");
        fs::write(
            &global,
            "scrap_suffix = \"cuts\"\nall_scraps_parent_dir = \"/scraps\"\n",
        )
        .unwrap();
        fs::write(&project, "scrap_suffix = \"bits\"\n").unwrap();

        let config = load_layered(Some(&global), Some(&project)).unwrap();
        // Project key wins, untouched global key survives the merge
        assert_eq!(config.scrap_suffix, "bits");
        assert_eq!(config.all_scraps_parent_dir, "/scraps");
    }

    #[test]
    fn test_missing_files_are_not_an_error() {
        let tmp = tempdir().unwrap();
        let config = load_layered(
            Some(&tmp.path().join("nope.toml")),
            Some(&tmp.path().join("also_nope.toml")),
        )
        .unwrap();
        assert_eq!(config.scrap_suffix, "scrap");
    }

    #[test]
    fn test_dotless_suffix_strips_punctuation() {
        let mut config = ScrapConfig::default();
        config.scrap_suffix = ".scrap".to_string();
        assert_eq!(config.dotless_suffix(), "scrap");
        config.scrap_suffix = "_old_".to_string();
        assert_eq!(config.dotless_suffix(), "old");
        config.scrap_suffix = "...".to_string();
        assert_eq!(config.dotless_suffix(), "scrap");
    }

    #[test]
    fn test_compare_split_parsing() {
        let mut config = ScrapConfig::default();
        config.scrap_compare_window_split = "horizontal".to_string();
        assert_eq!(config.compare_split(), SplitMode::Horizontal);
        config.scrap_compare_window_split = "vertical".to_string();
        assert_eq!(config.compare_split(), SplitMode::Vertical);
        config.scrap_compare_window_split = "diagonal".to_string();
        assert_eq!(config.compare_split(), SplitMode::None);
    }
}
