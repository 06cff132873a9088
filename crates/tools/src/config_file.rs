//! Optional TOML file with `[cave]` and `[forest]` tables.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use procgen_core::{CaveConfig, ForestConfig};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub cave: Option<CaveConfig>,
    pub forest: Option<ForestConfig>,
}

pub fn load(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use procgen_core::CavePhase;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_both_tables_with_defaults_for_missing_fields() {
        let file = write_config(
            r#"
[cave]
width = 30
height = 20
seed = 11
phases = [{ min = 5, max = 2, rounds = 4 }]

[forest]
width = 50
height = 40
max_steps = 100
"#,
        );

        let config = load(file.path()).expect("valid config");
        let cave = config.cave.expect("cave table");
        assert_eq!((cave.width, cave.height, cave.seed), (30, 20, 11));
        assert_eq!(cave.phases, vec![CavePhase::new(5, 2, 4)]);
        assert_eq!(cave.fill_probability, 0.4);

        let forest = config.forest.expect("forest table");
        assert_eq!((forest.width, forest.height), (50, 40));
        assert_eq!(forest.max_steps, Some(100));
        assert_eq!(forest.initial_trees, 10);
    }

    #[test]
    fn empty_file_has_no_tables() {
        let file = write_config("");
        let config = load(file.path()).expect("empty config");
        assert!(config.cave.is_none());
        assert!(config.forest.is_none());
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let file = write_config("[cave]\nwidth = \"wide\"\n");
        let err = load(file.path()).expect_err("width must be an integer");
        assert!(err.to_string().starts_with("Failed to parse config file"));

        let missing = file.path().with_extension("missing");
        let err = load(&missing).expect_err("file does not exist");
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
