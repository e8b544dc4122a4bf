//! Settings for a draw run, optionally loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::rarity::RarityWeightTable;

pub const DEFAULT_DRAW_COUNT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RarityWeight {
    pub label: String,
    pub weight: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub count: usize,
    pub seed: Option<u64>,
    #[serde(rename = "rarity")]
    pub rarities: Vec<RarityWeight>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: DEFAULT_DRAW_COUNT,
            seed: None,
            rarities: RarityWeightTable::DEFAULT
                .iter()
                .map(|(label, weight)| RarityWeight {
                    label: label.to_string(),
                    weight: *weight,
                })
                .collect(),
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Validated weight table, in the order the rarities were listed.
    pub fn weight_table(&self) -> Result<RarityWeightTable> {
        RarityWeightTable::new(self.rarities.iter().map(|r| (r.label.as_str(), r.weight)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GachaError;
    use std::io::Write;

    #[test]
    fn defaults_match_builtin_table() {
        let settings = Settings::default();
        assert_eq!(settings.count, 10);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.weight_table().unwrap(), RarityWeightTable::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_toml("seed = 42").unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.count, DEFAULT_DRAW_COUNT);
        assert_eq!(settings.rarities.len(), 4);
    }

    #[test]
    fn loads_custom_table_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
count = 3

[[rarity]]
label = "ssr"
weight = 2

[[rarity]]
label = "n"
weight = 98
"#
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.count, 3);
        let table = settings.weight_table().unwrap();
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, ["SSR", "N"]);
    }

    #[test]
    fn zero_weight_fails_validation() {
        let settings = Settings::from_toml("[[rarity]]\nlabel = \"N\"\nweight = 0\n").unwrap();
        assert!(matches!(
            settings.weight_table(),
            Err(GachaError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn negative_count_is_rejected_at_parse_time() {
        assert!(matches!(
            Settings::from_toml("count = -1"),
            Err(GachaError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/gacha.toml")).unwrap_err();
        assert!(matches!(err, GachaError::Io(_)));
    }
}
