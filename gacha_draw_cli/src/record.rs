use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the upstream catalog sheet.
///
/// Missing or `null` columns come through as empty strings so the
/// validator can drop the row instead of failing the whole parse.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "ID", default, deserialize_with = "string_or_null")]
    pub id: String,
    #[serde(rename = "NAME", default, deserialize_with = "string_or_null")]
    pub name: String,
    #[serde(rename = "RARITY", default, deserialize_with = "string_or_null")]
    pub rarity: String,
    #[serde(rename = "ARTKEY", default, deserialize_with = "string_or_null")]
    pub art_key: String,
    #[serde(rename = "BANNER", default, deserialize_with = "string_or_null")]
    pub banner: String,
    #[serde(rename = "IMAGEURL", default, deserialize_with = "string_or_null")]
    pub image_url: String,
}

impl CatalogRecord {
    pub fn new(
        id: &str,
        name: &str,
        rarity: &str,
        art_key: &str,
        banner: &str,
        image_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity: rarity.to_string(),
            art_key: art_key.to_string(),
            banner: banner.to_string(),
            image_url: image_url.to_string(),
        }
    }

    /// Trimmed, upper-cased rarity label used as the pool key.
    pub fn normalized_rarity(&self) -> String {
        normalize_label(&self.rarity)
    }

    pub(crate) fn required_fields(&self) -> [&str; 6] {
        [
            &self.id,
            &self.name,
            &self.rarity,
            &self.art_key,
            &self.banner,
            &self.image_url,
        ]
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:<24} {:<4} {}",
            self.id.trim(),
            self.name.trim(),
            self.normalized_rarity(),
            self.image_url.trim()
        )
    }
}

pub(crate) fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sheet_columns() {
        let json = r#"{
            "ID": "c-001",
            "NAME": "Moon Fox",
            "RARITY": " ssr ",
            "ARTKEY": "fox_moon",
            "BANNER": "b1",
            "IMAGEURL": "https://img.example/fox.png"
        }"#;
        let rec: CatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "c-001");
        assert_eq!(rec.art_key, "fox_moon");
        assert_eq!(rec.image_url, "https://img.example/fox.png");
        assert_eq!(rec.normalized_rarity(), "SSR");
    }

    #[test]
    fn null_and_missing_columns_become_empty() {
        let json = r#"{ "ID": "c-002", "NAME": null, "RARITY": "R" }"#;
        let rec: CatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name, "");
        assert_eq!(rec.banner, "");
        assert_eq!(rec.image_url, "");
    }

    #[test]
    fn display_uses_normalized_rarity() {
        let rec = CatalogRecord::new("c-3", "Owl", "sr", "owl", "b1", "u");
        assert!(rec.to_string().contains("SR"));
    }
}
