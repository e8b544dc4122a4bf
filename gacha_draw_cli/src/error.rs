use thiserror::Error;

#[derive(Error, Debug)]
pub enum GachaError {
    #[error("rarity {label} has weight {weight}; weights must be at least 1")]
    InvalidWeight { label: String, weight: u32 },

    #[error("rarity label is blank")]
    BlankRarity,

    #[error("rarity {0} is declared more than once")]
    DuplicateRarity(String),

    #[error("weight table has no rarities")]
    EmptyWeightTable,

    #[error("catalog unavailable: {}", .0.as_deref().unwrap_or("no error message"))]
    DataUnavailable(Option<String>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GachaError>;
