//! Rarity-weighted gacha draws over a validated item catalog.
//!
//! Rows from the catalog endpoint are filtered for blank columns, grouped
//! into per-rarity pools, and drawn from with cumulative-weight sampling.

pub mod config;
pub mod draw;
pub mod error;
pub mod logger;
pub mod pool;
pub mod rarity;
pub mod record;
pub mod response;
pub mod session;
pub mod validate;

pub use draw::{draw_one, draw_one_traced, select_tier, tier_odds, Draw, TierOdds};
pub use error::{GachaError, Result};
pub use pool::{build_pools, RarityPools};
pub use rarity::RarityWeightTable;
pub use record::CatalogRecord;
pub use response::CatalogResponse;
pub use session::{draw_n, DrawSession};
pub use validate::filter_eligible;
