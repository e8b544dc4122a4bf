use rand::Rng;
use tracing::debug;

use crate::pool::RarityPools;
use crate::rarity::RarityWeightTable;
use crate::record::CatalogRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw<'a> {
    pub record: &'a CatalogRecord,
    pub tier: &'a str,
    pub roll: u64,
    pub total: u64,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierOdds<'a> {
    pub tier: &'a str,
    pub weight: u32,
    pub size: usize,
    pub probability: f64,
}

pub fn active_tiers<'a>(pools: &RarityPools, table: &'a RarityWeightTable) -> Vec<(&'a str, u32)> {
    table
        .iter()
        .filter(|(label, _)| !pools.get(label).is_empty())
        .collect()
}

/// Cumulative-weight selection: walks `active` in order and returns the
/// first tier whose running sum reaches `roll`. `roll` must lie in
/// `1..=sum(weights)`; anything outside yields `None`.
pub fn select_tier<'a>(active: &[(&'a str, u32)], roll: u64) -> Option<&'a str> {
    if roll == 0 {
        return None;
    }
    let mut acc: u64 = 0;
    for &(tier, weight) in active {
        acc += u64::from(weight);
        if roll <= acc {
            return Some(tier);
        }
    }
    None
}

pub fn draw_one<'a, R>(
    pools: &'a RarityPools,
    table: &'a RarityWeightTable,
    rng: &mut R,
) -> Option<&'a CatalogRecord>
where
    R: Rng + ?Sized,
{
    draw_one_traced(pools, table, rng).map(|d| d.record)
}

pub fn draw_one_traced<'a, R>(
    pools: &'a RarityPools,
    table: &'a RarityWeightTable,
    rng: &mut R,
) -> Option<Draw<'a>>
where
    R: Rng + ?Sized,
{
    let active = active_tiers(pools, table);
    if active.is_empty() {
        return None;
    }

    let total: u64 = active.iter().map(|(_, w)| u64::from(*w)).sum();
    let roll = rng.gen_range(1..=total);
    let tier = select_tier(&active, roll)?;

    let pool = pools.get(tier);
    let index = rng.gen_range(0..pool.len());
    let record = &pool[index];

    debug!(tier, roll, total, index, id = %record.id, "drew record");
    Some(Draw {
        record,
        tier,
        roll,
        total,
        index,
    })
}

pub fn tier_odds<'a>(pools: &RarityPools, table: &'a RarityWeightTable) -> Vec<TierOdds<'a>> {
    let active = active_tiers(pools, table);
    let total: u64 = active.iter().map(|(_, w)| u64::from(*w)).sum();
    active
        .into_iter()
        .map(|(tier, weight)| TierOdds {
            tier,
            weight,
            size: pools.get(tier).len(),
            probability: weight as f64 / total as f64,
        })
        .collect()
}
