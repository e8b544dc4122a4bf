use std::collections::HashMap;

use tracing::{debug, info};

use crate::rarity::RarityWeightTable;
use crate::record::CatalogRecord;

#[derive(Clone, Debug, Default)]
pub struct RarityPools {
    pools: HashMap<String, Vec<CatalogRecord>>,
}

impl RarityPools {
    pub fn get(&self, label: &str) -> &[CatalogRecord] {
        self.pools.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_tier(&self, label: &str) -> bool {
        self.pools.contains_key(label)
    }

    pub fn tier_count(&self) -> usize {
        self.pools.len()
    }

    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.values().all(Vec::is_empty)
    }

    pub fn into_records(mut self, table: &RarityWeightTable) -> Vec<CatalogRecord> {
        let mut out = Vec::with_capacity(self.len());
        for label in table.labels() {
            if let Some(records) = self.pools.remove(label) {
                out.extend(records);
            }
        }
        out
    }
}

/// Rows whose rarity is not a tier in `table` are dropped, never drawn.
pub fn build_pools(rows: Vec<CatalogRecord>, table: &RarityWeightTable) -> RarityPools {
    let mut pools: HashMap<String, Vec<CatalogRecord>> = table
        .labels()
        .map(|label| (label.to_string(), Vec::new()))
        .collect();

    let mut unknown = 0usize;
    for row in rows {
        let key = row.normalized_rarity();
        match pools.get_mut(&key) {
            Some(pool) => pool.push(row),
            None => {
                debug!(id = %row.id, rarity = %row.rarity, "skipping row with unknown rarity");
                unknown += 1;
            }
        }
    }

    for (label, _) in table.iter() {
        let size = pools.get(label).map_or(0, Vec::len);
        debug!(tier = label, size, "built pool");
    }
    info!(
        tiers = pools.len(),
        records = pools.values().map(Vec::len).sum::<usize>(),
        unknown,
        "built rarity pools"
    );

    RarityPools { pools }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, rarity: &str) -> CatalogRecord {
        CatalogRecord::new(id, id, rarity, id, "b1", "https://img/x.png")
    }

    #[test]
    fn every_tier_is_present_even_when_empty() {
        let table = RarityWeightTable::default();
        let pools = build_pools(vec![rec("a", "R")], &table);
        assert_eq!(pools.tier_count(), 4);
        for label in ["N", "R", "SR", "SSR"] {
            assert!(pools.contains_tier(label));
        }
        assert!(pools.get("SSR").is_empty());
        assert_eq!(pools.get("R").len(), 1);
    }

    #[test]
    fn normalizes_labels_and_keeps_order() {
        let table = RarityWeightTable::default();
        let rows = vec![rec("a", " sr"), rec("b", "N"), rec("c", "Sr "), rec("d", "sR")];
        let pools = build_pools(rows, &table);
        let ids: Vec<&str> = pools.get("SR").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d"]);
        assert_eq!(pools.get("N").len(), 1);
    }

    #[test]
    fn unknown_rarity_is_excluded_from_every_pool() {
        let table = RarityWeightTable::default();
        let pools = build_pools(vec![rec("x", "EPIC"), rec("y", "N")], &table);
        assert_eq!(pools.len(), 1);
        for label in table.labels() {
            assert!(pools.get(label).iter().all(|r| r.id != "x"));
        }
        assert!(pools.get("EPIC").is_empty());
    }

    #[test]
    fn flattening_pools_reproduces_the_input_multiset() {
        let table = RarityWeightTable::default();
        let rows = vec![
            rec("a", "N"),
            rec("b", "SSR"),
            rec("c", "r"),
            rec("a", "N"),
            rec("d", "SR"),
            rec("e", "R"),
        ];
        let pools = build_pools(rows.clone(), &table);
        let mut flat = pools.into_records(&table);
        let mut expected = rows;
        let key = |r: &CatalogRecord| (r.id.clone(), r.rarity.clone());
        flat.sort_by_key(key);
        expected.sort_by_key(key);
        assert_eq!(flat, expected);
    }

    #[test]
    fn empty_input_gives_empty_pools() {
        let pools = build_pools(Vec::new(), &RarityWeightTable::default());
        assert!(pools.is_empty());
        assert_eq!(pools.len(), 0);
        assert_eq!(pools.tier_count(), 4);
    }
}
