use rand::Rng;
use tracing::{info, warn};

use crate::draw::draw_one_traced;
use crate::logger::DrawLog;
use crate::pool::RarityPools;
use crate::rarity::RarityWeightTable;
use crate::record::CatalogRecord;

pub struct DrawSession<'a> {
    pools: &'a RarityPools,
    table: &'a RarityWeightTable,
    log: DrawLog,
}

impl<'a> DrawSession<'a> {
    pub fn new(pools: &'a RarityPools, table: &'a RarityWeightTable) -> Self {
        Self {
            pools,
            table,
            log: DrawLog::new(0),
        }
    }

    pub fn run<R>(&mut self, count: usize, rng: &mut R) -> Vec<&'a CatalogRecord>
    where
        R: Rng + ?Sized,
    {
        self.log = DrawLog::new(count);
        let mut picked = Vec::new();
        for _ in 0..count {
            match draw_one_traced(self.pools, self.table, rng) {
                Some(draw) => {
                    self.log.log_draw(&draw);
                    picked.push(draw.record);
                }
                None => {
                    warn!(drawn = picked.len(), requested = count, "no rarity has records, stopping early");
                    self.log.log_stop();
                    break;
                }
            }
        }
        info!(drawn = picked.len(), requested = count, "draw session finished");
        picked
    }

    pub fn log(&self) -> &DrawLog {
        &self.log
    }
}

pub fn draw_n<'a, R>(
    pools: &'a RarityPools,
    table: &'a RarityWeightTable,
    count: usize,
    rng: &mut R,
) -> Vec<&'a CatalogRecord>
where
    R: Rng + ?Sized,
{
    DrawSession::new(pools, table).run(count, rng)
}
