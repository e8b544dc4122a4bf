use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::draw::Draw;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawEntry {
    pub draw: usize,
    pub tier: String,
    pub roll: u64,
    pub total: u64,
    pub index: usize,
    pub record_id: String,
}

/// Per-session trace of every roll, kept in memory only.
#[derive(Clone, Debug)]
pub struct DrawLog {
    pub session_name: String,
    pub requested: usize,
    pub entries: Vec<DrawEntry>,
    /// Set when the session ran out of active tiers before `requested`.
    pub stopped_at: Option<usize>,
}

impl DrawLog {
    pub fn new(requested: usize) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            session_name: format!("session-{}", ts),
            requested,
            entries: Vec::new(),
            stopped_at: None,
        }
    }

    pub fn log_draw(&mut self, draw: &Draw<'_>) {
        self.entries.push(DrawEntry {
            draw: self.entries.len() + 1,
            tier: draw.tier.to_string(),
            roll: draw.roll,
            total: draw.total,
            index: draw.index,
            record_id: draw.record.id.clone(),
        });
    }

    pub fn log_stop(&mut self) {
        self.stopped_at = Some(self.entries.len() + 1);
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "=== Draw Log: {} ===", self.session_name)?;
        for e in &self.entries {
            writeln!(
                out,
                "#{:<3} roll {:>4}/{:<4} {:<4} [{}] {}",
                e.draw, e.roll, e.total, e.tier, e.index, e.record_id
            )?;
        }
        if let Some(n) = self.stopped_at {
            writeln!(
                out,
                "stopped at draw {} of {}: no rarity has records",
                n, self.requested
            )?;
        }
        Ok(())
    }
}
