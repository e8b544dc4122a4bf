use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gacha::config::Settings;
use gacha::{
    build_pools, filter_eligible, tier_odds, CatalogResponse, DrawSession, RarityPools,
    RarityWeightTable,
};

#[derive(Parser)]
#[command(name = "gacha", version, about = "Rarity-weighted draws from a catalog response")]
struct Cli {
    /// Catalog response JSON file, or `-` to read stdin
    catalog: String,

    /// Number of draws (overrides the config file)
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible draws
    #[arg(long, env = "GACHA_SEED")]
    seed: Option<u64>,

    /// TOML settings file with count, seed and rarity weights
    #[arg(short, long, env = "GACHA_CONFIG")]
    config: Option<PathBuf>,

    /// Print the selection odds of each tier that has records
    #[arg(long)]
    odds: bool,

    /// Print the roll behind every draw
    #[arg(long)]
    trace: bool,

    /// Print picked records as JSON
    #[arg(long)]
    json: bool,
}

fn read_catalog(source: &str) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read catalog from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(source).with_context(|| format!("Failed to read catalog from {}", source))
}

fn write_odds(out: &mut dyn Write, pools: &RarityPools, table: &RarityWeightTable) -> io::Result<()> {
    writeln!(out, "Tier odds:")?;
    for o in tier_odds(pools, table) {
        writeln!(
            out,
            "  {:<4} weight:{:<4} records:{:<4} {:>6.2}%",
            o.tier,
            o.weight,
            o.size,
            o.probability * 100.0
        )?;
    }
    Ok(())
}

// With --json, stdout carries only the JSON; odds and the trace go to `diag`.
fn run(cli: &Cli, out: &mut dyn Write, diag: &mut dyn Write) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };
    let table = settings.weight_table().context("Invalid rarity table")?;
    let count = cli.count.unwrap_or(settings.count);
    let seed = cli.seed.or(settings.seed);

    let body = read_catalog(&cli.catalog)?;
    let rows = CatalogResponse::from_json(&body)
        .context("Failed to parse catalog response")?
        .into_rows()?;

    let eligible = filter_eligible(rows);
    if eligible.is_empty() {
        info!("no eligible catalog rows; nothing to draw");
        return Ok(());
    }

    let pools = build_pools(eligible, &table);

    if cli.odds {
        let report: &mut dyn Write = if cli.json { &mut *diag } else { &mut *out };
        write_odds(report, &pools, &table)?;
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut session = DrawSession::new(&pools, &table);
    let picked = session.run(count, &mut rng);

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&picked)?)?;
    } else {
        for (i, record) in picked.iter().enumerate() {
            writeln!(out, "{:>2}. {}", i + 1, record)?;
        }
    }

    if cli.trace {
        let report: &mut dyn Write = if cli.json { &mut *diag } else { &mut *out };
        session.log().write_to(report)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}
