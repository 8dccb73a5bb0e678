use std::time::Instant;

use anyhow::Context;
use rand::{SeedableRng, rngs::SmallRng};
use roadmap::{CityMap80, MAP_SIZE, connectivity, filler, io};
use tracing::{Level, debug, info};

use crate::config::GenCfg;

mod config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cfg = GenCfg::default();
    let mut rng = SmallRng::from_os_rng();
    let mut map = CityMap80::new();

    info!(size = MAP_SIZE, "generating road map");
    let started = Instant::now();
    filler::fill(&mut map, &mut rng);
    debug!(elapsed = ?started.elapsed(), "map filled");

    if cfg.verify_connectivity {
        connectivity::check_connected(&map).context("generated map failed its check")?;
        info!("every cell is reachable");
    }

    io::save_map(&map, &cfg.out_path)
        .with_context(|| format!("failed to write {}", cfg.out_path.display()))?;
    info!(path = %cfg.out_path.display(), "map written");

    Ok(())
}
