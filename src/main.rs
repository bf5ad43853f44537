use anyhow::Result;
use tileforge::asset::TextAsset;
use tileforge::constants::DEFAULT_CONTAINER_NAME;
use tileforge::map::decoder::MapDecoder;
use tileforge::map::planner::{LayoutConfig, MapLayoutPlanner};
use tileforge::storage::{ArtifactKind, TextStore};
use tileforge::world::memory::MemoryWorld;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

/// Tile kinds the demo palette offers, indexed by cell value.
const TILE_KINDS: [&str; 4] = ["water", "sand", "grass", "rock"];

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber)?;

    let mut world = MemoryWorld::new();
    let config = LayoutConfig::new(true, 0, 2, TILE_KINDS.len())?;

    // Build both bundled maps into the same container; the second install
    // replaces the first rather than stacking on top of it.
    for asset in [TextAsset::Island, TextAsset::Courtyard] {
        let size = asset.size();
        info!("Decoding map {:?} ({}x{})", asset.as_ref(), size.x, size.y);

        let grid = MapDecoder::decode(asset.text().trim_end(), size)?;
        let plan = MapLayoutPlanner::plan(&grid, &config);

        let mut counts = [0usize; TILE_KINDS.len()];
        for placement in &plan.placements {
            counts[placement.tile] += 1;
        }
        for (kind, count) in TILE_KINDS.iter().zip(counts) {
            debug!("Map {:?} places {count} {kind} tiles", asset.as_ref());
        }

        tileforge::world::install(&mut world, DEFAULT_CONTAINER_NAME, plan);
    }

    let container = world
        .container(DEFAULT_CONTAINER_NAME)
        .ok_or_else(|| anyhow::anyhow!("container {DEFAULT_CONTAINER_NAME:?} was not built"))?;
    info!(
        "World holds {} container(s); {DEFAULT_CONTAINER_NAME:?} has {} tiles at scale {}",
        world.len(),
        container.tiles.len(),
        container.scale
    );

    // Keep a session log next to the generated output.
    let store = TextStore::new(std::env::temp_dir(), ArtifactKind::Txt);
    store.create("sessions", "map build log")?;
    store.append("sessions", "built bundled maps")?;
    info!("Session log at {}", store.artifact_path("sessions").display());

    Ok(())
}
