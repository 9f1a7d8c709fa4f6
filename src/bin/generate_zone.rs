//! Generate one sample zone and print the building records as JSON.
//!
//! Configuration comes from the environment:
//!   RING_SEED        world seed (default 12345)
//!   RING_ZONE_KIND   zone type name (default "industrial")
//!   RING_ZONE_SIZE   square zone side in meters (default 500)
//!   RING_CHUNK       chunk index (default 0)

use glam::Vec2;

use ringcity::generator::{GenerationConfig, GenerationSession, ZoneAddress};
use ringcity::zone::{ZoneKind, ZonePolygon};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    ringcity::core::logging::init();

    let world_seed: u32 = env_or("RING_SEED", 12345);
    let size: f32 = env_or("RING_ZONE_SIZE", 500.0);
    let chunk_index: i64 = env_or("RING_CHUNK", 0);
    let kind = ZoneKind::from_name(
        &std::env::var("RING_ZONE_KIND").unwrap_or_else(|_| "industrial".to_string()),
    );

    let ring = [
        Vec2::new(0.0, 0.0),
        Vec2::new(size, 0.0),
        Vec2::new(size, size),
        Vec2::new(0.0, size),
    ];
    let Some(zone) = ZonePolygon::new(&ring, kind, 0.5) else {
        log::error!("degenerate zone ring");
        return Ok(());
    };

    let session = GenerationSession::new(GenerationConfig {
        world_seed,
        ..GenerationConfig::default()
    });
    let params = session.chunk_params(chunk_index);
    log::info!(
        "chunk {}: width {:.0} m, {} levels, hub {:?}",
        params.index,
        params.width,
        params.levels,
        params.hub
    );

    let address = ZoneAddress { floor: 0, chunk_index, zone_index: 0 };
    let buildings = session.generate_zone(&zone, &address);
    log::info!("{} buildings in {} zone", buildings.len(), zone.kind().name());

    println!("{}", serde_json::to_string_pretty(&buildings)?);
    Ok(())
}
