//! Batch enrichment of a Minecraft mods catalog.
//!
//! Reads a CSV catalog of mods, resolves each mod against CurseForge
//! (preferred, requires an API key) or Modrinth (fallback, anonymous),
//! determines the highest Minecraft version each mod supports, derives a
//! compatibility flag against a fixed threshold, and writes the catalog
//! back out with a fixed column order.
//!
//! # Modules
//!
//! - [`catalog`]: CSV reading/writing and schema normalization
//! - [`config`]: runtime configuration resolved from the environment
//! - [`enrich`]: the per-row enrichment loop
//! - [`provider`]: CurseForge and Modrinth API clients
//! - [`resolver`]: name search across providers with fixed preference
//! - [`selector`]: best-version selection over a project's files
//! - [`version`]: Minecraft version parsing and comparison

use tracing::info;

pub mod catalog;
pub mod config;
pub mod enrich;
pub mod provider;
pub mod resolver;
pub mod selector;
pub mod version;

use config::Config;
use enrich::Enricher;
use provider::{CurseForgeClient, ModProvider, ModrinthClient};

/// Runs a full enrichment pass: read catalog, enrich every row, write the
/// catalog once. Only table I/O errors are fatal; per-row provider
/// failures just leave fields absent.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let curseforge = config
        .curseforge_api_key
        .as_deref()
        .map(CurseForgeClient::with_api_key);
    let modrinth = ModrinthClient::default();

    if curseforge.is_none() {
        info!("CURSEFORGE_API_KEY not set; resolving through Modrinth only");
    }

    let mut records = catalog::read_catalog(&config.input_path)?;
    info!(
        "enriching {} records from {}",
        records.len(),
        config.input_path.display()
    );

    let enricher = Enricher::new(
        curseforge.as_ref().map(|c| c as &dyn ModProvider),
        &modrinth,
    );
    enricher.run(&mut records).await;

    catalog::write_catalog(&config.output_path, &records)?;
    info!("wrote {}", config.output_path.display());

    Ok(())
}
