use anyhow::{Context, Result};
use ritornello_core::store;

use crate::config::Config;

pub fn run_tracks(config: &Config) -> Result<()> {
    let catalog = store::load_catalog(&config.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;

    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    for title in catalog.titles() {
        println!("{title}");
    }
    log::info!("listed {} tracks", catalog.len());

    Ok(())
}
