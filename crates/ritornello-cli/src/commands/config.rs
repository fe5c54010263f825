use anyhow::Result;

use crate::config::{self, Config};

pub fn show_config(config: &Config) -> Result<()> {
    println!("\n🎵 Ritornello Configuration\n");
    println!("  Config file: {}", config::config_file_path().display());
    println!("  Catalog:     {}", config.catalog_path.display());
    println!("  Similarity:  {}", config.similarity_path.display());
    println!(
        "  Spotify:     {}",
        if config.spotify_credentials().is_some() {
            "credentials configured"
        } else {
            "not configured (placeholder artwork only)"
        }
    );

    Ok(())
}

pub fn init_config() -> Result<()> {
    let path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Wrote example config to {}", path.display());
        println!("Edit it to add your Spotify client credentials.");
    } else {
        println!("Config file already exists at {}", path.display());
    }

    Ok(())
}
