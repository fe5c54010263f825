use anyhow::{Context, Result};
use ritornello_core::store;
use ritornello_enrich::{
    recommend_enriched, Enricher, PlaceholderEnricher, Recommendation, SpotifyEnricher,
};

use crate::config::Config;

pub async fn run_recommend(config: &Config, title: Option<String>, k: usize) -> Result<()> {
    let recommender = store::load_recommender(&config.catalog_path, &config.similarity_path)
        .with_context(|| {
            format!(
                "failed to load catalog/matrix from {} and {}",
                config.catalog_path.display(),
                config.similarity_path.display()
            )
        })?;

    // Default selection mirrors the catalog's load order: no explicit
    // title means the first track.
    let title = match title {
        Some(title) => title,
        None => recommender
            .catalog()
            .titles()
            .next()
            .map(str::to_string)
            .context("catalog is empty; nothing to recommend from")?,
    };

    let enricher: Box<dyn Enricher> = match config.spotify_credentials() {
        Some(credentials) => Box::new(SpotifyEnricher::new(credentials)?),
        None => {
            log::warn!(
                "no Spotify credentials configured; showing placeholder artwork \
                 (run `ritornello config init` to set them up)"
            );
            Box::new(PlaceholderEnricher)
        }
    };

    let recommendations = recommend_enriched(&recommender, enricher.as_ref(), &title, k).await?;

    println!("\n🎵 Tracks similar to {title}\n");
    for (rank, recommendation) in recommendations.iter().enumerate() {
        print_card(rank + 1, recommendation);
    }

    Ok(())
}

fn print_card(rank: usize, recommendation: &Recommendation) {
    let Recommendation {
        track,
        score,
        metadata,
    } = recommendation;

    println!("  {rank}. {}", track.title);
    println!("     by {}", track.artist);
    println!("     similarity: {score:.3}");
    println!("     cover:      {}", metadata.cover_url);
    if let Some(preview) = &metadata.preview_url {
        println!("     preview:    {preview}");
    }
    if let Some(link) = &metadata.external_url {
        println!("     listen:     {link}");
    }
    println!();
}
