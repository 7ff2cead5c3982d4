use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{self, Novel};
use crate::texture_loader::load_sorted_image_paths;

/// StoryLoft featured-novel carousel
#[derive(Debug, Clone, Parser)]
#[command(name = "storyloft", version, about)]
pub struct ViewerArgs {
    /// YAML catalog of novels to play (defaults to the built-in featured list)
    #[arg(long, conflicts_with = "images")]
    pub catalog: Option<PathBuf>,

    /// Play every image in this directory instead of a catalog
    #[arg(long)]
    pub images: Option<PathBuf>,

    /// Directory cover images are resolved against
    #[arg(long, default_value = "public")]
    pub assets: PathBuf,

    /// Time between automatic advances, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub interval_ms: u64,

    /// Start with autoplay paused
    #[arg(long)]
    pub paused: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl ViewerArgs {
    pub fn interval(&self) -> Result<Duration> {
        if self.interval_ms == 0 {
            bail!("--interval-ms must be greater than zero");
        }
        Ok(Duration::from_millis(self.interval_ms))
    }

    // The slide collection, fixed for the rest of the session
    pub fn load_slides(&self) -> Result<Vec<Novel>> {
        if let Some(dir) = &self.images {
            let paths = load_sorted_image_paths(dir)?;
            return Ok(paths
                .iter()
                .zip(1..)
                .map(|(path, id)| Novel::from_image_path(id, path))
                .collect());
        }
        match &self.catalog {
            Some(path) => catalog::load_catalog(path),
            None => Ok(catalog::featured()),
        }
    }

    // Cover path on disk for a novel
    pub fn resolve_image(&self, novel: &Novel) -> PathBuf {
        if self.images.is_some() {
            return PathBuf::from(&novel.image);
        }
        self.assets.join(novel.image.trim_start_matches('/'))
    }
}
