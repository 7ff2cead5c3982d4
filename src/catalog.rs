//! Novel catalog: the slides the carousel plays and the listing they link to.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub description: String,
    /// Cover image, relative to the assets directory (e.g. `/book1.jpg`)
    pub image: String,
    /// Destination handed to the navigator on "Read Now"
    pub link: String,
}

impl Novel {
    fn new(id: u32, title: &str, author: &str, genre: &str, description: &str, image: &str, link: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            link: link.to_string(),
        }
    }

    /// Slide for a bare image file: the file stem doubles as the title.
    pub fn from_image_path(id: u32, path: &Path) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("Image {}", id));
        Self {
            id,
            title,
            author: String::new(),
            genre: String::new(),
            description: String::new(),
            image: path.to_string_lossy().into_owned(),
            link: path.to_string_lossy().into_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub count: u32,
}

// Home page carousel
pub fn featured() -> Vec<Novel> {
    vec![
        Novel::new(1, "Echoes of Eternity", "Emma Wordsmith", "Fantasy", "A fantasy novel about...", "/book1.jpg", "/novels/1"),
        Novel::new(2, "Quantum Horizon", "Alex Scienceton", "Science Fiction", "A science fiction novel about...", "/book2.jpg", "/novels/2"),
        Novel::new(3, "Whispers in the Mist", "Sarah Mystique", "Mystery", "A mystery novel about...", "/book3.jpg", "/novels/3"),
        Novel::new(4, "Heartstrings", "Rachel Romance", "Romance", "A romantic novel about...", "/book4.jpg", "/novels/4"),
    ]
}

// Full novels listing
pub fn library() -> Vec<Novel> {
    vec![
        Novel::new(1, "Echoes of Eternity", "Emma Wordsmith", "Fantasy", "A fantasy novel about...", "/book1.jpg", "/novels/1"),
        Novel::new(2, "Horror in the Dark", "Emma Wordsmith", "Fantasy", "A fantasy novel about...", "/book3.jpg", "/novels/1"),
        Novel::new(3, "Never Ending Sky", "Emma Wordsmith", "Fantasy", "A fantasy novel about...", "/book2.jpg", "/novels/1"),
        Novel::new(4, "Glimmer of Hope", "Emma Wordsmith", "Fantasy", "A fantasy novel about...", "/book4.jpg", "/novels/1"),
        Novel::new(5, "Quantum Horizon", "Alex Scienceton", "Science Fiction", "A science fiction novel about...", "/book2.jpg", "/novels/2"),
        Novel::new(6, "Whispers in the Mist", "Sarah Mystique", "Mystery", "A mystery novel about...", "/book3.jpg", "/novels/3"),
        Novel::new(7, "Heartstrings", "Rachel Romance", "Romance", "A romantic novel about...", "/book4.jpg", "/novels/4"),
    ]
}

pub fn categories() -> Vec<Category> {
    [
        ("Romance", 150),
        ("Mystery", 120),
        ("Science Fiction", 90),
        ("Fantasy", 110),
        ("Non-Fiction", 80),
        ("Horror", 60),
        ("Adventure", 95),
        ("Historical", 70),
    ]
    .into_iter()
    .map(|(name, count)| Category { name: name.to_string(), count })
    .collect()
}

/// Case-insensitive substring match on title or description.
/// The query is taken as typed, surrounding spaces included.
/// An empty query keeps everything; order is preserved.
pub fn search<'a>(novels: &'a [Novel], query: &str) -> Vec<&'a Novel> {
    let query = query.to_lowercase();
    novels
        .iter()
        .filter(|novel| {
            novel.title.to_lowercase().contains(&query)
                || novel.description.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn by_genre<'a>(novels: &'a [Novel], genre: &str) -> Vec<&'a Novel> {
    let genre = genre.to_lowercase();
    novels
        .iter()
        .filter(|novel| novel.genre.to_lowercase() == genre)
        .collect()
}

/// Load a YAML list of novels.
pub fn load_catalog(path: &Path) -> Result<Vec<Novel>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let novels: Vec<Novel> = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    tracing::info!("Loaded {} novels from {}", novels.len(), path.display());
    Ok(novels)
}
