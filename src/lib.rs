// StoryLoft carousel
//
// The library holds the carousel controller and the catalog it plays.
// The binary crate (main.rs) is the raylib viewer, built with the `viewer` feature.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod state;
pub mod texture_loader;
pub mod timer;

#[cfg(feature = "viewer")]
pub mod slide;

pub use carousel::Carousel;
pub use catalog::Novel;
pub use engine::{LogPresenter, Presenter};
pub use error::CarouselError;
pub use navigation::{LogNavigator, Navigator};
pub use state::{CarouselState, Command};
