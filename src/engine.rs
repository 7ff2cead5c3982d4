use anyhow::Result;
use std::time::Duration;

use crate::carousel::Carousel;
use crate::catalog::Novel;
use crate::navigation::Navigator;
use crate::state::CarouselState;

// A surface the carousel state is rendered onto, once per frame.
pub trait Presenter<T> {
    fn present(&mut self, state: &CarouselState, slide: Option<&T>) -> Result<()>;
}

// One frame: give autoplay its tick, then hand the fresh state to the presenter.
// Returns whether autoplay advanced this frame.
pub fn drive<T, P: Presenter<T>>(carousel: &mut Carousel<T>, presenter: &mut P, dt: Duration) -> Result<bool> {
    let fired = carousel.tick(dt);
    presenter.present(&carousel.state(), carousel.current_slide())?;
    Ok(fired)
}

// "Read Now" on the visible slide. Returns false when there is nothing to open.
pub fn read_now<N: Navigator + ?Sized>(carousel: &Carousel<Novel>, navigator: &mut N) -> Result<bool> {
    match carousel.current_slide() {
        Some(novel) => {
            navigator.navigate(&novel.link)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// Headless presenter: logs whenever what is on screen changes
#[derive(Debug, Default)]
pub struct LogPresenter {
    last: Option<CarouselState>,
    frames: u64,
    changes: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn changes(&self) -> u64 {
        self.changes
    }
}

impl Presenter<Novel> for LogPresenter {
    fn present(&mut self, state: &CarouselState, slide: Option<&Novel>) -> Result<()> {
        self.frames += 1;
        if self.last.as_ref() != Some(state) {
            self.changes += 1;
            match slide {
                Some(novel) => tracing::info!(
                    "[{}/{}] {} by {} | {} ({})",
                    state.current_index.map_or(0, |i| i + 1),
                    state.len,
                    novel.title,
                    novel.author,
                    novel.genre,
                    if state.is_playing { "playing" } else { "paused" }
                ),
                None => tracing::info!("No slides to show"),
            }
            self.last = Some(*state);
        }
        Ok(())
    }
}
