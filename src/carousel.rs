use std::time::Duration;
use tracing::debug;

use crate::constants::AUTOPLAY_INTERVAL;
use crate::error::CarouselError;
use crate::state::{CarouselState, Command};
use crate::timer::AutoplayTimer;

/// Slide position and autoplay state for an ordered, fixed set of slides.
///
/// The controller owns its autoplay timer outright: the timer exists only
/// while the carousel is playing with more than one slide, and it is dropped
/// on pause, teardown, or when the controller itself is dropped. All state
/// changes go through `&mut self`, so a timer firing (see [`Carousel::tick`])
/// can never interleave with manual navigation.
///
/// Manual navigation does not touch the timer phase: after `next()` the
/// following automatic advance still happens when it was originally due.
#[derive(Debug)]
pub struct Carousel<T> {
    slides: Vec<T>,
    current_index: usize,
    is_playing: bool,
    interval: Duration,
    timer: Option<AutoplayTimer>,
    torn_down: bool,
}

impl<T> Carousel<T> {
    /// Start at the first slide, playing. A timer is armed only when there
    /// is something to advance to.
    pub fn new(slides: Vec<T>, interval: Duration) -> Self {
        let mut carousel = Self {
            slides,
            current_index: 0,
            is_playing: true,
            interval,
            timer: None,
            torn_down: false,
        };
        carousel.arm_timer();
        debug!(
            slides = carousel.slides.len(),
            ?interval,
            timer_armed = carousel.timer.is_some(),
            "carousel initialized"
        );
        carousel
    }

    pub fn with_default_interval(slides: Vec<T>) -> Self {
        Self::new(slides, AUTOPLAY_INTERVAL)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    pub fn current_slide(&self) -> Option<&T> {
        self.slides.get(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Time until the next automatic advance, if one is scheduled.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.timer.as_ref().map(AutoplayTimer::remaining)
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index(),
            is_playing: self.is_playing,
            len: self.slides.len(),
        }
    }

    pub fn next(&mut self) {
        let len = self.slides.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        debug!(index = self.current_index, "next slide");
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
        debug!(index = self.current_index, "previous slide");
    }

    /// Jump straight to `index`. An empty carousel ignores the request.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.slides.len();
        if len == 0 {
            return Ok(());
        }
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        self.current_index = index;
        debug!(index, "go to slide");
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.arm_timer();
        } else {
            self.timer = None;
        }
        debug!(
            playing = self.is_playing,
            timer_armed = self.timer.is_some(),
            "toggled autoplay"
        );
    }

    /// Release the timer for good. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if self.timer.take().is_some() {
            debug!("autoplay timer released");
        }
        self.torn_down = true;
    }

    /// Feed elapsed frame time to the autoplay timer. Advances at most one
    /// slide per call, however long the frame was; returns whether it did.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let fired = self.timer.as_mut().is_some_and(|timer| timer.advance(dt));
        if fired {
            self.next();
            debug!(index = self.current_index, "autoplay advanced");
        }
        fired
    }

    pub fn apply(&mut self, command: Command) -> Result<(), CarouselError> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoTo(index) => self.go_to(index)?,
            Command::TogglePlayPause => self.toggle_play_pause(),
            Command::Teardown => self.teardown(),
        }
        Ok(())
    }

    // A fresh timer restarts the phase at zero
    fn arm_timer(&mut self) {
        if self.is_playing && !self.torn_down && self.slides.len() > 1 {
            self.timer = Some(AutoplayTimer::new(self.interval));
        }
    }
}
