use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Width of the viewer window
pub const RENDER_HEIGHT: i32 = 720;           // Height of the viewer window
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const ANIMATION_DURATION: f32 = 0.5;      // Duration of the slide-in animation (seconds)
pub const CAPTION_DELAY: f32 = 0.2;           // Caption fades in after the card (seconds)
pub const SLIDE_IN_OFFSET: f32 = 100.0;       // Horizontal distance the card slides in from (pixels)

pub const MAX_INDEX_KEYS: usize = 9;          // Keys 1..9 jump straight to a slide
