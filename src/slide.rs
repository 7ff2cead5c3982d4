use raylib::prelude::*;
use crate::catalog::Novel;
use crate::constants::*;

// On-screen card for one novel: cover plus caption
pub struct Slide {
    cover: Option<Texture2D>, // None when the cover failed to load

    title: String,
    byline: String,

    offset_x: f32,
    opacity: f32,
    caption_opacity: f32,

    animation_timer: f32,
    pub is_animating: bool,
}

impl Slide {
    pub fn new(novel: &Novel, cover: Option<Texture2D>) -> Self {
        let byline = if novel.author.is_empty() {
            novel.genre.clone()
        } else {
            format!("by {} | {}", novel.author, novel.genre)
        };
        Self {
            cover,
            title: novel.title.clone(),
            byline,
            offset_x: 0.0,
            opacity: 1.0,
            caption_opacity: 1.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    // Enter from the right, fading in; the caption follows a little later
    pub fn start_slide_in(&mut self) {
        self.offset_x = SLIDE_IN_OFFSET;
        self.opacity = 0.0;
        self.caption_opacity = 0.0;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / ANIMATION_DURATION).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.offset_x = raylib::core::math::lerp(SLIDE_IN_OFFSET, 0.0, eased);
        self.opacity = eased;
        self.caption_opacity = ((self.animation_timer - CAPTION_DELAY) / ANIMATION_DURATION).clamp(0.0, 1.0);

        if self.animation_timer >= ANIMATION_DURATION + CAPTION_DELAY {
            self.is_animating = false;
            self.offset_x = 0.0;
            self.opacity = 1.0;
            self.caption_opacity = 1.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = RENDER_WIDTH as f32;
        let screen_height = RENDER_HEIGHT as f32;
        let tint = fade(Color::WHITE, self.opacity);

        match &self.cover {
            Some(cover) => {
                let tex_width = cover.width() as f32;
                let tex_height = cover.height() as f32;

                // object-contain: fit the whole cover inside the window
                let scale = (screen_width / tex_width).min(screen_height / tex_height);
                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;

                d.draw_texture_pro(
                    cover,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(
                        (screen_width - scaled_width) * 0.5 + self.offset_x,
                        (screen_height - scaled_height) * 0.5,
                        scaled_width,
                        scaled_height,
                    ),
                    Vector2::new(0.0, 0.0),
                    0.0,
                    tint,
                );
            }
            None => {
                // Placeholder card
                d.draw_rectangle(
                    (screen_width * 0.3 + self.offset_x) as i32,
                    (screen_height * 0.1) as i32,
                    (screen_width * 0.4) as i32,
                    (screen_height * 0.8) as i32,
                    fade(Color::DARKGRAY, self.opacity),
                );
            }
        }

        // Caption over a dark strip at the bottom
        let strip_height = 110;
        d.draw_rectangle(0, RENDER_HEIGHT - strip_height, RENDER_WIDTH, strip_height, fade(Color::BLACK, 0.7));
        d.draw_text(&self.title, 24, RENDER_HEIGHT - 96, 36, fade(Color::WHITE, self.caption_opacity));
        d.draw_text(&self.byline, 24, RENDER_HEIGHT - 52, 20, fade(Color::LIGHTGRAY, self.caption_opacity));
    }
}

fn fade(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8)
}
