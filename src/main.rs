use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

use storyloft::config::ViewerArgs;
use storyloft::constants::*;
use storyloft::engine::{drive, read_now};
use storyloft::logging::setup_logging;
use storyloft::slide::Slide;
use storyloft::texture_loader::load_texture_with_exif_rotation;
use storyloft::{Carousel, CarouselState, Command, LogNavigator, LogPresenter};

const INDEX_KEYS: [KeyboardKey; MAX_INDEX_KEYS] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn main() -> Result<()> {
    let args = ViewerArgs::parse();
    setup_logging(args.debug)?;

    let interval = args.interval()?;
    let novels = args.load_slides()?;
    info!("Playing {} slides every {} ms", novels.len(), interval.as_millis());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("StoryLoft")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut cards: Vec<Slide> = Vec::with_capacity(novels.len());
    for novel in &novels {
        let path = args.resolve_image(novel);
        let cover = match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("Showing placeholder for '{}': {:#}", novel.title, e);
                None
            }
        };
        cards.push(Slide::new(novel, cover));
    }

    let mut carousel = Carousel::new(novels, interval);
    if args.paused {
        carousel.toggle_play_pause();
    }
    let mut navigator = LogNavigator::new();
    let mut presenter = LogPresenter::new();
    let mut shown: Option<usize> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // 1. User input
        for command in pressed_commands(&rl) {
            if let Err(e) = carousel.apply(command) {
                warn!("Ignored {:?}: {}", command, e);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            read_now(&carousel, &mut navigator)?;
        }

        // 2. Autoplay
        drive(&mut carousel, &mut presenter, Duration::try_from_secs_f32(dt).unwrap_or_default())?;

        // 3. Restart the slide-in animation whenever the visible slide changes
        if carousel.current_index() != shown {
            shown = carousel.current_index();
            if let Some(card) = shown.and_then(|i| cards.get_mut(i)) {
                card.start_slide_in();
            }
        }
        if let Some(card) = shown.and_then(|i| cards.get_mut(i)) {
            card.update(dt);
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        match shown.and_then(|i| cards.get(i)) {
            Some(card) => card.draw(&mut d),
            None => d.draw_text("No slides loaded.", 20, 20, 20, Color::RED),
        }
        draw_controls(&mut d, &carousel.state());
    }

    carousel.teardown();
    info!("Viewer closed after {} frames", presenter.frames());
    Ok(())
}

fn pressed_commands(rl: &RaylibHandle) -> Vec<Command> {
    let mut commands = Vec::new();
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        commands.push(Command::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        commands.push(Command::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        commands.push(Command::TogglePlayPause);
    }
    for (index, key) in INDEX_KEYS.iter().enumerate() {
        if rl.is_key_pressed(*key) {
            commands.push(Command::GoTo(index));
        }
    }
    commands
}

// Index indicators and the play/pause badge
fn draw_controls(d: &mut RaylibDrawHandle, state: &CarouselState) {
    let dot = 8;
    let gap = 8;
    let active = 16;
    let total_width = state.len as i32 * (dot + gap) + (active - dot);
    let mut x = (RENDER_WIDTH - total_width) / 2;
    let y = RENDER_HEIGHT - 20;
    for i in 0..state.len {
        if state.current_index == Some(i) {
            d.draw_rectangle(x, y, active, dot, Color::WHITE);
            x += active + gap;
        } else {
            d.draw_rectangle(x, y, dot, dot, Color::GRAY);
            x += dot + gap;
        }
    }

    let badge = if state.is_playing { "||" } else { ">" };
    d.draw_circle(RENDER_WIDTH - 36, 36, 20.0, Color::new(0, 0, 0, 128));
    d.draw_text(badge, RENDER_WIDTH - 42, 26, 20, Color::WHITE);
}
