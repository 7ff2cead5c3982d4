//! Autoplay timing of the carousel controller
//!
//! These tests verify that:
//! - the timer advances one slide per interval and wraps
//! - manual navigation keeps the timer phase
//! - pause, resume and teardown acquire and release the timer correctly
//! - nothing advances after the timer is released

use std::time::Duration;
use storyloft::{Carousel, Command, catalog};

const INTERVAL: Duration = Duration::from_secs(5);

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn abc() -> Carousel<&'static str> {
    Carousel::new(vec!["A", "B", "C"], INTERVAL)
}

#[test]
fn test_advances_every_interval_and_wraps() {
    let mut carousel = abc();

    assert!(!carousel.tick(secs(4)));
    assert_eq!(carousel.current_index(), Some(0));

    assert!(carousel.tick(secs(1)));
    assert_eq!(carousel.current_slide(), Some(&"B"));

    assert!(carousel.tick(secs(5)));
    assert!(carousel.tick(secs(5)));
    assert_eq!(carousel.current_index(), Some(0), "last slide wraps to the first");
}

#[test]
fn test_long_frame_advances_only_once() {
    let mut carousel = abc();
    assert!(carousel.tick(secs(16)), "a stalled frame still advances");
    assert_eq!(carousel.current_index(), Some(1), "missed firings are not replayed");
    // 16s into a 5s interval leaves the phase at 1s
    assert_eq!(carousel.time_until_advance(), Some(secs(4)));
    assert!(!carousel.tick(secs(3)));
    assert!(carousel.tick(secs(1)));
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_manual_navigation_keeps_timer_phase() {
    let mut carousel = abc();
    carousel.tick(secs(3));

    carousel.next();
    carousel.apply(Command::GoTo(2)).unwrap();
    assert_eq!(carousel.time_until_advance(), Some(secs(2)));

    // Still fires at the originally scheduled time
    assert!(carousel.tick(secs(2)));
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_pause_stops_advancing() {
    let mut carousel = abc();
    carousel.toggle_play_pause();

    assert!(!carousel.is_playing());
    assert!(!carousel.is_timer_armed());
    assert!(!carousel.tick(secs(60)));
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_resume_restarts_phase() {
    let mut carousel = abc();
    carousel.tick(secs(4));
    carousel.toggle_play_pause();
    carousel.toggle_play_pause();

    assert!(carousel.is_playing());
    assert_eq!(carousel.time_until_advance(), Some(INTERVAL));
    assert!(!carousel.tick(secs(1)), "old phase must not carry over");
    assert!(carousel.tick(secs(4)));
}

#[test]
fn test_double_toggle_holds_single_timer() {
    let mut carousel = abc();
    let before = carousel.is_playing();

    carousel.toggle_play_pause();
    assert!(!carousel.is_timer_armed());
    carousel.toggle_play_pause();

    assert_eq!(carousel.is_playing(), before);
    assert!(carousel.is_timer_armed());
    // One timer means one advance per interval, never two
    assert!(carousel.tick(INTERVAL));
    assert_eq!(carousel.current_index(), Some(1));
}

#[test]
fn test_no_advance_after_teardown() {
    let mut carousel = abc();
    carousel.tick(secs(4));
    carousel.teardown();

    assert!(!carousel.is_timer_armed());
    assert!(!carousel.tick(secs(1)), "the scheduled firing must not land");
    assert!(!carousel.tick(secs(30)));
    assert_eq!(carousel.current_index(), Some(0));
}

#[test]
fn test_teardown_is_idempotent() {
    let mut carousel = abc();
    carousel.teardown();
    carousel.teardown();
    carousel.apply(Command::Teardown).unwrap();
    assert!(carousel.is_torn_down());
}

#[test]
fn test_resume_after_teardown_does_not_rearm() {
    let mut carousel = abc();
    carousel.toggle_play_pause();
    carousel.teardown();
    carousel.toggle_play_pause();

    assert!(carousel.is_playing());
    assert!(!carousel.is_timer_armed());
    assert!(!carousel.tick(secs(30)));
}

#[test]
fn test_navigation_still_works_after_teardown() {
    let mut carousel = abc();
    carousel.teardown();
    carousel.next();
    carousel.previous();
    carousel.previous();
    assert_eq!(carousel.current_index(), Some(2));
}

#[test]
fn test_single_and_empty_collections_never_arm() {
    let mut one = Carousel::new(vec!["A"], INTERVAL);
    assert!(one.is_playing());
    assert!(!one.is_timer_armed());
    assert!(!one.tick(secs(60)));

    let mut none: Carousel<&str> = Carousel::new(Vec::new(), INTERVAL);
    assert!(!none.is_timer_armed());
    assert!(!none.tick(secs(60)));
    assert_eq!(none.current_index(), None);
}

#[test]
fn test_featured_catalog_cycles_in_twenty_seconds() {
    let mut carousel = Carousel::with_default_interval(catalog::featured());
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(carousel.current_slide().map(|n| n.id));
        carousel.tick(secs(5));
    }
    assert_eq!(seen, [Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(carousel.current_index(), Some(0));
}
