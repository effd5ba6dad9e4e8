//! Input and Timing Tests
//!
//! Tests for:
//! - Just-pressed edge detection and frame reset
//! - Mapping presses onto dance actions
//! - Frame timer and FPS counter windows

use std::time::{Duration, Instant};

use dancebot::app::input::{Actions, ButtonState, Input, Key, MouseButton};
use dancebot::utils::{FpsCounter, Timer};

// ============================================================================
// Input
// ============================================================================

#[test]
fn key_press_is_down_for_one_frame() {
    let mut input = Input::new();
    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(input.get_key_down(Key::Space));

    input.start_frame();
    assert!(!input.get_key_down(Key::Space));

    // Releasing and pressing again is a fresh edge
    input.inject_key(Key::Space, ButtonState::Released);
    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(input.get_key_down(Key::Space));
}

#[test]
fn key_repeat_does_not_retrigger() {
    let mut input = Input::new();
    input.inject_key(Key::Space, ButtonState::Pressed);
    input.start_frame();
    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(!input.get_key_down(Key::Space));
}

#[test]
fn space_or_left_click_toggles_dance() {
    let mut input = Input::new();
    assert_eq!(input.actions(), Actions::default());

    input.inject_key(Key::Space, ButtonState::Pressed);
    assert!(input.actions().toggle_dance);
    input.start_frame();
    input.inject_key(Key::Space, ButtonState::Released);

    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    assert!(input.actions().toggle_dance);
    input.start_frame();
    assert!(!input.actions().toggle_dance);

    // Still held, so a second press event is not a new click
    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    assert!(!input.get_mouse_button_down(MouseButton::Left));
}

#[test]
fn right_click_does_nothing() {
    let mut input = Input::new();
    input.inject_mouse_button(MouseButton::Right, ButtonState::Pressed);
    assert_eq!(input.actions(), Actions::default());
    assert!(input.get_mouse_button_down(MouseButton::Right));
}

#[test]
fn escape_exits_and_s_spins() {
    let mut input = Input::new();
    input.inject_key(Key::Escape, ButtonState::Pressed);
    input.inject_key(Key::S, ButtonState::Pressed);
    let actions = input.actions();
    assert!(actions.exit);
    assert!(actions.toggle_spin);
    assert!(!actions.toggle_dance);
}

// ============================================================================
// Timing
// ============================================================================

#[test]
fn timer_tracks_elapsed_and_frames() {
    let start = Instant::now();
    let mut timer = Timer::starting_at(start);

    timer.tick_at(start + Duration::from_millis(16));
    timer.tick_at(start + Duration::from_millis(40));

    assert_eq!(timer.elapsed, Duration::from_millis(40));
    assert_eq!(timer.frame_count, 2);
}

#[test]
fn timer_ignores_instants_before_last_tick() {
    let start = Instant::now();
    let mut timer = Timer::starting_at(start);
    timer.tick_at(start + Duration::from_millis(50));
    timer.tick_at(start + Duration::from_millis(10));
    assert_eq!(timer.elapsed, Duration::from_millis(50));
    assert_eq!(timer.frame_count, 2);
}

#[test]
fn fps_counter_reports_once_per_second() {
    let mut fps = FpsCounter::new();
    let frame = Duration::from_millis(20);

    let reports: Vec<f32> = (0..100).filter_map(|_| fps.record(frame)).collect();
    assert_eq!(reports.len(), 2);
    assert!((reports[0] - 50.0).abs() < 0.01);
    assert!((fps.current_fps - 50.0).abs() < 0.01);
}

#[test]
fn fps_counter_is_silent_within_a_window() {
    let mut fps = FpsCounter::new();
    assert!(fps.record(Duration::from_millis(500)).is_none());
    assert!(fps.record(Duration::from_millis(499)).is_none());
    assert!(fps.record(Duration::from_millis(1)).is_some());
}
