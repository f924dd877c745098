// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! VitalSense watch face simulator.
//!
//! Desktop host for the [`vitalsense_common`] watch face. Three simulated
//! health metrics are shown as a radial display:
//! - Steps (teal arc on the right of the ring)
//! - Heart rate (value only, no arc)
//! - Calories (orange arc on the upper left)
//!
//! Metrics take a random-walk step every two seconds. The time of day sits
//! at the top, straight on square screens and curved along the bezel on
//! round ones.
//!
//! # Rendering Strategy
//!
//! The face is recomposed only when something visible changed: a metric
//! tick, a new minute, or a return from the debug page. All other frames
//! skip composition and drawing, which keeps the loop almost idle between
//! ticks. See [`vitalsense_common::render::RenderState`].
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Watch face | On tick / minute change / page switch | Full recompose |
//! | Debug page | Every frame | Full redraw (timings change) |
//! | Splash | Every frame for 1.5 s | Full redraw (animated ring) |
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `Y` | Switch between Watch and Debug page |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys. Closing
//! the window quits.
//!
//! # Command Line
//!
//! ```text
//! watch --preview square --scale 2
//! watch --width 240 --height 200 --density 1.5 --seed 7 --no-splash
//! ```

mod clock;
mod config;
mod pages;
mod profiling;
mod screens;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use config::{Args, FRAME_TIME, SPLASH_DURATION, WINDOW_TITLE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use pages::Page;
use profiling::ProfilingMetrics;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use screens::{draw_debug_page, run_splash_screen};
use vitalsense_common::colors::VITALSENSE_PALETTE;
use vitalsense_common::{Clock, ConfigError, EventLog, WatchFace, draw_frame};

use crate::clock::SystemClock;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("watch: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let viewport = args.viewport()?;
    let goals = args.goals()?;
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut face = WatchFace::new(rng, goals, viewport).with_update_period(args.update_period_ms())?;

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(viewport.size_px());
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    display.clear(VITALSENSE_PALETTE.background).ok();
    window.update(&display);

    // Returns false if user closes window during the splash
    if !args.no_splash && !run_splash_screen(&mut display, &mut window, SPLASH_DURATION) {
        return Ok(());
    }

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let clock = SystemClock::new();
    let mut current_page = Page::default();
    let mut page_just_switched = false;

    let mut metrics = ProfilingMetrics::new();
    let mut event_log = EventLog::new();
    event_log.push_fmt(format_args!(
        "Started {}x{}dp @{}x {:?}",
        viewport.width_dp(),
        viewport.height_dp(),
        viewport.density(),
        viewport.shape()
    ));

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } if !repeat => {
                    if keycode == Keycode::Y {
                        current_page = current_page.toggle();
                        page_just_switched = true;
                        event_log.push_fmt(format_args!("Page: {}", current_page.name()));
                    }
                }
                _ => {}
            }
        }

        if face.update(&clock) {
            let state = face.state();
            event_log.push_fmt(format_args!(
                "Tick {}: {} st {} bpm {} cal",
                face.ticks(),
                state.steps,
                state.heart_rate,
                state.calories
            ));
        }

        // Whatever page was showing, the face must fully redraw when it returns
        if page_just_switched {
            face.mark_display_cleared();
        }

        match current_page {
            Page::Watch => {
                let time = clock.time_of_day();
                if face.needs_redraw(time) {
                    let frame = face.compose(time);
                    draw_frame(&mut display, &frame).ok();
                    metrics.inc_face_redraws();
                } else {
                    metrics.inc_skipped_frames();
                }
                face.end_frame();
            }
            Page::Debug => draw_debug_page(&mut display, &metrics, &face, &event_log),
        }
        page_just_switched = false;

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let render_time = frame_start.elapsed();
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}
