//! Screens drawn by the host outside of the watch face itself.
//!
//! - **Splash** ([`splash`]): app mark and a loading ring, shown once at start
//! - **Debug Page** ([`debug`]): frame timing, simulator stats and the event
//!   log (toggled with `Y` at runtime)
//!
//! Boot screens return `false` if the window is closed while they run, so
//! the application can exit without entering the main loop.

mod debug;
mod splash;

pub use debug::draw_debug_page;
pub use splash::run_splash_screen;
