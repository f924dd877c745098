//! Drawing routines behind each [`DrawCommand`](crate::frame::DrawCommand).
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same
//! code draws into the desktop simulator window, a hardware framebuffer, or
//! an in-memory buffer in tests. Errors from the target are propagated.

mod primitives;
mod text;

pub use primitives::{draw_progress_arc, draw_ring};
pub use text::draw_label;
