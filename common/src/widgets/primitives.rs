//! Ring and arc primitives.
//!
//! embedded-graphics arcs end with flat edges. Progress arcs get round caps
//! by stamping a filled circle, one stroke wide, on each end point.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};

use crate::layout::{ArcSpec, point_on_circle};

/// Full circle outline centered on `center`.
pub fn draw_ring<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    stroke_width: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke_width))
        .draw(display)
}

/// Progress arc with round caps. Nothing is drawn for an empty sweep.
pub fn draw_progress_arc<D>(
    display: &mut D,
    center: Point,
    diameter: u32,
    stroke_width: u32,
    spec: &ArcSpec,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if spec.sweep_angle <= 0.0 {
        return Ok(());
    }

    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(spec.start_angle),
        Angle::from_degrees(spec.sweep_angle),
    )
    .into_styled(PrimitiveStyle::with_stroke(spec.color, stroke_width))
    .draw(display)?;

    let radius = diameter as f32 / 2.0;
    let cap_style = PrimitiveStyle::with_fill(spec.color);
    for angle in [spec.start_angle, spec.end_angle()] {
        Circle::with_center(point_on_circle(center, radius, angle), stroke_width)
            .into_styled(cap_style)
            .draw(display)?;
    }
    Ok(())
}
