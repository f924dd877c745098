//! Drawing instructions for one watch-face frame.
//!
//! [`compose`] is the pure half of the display: it turns metric state,
//! goals, viewport and time of day into a fixed-capacity list of
//! [`DrawCommand`]s. Executing the list is the job of
//! [`render::draw_frame`](crate::render::draw_frame), so everything about
//! what appears where can be tested without a display.
//!
//! # Draw order
//!
//! 1. Background fill
//! 2. Background ring (track)
//! 3. Progress arcs (steps, calories)
//! 4. Center stack: value and unit caption per metric
//! 5. Time label (straight or curved)

use core::f32::consts::PI;
use core::fmt::Write;

use chrono::{NaiveTime, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use heapless::{String, Vec};
use micromath::F32Ext;

use crate::colors::VITALSENSE_PALETTE;
use crate::config::{METRIC_SPACER_DP, TIME_TEXT_SP, UNIT_TEXT_SP, VALUE_TEXT_SP};
use crate::layout::{ArcSpec, RadialLayout, TimePlacement, Viewport};
use crate::metrics::{Goals, MetricKind, MetricState};
use crate::styles::font_for;

/// Upper bound on commands in a frame.
///
/// Fill + ring + 2 arcs + 6 stack labels + up to 5 time glyphs = 15.
pub const FRAME_CAPACITY: usize = 24;

/// Short text owned by a draw command.
pub type Label = String<12>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// Metric value, bold.
    Value,
    /// Caption under a value.
    Unit,
    Time,
}

/// Which point of the text box `position` refers to (always centered horizontally).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Top,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target.
    Fill(Rgb565),
    /// Full circle outline.
    Ring {
        center: Point,
        diameter: u32,
        stroke_width: u32,
        color: Rgb565,
    },
    /// Progress arc with round caps.
    Arc {
        center: Point,
        diameter: u32,
        stroke_width: u32,
        spec: ArcSpec,
    },
    Text {
        text: Label,
        position: Point,
        role: TextRole,
        size_px: u32,
        anchor: TextAnchor,
        color: Rgb565,
    },
}

/// Bounded list of draw commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    commands: Vec<DrawCommand, FRAME_CAPACITY>,
}

impl Frame {
    pub const fn new() -> Self { Self { commands: Vec::new() } }

    fn push(
        &mut self,
        command: DrawCommand,
    ) {
        // Capacity covers the worst case; anything beyond it is dropped
        self.commands.push(command).ok();
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSpec> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Arc { spec, .. } => Some(spec),
            _ => None,
        })
    }

    /// Text of every text command with the given role, in draw order.
    pub fn texts(
        &self,
        role: TextRole,
    ) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Text { text, role: r, .. } if *r == role => Some(text.as_str()),
            _ => None,
        })
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Build the frame for the current state.
pub fn compose(
    state: &MetricState,
    goals: &Goals,
    viewport: &Viewport,
    time: NaiveTime,
) -> Frame {
    let mut frame = Frame::new();
    frame.push(DrawCommand::Fill(VITALSENSE_PALETTE.background));

    let layout = RadialLayout::new(viewport);
    if !layout.has_ring() {
        return frame;
    }

    frame.push(DrawCommand::Ring {
        center: layout.center,
        diameter: layout.ring_diameter(),
        stroke_width: layout.stroke_width,
        color: VITALSENSE_PALETTE.track,
    });

    for kind in MetricKind::ALL {
        if let Some(spec) = ArcSpec::for_metric(kind, goals.progress(state, kind)) {
            frame.push(DrawCommand::Arc {
                center: layout.center,
                diameter: layout.ring_diameter(),
                stroke_width: layout.stroke_width,
                spec,
            });
        }
    }

    push_metric_stack(&mut frame, state, viewport, &layout);
    push_time_label(&mut frame, viewport, &layout, time);
    frame
}

fn sp_to_px(
    viewport: &Viewport,
    sp: f32,
) -> u32 {
    (viewport.px(sp).round() as u32).max(1)
}

fn text(value: core::fmt::Arguments<'_>) -> Label {
    let mut label = Label::new();
    let _ = label.write_fmt(value);
    label
}

/// Value/caption pairs stacked and centered on the ring.
fn push_metric_stack(
    frame: &mut Frame,
    state: &MetricState,
    viewport: &Viewport,
    layout: &RadialLayout,
) {
    let value_px = sp_to_px(viewport, VALUE_TEXT_SP);
    let unit_px = sp_to_px(viewport, UNIT_TEXT_SP);
    let value_h = font_for(TextRole::Value, value_px).character_size.height as i32;
    let unit_h = font_for(TextRole::Unit, unit_px).character_size.height as i32;
    let spacer = viewport.px(METRIC_SPACER_DP).round() as i32;

    let groups = MetricKind::ALL.len() as i32;
    let total_h = groups * (value_h + unit_h) + (groups - 1) * spacer;
    let mut y = layout.center.y - total_h / 2;

    for (i, kind) in MetricKind::ALL.into_iter().enumerate() {
        if i > 0 {
            y += spacer;
        }
        frame.push(DrawCommand::Text {
            text: text(format_args!("{}", state.get(kind))),
            position: Point::new(layout.center.x, y),
            role: TextRole::Value,
            size_px: value_px,
            anchor: TextAnchor::Top,
            color: VITALSENSE_PALETTE.on_background,
        });
        y += value_h;

        frame.push(DrawCommand::Text {
            text: text(format_args!("{}", kind.unit_label())),
            position: Point::new(layout.center.x, y),
            role: TextRole::Unit,
            size_px: unit_px,
            anchor: TextAnchor::Top,
            color: kind.accent(),
        });
        y += unit_h;
    }
}

/// `HH:MM`, straight on square screens and following the bezel on round ones.
fn push_time_label(
    frame: &mut Frame,
    viewport: &Viewport,
    layout: &RadialLayout,
    time: NaiveTime,
) {
    let size_px = sp_to_px(viewport, TIME_TEXT_SP);
    let label = text(format_args!("{:02}:{:02}", time.hour(), time.minute()));
    let color = VITALSENSE_PALETTE.on_background;

    match layout.time_placement() {
        TimePlacement::TopCenter { top_px } => {
            frame.push(DrawCommand::Text {
                text: label,
                position: Point::new(layout.center.x, top_px.round() as i32),
                role: TextRole::Time,
                size_px,
                anchor: TextAnchor::Top,
                color,
            });
        }
        TimePlacement::Curved { edge_inset_px } => {
            let font = font_for(TextRole::Time, size_px);
            let glyph_h = font.character_size.height as f32;
            let advance = (font.character_size.width + font.character_spacing) as f32;
            let radius = layout.bezel_radius() - edge_inset_px - glyph_h / 2.0;
            let positions = curved_positions(layout.center, radius, advance, label.len());

            for (ch, position) in label.chars().zip(positions) {
                frame.push(DrawCommand::Text {
                    text: text(format_args!("{ch}")),
                    position,
                    role: TextRole::Time,
                    size_px,
                    anchor: TextAnchor::Middle,
                    color,
                });
            }
        }
    }
}

/// Glyph centers spread along the top of a circle, centered on 12 o'clock.
pub fn curved_positions(
    center: Point,
    radius: f32,
    advance: f32,
    count: usize,
) -> Vec<Point, 8> {
    let mut points = Vec::new();
    if radius <= 0.0 || count == 0 {
        return points;
    }
    let step = advance / radius;
    let mid = (count as f32 - 1.0) / 2.0;
    for i in 0..count.min(8) {
        let angle = -PI / 2.0 + (i as f32 - mid) * step;
        let point = Point::new(
            center.x + (radius * angle.cos()).round() as i32,
            center.y + (radius * angle.sin()).round() as i32,
        );
        points.push(point).ok();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_BLUE, LIGHT_BLUE, ORANGE, TEAL, TRACK, WHITE};

    fn time(
        h: u32,
        m: u32,
    ) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn initial_frame(viewport: &Viewport) -> Frame {
        compose(&MetricState::initial(), &Goals::DEFAULT, viewport, time(9, 5))
    }

    #[test]
    fn test_frame_starts_with_background() {
        let frame = initial_frame(&Viewport::SQUARE_PREVIEW);
        assert_eq!(frame.commands()[0], DrawCommand::Fill(DARK_BLUE));
        assert!(matches!(frame.commands()[1], DrawCommand::Ring { color, .. } if color == TRACK));
    }

    #[test]
    fn test_only_steps_and_calories_arcs() {
        let frame = initial_frame(&Viewport::SQUARE_PREVIEW);
        let arcs: Vec<ArcSpec, 4> = frame.arcs().copied().collect();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].metric, MetricKind::Steps);
        assert_eq!(arcs[0].color, TEAL);
        assert_eq!(arcs[1].metric, MetricKind::Calories);
        assert_eq!(arcs[1].color, ORANGE);
    }

    #[test]
    fn test_stack_values_and_units_in_order() {
        let frame = initial_frame(&Viewport::SQUARE_PREVIEW);
        let values: Vec<&str, 4> = frame.texts(TextRole::Value).collect();
        let units: Vec<&str, 4> = frame.texts(TextRole::Unit).collect();
        assert_eq!(values.as_slice(), ["149", "65", "79"]);
        assert_eq!(units.as_slice(), ["Steps", "BPM", "Calories"]);
    }

    #[test]
    fn test_stack_colors() {
        let frame = initial_frame(&Viewport::SQUARE_PREVIEW);
        for command in frame.commands() {
            if let DrawCommand::Text { role, color, text, .. } = command {
                match role {
                    TextRole::Value | TextRole::Time => assert_eq!(*color, WHITE),
                    TextRole::Unit => {
                        let expected = match text.as_str() {
                            "Steps" => TEAL,
                            "BPM" => LIGHT_BLUE,
                            _ => ORANGE,
                        };
                        assert_eq!(*color, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_stack_is_vertically_centered() {
        let viewport = Viewport::SQUARE_PREVIEW;
        let frame = initial_frame(&viewport);
        let ys: Vec<i32, 8> = frame
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { role: TextRole::Value | TextRole::Unit, position, .. } => Some(position.y),
                _ => None,
            })
            .collect();
        let top = ys[0];
        let bottom = ys[ys.len() - 1];
        let center = RadialLayout::new(&viewport).center.y;
        // First row sits above the center, last caption below it
        assert!(top < center && bottom > center);
        assert!(ys.windows(2).all(|w| w[0] < w[1]), "rows should go downward");
    }

    #[test]
    fn test_square_time_label_is_one_text() {
        let frame = initial_frame(&Viewport::SQUARE_PREVIEW);
        let times: Vec<&str, 8> = frame.texts(TextRole::Time).collect();
        assert_eq!(times.as_slice(), ["09:05"]);
    }

    #[test]
    fn test_round_time_label_is_curved_glyphs() {
        let viewport = Viewport::new(200, 190, 1.0).unwrap();
        let frame = initial_frame(&viewport);
        let glyphs: Vec<&str, 8> = frame.texts(TextRole::Time).collect();
        assert_eq!(glyphs.as_slice(), ["0", "9", ":", "0", "5"]);
        let anchors_middle = frame.commands().iter().all(|c| match c {
            DrawCommand::Text { role: TextRole::Time, anchor, .. } => *anchor == TextAnchor::Middle,
            _ => true,
        });
        assert!(anchors_middle);
    }

    #[test]
    fn test_degenerate_viewport_only_fills() {
        let viewport = Viewport::new(30, 30, 1.0).unwrap();
        let frame = initial_frame(&viewport);
        assert_eq!(frame.commands().len(), 1);
        assert_eq!(frame.commands()[0], DrawCommand::Fill(DARK_BLUE));
    }

    #[test]
    fn test_full_progress_arcs() {
        let goals = Goals::new(150, 200, 80).unwrap();
        let state = MetricState {
            steps: 170,
            heart_rate: 70,
            calories: 90,
        };
        let frame = compose(&state, &goals, &Viewport::SQUARE_PREVIEW, time(0, 0));
        let sweeps: Vec<f32, 4> = frame.arcs().map(|a| a.sweep_angle).collect();
        assert_eq!(sweeps.as_slice(), [120.0, 60.0]);
    }

    #[test]
    fn test_frame_fits_capacity() {
        let viewport = Viewport::new(300, 280, 2.0).unwrap();
        let frame = initial_frame(&viewport);
        // fill + ring + 2 arcs + 6 stack + 5 glyphs
        assert_eq!(frame.commands().len(), 15);
    }

    #[test]
    fn test_curved_positions_symmetric_about_top() {
        let center = Point::new(100, 100);
        let points = curved_positions(center, 80.0, 8.0, 5);
        assert_eq!(points.len(), 5);
        // Middle glyph at 12 o'clock
        assert_eq!(points[2], Point::new(100, 20));
        // Outer glyphs mirror each other
        assert_eq!(points[0].x - center.x, center.x - points[4].x);
        assert_eq!(points[0].y, points[4].y);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_curved_positions_empty_for_bad_radius() {
        assert!(curved_positions(Point::zero(), 0.0, 8.0, 5).is_empty());
        assert!(curved_positions(Point::zero(), 50.0, 8.0, 0).is_empty());
    }
}
