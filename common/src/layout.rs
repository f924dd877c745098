//! Viewport geometry for the radial display.
//!
//! Geometry is specified in dp and converted once per layout. The ring and
//! arcs sit inside a square component box sized from the smaller screen
//! dimension, so the same numbers work on round and square watches.
//!
//! ```text
//!   screen ─────────────────────────────┐
//!   │   component (min_dim × 0.85)      │
//!   │   ┌───────────────────────────┐   │
//!   │   │ padding 8dp               │   │
//!   │   │   ┌───────────────────┐   │   │
//!   │   │   │  ring inset 16dp  │   │   │
//!   │   │   │     ( ring )      │   │   │
//!   │   │   └───────────────────┘   │   │
//!   │   └───────────────────────────┘   │
//!   └───────────────────────────────────┘
//! ```
//!
//! # Angles
//!
//! 0° points at 3 o'clock and angles grow clockwise, matching
//! embedded-graphics screen coordinates (Y grows downward).

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use micromath::F32Ext;

use crate::config::{
    ARC_WIDTH_DP,
    COMPONENT_PADDING_DP,
    COMPONENT_SCALE,
    MAX_VIEWPORT_PX,
    RING_INSET_DP,
    TIME_TOP_PADDING_ROUND_DP,
    TIME_TOP_PADDING_SQUARE_DP,
};
use crate::error::ConfigError;
use crate::metrics::MetricKind;

// =============================================================================
// Viewport
// =============================================================================

/// Screen size in dp plus the pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width_dp: u32,
    height_dp: u32,
    density: f32,
}

impl Viewport {
    /// 360 × 360 dp square watch at 1 px per dp.
    pub const SQUARE_PREVIEW: Self = Self {
        width_dp: 360,
        height_dp: 360,
        density: 1.0,
    };

    /// Wear OS small round watch: 192 × 192 dp at 2 px per dp.
    pub const ROUND_PREVIEW: Self = Self {
        width_dp: 192,
        height_dp: 192,
        density: 2.0,
    };

    pub fn new(
        width_dp: u32,
        height_dp: u32,
        density: f32,
    ) -> Result<Self, ConfigError> {
        if width_dp == 0 || height_dp == 0 {
            return Err(ConfigError::EmptyViewport {
                width: width_dp,
                height: height_dp,
            });
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::InvalidDensity(density));
        }
        let width_px = width_dp as f32 * density;
        let height_px = height_dp as f32 * density;
        if width_px > MAX_VIEWPORT_PX as f32 || height_px > MAX_VIEWPORT_PX as f32 {
            return Err(ConfigError::ViewportTooLarge {
                width: width_px,
                height: height_px,
                max: MAX_VIEWPORT_PX,
            });
        }
        Ok(Self {
            width_dp,
            height_dp,
            density,
        })
    }

    #[inline]
    pub const fn width_dp(&self) -> u32 { self.width_dp }

    #[inline]
    pub const fn height_dp(&self) -> u32 { self.height_dp }

    #[inline]
    pub const fn density(&self) -> f32 { self.density }

    /// Convert dp (or sp) to pixels.
    #[inline]
    pub fn px(
        &self,
        dp: f32,
    ) -> f32 {
        dp * self.density
    }

    /// Screen size in whole pixels.
    pub fn size_px(&self) -> Size {
        Size::new(
            self.px(self.width_dp as f32).round() as u32,
            self.px(self.height_dp as f32).round() as u32,
        )
    }

    #[inline]
    pub const fn shape(&self) -> DeviceShape { DeviceShape::from_viewport(self) }
}

impl Default for Viewport {
    fn default() -> Self { Self::ROUND_PREVIEW }
}

/// Which time-label treatment the screen gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceShape {
    Square,
    Round,
}

impl DeviceShape {
    /// Equal width and height selects the square treatment.
    pub const fn from_viewport(viewport: &Viewport) -> Self {
        if viewport.width_dp == viewport.height_dp {
            Self::Square
        } else {
            Self::Round
        }
    }
}

/// Where the time label goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimePlacement {
    /// Straight text, top-centered, `top_px` below the top edge.
    TopCenter { top_px: f32 },
    /// Glyphs follow the bezel, `edge_inset_px` inside the screen edge.
    Curved { edge_inset_px: f32 },
}

// =============================================================================
// Radial Layout
// =============================================================================

/// Resolved pixel geometry for one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
    pub shape: DeviceShape,
    pub screen: Size,
    pub center: Point,
    /// Side of the square component box.
    pub component_size: f32,
    /// Radius of the ring's center line.
    pub ring_radius: f32,
    pub stroke_width: u32,
    time_placement: TimePlacement,
}

impl RadialLayout {
    pub fn new(viewport: &Viewport) -> Self {
        let screen = viewport.size_px();
        let center = Point::new((screen.width / 2) as i32, (screen.height / 2) as i32);

        let min_dimension = viewport.px(viewport.width_dp.min(viewport.height_dp) as f32);
        let component_size = min_dimension * COMPONENT_SCALE;
        let content_size = component_size - 2.0 * viewport.px(COMPONENT_PADDING_DP);
        let ring_radius = content_size / 2.0 - viewport.px(RING_INSET_DP);
        let stroke_width = (viewport.px(ARC_WIDTH_DP).round() as u32).max(1);

        let shape = viewport.shape();
        let time_placement = match shape {
            DeviceShape::Square => TimePlacement::TopCenter {
                top_px: viewport.px(TIME_TOP_PADDING_SQUARE_DP),
            },
            DeviceShape::Round => TimePlacement::Curved {
                edge_inset_px: viewport.px(TIME_TOP_PADDING_ROUND_DP),
            },
        };

        Self {
            shape,
            screen,
            center,
            component_size,
            ring_radius,
            stroke_width,
            time_placement,
        }
    }

    /// Whether the ring has any room to be drawn.
    #[inline]
    pub fn has_ring(&self) -> bool { self.ring_radius >= 1.0 }

    /// Diameter of the ring's center line in pixels.
    #[inline]
    pub fn ring_diameter(&self) -> u32 { (self.ring_radius * 2.0).round().max(0.0) as u32 }

    #[inline]
    pub const fn time_placement(&self) -> TimePlacement { self.time_placement }

    /// Radius of the circle inscribed in the screen.
    #[inline]
    pub fn bezel_radius(&self) -> f32 { self.screen.width.min(self.screen.height) as f32 / 2.0 }
}

// =============================================================================
// Arc Specification
// =============================================================================

/// One progress arc, derived from a metric's progress each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub metric: MetricKind,
    pub color: Rgb565,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcSpec {
    /// Sweep is the metric's full arc range scaled by `progress` (clamped
    /// to `[0, 1]`). `None` for metrics without an arc.
    pub fn for_metric(
        metric: MetricKind,
        progress: f32,
    ) -> Option<Self> {
        let (start_angle, range) = metric.arc_range()?;
        Some(Self {
            metric,
            color: metric.accent(),
            start_angle,
            sweep_angle: range * progress.clamp(0.0, 1.0),
        })
    }

    #[inline]
    pub fn end_angle(&self) -> f32 { self.start_angle + self.sweep_angle }
}

/// Point on a circle around `center` at `angle_deg`.
pub fn point_on_circle(
    center: Point,
    radius: f32,
    angle_deg: f32,
) -> Point {
    let rad = angle_deg * (PI / 180.0);
    Point::new(
        center.x + (radius * rad.cos()).round() as i32,
        center.y + (radius * rad.sin()).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{ORANGE, TEAL};
    use crate::metrics::{Goals, MetricState};

    fn approx(
        a: f32,
        b: f32,
        eps: f32,
    ) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_viewport_rejects_empty() {
        assert_eq!(
            Viewport::new(0, 200, 1.0),
            Err(ConfigError::EmptyViewport { width: 0, height: 200 })
        );
        assert!(Viewport::new(200, 0, 1.0).is_err());
    }

    #[test]
    fn test_viewport_rejects_bad_density() {
        assert!(matches!(Viewport::new(200, 200, 0.0), Err(ConfigError::InvalidDensity(_))));
        assert!(matches!(Viewport::new(200, 200, -1.0), Err(ConfigError::InvalidDensity(_))));
        assert!(matches!(Viewport::new(200, 200, f32::NAN), Err(ConfigError::InvalidDensity(_))));
    }

    #[test]
    fn test_viewport_rejects_oversized() {
        assert!(matches!(
            Viewport::new(100_000, 200, 1.0),
            Err(ConfigError::ViewportTooLarge { max: MAX_VIEWPORT_PX, .. })
        ));
        assert!(matches!(Viewport::new(u32::MAX, u32::MAX, 1.0), Err(ConfigError::ViewportTooLarge { .. })));
        // within limit in dp, over it once scaled
        assert!(matches!(Viewport::new(3_000, 3_000, 2.0), Err(ConfigError::ViewportTooLarge { .. })));
        assert!(Viewport::new(MAX_VIEWPORT_PX, MAX_VIEWPORT_PX, 1.0).is_ok());
    }

    #[test]
    fn test_size_px_scales_by_density() {
        assert_eq!(Viewport::ROUND_PREVIEW.size_px(), Size::new(384, 384));
        assert_eq!(Viewport::SQUARE_PREVIEW.size_px(), Size::new(360, 360));
    }

    #[test]
    fn test_shape_square_when_equal() {
        let viewport = Viewport::new(360, 360, 1.0).unwrap();
        assert_eq!(DeviceShape::from_viewport(&viewport), DeviceShape::Square);
    }

    #[test]
    fn test_shape_round_when_unequal() {
        let viewport = Viewport::new(227, 226, 2.0).unwrap();
        assert_eq!(DeviceShape::from_viewport(&viewport), DeviceShape::Round);
    }

    #[test]
    fn test_time_placement_follows_shape() {
        let square = RadialLayout::new(&Viewport::SQUARE_PREVIEW);
        assert_eq!(square.time_placement(), TimePlacement::TopCenter { top_px: 10.0 });

        let round = RadialLayout::new(&Viewport::new(200, 180, 2.0).unwrap());
        assert_eq!(round.time_placement(), TimePlacement::Curved { edge_inset_px: 18.0 });
    }

    #[test]
    fn test_square_preview_geometry() {
        // 360 * 0.85 = 306; minus 2 * 8 padding = 290; 290 / 2 - 16 = 129
        let layout = RadialLayout::new(&Viewport::SQUARE_PREVIEW);
        assert_eq!(layout.center, Point::new(180, 180));
        assert!(approx(layout.component_size, 306.0, 0.01));
        assert!(approx(layout.ring_radius, 129.0, 0.01));
        assert_eq!(layout.ring_diameter(), 258);
        assert_eq!(layout.stroke_width, 12);
    }

    #[test]
    fn test_density_scales_geometry() {
        let layout = RadialLayout::new(&Viewport::ROUND_PREVIEW);
        // 192 dp * 2 = 384 px; 384 * 0.85 = 326.4; - 32 = 294.4; / 2 - 32 = 115.2
        assert!(approx(layout.ring_radius, 115.2, 0.01));
        assert_eq!(layout.stroke_width, 24);
    }

    #[test]
    fn test_uses_smaller_dimension() {
        let layout = RadialLayout::new(&Viewport::new(400, 300, 1.0).unwrap());
        assert!(approx(layout.component_size, 255.0, 0.01));
        assert_eq!(layout.center, Point::new(200, 150));
    }

    #[test]
    fn test_tiny_viewport_has_no_ring() {
        let layout = RadialLayout::new(&Viewport::new(40, 40, 1.0).unwrap());
        assert!(!layout.has_ring());
    }

    #[test]
    fn test_steps_arc_sweep() {
        let goals = Goals::DEFAULT;
        let state = MetricState::initial();
        let arc = ArcSpec::for_metric(MetricKind::Steps, goals.progress(&state, MetricKind::Steps)).unwrap();
        assert_eq!(arc.color, TEAL);
        assert_eq!(arc.start_angle, -60.0);
        assert!(approx(arc.sweep_angle, 1.788, 0.001), "sweep {}", arc.sweep_angle);
    }

    #[test]
    fn test_calories_arc_sweep() {
        let goals = Goals::DEFAULT;
        let state = MetricState::initial();
        let arc = ArcSpec::for_metric(MetricKind::Calories, goals.progress(&state, MetricKind::Calories)).unwrap();
        assert_eq!(arc.color, ORANGE);
        assert_eq!(arc.start_angle, 200.0);
        assert!(approx(arc.sweep_angle, 9.48, 0.001), "sweep {}", arc.sweep_angle);
    }

    #[test]
    fn test_heart_rate_has_no_arc() {
        assert!(ArcSpec::for_metric(MetricKind::HeartRate, 0.325).is_none());
    }

    #[test]
    fn test_full_progress_sweeps_full_range() {
        let arc = ArcSpec::for_metric(MetricKind::Steps, 1.0).unwrap();
        assert_eq!(arc.sweep_angle, 120.0);
        assert_eq!(arc.end_angle(), 60.0);
        let clamped = ArcSpec::for_metric(MetricKind::Calories, 3.0).unwrap();
        assert_eq!(clamped.sweep_angle, 60.0);
    }

    #[test]
    fn test_point_on_circle_cardinal_directions() {
        let c = Point::new(100, 100);
        assert_eq!(point_on_circle(c, 50.0, 0.0), Point::new(150, 100));
        assert_eq!(point_on_circle(c, 50.0, 90.0), Point::new(100, 150));
        assert_eq!(point_on_circle(c, 50.0, -90.0), Point::new(100, 50));
        assert_eq!(point_on_circle(c, 50.0, 180.0), Point::new(50, 100));
    }
}
