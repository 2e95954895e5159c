use crate::controllers::interactive::data::interaction_limits::{
    InteractionLimits, InteractionLimitsError,
};
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_quality::RenderQuality;
use crate::core::data::surface_dimensions::SurfaceDimensions;
use crate::core::data::view_parameters::ViewParameters;
use crate::core::util::pixel_to_plane::pixel_delta_to_plane;
use log::debug;
use std::time::Instant;

/// An active drag. Only exists between press and release.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionGesture {
    pub start_pixel: Point,
    pub center_at_start: Complex,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Zooming,
}

/// The current view plus the gesture bookkeeping that decides render quality.
///
/// Every mutator is a plain state transition; nothing here renders.
#[derive(Debug, Clone)]
pub struct InteractionState {
    view: ViewParameters,
    initial_view: ViewParameters,
    surface: SurfaceDimensions,
    limits: InteractionLimits,
    drag: Option<InteractionGesture>,
    wheel_in_cycle: bool,
    last_wheel_at: Option<Instant>,
}

impl InteractionState {
    /// Fails when the limits are inconsistent or the starting zoom lies
    /// outside their zoom range.
    pub fn new(
        view: ViewParameters,
        surface: SurfaceDimensions,
        limits: InteractionLimits,
    ) -> Result<Self, InteractionLimitsError> {
        limits.validate()?;
        limits.check_zoom(view.zoom())?;

        Ok(Self {
            view,
            initial_view: view,
            surface,
            limits,
            drag: None,
            wheel_in_cycle: false,
            last_wheel_at: None,
        })
    }

    #[must_use]
    pub fn view(&self) -> ViewParameters {
        self.view
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }

    #[must_use]
    pub fn limits(&self) -> InteractionLimits {
        self.limits
    }

    #[must_use]
    pub fn gesture(&self) -> Option<InteractionGesture> {
        self.drag
    }

    pub fn begin_drag(&mut self, pixel: Point) {
        self.drag = Some(InteractionGesture {
            start_pixel: pixel,
            center_at_start: self.view.center(),
        });
    }

    /// Moves the center so the plane point grabbed at drag start stays under
    /// the pointer. Does nothing without an active drag.
    pub fn update_drag(&mut self, pixel: Point) {
        let Some(gesture) = self.drag else {
            return;
        };

        let delta = pixel_delta_to_plane(
            pixel.x - gesture.start_pixel.x,
            pixel.y - gesture.start_pixel.y,
            self.view.zoom(),
            self.surface,
        );
        self.view.set_center(gesture.center_at_start - delta);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Positive deltas zoom in by one notch, negative deltas zoom out. Any
    /// wheel event, including a zero one, counts as zoom activity.
    pub fn zoom(&mut self, delta: f64, now: Instant) {
        self.wheel_in_cycle = true;
        self.last_wheel_at = Some(now);

        let zoom = self.view.zoom();
        let target = if delta > 0.0 {
            zoom * self.limits.zoom_factor
        } else if delta < 0.0 {
            zoom / self.limits.zoom_factor
        } else {
            return;
        };

        let clamped = target.clamp(self.limits.min_zoom, self.limits.max_zoom);
        if clamped != target {
            debug!("Zoom clamped to {}", clamped);
        }
        self.view.set_zoom(clamped);
    }

    /// Adds `delta` to the iteration budget. The result never drops below
    /// `min_iterations`, and a budget already under it is never raised by a
    /// decrement.
    pub fn adjust_iteration_budget(&mut self, delta: i64) {
        let current = self.view.max_iterations();
        let floor = self.limits.min_iterations.min(current);
        let adjusted = (i64::from(current) + delta).clamp(i64::from(floor), i64::from(u32::MAX));
        let adjusted = adjusted as u32;

        if adjusted != current {
            debug!("Iteration budget {} -> {}", current, adjusted);
        }
        self.view.set_max_iterations(adjusted);
    }

    pub fn reset_view(&mut self) {
        self.view = self.initial_view;
        self.drag = None;
    }

    /// Closes the current poll cycle. Wheel activity from it only keeps
    /// counting through the settle window.
    pub fn finish_poll_cycle(&mut self) {
        self.wheel_in_cycle = false;
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> GesturePhase {
        if self.drag.is_some() {
            GesturePhase::Dragging
        } else if self.is_zooming(now) {
            GesturePhase::Zooming
        } else {
            GesturePhase::Idle
        }
    }

    #[must_use]
    pub fn quality(&self, now: Instant) -> RenderQuality {
        match self.phase(now) {
            GesturePhase::Idle => RenderQuality::Full,
            GesturePhase::Dragging | GesturePhase::Zooming => RenderQuality::Reduced,
        }
    }

    fn is_zooming(&self, now: Instant) -> bool {
        self.wheel_in_cycle
            || self.last_wheel_at.is_some_and(|at| {
                now.saturating_duration_since(at) < self.limits.zoom_settle
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn assert_approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} is not approximately {}", a, b);
    }

    fn state() -> InteractionState {
        InteractionState::new(
            ViewParameters::default(),
            SurfaceDimensions::new(800, 800).unwrap(),
            InteractionLimits::default(),
        )
        .unwrap()
    }

    fn state_without_settle() -> InteractionState {
        InteractionState::new(
            ViewParameters::default(),
            SurfaceDimensions::new(800, 800).unwrap(),
            InteractionLimits {
                zoom_settle: Duration::ZERO,
                ..InteractionLimits::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_drag_forty_pixels_right() {
        let mut state = state();

        state.begin_drag(Point { x: 400, y: 400 });
        state.update_drag(Point { x: 440, y: 400 });

        assert_eq!(state.view().center().real, -0.5 - 40.0 * 4.0 / 800.0);
        assert_approx_eq(state.view().center().real, -0.7);
        assert_eq!(state.view().center().imag, 0.0);
    }

    #[test]
    fn test_drag_is_relative_to_start_snapshot() {
        let mut state = state();

        state.begin_drag(Point { x: 100, y: 100 });
        state.update_drag(Point { x: 180, y: 60 });
        state.update_drag(Point { x: 120, y: 100 });

        assert_eq!(state.view().center().real, -0.5 - 20.0 * 4.0 / 800.0);
        assert_eq!(state.view().center().imag, 0.0);
    }

    #[test]
    fn test_drag_scales_with_zoom() {
        let mut state = state();
        state.zoom(1.0, Instant::now());
        let zoom = state.view().zoom();

        state.begin_drag(Point { x: 0, y: 0 });
        state.update_drag(Point { x: 0, y: 80 });

        assert_approx_eq(state.view().center().imag, -80.0 * 4.0 / zoom / 800.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut state = state();

        state.update_drag(Point { x: 10, y: 10 });

        assert_eq!(state.view(), ViewParameters::default());
    }

    #[test]
    fn test_end_drag_freezes_center() {
        let mut state = state();
        state.begin_drag(Point { x: 0, y: 0 });
        state.update_drag(Point { x: 8, y: 0 });
        state.end_drag();
        let center = state.view().center();

        state.update_drag(Point { x: 400, y: 400 });

        assert_eq!(state.view().center(), center);
        assert_eq!(state.gesture(), None);
    }

    #[test]
    fn test_inverted_zoom_range_is_rejected() {
        let result = InteractionState::new(
            ViewParameters::default(),
            SurfaceDimensions::new(10, 10).unwrap(),
            InteractionLimits {
                min_zoom: 2.0,
                max_zoom: 0.5,
                ..InteractionLimits::default()
            },
        );

        assert!(matches!(
            result,
            Err(InteractionLimitsError::InvalidZoomRange { .. })
        ));
    }

    #[test]
    fn test_starting_zoom_outside_range_is_rejected() {
        let view = ViewParameters::new(Complex::ZERO, 1e20, 100).unwrap();

        let result = InteractionState::new(
            view,
            SurfaceDimensions::new(10, 10).unwrap(),
            InteractionLimits::default(),
        );

        assert!(matches!(
            result,
            Err(InteractionLimitsError::ZoomOutsideRange { .. })
        ));
    }

    #[test]
    fn test_zoom_in_from_max_never_lowers_zoom() {
        let limits = InteractionLimits::default();
        let view = ViewParameters::new(Complex::ZERO, limits.max_zoom, 100).unwrap();
        let mut state =
            InteractionState::new(view, SurfaceDimensions::new(10, 10).unwrap(), limits).unwrap();

        state.zoom(1.0, Instant::now());

        assert_eq!(state.view().zoom(), limits.max_zoom);
    }

    #[test]
    fn test_zoom_in_and_out() {
        let mut state = state();
        let now = Instant::now();

        state.zoom(3.0, now);
        assert_approx_eq(state.view().zoom(), 1.1);

        state.zoom(-1.0, now);
        state.zoom(-1.0, now);
        assert_approx_eq(state.view().zoom(), 1.0 / 1.1);
    }

    #[test]
    fn test_zero_wheel_delta_keeps_zoom_but_counts_as_zooming() {
        let mut state = state_without_settle();
        let now = Instant::now();

        state.zoom(0.0, now);

        assert_eq!(state.view().zoom(), 1.0);
        assert_eq!(state.phase(now), GesturePhase::Zooming);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut state = InteractionState::new(
            ViewParameters::default(),
            SurfaceDimensions::new(10, 10).unwrap(),
            InteractionLimits {
                max_zoom: 1.5,
                ..InteractionLimits::default()
            },
        )
        .unwrap();
        let now = Instant::now();

        for _ in 0..10 {
            state.zoom(1.0, now);
        }

        assert_eq!(state.view().zoom(), 1.5);
    }

    #[test]
    fn test_zooming_is_level_triggered_without_settle_window() {
        let mut state = state_without_settle();
        let now = Instant::now();

        state.zoom(1.0, now);
        assert_eq!(state.quality(now), RenderQuality::Reduced);

        state.finish_poll_cycle();
        assert_eq!(state.phase(now), GesturePhase::Idle);
        assert_eq!(state.quality(now), RenderQuality::Full);
    }

    #[test]
    fn test_zooming_lasts_through_settle_window() {
        let mut state = state();
        let start = Instant::now();

        state.zoom(1.0, start);
        state.finish_poll_cycle();

        assert_eq!(
            state.phase(start + Duration::from_millis(50)),
            GesturePhase::Zooming
        );
        assert_eq!(
            state.phase(start + Duration::from_millis(120)),
            GesturePhase::Idle
        );
    }

    #[test]
    fn test_dragging_reduces_quality_until_release() {
        let mut state = state();
        let now = Instant::now();

        assert_eq!(state.phase(now), GesturePhase::Idle);

        state.begin_drag(Point { x: 1, y: 1 });
        state.finish_poll_cycle();
        assert_eq!(state.phase(now), GesturePhase::Dragging);
        assert_eq!(state.quality(now), RenderQuality::Reduced);

        state.end_drag();
        assert_eq!(state.quality(now), RenderQuality::Full);
    }

    #[test]
    fn test_iteration_budget_steps() {
        let mut state = state();

        state.adjust_iteration_budget(50);
        assert_eq!(state.view().max_iterations(), 150);

        state.adjust_iteration_budget(-50);
        state.adjust_iteration_budget(-50);
        assert_eq!(state.view().max_iterations(), 50);
    }

    #[test]
    fn test_iteration_budget_floor() {
        let mut state = state();

        for _ in 0..5 {
            state.adjust_iteration_budget(-50);
        }

        assert_eq!(state.view().max_iterations(), 50);
    }

    #[test]
    fn test_decrement_never_raises_small_budget() {
        let view = ViewParameters::new(Complex::ZERO, 1.0, 20).unwrap();
        let mut state = InteractionState::new(
            view,
            SurfaceDimensions::new(10, 10).unwrap(),
            InteractionLimits::default(),
        )
        .unwrap();

        state.adjust_iteration_budget(-50);
        assert_eq!(state.view().max_iterations(), 20);

        state.adjust_iteration_budget(50);
        assert_eq!(state.view().max_iterations(), 70);
    }

    #[test]
    fn test_reset_view_restores_startup_view() {
        let mut state = state();
        let now = Instant::now();
        state.zoom(1.0, now);
        state.adjust_iteration_budget(100);
        state.begin_drag(Point { x: 0, y: 0 });
        state.update_drag(Point { x: 30, y: 30 });

        state.reset_view();

        assert_eq!(state.view(), ViewParameters::default());
        assert_eq!(state.gesture(), None);
    }
}
