//! Interaction state for the chart screens.
//!
//! Both values are small `Copy` types. Every transition returns a new value
//! so screens can keep their render functions pure over the current state.
use std::time::{Duration, Instant};

/// Opacity applied to marks that are not hovered while something else is.
pub const DIMMED_OPACITY: f32 = 0.4;

/// An animated move of the visible x range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub started: Instant,
    pub duration: Duration,
}

impl Transition {
    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The range at `now`, eased in and out.
    pub fn range_at(&self, now: Instant) -> (f64, f64) {
        let t = ease_in_out_cubic(self.progress(now));
        (lerp(self.from.0, self.to.0, t), lerp(self.from.1, self.to.1, t))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Which of two x ranges a chart shows, and the animation between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    full: (f64, f64),
    zoom: (f64, f64),
    zoomed: bool,
    transition: Option<Transition>,
}

impl ZoomState {
    /// Start zoomed out on `full`.
    pub fn new(full: (f64, f64), zoom: (f64, f64)) -> Self {
        Self {
            full,
            zoom,
            zoomed: false,
            transition: None,
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Tick labels are only drawn once the axis has settled.
    pub fn labels_visible(&self) -> bool {
        !self.is_animating()
    }

    /// The range the chart settles on in its current zoom state.
    pub fn target(&self) -> (f64, f64) {
        if self.zoomed { self.zoom } else { self.full }
    }

    pub fn visible_range(&self, now: Instant) -> (f64, f64) {
        match self.transition {
            Some(transition) => transition.range_at(now),
            None => self.target(),
        }
    }

    /// Flip the zoom, animating from wherever the axis currently is.
    pub fn toggle(self, now: Instant, duration: Duration) -> Self {
        let from = self.visible_range(now);
        let zoomed = !self.zoomed;
        let to = if zoomed { self.zoom } else { self.full };
        let transition = (!duration.is_zero()).then_some(Transition {
            from,
            to,
            started: now,
            duration,
        });
        Self {
            zoomed,
            transition,
            ..self
        }
    }

    /// Drop the transition once it has run its course.
    pub fn advance(self, now: Instant) -> Self {
        match self.transition {
            Some(transition) if transition.is_finished(now) => Self {
                transition: None,
                ..self
            },
            _ => self,
        }
    }
}

/// The hovered mark, identified by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverFocus {
    hovered: Option<i64>,
}

impl HoverFocus {
    pub fn hovered(&self) -> Option<i64> {
        self.hovered
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn focus(self, key: i64) -> Self {
        Self { hovered: Some(key) }
    }

    pub fn clear(self) -> Self {
        Self { hovered: None }
    }

    pub fn set(self, key: Option<i64>) -> Self {
        Self { hovered: key }
    }

    /// Full opacity for the hovered mark, or for all marks when none is hovered.
    pub fn opacity_for(&self, key: i64) -> f32 {
        match self.hovered {
            Some(hovered) if hovered != key => DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: (f64, f64) = (0.0, 1_000.0);
    const ZOOM: (f64, f64) = (750.0, 1_000.0);

    #[test]
    fn toggle_animates_between_ranges() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(800);
        let state = ZoomState::new(FULL, ZOOM).toggle(t0, duration);

        assert!(state.is_zoomed());
        assert!(state.is_animating());
        assert!(!state.labels_visible());
        assert_eq!(state.visible_range(t0), FULL);

        let (lo, hi) = state.visible_range(t0 + Duration::from_millis(400));
        assert!(lo > FULL.0 && lo < ZOOM.0);
        assert_eq!(hi, 1_000.0);

        let settled = state.advance(t0 + duration);
        assert!(!settled.is_animating());
        assert!(settled.labels_visible());
        assert_eq!(settled.visible_range(t0 + duration), ZOOM);
    }

    #[test]
    fn advance_keeps_running_transition() {
        let t0 = Instant::now();
        let state = ZoomState::new(FULL, ZOOM).toggle(t0, Duration::from_millis(800));
        let mid = state.advance(t0 + Duration::from_millis(100));
        assert!(mid.is_animating());
    }

    #[test]
    fn toggle_mid_flight_starts_from_current_range() {
        let t0 = Instant::now();
        let duration = Duration::from_millis(800);
        let zooming_in = ZoomState::new(FULL, ZOOM).toggle(t0, duration);

        let t1 = t0 + Duration::from_millis(400);
        let midway = zooming_in.visible_range(t1);
        let zooming_out = zooming_in.toggle(t1, duration);

        assert!(!zooming_out.is_zoomed());
        assert_eq!(zooming_out.visible_range(t1), midway);
        assert_eq!(zooming_out.advance(t1 + duration).visible_range(t1 + duration), FULL);
    }

    #[test]
    fn zero_duration_jumps() {
        let state = ZoomState::new(FULL, ZOOM).toggle(Instant::now(), Duration::ZERO);
        assert!(!state.is_animating());
        assert_eq!(state.target(), ZOOM);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn hover_dims_everything_else() {
        let idle = HoverFocus::default();
        assert_eq!(idle.opacity_for(1), 1.0);

        let focused = idle.focus(1);
        assert_eq!(focused.opacity_for(1), 1.0);
        assert_eq!(focused.opacity_for(2), DIMMED_OPACITY);
        assert_eq!(focused.clear(), idle);
    }
}
