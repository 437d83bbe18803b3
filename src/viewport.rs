//! Normalized viewport state over the time axis
//!
//! A [`Viewport`] is the fraction of the recording currently visible:
//! `offset` is how much of the time range is skipped before the window
//! starts, `zoom` is how much of it the window spans. Both live in
//! normalized [0, 1] space; the invariant `offset >= 0 && offset + zoom <= 1`
//! holds after every transition and is enforced by clamping, never by
//! rejecting a transition.
//!
//! User gestures map onto four transitions:
//!
//! - [`zoom_in_center`](Viewport::zoom_in_center) - one zoom increment around
//!   the window center (keyboard/button zoom)
//! - [`zoom_in_selection`](Viewport::zoom_in_selection) - zoom to a selection
//!   rectangle's span, given as fractions of the current window
//! - [`zoom_out`](Viewport::zoom_out) - one zoom decrement, re-clamped at the
//!   data bounds
//! - [`pan`](Viewport::pan) - scrollbar jump to an absolute offset fraction
//!
//! Reaching a floor or passing an out-of-range pan fraction silently keeps
//! the last valid state; only malformed selection fractions are caller bugs
//! and fail fast.

/// Granularity of one zoom increment or decrement
pub const MIN_ZOOM_STEP: f64 = 0.05;

/// Tolerance for boundary comparisons on accumulated float steps
const BOUND_EPSILON: f64 = 1e-9;

/// Offset/zoom window over the normalized time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Fraction of the time range skipped before the visible window
    offset: f64,
    /// Fraction of the time range the visible window spans
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::full()
    }
}

impl Viewport {
    /// Create a viewport with an explicit initial offset and zoom
    ///
    /// The pair must already satisfy the viewport invariant; a bad initial
    /// state is a caller bug.
    pub fn new(offset: f64, zoom: f64) -> Self {
        assert!(offset >= 0.0, "offset must be non-negative");
        assert!(zoom > 0.0 && zoom <= 1.0, "zoom must be in (0, 1]");
        assert!(
            offset + zoom <= 1.0 + BOUND_EPSILON,
            "offset + zoom must not exceed 1"
        );
        Self { offset, zoom }
    }

    /// The full-view state: nothing skipped, everything visible
    pub fn full() -> Self {
        Self {
            offset: 0.0,
            zoom: 1.0,
        }
    }

    /// Fraction of the time range skipped before the visible window
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Fraction of the time range the visible window spans
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom in one step around the center of the current window
    ///
    /// No-op once the window is at the zoom floor of `2 * MIN_ZOOM_STEP`.
    pub fn zoom_in_center(&mut self) {
        if self.zoom > 2.0 * MIN_ZOOM_STEP + BOUND_EPSILON {
            self.zoom -= MIN_ZOOM_STEP;
            self.offset += MIN_ZOOM_STEP / 2.0;
        }
        self.debug_check();
    }

    /// Zoom in to a selected span of the current window
    ///
    /// `start_frac` is where the selection starts within the window and
    /// `length_frac` how much of the window it covers, both in [0, 1] with
    /// `start_frac + length_frac <= 1`. Selections narrower than
    /// `MIN_ZOOM_STEP / 100` of the time range are ignored so the window can
    /// never collapse to zero width.
    pub fn zoom_in_selection(&mut self, start_frac: f64, length_frac: f64) {
        assert!(
            (0.0..=1.0).contains(&start_frac) && (0.0..=1.0).contains(&length_frac),
            "selection fractions exceed the [0, 1] range"
        );
        assert!(
            start_frac + length_frac <= 1.0 + BOUND_EPSILON,
            "selection reaches past the visible window"
        );

        if self.zoom * length_frac > MIN_ZOOM_STEP / 100.0 {
            self.offset += self.zoom * start_frac;
            self.zoom *= length_frac;
        }
        self.debug_check();
    }

    /// Zoom out one step, clamping at the data bounds
    ///
    /// No-op at full view. The three clamps run in this exact order; the
    /// third depends on the outcome of the first two (when `zoom` overshoots
    /// 1, the earlier clamps have already forced `offset` to 0).
    pub fn zoom_out(&mut self) {
        if self.zoom < 1.0 {
            self.zoom += MIN_ZOOM_STEP;
            self.offset -= MIN_ZOOM_STEP / 2.0;

            if self.offset + self.zoom > 1.0 {
                self.offset -= self.offset + self.zoom - 1.0;
            }
            if self.offset < 0.0 {
                self.zoom += -self.offset;
                self.offset = 0.0;
            }
            if self.zoom > 1.0 {
                if self.offset - (self.zoom - 1.0) >= 0.0 {
                    self.offset -= self.zoom - 1.0;
                    self.zoom = 1.0;
                } else {
                    self.zoom = 1.0;
                    self.offset = 0.0;
                }
            }
            // At full zoom the invariant pins the offset to 0, but the step
            // sum can land on zoom == 1 exactly while a sub-epsilon offset
            // survives the first clamp. Snap it so repeated zoom-out ends at
            // precisely (0, 1).
            if self.zoom == 1.0 {
                self.offset = 0.0;
            }
        }
        self.debug_check();
    }

    /// Jump the window start to an absolute offset fraction
    ///
    /// Out-of-range fractions are ignored; in-range fractions are clamped so
    /// the window never reaches past the end of the data.
    pub fn pan(&mut self, fraction: f64) {
        if (0.0..=1.0).contains(&fraction) {
            self.offset = fraction.min(1.0 - self.zoom);
        }
        self.debug_check();
    }

    fn debug_check(&self) {
        debug_assert!(self.offset >= 0.0, "viewport offset went negative");
        debug_assert!(
            self.offset + self.zoom <= 1.0 + BOUND_EPSILON,
            "viewport window reaches past the data"
        );
    }
}
