// SPDX-License-Identifier: MPL-2.0

//! Stagger math: per-action sub-intervals of the shared animation clock.
//!
//! Each action animates over `[0, (index + 1) / count]` of the shared 0→1
//! clock. The first action's window is the narrowest, so it reaches full
//! size soonest; every window ends at a different point but all actions
//! finish together when the clock reaches 1.

/// Easing curve applied to the shared clock before interval remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Applies the curve to a clock value in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// A sub-interval of the shared animation clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    /// Sub-interval for the action at `index` out of `count` actions.
    ///
    /// Windows all start at 0 and end at `(index + 1) / count`, so the upper
    /// bound is strictly increasing in `index` and reaches exactly 1 for the
    /// last action.
    pub fn child(index: usize, count: usize) -> Self {
        debug_assert!(index < count);
        let unit = 1.0 / count as f32;
        Self {
            start: 0.0,
            end: unit * (index + 1) as f32,
        }
    }

    /// Remaps a shared clock value into this interval's own 0→1 progress,
    /// clamping at both ends.
    pub fn remap(self, t: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return if t >= self.end { 1.0 } else { 0.0 };
        }
        ((t - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn child_bounds_increase_and_reach_one() {
        let count = 5;
        let mut previous = 0.0;
        for index in 0..count {
            let interval = Interval::child(index, count);
            assert_eq!(interval.start, 0.0);
            assert!(interval.end > previous);
            previous = interval.end;
        }
        assert!(approx(Interval::child(count - 1, count).end, 1.0));
    }

    #[test]
    fn three_children_match_expected_windows() {
        assert!(approx(Interval::child(0, 3).end, 1.0 / 3.0));
        assert!(approx(Interval::child(1, 3).end, 2.0 / 3.0));
        assert!(approx(Interval::child(2, 3).end, 1.0));
    }

    #[test]
    fn remap_clamps_at_both_ends() {
        let interval = Interval::child(0, 3);
        assert_eq!(interval.remap(-0.5), 0.0);
        assert_eq!(interval.remap(0.0), 0.0);
        assert_eq!(interval.remap(1.0), 1.0);
        // Past the window's end the action is fully revealed even though the
        // shared clock keeps running.
        assert_eq!(interval.remap(0.9), 1.0);
    }

    #[test]
    fn remap_is_linear_inside_the_window() {
        let interval = Interval::child(1, 2);
        assert!(approx(interval.remap(0.5), 0.5));
        assert!(approx(interval.remap(0.25), 0.25));
    }

    #[test]
    fn earlier_children_finish_sooner() {
        let t = 0.4;
        let first = Interval::child(0, 3).remap(t);
        let last = Interval::child(2, 3).remap(t);
        assert!(first >= last);
        assert_eq!(first, 1.0);
    }

    #[test]
    fn easing_preserves_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
        }
    }

    #[test]
    fn lerp_interpolates() {
        assert!(approx(lerp(0.0, 10.0, 0.5), 5.0));
        assert!(approx(lerp(2.0, 4.0, 0.0), 2.0));
        assert!(approx(lerp(2.0, 4.0, 1.0), 4.0));
    }
}
