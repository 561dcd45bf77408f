use glide_ui::Px;
use smallvec::SmallVec;

/// Tolerance used when counting how many whole steps fit in the range.
const STEP_EPSILON: f32 = 1e-4;

/// The value domain of a slider: bounds plus optional step quantization.
///
/// Every conversion here is pure. Geometry is passed in explicitly so the
/// mapping can be exercised without a mounted widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f32,
    /// Upper bound, strictly greater than `min`.
    pub max: f32,
    /// Quantization step, `0.0` for a continuous slider.
    pub step: f32,
}

impl ValueRange {
    /// Creates a range. Callers validate `min < max` and `step >= 0` first.
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// `max - min`.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Highest value a stepped slider can hold. When the range is not an
    /// exact multiple of the step this is the last step below `max`.
    pub fn upper_limit(&self) -> f32 {
        if self.step <= 0.0 {
            return self.max;
        }
        let whole_steps = (self.span() / self.step + STEP_EPSILON).floor();
        (self.min + whole_steps * self.step).min(self.max)
    }

    /// Clamps into the bounds. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Rounds to the nearest step (if any) and clamps.
    pub fn snap(&self, value: f32) -> f32 {
        let value = self.clamp(value);
        if self.step <= 0.0 {
            return value;
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.upper_limit())
    }

    /// Normalized position of `value` along the range.
    pub fn ratio_from_value(&self, value: f32) -> f32 {
        (value - self.min) / self.span()
    }

    /// Thumb offset from the container's left edge for `value`.
    pub fn thumb_left_from_value(&self, value: f32, container_width: Px, thumb_width: Px) -> Px {
        Px(self.ratio_from_value(value) * (container_width - thumb_width).0)
    }

    /// Value for a drag that moved the thumb by `dx` from `previous_left`.
    ///
    /// Returns `None` when the usable track length is not positive or the
    /// inputs are not finite, so callers keep whatever value they had.
    pub fn value_from_gesture(
        &self,
        previous_left: Px,
        dx: Px,
        track_width: Px,
        thumb_width: Px,
    ) -> Option<f32> {
        let length = (track_width - thumb_width).0;
        if length <= 0.0 || !length.is_finite() {
            return None;
        }
        let thumb_left = (previous_left + dx).0;
        let raw = self.min + (thumb_left / length) * self.span();
        if !raw.is_finite() {
            return None;
        }
        Some(self.snap(raw))
    }

    /// Evenly spaced tick values from `min` to `max` inclusive.
    ///
    /// A single tick has no spacing and yields `[min]`.
    pub fn tick_values(&self, label_count: usize) -> SmallVec<[f32; 8]> {
        match label_count {
            0 => SmallVec::new(),
            1 => smallvec::smallvec![self.min],
            n => {
                let spacing = self.span() / (n - 1) as f32;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.max
                        } else {
                            self.min + i as f32 * spacing
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERCENT: ValueRange = ValueRange::new(0.0, 100.0, 0.0);

    #[test]
    fn ratio_and_thumb_left() {
        assert_eq!(PERCENT.ratio_from_value(25.0), 0.25);
        assert_eq!(
            PERCENT.thumb_left_from_value(50.0, Px(300.0), Px(16.0)),
            Px(142.0)
        );
    }

    #[test]
    fn continuous_drag_maps_half_track_to_half_range() {
        let value = PERCENT.value_from_gesture(Px(0.0), Px(142.0), Px(300.0), Px(16.0));
        assert_eq!(value, Some(50.0));
    }

    #[test]
    fn stepped_drag_snaps_to_nearest_step() {
        let stepped = ValueRange::new(0.0, 100.0, 10.0);
        // 53% of the usable 284px track.
        let value = stepped.value_from_gesture(Px(0.0), Px(150.52), Px(300.0), Px(16.0));
        assert_eq!(value, Some(50.0));
    }

    #[test]
    fn gesture_past_either_end_is_clamped() {
        assert_eq!(
            PERCENT.value_from_gesture(Px(100.0), Px(-400.0), Px(300.0), Px(16.0)),
            Some(0.0)
        );
        assert_eq!(
            PERCENT.value_from_gesture(Px(100.0), Px(400.0), Px(300.0), Px(16.0)),
            Some(100.0)
        );
    }

    #[test]
    fn degenerate_track_yields_no_value() {
        assert_eq!(
            PERCENT.value_from_gesture(Px(0.0), Px(10.0), Px(16.0), Px(16.0)),
            None
        );
        assert_eq!(
            PERCENT.value_from_gesture(Px(0.0), Px(10.0), Px(0.0), Px(0.0)),
            None
        );
        assert_eq!(
            PERCENT.value_from_gesture(Px(0.0), Px(f32::NAN), Px(300.0), Px(16.0)),
            None
        );
    }

    #[test]
    fn snap_honors_offset_minimum() {
        let range = ValueRange::new(5.0, 50.0, 10.0);
        assert_eq!(range.snap(13.0), 15.0);
        assert_eq!(range.snap(9.0), 5.0);
        // 50 is not reachable in steps of 10 from 5.
        assert_eq!(range.upper_limit(), 45.0);
        assert_eq!(range.snap(50.0), 45.0);
    }

    #[test]
    fn fractional_steps_reach_the_maximum() {
        let range = ValueRange::new(0.0, 1.0, 0.1);
        assert!((range.upper_limit() - 1.0).abs() < 1e-6);
        assert!((range.snap(0.97) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_maps_nan_to_minimum() {
        assert_eq!(PERCENT.clamp(f32::NAN), 0.0);
        assert_eq!(PERCENT.clamp(f32::INFINITY), 100.0);
    }

    #[test]
    fn tick_values_are_evenly_spaced() {
        assert_eq!(
            PERCENT.tick_values(5).as_slice(),
            &[0.0, 25.0, 50.0, 75.0, 100.0]
        );
        assert!(PERCENT.tick_values(0).is_empty());
        let offset = ValueRange::new(10.0, 20.0, 0.0);
        assert_eq!(offset.tick_values(3).as_slice(), &[10.0, 15.0, 20.0]);
    }
}
