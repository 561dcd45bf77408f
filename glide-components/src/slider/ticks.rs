use tracing::debug;

use super::Slider;

/// An evenly spaced value label along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position in the tick row, starting at `0`.
    pub index: usize,
    /// The value the tick jumps to.
    pub value: f32,
    /// Label text.
    pub text: String,
    /// Whether the committed value has reached this tick.
    pub reached: bool,
}

/// Formats a value for display: rounded to an integer, optionally with a
/// percent sign.
pub(super) fn value_text(value: f32, percent: bool) -> String {
    let rounded = value.round();
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if percent {
        format!("{rounded}%")
    } else {
        format!("{rounded}")
    }
}

impl Slider {
    /// The tick labels, empty when `label_count` is `0`.
    pub fn ticks(&self) -> Vec<Tick> {
        let committed = self.controller.committed_value();
        self.range
            .tick_values(self.args.label_count)
            .into_iter()
            .enumerate()
            .map(|(index, value)| Tick {
                index,
                value,
                text: value_text(value, self.args.show_percent_symbol),
                reached: committed >= value,
            })
            .collect()
    }

    /// Jumps to the tick at `index` without a drag, firing `on_value_change`
    /// then `on_sliding_complete`.
    ///
    /// The tick value is snapped to the step first. Returns `false` and does
    /// nothing when the slider is disabled, the index is out of range, or
    /// the snapped value lies past the soft ceiling.
    pub fn press_tick(&mut self, index: usize) -> bool {
        if self.args.disabled {
            return false;
        }
        let Some(&tick) = self.range.tick_values(self.args.label_count).get(index) else {
            return false;
        };
        let value = self.range.snap(tick);
        if self.exceeds_ceiling(value) {
            debug!(index, tick, value, "tick past the ceiling ignored");
            return false;
        }
        self.controller.commit(value);
        debug!(index, value, "tick pressed");
        self.args.on_value_change.call(value);
        self.args.on_sliding_complete.call(value);
        true
    }
}
