//! An interactive slider for selecting a value in a range.
//!
//! ## Usage
//!
//! Use to let users pick a value from a continuous or stepped range, with
//! optional evenly spaced tick labels that jump straight to their value.
//!
//! The slider is headless. The host reports layout with
//! [`Slider::on_layout`], routes pan gestures through the
//! [`GestureResponder`](glide_ui::GestureResponder) implementation, and paints
//! the [`SliderProjection`] returned by [`Slider::frame`].
use std::time::{Duration, Instant};

use derive_setters::Setters;
use glide_ui::{
    AnimationConfig, CallbackWith, Dp, PxSize, ThemeProvider, Transition,
    animation::DEFAULT_TIMING_DURATION,
};
use thiserror::Error;
use tracing::debug;

use crate::theme::SliderColors;

pub use geometry::{MeasureTarget, SliderGeometry};
pub use interaction::{GesturePhase, SliderController};
pub use mapping::ValueRange;
pub use render::{BubbleProjection, SliderProjection, TickProjection};
pub use ticks::Tick;

mod geometry;
mod interaction;
mod mapping;
mod render;
mod ticks;

/// Fraction of the range moved by one accessibility nudge on a continuous
/// slider.
const ACCESSIBILITY_STEP: f32 = 0.05;
/// The value bubble always fades over a fixed duration, whatever the
/// configured animation.
const BUBBLE_FADE_DURATION: Duration = DEFAULT_TIMING_DURATION;
/// Most tick labels a slider lays out, one per percent plus both ends.
pub const MAX_LABEL_COUNT: usize = 101;
/// Default touch target edge, matching the default visual thumb.
const DEFAULT_THUMB_TOUCH_SIZE: Dp = Dp(16.0);

/// Arguments for the `slider` component.
#[derive(PartialEq, Clone, Debug, Setters)]
pub struct SliderArgs {
    /// Initial value, clamped into the range (and snapped to a step) at
    /// mount.
    pub value: f32,
    /// Lower bound of the range.
    pub minimum_value: f32,
    /// Upper bound of the range.
    pub maximum_value: f32,
    /// Quantization step. `0.0` makes the slider continuous.
    pub step: f32,
    /// Soft ceiling the thumb cannot be dragged past. Any value `<= 0`
    /// disables it.
    pub max_available_value: f32,
    /// Number of evenly spaced tick labels, including both ends. `0`
    /// disables ticks; at most [`MAX_LABEL_COUNT`].
    pub label_count: usize,
    /// Size of the touch target around the thumb. May exceed the visual
    /// thumb.
    pub thumb_touch_size: PxSize,
    /// Whether a touch anywhere in the slider claims the gesture. When
    /// `false` only touches inside the thumb touch target do.
    pub full_area_capture: bool,
    /// Disable interaction.
    pub disabled: bool,
    /// Append `%` to the value bubble and tick labels.
    pub show_percent_symbol: bool,
    /// Ease the thumb toward values set with [`Slider::set_value`] instead
    /// of jumping.
    pub animate_transitions: bool,
    /// Configuration of the thumb scale pulse and of animated external value
    /// changes. The value bubble always uses a fixed 150 ms fade.
    pub animation: AnimationConfig,
    /// Explicit colors. When `None` colors come from the theme.
    #[setters(strip_option)]
    pub colors: Option<SliderColors>,
    /// Called continuously while the value changes.
    #[setters(skip)]
    pub on_value_change: CallbackWith<f32>,
    /// Called when a drag gesture is granted.
    #[setters(skip)]
    pub on_sliding_start: CallbackWith<f32>,
    /// Called once per committed interaction.
    #[setters(skip)]
    pub on_sliding_complete: CallbackWith<f32>,
}

impl SliderArgs {
    /// Sets the on_value_change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(on_value_change);
        self
    }

    /// Sets the on_value_change handler using a shared callback.
    pub fn on_value_change_shared(mut self, on_value_change: impl Into<CallbackWith<f32>>) -> Self {
        self.on_value_change = on_value_change.into();
        self
    }

    /// Sets the on_sliding_start handler.
    pub fn on_sliding_start<F>(mut self, on_sliding_start: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_sliding_start = CallbackWith::new(on_sliding_start);
        self
    }

    /// Sets the on_sliding_complete handler.
    pub fn on_sliding_complete<F>(mut self, on_sliding_complete: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_sliding_complete = CallbackWith::new(on_sliding_complete);
        self
    }

    /// Checks the configuration for values the slider cannot work with.
    pub fn validate(&self) -> Result<(), SliderArgsError> {
        let (min, max) = (self.minimum_value, self.maximum_value);
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderArgsError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(SliderArgsError::EmptyRange { min, max });
        }
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(SliderArgsError::InvalidStep(self.step));
        }
        if self.step > max - min {
            return Err(SliderArgsError::StepExceedsRange {
                step: self.step,
                span: max - min,
            });
        }
        if self.label_count == 1 {
            return Err(SliderArgsError::SingleLabel);
        }
        if self.label_count > MAX_LABEL_COUNT {
            return Err(SliderArgsError::TooManyLabels(self.label_count));
        }
        Ok(())
    }

    /// The soft ceiling, if enabled.
    pub fn ceiling(&self) -> Option<f32> {
        (self.max_available_value > 0.0).then_some(self.max_available_value)
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: 0.0,
            minimum_value: 0.0,
            maximum_value: 1.0,
            step: 0.0,
            max_available_value: -1.0,
            label_count: 0,
            thumb_touch_size: PxSize::square_dp(DEFAULT_THUMB_TOUCH_SIZE),
            full_area_capture: true,
            disabled: false,
            show_percent_symbol: false,
            animate_transitions: false,
            animation: AnimationConfig::default(),
            colors: None,
            on_value_change: CallbackWith::default(),
            on_sliding_start: CallbackWith::default(),
            on_sliding_complete: CallbackWith::default(),
        }
    }
}

/// Configuration rejected by [`SliderArgs::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderArgsError {
    /// A bound is NaN or infinite.
    #[error("slider bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// The minimum is not below the maximum.
    #[error("minimum value {min} must be less than maximum value {max}")]
    EmptyRange {
        /// Configured minimum.
        min: f32,
        /// Configured maximum.
        max: f32,
    },
    /// The step is negative or not finite.
    #[error("step must be a finite, non-negative number, got {0}")]
    InvalidStep(f32),
    /// The step does not fit in the range even once.
    #[error("step {step} is larger than the range {span}")]
    StepExceedsRange {
        /// Configured step.
        step: f32,
        /// `maximum_value - minimum_value`.
        span: f32,
    },
    /// One tick cannot be spaced along the track.
    #[error("a label count of 1 leaves no spacing between ticks, use 0 or at least 2")]
    SingleLabel,
    /// More tick labels than a track can show.
    #[error("label count {0} exceeds the maximum of {max}", max = MAX_LABEL_COUNT)]
    TooManyLabels(usize),
}

/// Direction of an accessibility nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// Toward `maximum_value`.
    Increment,
    /// Toward `minimum_value`.
    Decrement,
}

/// Transitions decorating the slider's state. They follow the controller's
/// flags and value and are never read back by interaction logic.
#[derive(Debug, Clone, Copy)]
struct SliderVisuals {
    thumb_value: Transition,
    bubble_opacity: Transition,
    thumb_scale: Transition,
    animate_next_value: bool,
}

/// # slider
///
/// A range slider instance: configuration, measured geometry, gesture
/// controller and cosmetic transitions.
///
/// ## Examples
///
/// ```
/// use std::time::Instant;
///
/// use glide_components::slider::{MeasureTarget, Slider, SliderArgs};
/// use glide_ui::PxSize;
///
/// let mut slider = Slider::new(
///     SliderArgs::default()
///         .maximum_value(100.0)
///         .label_count(5)
///         .on_sliding_complete(|value| println!("committed {value}")),
/// )
/// .unwrap();
/// slider.on_layout(MeasureTarget::Container, PxSize::from([300.0, 40.0]));
/// slider.on_layout(MeasureTarget::Track, PxSize::from([300.0, 5.0]));
/// slider.on_layout(MeasureTarget::Thumb, PxSize::from([16.0, 16.0]));
///
/// assert!(slider.press_tick(3));
/// assert_eq!(slider.value(), 75.0);
/// let frame = slider.frame(Instant::now());
/// assert_eq!(frame.opacity, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Slider {
    args: SliderArgs,
    range: ValueRange,
    geometry: SliderGeometry,
    controller: SliderController,
    visuals: SliderVisuals,
}

impl Slider {
    /// Mounts a slider with validated arguments.
    pub fn new(args: SliderArgs) -> Result<Self, SliderArgsError> {
        args.validate()?;
        let range = ValueRange::new(args.minimum_value, args.maximum_value, args.step);
        let initial = range.snap(args.value);
        let visuals = SliderVisuals {
            thumb_value: Transition::new(initial, args.animation),
            bubble_opacity: Transition::new(0.0, AnimationConfig::timing(BUBBLE_FADE_DURATION)),
            thumb_scale: Transition::new(1.0, args.animation),
            animate_next_value: false,
        };
        debug!(
            min = range.min,
            max = range.max,
            step = range.step,
            value = initial,
            "slider mounted"
        );
        Ok(Self {
            args,
            range,
            geometry: SliderGeometry::new(),
            controller: SliderController::new(initial),
            visuals,
        })
    }

    /// The arguments the slider was mounted with.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// The value domain.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Measured geometry.
    pub fn geometry(&self) -> &SliderGeometry {
        &self.geometry
    }

    /// Interaction state.
    pub fn controller(&self) -> &SliderController {
        &self.controller
    }

    /// The live value.
    pub fn value(&self) -> f32 {
        self.controller.current_value()
    }

    /// The last committed value.
    pub fn committed_value(&self) -> f32 {
        self.controller.committed_value()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Records a size reported by the layout provider. Returns `false` for a
    /// redundant report.
    pub fn on_layout(&mut self, target: MeasureTarget, size: PxSize) -> bool {
        self.geometry.record_measurement(target, size)
    }

    /// Applies an externally controlled value. No callbacks fire.
    ///
    /// With `animate_transitions` the visual thumb eases to the new value on
    /// the next [`Slider::frame`]; otherwise it jumps.
    pub fn set_value(&mut self, value: f32) {
        let value = self.range.snap(value);
        if value == self.controller.current_value() && value == self.controller.committed_value()
        {
            return;
        }
        debug!(value, "slider value set externally");
        self.controller.commit(value);
        self.visuals.animate_next_value = self.args.animate_transitions;
    }

    /// Moves the value one step (or 5% of the range on a continuous slider)
    /// as an accessibility action. Returns `true` when the value changed.
    pub fn nudge(&mut self, direction: NudgeDirection) -> bool {
        if self.args.disabled || self.controller.phase() == GesturePhase::Active {
            return false;
        }
        let delta = if self.range.step > 0.0 {
            self.range.step
        } else {
            ACCESSIBILITY_STEP * self.range.span()
        };
        let current = self.controller.current_value();
        let target = match direction {
            NudgeDirection::Increment => current + delta,
            NudgeDirection::Decrement => current - delta,
        };
        let target = self.range.snap(target);
        if (target - current).abs() <= f32::EPSILON || self.exceeds_ceiling(target) {
            return false;
        }
        self.controller.commit(target);
        self.args.on_value_change.call(target);
        self.args.on_sliding_complete.call(target);
        true
    }

    /// Colors to paint with: explicit args colors or the theme palette,
    /// faded when disabled.
    pub fn colors<T: ThemeProvider + ?Sized>(&self, theme: &T) -> SliderColors {
        let colors = self
            .args
            .colors
            .unwrap_or_else(|| SliderColors::from_theme(theme));
        if self.args.disabled {
            colors.disabled()
        } else {
            colors
        }
    }

    /// Brings the cosmetic transitions in line with the current state and
    /// returns the projection at `now`.
    pub fn frame(&mut self, now: Instant) -> SliderProjection {
        self.sync_visuals(now);
        self.project(now)
    }

    /// Retargets the cosmetic transitions at `now`.
    pub fn sync_visuals(&mut self, now: Instant) {
        let value = self.controller.current_value();
        let visuals = &mut self.visuals;
        if visuals.thumb_value.target() != value {
            if visuals.animate_next_value {
                visuals.thumb_value.retarget(value, now);
            } else {
                visuals.thumb_value.snap_to(value);
            }
        }
        visuals.animate_next_value = false;

        let bubble = if self.controller.show_label() { 1.0 } else { 0.0 };
        visuals.bubble_opacity.retarget(bubble, now);
        let scale = if self.controller.is_dragging() {
            render::THUMB_PRESSED_SCALE
        } else {
            1.0
        };
        visuals.thumb_scale.retarget(scale, now);
    }

    fn exceeds_ceiling(&self, value: f32) -> bool {
        self.args.ceiling().is_some_and(|ceiling| value > ceiling)
    }
}
