use std::time::Instant;

use glide_ui::{Dp, Px, interpolate};

use super::{Slider, ticks::value_text};

/// Thumb scale while dragging.
pub(super) const THUMB_PRESSED_SCALE: f32 = 1.2;
/// Distance the thumb stays inside the container at either end.
const THUMB_EDGE_INSET: Px = Px(4.0);
/// Width of the floating value bubble.
const BUBBLE_WIDTH: Dp = Dp(34.0);

/// The floating value bubble above the thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleProjection {
    /// Left edge, centering the bubble over the thumb.
    pub left: Px,
    /// Bubble width.
    pub width: Px,
    /// Fade, `0.0` hidden to `1.0` shown.
    pub opacity: f32,
    /// Displayed value.
    pub text: String,
}

/// A tick label positioned along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct TickProjection {
    /// The tick's value.
    pub value: f32,
    /// Label text.
    pub text: String,
    /// Whether the committed value has reached the tick.
    pub reached: bool,
    /// Horizontal center, where the thumb center sits at this value.
    pub center_x: Px,
}

/// Everything a renderer needs to paint a slider at one instant.
///
/// Derived from the live value, the measured geometry and the cosmetic
/// transitions. Until all geometry is measured the projection is invisible
/// and every position is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderProjection {
    /// Whole-widget opacity.
    pub opacity: f32,
    /// Left edge of the thumb.
    pub thumb_left: Px,
    /// Thumb scale, pulsing while dragging.
    pub thumb_scale: f32,
    /// Track length covered by the value.
    pub filled_track_width: Px,
    /// Drawn width of the minimum track, reaching the thumb center.
    pub minimum_track_width: Px,
    /// Value bubble.
    pub bubble: BubbleProjection,
    /// Tick labels.
    pub ticks: Vec<TickProjection>,
}

impl Slider {
    /// Projects the slider at `now`.
    ///
    /// Pure: call [`Slider::sync_visuals`] (or use [`Slider::frame`]) after
    /// state changes so transitions start at the right time.
    pub fn project(&self, now: Instant) -> SliderProjection {
        let value = self.displayed_value(now);
        let bubble_text = value_text(
            self.controller.current_value(),
            self.args.show_percent_symbol,
        );
        let bubble_opacity = self.visuals.bubble_opacity.value_at(now).clamp(0.0, 1.0);
        // A spring may overshoot; the pulse stays between rest and pressed.
        let thumb_scale = self
            .visuals
            .thumb_scale
            .value_at(now)
            .clamp(1.0, THUMB_PRESSED_SCALE);

        if !self.geometry.all_measured() {
            return SliderProjection {
                opacity: 0.0,
                thumb_left: Px::ZERO,
                thumb_scale,
                filled_track_width: Px::ZERO,
                minimum_track_width: Px::ZERO,
                bubble: BubbleProjection {
                    left: Px::ZERO,
                    width: Px::from(BUBBLE_WIDTH),
                    opacity: 0.0,
                    text: bubble_text,
                },
                ticks: self.tick_projections(|_| Px::ZERO),
            };
        }

        let container_width = self.geometry.container().width;
        let thumb_width = self.geometry.thumb().width;
        let half_thumb = thumb_width / 2.0;
        let domain = [self.range.min, self.range.max];

        let thumb_left = self.thumb_left_at(value);
        let filled_track_width = Px(interpolate(
            value,
            domain,
            [0.0, (container_width - half_thumb).0],
        ));
        let bubble_width = Px::from(BUBBLE_WIDTH);

        SliderProjection {
            opacity: 1.0,
            thumb_left,
            thumb_scale,
            filled_track_width,
            minimum_track_width: filled_track_width + half_thumb,
            bubble: BubbleProjection {
                left: thumb_left - (bubble_width - thumb_width) / 2.0,
                width: bubble_width,
                opacity: bubble_opacity,
                text: bubble_text,
            },
            ticks: self.tick_projections(|value| self.thumb_left_at(value) + half_thumb),
        }
    }

    fn thumb_left_at(&self, value: f32) -> Px {
        let container_width = self.geometry.container().width;
        let half_thumb = self.geometry.thumb().width / 2.0;
        Px(interpolate(
            value,
            [self.range.min, self.range.max],
            [
                (THUMB_EDGE_INSET - half_thumb).0,
                (container_width - half_thumb - THUMB_EDGE_INSET).0,
            ],
        ))
    }

    /// The visual thumb value. Follows the eased transition only while it is
    /// heading to the live value, and never leaves the range.
    fn displayed_value(&self, now: Instant) -> f32 {
        let value = self.controller.current_value();
        let thumb = &self.visuals.thumb_value;
        if thumb.target() == value {
            self.range.clamp(thumb.value_at(now))
        } else {
            value
        }
    }

    fn tick_projections(&self, center_x: impl Fn(f32) -> Px) -> Vec<TickProjection> {
        self.ticks()
            .into_iter()
            .map(|tick| TickProjection {
                center_x: center_x(tick.value),
                value: tick.value,
                text: tick.text,
                reached: tick.reached,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glide_ui::{AnimationConfig, GestureEvent, GestureResponder, PxPosition, PxSize};

    use super::*;
    use crate::slider::{MeasureTarget, SliderArgs};

    fn measured(args: SliderArgs) -> Slider {
        let mut slider = Slider::new(args).expect("valid args");
        slider.on_layout(MeasureTarget::Container, PxSize::from([300.0, 40.0]));
        slider.on_layout(MeasureTarget::Track, PxSize::from([300.0, 5.0]));
        slider.on_layout(MeasureTarget::Thumb, PxSize::from([16.0, 16.0]));
        slider
    }

    #[test]
    fn hidden_until_measured() {
        let mut slider =
            Slider::new(SliderArgs::default().maximum_value(100.0).value(50.0).label_count(3))
                .expect("valid args");
        slider.on_layout(MeasureTarget::Container, PxSize::from([300.0, 40.0]));
        let frame = slider.frame(Instant::now());
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.thumb_left, Px::ZERO);
        assert_eq!(frame.filled_track_width, Px::ZERO);
        assert_eq!(frame.bubble.left, Px::ZERO);
        assert!(frame.ticks.iter().all(|tick| tick.center_x == Px::ZERO));
    }

    #[test]
    fn positions_follow_the_value() {
        let slider = measured(SliderArgs::default().maximum_value(100.0).value(50.0));
        let frame = slider.project(Instant::now());
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.thumb_left, Px(142.0));
        assert_eq!(frame.filled_track_width, Px(146.0));
        assert_eq!(frame.minimum_track_width, Px(154.0));
        assert_eq!(frame.bubble.left, Px(133.0));
        assert_eq!(frame.bubble.width, Px(34.0));
        assert_eq!(frame.bubble.text, "50");
    }

    #[test]
    fn thumb_stays_inset_at_the_ends() {
        let low = measured(SliderArgs::default().maximum_value(100.0));
        assert_eq!(low.project(Instant::now()).thumb_left, Px(-4.0));
        let high = measured(SliderArgs::default().maximum_value(100.0).value(100.0));
        assert_eq!(high.project(Instant::now()).thumb_left, Px(288.0));
    }

    #[test]
    fn ticks_sit_under_the_thumb_center() {
        let slider = measured(SliderArgs::default().maximum_value(100.0).label_count(3));
        let centers: Vec<_> = slider
            .project(Instant::now())
            .ticks
            .iter()
            .map(|tick| tick.center_x)
            .collect();
        assert_eq!(centers, [Px(4.0), Px(150.0), Px(296.0)]);
    }

    #[test]
    fn bubble_fades_in_while_dragging_and_out_after() {
        let mut slider = measured(SliderArgs::default().maximum_value(100.0));
        let base = Instant::now();
        assert_eq!(slider.frame(base).bubble.opacity, 0.0);

        slider.on_grant(&GestureEvent::start_at(PxPosition::ZERO));
        slider.on_move(&GestureEvent::with_dx(71.0));
        let shown = slider.frame(base);
        assert_eq!(shown.bubble.opacity, 0.0);
        assert_eq!(shown.bubble.text, "25");
        let later = base + Duration::from_millis(150);
        let settled = slider.frame(later);
        assert_eq!(settled.bubble.opacity, 1.0);
        assert_eq!(settled.thumb_scale, THUMB_PRESSED_SCALE);

        slider.on_release(&GestureEvent::with_dx(71.0));
        let released = later + Duration::from_millis(150);
        let hidden = slider.frame(released);
        assert_eq!(hidden.bubble.opacity, 1.0);
        let gone = slider.frame(released + Duration::from_millis(150));
        assert_eq!(gone.bubble.opacity, 0.0);
        assert_eq!(gone.thumb_scale, 1.0);
    }

    #[test]
    fn dragged_thumb_tracks_the_value_without_easing() {
        let mut slider = measured(
            SliderArgs::default()
                .maximum_value(100.0)
                .animate_transitions(true),
        );
        let base = Instant::now();
        slider.on_grant(&GestureEvent::start_at(PxPosition::ZERO));
        slider.on_move(&GestureEvent::with_dx(142.0));
        assert_eq!(slider.frame(base).thumb_left, Px(142.0));
    }

    #[test]
    fn spring_animation_keeps_fade_and_thumb_in_bounds() {
        let mut slider = measured(
            SliderArgs::default()
                .maximum_value(100.0)
                .animate_transitions(true)
                .animation(AnimationConfig::spring()),
        );
        let base = Instant::now();
        slider.frame(base);
        slider.on_grant(&GestureEvent::start_at(PxPosition::ZERO));
        slider.on_move(&GestureEvent::with_dx(400.0));
        slider.frame(base);

        let samples: Vec<_> = (0..=100)
            .map(|ms| slider.project(base + Duration::from_millis(ms * 10)))
            .collect();
        assert!(samples.iter().all(|f| (0.0..=1.0).contains(&f.bubble.opacity)));
        assert!(
            samples
                .iter()
                .all(|f| (1.0..=THUMB_PRESSED_SCALE).contains(&f.thumb_scale))
        );
        // The fade keeps its fixed 150 ms duration.
        assert_eq!(samples[15].bubble.opacity, 1.0);

        slider.on_release(&GestureEvent::with_dx(400.0));
        let released = base + Duration::from_secs(1);
        slider.frame(released);
        slider.set_value(0.0);
        slider.frame(released);
        let eased: Vec<_> = (0..=100)
            .map(|ms| slider.project(released + Duration::from_millis(ms * 10)))
            .collect();
        assert!(
            eased
                .iter()
                .all(|f| f.thumb_left >= Px(-4.0) && f.thumb_left <= Px(288.0))
        );
    }
}
