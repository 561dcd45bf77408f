use glide_ui::{GestureEvent, GestureResponder, Px};
use tracing::{debug, trace, warn};

use super::Slider;

/// Whether a drag gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture owned.
    #[default]
    Idle,
    /// The slider owns a gesture and follows its displacement.
    Active,
}

/// Interaction state of a slider. Resets at the end of each gesture except
/// for the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderController {
    phase: GesturePhase,
    previous_left: Px,
    current_value: f32,
    committed_value: f32,
    is_dragging: bool,
    show_label: bool,
}

impl SliderController {
    /// Creates an idle controller holding `value`.
    pub fn new(value: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            previous_left: Px::ZERO,
            current_value: value,
            committed_value: value,
            is_dragging: false,
            show_label: false,
        }
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The live value, read by both interaction logic and rendering.
    pub fn current_value(&self) -> f32 {
        self.current_value
    }

    /// The last committed value.
    pub fn committed_value(&self) -> f32 {
        self.committed_value
    }

    /// Thumb offset captured when the current gesture was granted.
    pub fn previous_left(&self) -> Px {
        self.previous_left
    }

    /// Whether the thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether the value bubble should be shown.
    pub fn show_label(&self) -> bool {
        self.show_label
    }

    pub(super) fn commit(&mut self, value: f32) {
        self.current_value = value;
        self.committed_value = value;
    }

    fn begin(&mut self, previous_left: Px) {
        self.phase = GesturePhase::Active;
        self.previous_left = previous_left;
        self.is_dragging = true;
    }

    fn update(&mut self, value: f32) {
        self.current_value = value;
        self.show_label = true;
    }

    fn end(&mut self) {
        self.phase = GesturePhase::Idle;
        self.is_dragging = false;
        self.show_label = false;
    }
}

impl Slider {
    /// Thumb offset for the live value, using the measured container.
    fn thumb_left(&self) -> Px {
        let container = self.geometry.container();
        let thumb = self.geometry.thumb();
        self.range
            .thumb_left_from_value(self.controller.current_value(), container.width, thumb.width)
    }

    fn hit_test(&self, event: &GestureEvent) -> bool {
        if self.args.full_area_capture {
            return true;
        }
        self.geometry
            .thumb_touch_rect(self.thumb_left(), self.args.thumb_touch_size)
            .contains(event.location)
    }

    fn candidate(&self, event: &GestureEvent) -> Option<f32> {
        self.range.value_from_gesture(
            self.controller.previous_left(),
            event.dx,
            self.geometry.track().width,
            self.geometry.thumb().width,
        )
    }

    fn finish_gesture(&mut self, event: &GestureEvent) {
        if self.controller.phase() == GesturePhase::Idle {
            return;
        }
        if self.args.disabled {
            self.controller.end();
            return;
        }

        match self.candidate(event) {
            Some(value) if self.exceeds_ceiling(value) => {
                debug!(value, kept = self.value(), "release past the ceiling ignored");
            }
            Some(value) => {
                self.controller.commit(value);
                debug!(value, "slider value committed");
                self.args.on_sliding_complete.call(value);
            }
            None => {
                let value = self.controller.current_value();
                self.controller.commit(value);
                debug!(value, "slider value committed without usable geometry");
                self.args.on_sliding_complete.call(value);
            }
        }
        self.controller.end();
    }
}

impl GestureResponder for Slider {
    fn should_set_responder_on_start(&mut self, event: &GestureEvent) -> bool {
        if self.args.disabled {
            return false;
        }
        if !self.geometry.all_measured() {
            warn!("gesture started before slider layout settled, declining");
            return false;
        }
        self.hit_test(event)
    }

    fn should_set_responder_on_move(&mut self, _event: &GestureEvent) -> bool {
        false
    }

    fn on_grant(&mut self, _event: &GestureEvent) {
        let previous_left = self.thumb_left();
        self.controller.begin(previous_left);
        let value = self.controller.current_value();
        debug!(value, previous_left = previous_left.0, "slider gesture granted");
        self.args.on_sliding_start.call(value);
    }

    fn on_move(&mut self, event: &GestureEvent) {
        if self.controller.phase() == GesturePhase::Idle
            || self.args.disabled
            || !self.geometry.all_measured()
        {
            return;
        }
        let Some(value) = self.candidate(event) else {
            trace!(dx = event.dx.0, "no usable track length, move ignored");
            return;
        };
        if self.exceeds_ceiling(value) {
            trace!(value, "move past the ceiling ignored");
            return;
        }
        self.controller.update(value);
        trace!(value, dx = event.dx.0, "slider moved");
        self.args.on_value_change.call(value);
    }

    fn on_release(&mut self, event: &GestureEvent) {
        self.finish_gesture(event);
    }

    fn on_termination_request(&mut self, _event: &GestureEvent) -> bool {
        false
    }

    fn on_terminate(&mut self, event: &GestureEvent) {
        self.finish_gesture(event);
    }
}
