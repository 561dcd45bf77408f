//! Pan responder protocol.
//!
//! A host gesture system negotiates ownership of a touch with the widgets
//! under it and then streams displacement updates to the owner. Components
//! implement [`GestureResponder`] to take part in that negotiation.
//!
//! [`PanRecognizer`] is a minimal driver that turns raw pointer samples into
//! [`GestureEvent`]s and runs the protocol against one responder. It is what
//! the example application and tests use in place of a platform recognizer.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::trace;

use crate::px::{Px, PxPosition};

/// A raw pointer sample reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Pointer position relative to the responder's bounds.
    pub position: PxPosition,
    /// Time of the sample since an arbitrary, fixed origin.
    pub timestamp: Duration,
}

impl PointerSample {
    /// Creates a sample at `(x, y)` taken `timestamp_ms` after the origin.
    pub fn at(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            position: PxPosition::new(Px(x), Px(y)),
            timestamp: Duration::from_millis(timestamp_ms),
        }
    }
}

/// Gesture state delivered to a responder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureEvent {
    /// Current pointer position relative to the responder's bounds.
    pub location: PxPosition,
    /// Horizontal displacement since the gesture started.
    pub dx: Px,
    /// Vertical displacement since the gesture started.
    pub dy: Px,
    /// Horizontal velocity in px/ms.
    pub vx: f32,
    /// Vertical velocity in px/ms.
    pub vy: f32,
}

impl GestureEvent {
    /// An event at `location` with zero displacement, as delivered on touch
    /// down.
    pub fn start_at(location: PxPosition) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// An event with the given horizontal displacement.
    pub fn with_dx(dx: f32) -> Self {
        Self {
            dx: Px(dx),
            ..Self::default()
        }
    }
}

/// The callbacks a widget implements to own a pan gesture.
///
/// Displacements in every event are relative to the start of the gesture,
/// not to the previous event.
pub trait GestureResponder {
    /// Whether the responder wants to own a gesture that starts with `event`.
    fn should_set_responder_on_start(&mut self, event: &GestureEvent) -> bool;

    /// Whether the responder wants to claim a gesture already in motion.
    fn should_set_responder_on_move(&mut self, _event: &GestureEvent) -> bool {
        false
    }

    /// The responder now owns the gesture.
    fn on_grant(&mut self, event: &GestureEvent);

    /// The pointer moved while the responder owns the gesture.
    fn on_move(&mut self, event: &GestureEvent);

    /// The pointer was lifted.
    fn on_release(&mut self, event: &GestureEvent);

    /// Another recognizer asks to take over; return `true` to let it.
    fn on_termination_request(&mut self, _event: &GestureEvent) -> bool {
        true
    }

    /// The gesture was taken away or cancelled by the host.
    fn on_terminate(&mut self, event: &GestureEvent);
}

/// Drives a single pan gesture against a [`GestureResponder`].
#[derive(Debug, Default)]
pub struct PanRecognizer {
    start: Option<PointerSample>,
    recent: SmallVec<[PointerSample; 2]>,
    granted: bool,
}

impl PanRecognizer {
    /// Creates an idle recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a responder currently owns the gesture.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Touch down. Returns `true` when the responder claimed the gesture.
    pub fn pointer_down<R: GestureResponder + ?Sized>(
        &mut self,
        responder: &mut R,
        sample: PointerSample,
    ) -> bool {
        self.start = Some(sample);
        self.recent.clear();
        self.recent.push(sample);
        self.granted = false;

        let event = self.event_for(sample);
        if responder.should_set_responder_on_start(&event) {
            self.granted = true;
            responder.on_grant(&event);
        }
        trace!(granted = self.granted, "pan pointer down");
        self.granted
    }

    /// Pointer moved. Ignored when no gesture is in progress.
    pub fn pointer_move<R: GestureResponder + ?Sized>(
        &mut self,
        responder: &mut R,
        sample: PointerSample,
    ) {
        if self.start.is_none() {
            return;
        }
        self.record(sample);
        let event = self.event_for(sample);

        if !self.granted {
            if !responder.should_set_responder_on_move(&event) {
                return;
            }
            self.granted = true;
            responder.on_grant(&event);
        }
        responder.on_move(&event);
    }

    /// Touch up. Ends the gesture whether or not it was granted.
    pub fn pointer_up<R: GestureResponder + ?Sized>(
        &mut self,
        responder: &mut R,
        sample: PointerSample,
    ) {
        if self.start.is_none() {
            return;
        }
        self.record(sample);
        let event = self.event_for(sample);
        if self.granted {
            responder.on_release(&event);
        }
        self.reset();
    }

    /// A parent recognizer wants the gesture. Returns `true` when the
    /// responder let go (and was terminated).
    pub fn request_termination<R: GestureResponder + ?Sized>(&mut self, responder: &mut R) -> bool {
        if !self.granted {
            return false;
        }
        let Some(last) = self.recent.last().copied() else {
            return false;
        };
        let event = self.event_for(last);
        if !responder.on_termination_request(&event) {
            trace!("termination request declined");
            return false;
        }
        responder.on_terminate(&event);
        self.reset();
        true
    }

    /// The host cancelled the touch (for example the view was hidden).
    pub fn cancel<R: GestureResponder + ?Sized>(&mut self, responder: &mut R) {
        if self.granted
            && let Some(last) = self.recent.last().copied()
        {
            let event = self.event_for(last);
            responder.on_terminate(&event);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.start = None;
        self.recent.clear();
        self.granted = false;
    }

    fn record(&mut self, sample: PointerSample) {
        if self.recent.len() == 2 {
            self.recent.remove(0);
        }
        self.recent.push(sample);
    }

    fn event_for(&self, sample: PointerSample) -> GestureEvent {
        let origin = self.start.map_or(sample.position, |s| s.position);
        let delta = sample.position - origin;
        let (vx, vy) = match self.recent.as_slice() {
            [prev, last] => {
                let dt = last.timestamp.saturating_sub(prev.timestamp).as_micros() as f32 / 1000.0;
                if dt > 0.0 {
                    (
                        (last.position.x.0 - prev.position.x.0) / dt,
                        (last.position.y.0 - prev.position.y.0) / dt,
                    )
                } else {
                    (0.0, 0.0)
                }
            }
            _ => (0.0, 0.0),
        };
        GestureEvent {
            location: sample.position,
            dx: delta.x,
            dy: delta.y,
            vx,
            vy,
        }
    }
}
