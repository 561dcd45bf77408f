//! Cosmetic animation primitives.
//!
//! Components keep their logical state as plain values and only use a
//! [`Transition`] to decorate how that state is shown (fades, scale pulses,
//! an eased jump to an externally set value). A transition always converges
//! to its target, so it can never drift away from the value it follows.
//!
//! Time is passed in explicitly as [`Instant`]s. Hosts call with
//! `Instant::now()` each frame; tests advance a fixed base instant.

use std::time::{Duration, Instant};

/// Default duration of timing transitions.
pub const DEFAULT_TIMING_DURATION: Duration = Duration::from_millis(150);
/// Default spring friction.
pub const DEFAULT_SPRING_FRICTION: f32 = 7.0;
/// Default spring tension.
pub const DEFAULT_SPRING_TENSION: f32 = 100.0;

const SPRING_REST_THRESHOLD: f32 = 0.001;

/// How a transition moves from its start to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationConfig {
    /// Eased interpolation over a fixed duration.
    Timing {
        /// Length of the transition once started.
        duration: Duration,
        /// Time to wait before moving.
        delay: Duration,
    },
    /// Damped spring, parameterized by friction and tension.
    Spring {
        /// Damping; higher values settle faster with less overshoot.
        friction: f32,
        /// Stiffness; higher values move faster.
        tension: f32,
    },
}

impl AnimationConfig {
    /// Timing transition with the given duration and no delay.
    pub const fn timing(duration: Duration) -> Self {
        Self::Timing {
            duration,
            delay: Duration::ZERO,
        }
    }

    /// Spring transition with the default friction and tension.
    pub const fn spring() -> Self {
        Self::Spring {
            friction: DEFAULT_SPRING_FRICTION,
            tension: DEFAULT_SPRING_TENSION,
        }
    }

    /// Progress of the transition `elapsed` after it started.
    ///
    /// Timing progress is eased and stays in `[0.0, 1.0]`. Spring progress
    /// may overshoot `1.0` before settling.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        match *self {
            Self::Timing { duration, delay } => {
                let Some(active) = elapsed.checked_sub(delay) else {
                    return 0.0;
                };
                if duration.is_zero() {
                    return 1.0;
                }
                easing(active.as_secs_f32() / duration.as_secs_f32())
            }
            Self::Spring { friction, tension } => {
                SpringParams::from_origami(friction, tension).position(elapsed.as_secs_f32())
            }
        }
    }

    /// Whether a transition that started `elapsed` ago has come to rest.
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        match *self {
            Self::Timing { duration, delay } => elapsed >= duration + delay,
            Self::Spring { friction, tension } => {
                let spring = SpringParams::from_origami(friction, tension);
                elapsed.as_secs_f32() >= spring.settle_time()
            }
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::timing(DEFAULT_TIMING_DURATION)
    }
}

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linearly maps `value` from `input` to `output`, extrapolating outside the
/// input range.
///
/// ```
/// use glide_ui::interpolate;
///
/// assert_eq!(interpolate(50.0, [0.0, 100.0], [-4.0, 296.0]), 146.0);
/// ```
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 || !span.is_finite() {
        return output[0];
    }
    let t = (value - input[0]) / span;
    output[0] + t * (output[1] - output[0])
}

/// Mass-1 spring derived from origami friction/tension values.
struct SpringParams {
    omega: f32,
    zeta: f32,
}

impl SpringParams {
    fn from_origami(friction: f32, tension: f32) -> Self {
        let stiffness = ((tension - 30.0) * 3.62 + 194.0).max(1.0);
        let damping = ((friction - 8.0) * 3.0 + 25.0).max(0.0);
        let omega = stiffness.sqrt();
        Self {
            omega,
            zeta: damping / (2.0 * omega),
        }
    }

    fn position(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let Self { omega, zeta } = *self;
        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            let envelope = (-omega * t).exp();
            1.0 - envelope * (1.0 + omega * t)
        }
    }

    fn settle_time(&self) -> f32 {
        let decay = self.zeta.min(1.0) * self.omega;
        if decay <= 0.0 {
            return f32::INFINITY;
        }
        (1.0 / SPRING_REST_THRESHOLD).ln() / decay
    }
}

/// A value moving toward a target over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    config: AnimationConfig,
}

impl Transition {
    /// Creates a transition resting at `initial`.
    pub fn new(initial: f32, config: AnimationConfig) -> Self {
        Self {
            from: initial,
            to: initial,
            started_at: None,
            config,
        }
    }

    /// The value the transition is heading to.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Starts moving toward `target` from wherever the transition is at
    /// `now`. Retargeting to the current target is a no-op.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
    }

    /// Moves to `value` without animating.
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.started_at = None;
    }

    /// The value shown at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if self.config.is_settled(elapsed) {
            return self.to;
        }
        self.from + (self.to - self.from) * self.config.progress(elapsed)
    }

    /// Whether the transition is still moving at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| !self.config.is_settled(now.saturating_duration_since(started_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_and_symmetric() {
        assert_eq!(easing(-1.0), 0.0);
        assert_eq!(easing(0.5), 0.5);
        assert_eq!(easing(2.0), 1.0);
        assert!((easing(0.25) + easing(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn interpolate_extrapolates_and_handles_empty_range() {
        assert_eq!(interpolate(0.0, [0.0, 100.0], [0.0, 292.0]), 0.0);
        assert_eq!(interpolate(150.0, [0.0, 100.0], [0.0, 10.0]), 15.0);
        assert_eq!(interpolate(3.0, [1.0, 1.0], [7.0, 9.0]), 7.0);
    }

    #[test]
    fn timing_transition_reaches_target_after_duration() {
        let base = Instant::now();
        let mut fade = Transition::new(0.0, AnimationConfig::default());
        fade.retarget(1.0, base);

        assert_eq!(fade.value_at(base), 0.0);
        let midway = fade.value_at(base + Duration::from_millis(75));
        assert!((midway - 0.5).abs() < 1e-3);
        assert!(fade.is_running(base + Duration::from_millis(100)));
        assert_eq!(fade.value_at(base + Duration::from_millis(150)), 1.0);
        assert!(!fade.is_running(base + Duration::from_millis(150)));
    }

    #[test]
    fn timing_delay_holds_start_value() {
        let base = Instant::now();
        let config = AnimationConfig::Timing {
            duration: Duration::from_millis(100),
            delay: Duration::from_millis(50),
        };
        let mut t = Transition::new(10.0, config);
        t.retarget(20.0, base);
        assert_eq!(t.value_at(base + Duration::from_millis(40)), 10.0);
        assert_eq!(t.value_at(base + Duration::from_millis(150)), 20.0);
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let base = Instant::now();
        let mut t = Transition::new(0.0, AnimationConfig::timing(Duration::from_millis(100)));
        t.retarget(1.0, base);
        let mid = base + Duration::from_millis(50);
        let shown = t.value_at(mid);
        t.retarget(0.0, mid);
        assert_eq!(t.value_at(mid), shown);
        assert_eq!(t.value_at(mid + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn spring_overshoots_then_settles() {
        let base = Instant::now();
        let mut t = Transition::new(0.0, AnimationConfig::spring());
        t.retarget(1.0, base);

        let peak = (1..60)
            .map(|ms| t.value_at(base + Duration::from_millis(ms * 5)))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "default spring is underdamped, peak = {peak}");
        assert_eq!(t.value_at(base + Duration::from_secs(2)), 1.0);
        assert!(!t.is_running(base + Duration::from_secs(2)));
    }

    #[test]
    fn snap_to_stops_animation() {
        let base = Instant::now();
        let mut t = Transition::new(0.0, AnimationConfig::default());
        t.retarget(1.0, base);
        t.snap_to(0.3);
        assert_eq!(t.value_at(base), 0.3);
        assert!(!t.is_running(base));
    }
}
