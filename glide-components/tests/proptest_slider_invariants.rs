//! Property-based invariant tests for the slider.
//!
//! 1. Bounds: the value stays in `[min, max]` for any drag on any layout.
//! 2. Step: a stepped slider only ever holds `min + k * step`.
//! 3. Idempotent measurement: re-reporting a size changes nothing.
//! 4. Monotonic readiness: once all geometry is measured it stays measured.
//! 5. Soft ceiling: no drag or tick press moves the value past the ceiling.

use glide_components::slider::{MeasureTarget, Slider, SliderArgs, SliderGeometry};
use glide_ui::{GestureEvent, GestureResponder, Px, PxPosition, PxSize};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn target_strategy() -> impl Strategy<Value = MeasureTarget> {
    prop_oneof![
        Just(MeasureTarget::Container),
        Just(MeasureTarget::Track),
        Just(MeasureTarget::Thumb),
    ]
}

fn size_strategy() -> impl Strategy<Value = PxSize> {
    (0.0f32..600.0, 0.0f32..80.0).prop_map(|(w, h)| PxSize::from([w, h]))
}

fn step_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.5f32), Just(1.0), Just(2.5), Just(5.0), Just(10.0), Just(25.0)]
}

/// Continuous, or one of the steps above, or a step that does not line up
/// with the ticks.
fn optional_step_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), step_strategy(), Just(30.0), Just(7.0)]
}

fn layout(slider: &mut Slider, width: f32, thumb: f32) {
    slider.on_layout(MeasureTarget::Container, PxSize::from([width, 40.0]));
    slider.on_layout(MeasureTarget::Track, PxSize::from([width, 5.0]));
    slider.on_layout(MeasureTarget::Thumb, PxSize::from([thumb, thumb]));
}

/// Runs one gesture per entry of `drags`, each a list of cumulative `dx`.
fn drag(slider: &mut Slider, drags: &[Vec<f32>], mut check: impl FnMut(&Slider)) {
    for gesture in drags {
        let start = GestureEvent::start_at(PxPosition::new(Px(10.0), Px(20.0)));
        if !slider.should_set_responder_on_start(&start) {
            continue;
        }
        slider.on_grant(&start);
        for &dx in gesture {
            slider.on_move(&GestureEvent::with_dx(dx));
            check(&*slider);
        }
        let last = gesture.last().copied().unwrap_or_default();
        slider.on_release(&GestureEvent::with_dx(last));
        check(&*slider);
    }
}

fn drags_strategy() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1200.0f32..1200.0, 1..12), 1..6)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bounds invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn value_stays_within_bounds(
        min in -500.0f32..500.0,
        span in 0.5f32..1000.0,
        width in 0.0f32..800.0,
        thumb in 0.0f32..64.0,
        drags in drags_strategy(),
    ) {
        let max = min + span;
        let mut slider = Slider::new(
            SliderArgs::default().minimum_value(min).maximum_value(max).value(min),
        )
        .expect("valid args");
        layout(&mut slider, width, thumb);

        let mut violations = Vec::new();
        drag(&mut slider, &drags, |s| {
            if !(min..=max).contains(&s.value()) {
                violations.push(s.value());
            }
        });
        prop_assert!(violations.is_empty(), "out of [{}, {}]: {:?}", min, max, violations);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Step invariant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stepped_value_is_a_step_multiple(
        min in -100.0f32..100.0,
        span in 50.0f32..500.0,
        step in step_strategy(),
        drags in drags_strategy(),
    ) {
        let mut slider = Slider::new(
            SliderArgs::default()
                .minimum_value(min)
                .maximum_value(min + span)
                .step(step)
                .value(min),
        )
        .expect("valid args");
        layout(&mut slider, 300.0, 16.0);

        let mut off_step = Vec::new();
        drag(&mut slider, &drags, |s| {
            let steps = (s.value() - min) / step;
            if (steps - steps.round()).abs() > 1e-3 {
                off_step.push(s.value());
            }
        });
        prop_assert!(off_step.is_empty(), "not multiples of {}: {:?}", step, off_step);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotent measurement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_measurement_is_a_no_op(
        history in prop::collection::vec((target_strategy(), size_strategy()), 0..10),
        target in target_strategy(),
        size in size_strategy(),
    ) {
        let mut geometry = SliderGeometry::new();
        for (t, s) in history {
            geometry.record_measurement(t, s);
        }
        geometry.record_measurement(target, size);
        let before = geometry;
        prop_assert!(!geometry.record_measurement(target, size));
        prop_assert_eq!(geometry, before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Monotonic readiness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn readiness_never_reverts(
        reports in prop::collection::vec((target_strategy(), size_strategy()), 0..40),
    ) {
        let mut geometry = SliderGeometry::new();
        let mut was_ready = false;
        for (target, size) in reports {
            geometry.record_measurement(target, size);
            prop_assert!(!was_ready || geometry.all_measured());
            was_ready = geometry.all_measured();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Soft ceiling
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ceiling_is_never_crossed(
        ceiling in 1.0f32..99.0,
        step in optional_step_strategy(),
        label_count in prop_oneof![Just(0usize), 2usize..12],
        drags in drags_strategy(),
        presses in prop::collection::vec(0usize..12, 0..6),
    ) {
        let mut slider = Slider::new(
            SliderArgs::default()
                .maximum_value(100.0)
                .step(step)
                .max_available_value(ceiling)
                .label_count(label_count),
        )
        .expect("valid args");
        layout(&mut slider, 300.0, 16.0);

        let mut crossed = Vec::new();
        drag(&mut slider, &drags, |s| {
            if s.value() > ceiling || s.committed_value() > ceiling {
                crossed.push(s.value());
            }
        });
        for index in presses {
            slider.press_tick(index);
            if slider.value() > ceiling || slider.committed_value() > ceiling {
                crossed.push(slider.value());
            }
        }
        prop_assert!(crossed.is_empty(), "crossed ceiling {}: {:?}", ceiling, crossed);
    }
}
