//! Tests for animation

use super::*;
use proptest::prelude::*;

#[test]
fn test_easing_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Bounce,
    ] {
        assert!(easing.apply(0.0).abs() < 1e-9, "{:?} at 0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_clamps_out_of_range_input() {
    assert_eq!(Easing::Linear.apply(-3.0), 0.0);
    assert_eq!(Easing::Linear.apply(7.0), 1.0);
}

#[test]
fn test_ease_out_leads_linear() {
    assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
    assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
}

#[test]
fn test_animation_interpolates_over_duration() {
    let start = Instant::now();
    let anim = Animation::new(0.0, 10.0, start, Duration::from_millis(100), Easing::Linear);

    assert_eq!(anim.value(start), 0.0);
    assert!((anim.value(start + Duration::from_millis(50)) - 5.0).abs() < 1e-9);
    assert_eq!(anim.value(start + Duration::from_millis(100)), 10.0);
    assert_eq!(anim.value(start + Duration::from_secs(5)), 10.0);
}

#[test]
fn test_animation_runs_backwards() {
    let start = Instant::now();
    let anim = Animation::new(1.0, 0.0, start, Duration::from_millis(200), Easing::Linear);
    assert!((anim.value(start + Duration::from_millis(50)) - 0.75).abs() < 1e-9);
    assert!(!anim.is_finished(start + Duration::from_millis(199)));
    assert!(anim.is_finished(start + Duration::from_millis(200)));
}

#[test]
fn test_zero_duration_animation_is_finished_immediately() {
    let start = Instant::now();
    let anim = Animation::new(0.0, 1.0, start, Duration::ZERO, Easing::EaseOut);
    assert!(anim.is_finished(start));
    assert_eq!(anim.value(start), 1.0);
}

#[test]
fn test_transition_immediate_has_no_duration() {
    assert!(Transition::immediate().duration.is_zero());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_monotonic_easings_stay_in_unit_range(t in 0.0f64..=1.0) {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let v = easing.apply(t);
            prop_assert!((0.0..=1.0).contains(&v), "{:?}({}) = {}", easing, t, v);
        }
    }

    #[test]
    fn prop_progress_never_exceeds_one(elapsed_ms in 0u64..10_000, duration_ms in 1u64..5_000) {
        let start = Instant::now();
        let anim = Animation::new(
            0.0,
            1.0,
            start,
            Duration::from_millis(duration_ms),
            Easing::Linear,
        );
        let p = anim.progress(start + Duration::from_millis(elapsed_ms));
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
