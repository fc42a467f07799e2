use std::time::{Duration, Instant};

use disclosure::{
    AnimatedValue, AnimationState, Easing, PanelStyle, TransitionConfig, TransitionProperty,
    Transitions,
};

const ALL_EASINGS: [Easing; 5] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::Spring,
];

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_spring_front_loaded() {
    // Most of the distance is covered early, like a stiff spring release.
    assert!(Easing::Spring.apply(0.5) > Easing::EaseOut.apply(0.5));
    assert!(Easing::Spring.apply(0.5) < 1.0);
}

#[test]
fn test_easing_spring_does_not_overshoot() {
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let v = Easing::Spring.apply(t);
        assert!((0.0..=1.0).contains(&v), "spring out of range at t={}: {}", t, v);
    }
}

#[test]
fn test_easing_spring_clamps_input() {
    assert_eq!(Easing::Spring.apply(-0.5), 0.0);
    assert_eq!(Easing::Spring.apply(1.5), 1.0);
}

#[test]
fn test_easing_boundaries() {
    for easing in ALL_EASINGS {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in ALL_EASINGS {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// TransitionConfig / Transitions Tests
// =============================================================================

#[test]
fn test_transition_config_default_is_short_spring() {
    let config = TransitionConfig::default();
    assert_eq!(config.easing, Easing::Spring);
    assert_eq!(config.duration, Duration::from_millis(300));
}

#[test]
fn test_transitions_default_empty() {
    let t = Transitions::new();
    assert!(!t.has_any());
}

#[test]
fn test_transitions_individual_properties() {
    let t = Transitions::new().opacity(Duration::from_millis(100), Easing::Linear);
    assert!(t.has_any());
    assert!(t.max_height.is_none());
    assert_eq!(
        t.opacity,
        Some(TransitionConfig::new(Duration::from_millis(100), Easing::Linear))
    );
}

#[test]
fn test_transitions_spring_covers_both_properties() {
    let t = Transitions::spring();
    assert_eq!(t.max_height, Some(TransitionConfig::default()));
    assert_eq!(t.opacity, Some(TransitionConfig::default()));
}

// =============================================================================
// AnimatedValue Tests
// =============================================================================

#[test]
fn test_animated_value_at_rest() {
    let now = Instant::now();
    let value = AnimatedValue::new(3.0);
    assert_eq!(value.value_at(now), 3.0);
    assert!(!value.is_animating_at(now));
}

#[test]
fn test_animated_value_linear_midpoint() {
    let t0 = Instant::now();
    let mut value = AnimatedValue::new(0.0);
    value.retarget(
        100.0,
        Some(TransitionConfig::new(Duration::from_millis(200), Easing::Linear)),
        t0,
    );

    let mid = value.value_at(t0 + Duration::from_millis(100));
    assert!((mid - 50.0).abs() < 0.01);
    assert!(value.is_animating_at(t0 + Duration::from_millis(100)));
    assert_eq!(value.value_at(t0 + Duration::from_millis(200)), 100.0);
    assert!(!value.is_animating_at(t0 + Duration::from_millis(200)));
}

#[test]
fn test_animated_value_without_config_jumps() {
    let now = Instant::now();
    let mut value = AnimatedValue::new(0.0);
    value.retarget(1.0, None, now);
    assert_eq!(value.value_at(now), 1.0);
    assert!(!value.is_animating_at(now));
}

#[test]
fn test_animated_value_retarget_continues_from_current() {
    let t0 = Instant::now();
    let config = Some(TransitionConfig::new(Duration::from_millis(200), Easing::Linear));
    let mut value = AnimatedValue::new(0.0);
    value.retarget(100.0, config, t0);

    let t1 = t0 + Duration::from_millis(50);
    let before = value.value_at(t1);
    value.retarget(0.0, config, t1);

    // No snap at the moment of retargeting.
    assert_eq!(value.value_at(t1), before);
    assert_eq!(value.target(), 0.0);

    // Heads back down from there.
    let later = value.value_at(t1 + Duration::from_millis(100));
    assert!(later < before);
    assert_eq!(value.value_at(t1 + Duration::from_millis(200)), 0.0);
}

#[test]
fn test_animated_value_same_target_keeps_transition() {
    let t0 = Instant::now();
    let config = Some(TransitionConfig::new(Duration::from_millis(200), Easing::Linear));
    let mut value = AnimatedValue::new(0.0);
    value.retarget(100.0, config, t0);
    value.retarget(100.0, config, t0 + Duration::from_millis(100));

    // Still on the first schedule.
    assert_eq!(value.value_at(t0 + Duration::from_millis(200)), 100.0);
}

#[test]
fn test_animated_value_prune() {
    let t0 = Instant::now();
    let mut value = AnimatedValue::new(0.0);
    value.retarget(1.0, Some(TransitionConfig::default()), t0);

    value.prune(t0 + Duration::from_millis(100));
    assert!(value.is_animating_at(t0 + Duration::from_millis(100)));

    value.prune(t0 + Duration::from_millis(300));
    assert!(!value.is_animating_at(t0));
    assert_eq!(value.value_at(t0), 1.0);
}

// =============================================================================
// AnimationState Tests
// =============================================================================

#[test]
fn test_animation_state_starts_collapsed() {
    let now = Instant::now();
    let state = AnimationState::default();
    assert_eq!(state.style_at(now), PanelStyle::COLLAPSED);
    assert!(!state.has_active_transitions_at(now));
}

#[test]
fn test_animation_state_animates_both_properties() {
    let t0 = Instant::now();
    let mut state = AnimationState::default();
    state.animate_to(PanelStyle::expanded(1000.0), &Transitions::spring(), t0);

    let mid = t0 + Duration::from_millis(60);
    assert!(state.has_active_transitions_at(mid));
    let height = state.get_interpolated(TransitionProperty::MaxHeight, mid);
    let opacity = state.get_interpolated(TransitionProperty::Opacity, mid);
    assert!(height > 0.0 && height < 1000.0);
    assert!(opacity > 0.0 && opacity < 1.0);

    let done = t0 + Duration::from_millis(300);
    assert_eq!(state.style_at(done), PanelStyle::expanded(1000.0));
    assert!(!state.has_active_transitions_at(done));
}

#[test]
fn test_animation_state_reduced_motion() {
    let now = Instant::now();
    let mut state = AnimationState::default();
    state.set_reduced_motion(true);
    state.animate_to(PanelStyle::expanded(500.0), &Transitions::spring(), now);

    // With reduced motion, transitions are skipped
    assert!(!state.has_active_transitions_at(now));
    assert_eq!(state.style_at(now), PanelStyle::expanded(500.0));
}

#[test]
fn test_animation_state_target() {
    let now = Instant::now();
    let mut state = AnimationState::default();
    state.animate_to(PanelStyle::expanded(800.0), &Transitions::spring(), now);
    assert_eq!(state.target(), PanelStyle::expanded(800.0));
}
