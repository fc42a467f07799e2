use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig, Transitions};

/// Which property is being transitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    MaxHeight,
    Opacity,
}

/// Visual state of the revealed panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    /// Height cap of the panel in pixels.
    pub max_height: f32,
    /// Opacity between 0.0 (hidden) and 1.0 (visible).
    pub opacity: f32,
}

impl PanelStyle {
    /// Fully collapsed: no height, fully transparent.
    pub const COLLAPSED: Self = Self {
        max_height: 0.0,
        opacity: 0.0,
    };

    /// Fully expanded with the given height cap.
    pub fn expanded(height_cap: f32) -> Self {
        Self {
            max_height: height_cap,
            opacity: 1.0,
        }
    }
}

/// A single active transition.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    fn value_at(&self, now: Instant) -> f32 {
        lerp(self.from, self.to, self.easing.apply(self.progress(now)))
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// A scalar that always animates toward the most recently requested target.
///
/// Retargeting while a transition is in flight starts the new transition
/// from the current interpolated value, so the value never jumps.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    target: f32,
    active: Option<ActiveTransition>,
}

impl AnimatedValue {
    /// A value at rest.
    pub fn new(value: f32) -> Self {
        Self {
            target: value,
            active: None,
        }
    }

    /// The value this animation is heading toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        match &self.active {
            Some(transition) => transition.value_at(now),
            None => self.target,
        }
    }

    /// Returns true while a transition is still running at `now`.
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.active.is_some_and(|t| !t.is_finished(now))
    }

    /// Head toward `to`. Without a config the value jumps immediately.
    pub fn retarget(&mut self, to: f32, config: Option<TransitionConfig>, now: Instant) {
        if to == self.target {
            return;
        }

        let from = self.value_at(now);
        self.target = to;
        self.active = match config {
            Some(config) if !config.duration.is_zero() => Some(ActiveTransition {
                from,
                to,
                start: now,
                duration: config.duration,
                easing: config.easing,
            }),
            _ => None,
        };
    }

    /// Drop the transition once it has completed.
    pub fn prune(&mut self, now: Instant) {
        if self.active.is_some_and(|t| t.is_finished(now)) {
            self.active = None;
        }
    }
}

/// Animation state of one disclosure panel.
#[derive(Debug, Clone)]
pub struct AnimationState {
    max_height: AnimatedValue,
    opacity: AnimatedValue,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(PanelStyle::COLLAPSED)
    }
}

impl AnimationState {
    /// Start at rest with the given style.
    pub fn new(initial: PanelStyle) -> Self {
        Self {
            max_height: AnimatedValue::new(initial.max_height),
            opacity: AnimatedValue::new(initial.opacity),
            reduced_motion: false,
        }
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Retarget every property toward `target`.
    pub fn animate_to(&mut self, target: PanelStyle, transitions: &Transitions, now: Instant) {
        let (height_config, opacity_config) = if self.reduced_motion {
            (None, None)
        } else {
            (transitions.max_height, transitions.opacity)
        };

        self.max_height
            .retarget(target.max_height, height_config, now);
        self.opacity.retarget(target.opacity, opacity_config, now);
    }

    /// Returns true if any transition is still running at `now`.
    pub fn has_active_transitions_at(&self, now: Instant) -> bool {
        self.max_height.is_animating_at(now) || self.opacity.is_animating_at(now)
    }

    /// Interpolated value of a single property.
    pub fn get_interpolated(&self, property: TransitionProperty, now: Instant) -> f32 {
        match property {
            TransitionProperty::MaxHeight => self.max_height.value_at(now),
            TransitionProperty::Opacity => self.opacity.value_at(now),
        }
    }

    /// Interpolated style at `now`.
    pub fn style_at(&self, now: Instant) -> PanelStyle {
        PanelStyle {
            max_height: self.max_height.value_at(now),
            opacity: self.opacity.value_at(now),
        }
    }

    /// The style every property is heading toward.
    pub fn target(&self) -> PanelStyle {
        PanelStyle {
            max_height: self.max_height.target(),
            opacity: self.opacity.target(),
        }
    }

    /// Remove completed transitions. Called once per frame.
    pub fn prune(&mut self, now: Instant) {
        self.max_height.prune(now);
        self.opacity.prune(now);
    }
}

/// Linear interpolation for f32 values.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
