use std::time::Duration;

/// Angular frequency of the spring curve, per unit of normalized time.
///
/// High enough that the unnormalized curve is within 0.05% of rest at t = 1.
const SPRING_OMEGA: f32 = 10.0;

/// Default duration of a disclosure transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A spring-eased transition of the given duration.
    pub fn spring(duration: Duration) -> Self {
        Self::new(duration, Easing::Spring)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::spring(DEFAULT_DURATION)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Critically damped spring: fast start, no overshoot, settles at 1.
    Spring,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Spring => {
                let t = t.clamp(0.0, 1.0);
                if t >= 1.0 {
                    return 1.0;
                }
                critically_damped(t) / critically_damped(1.0)
            }
        }
    }
}

/// Step response of a critically damped oscillator starting at rest.
fn critically_damped(t: f32) -> f32 {
    1.0 - (1.0 + SPRING_OMEGA * t) * (-SPRING_OMEGA * t).exp()
}

/// Per-property transition configuration for a disclosure panel.
///
/// A property without a configuration jumps straight to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transitions {
    pub max_height: Option<TransitionConfig>,
    pub opacity: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_height(mut self, duration: Duration, easing: Easing) -> Self {
        self.max_height = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn opacity(mut self, duration: Duration, easing: Easing) -> Self {
        self.opacity = Some(TransitionConfig::new(duration, easing));
        self
    }

    /// Set the same transition for every property.
    pub fn all(self, duration: Duration, easing: Easing) -> Self {
        self.max_height(duration, easing).opacity(duration, easing)
    }

    /// The panel default: both properties spring over [`DEFAULT_DURATION`].
    pub fn spring() -> Self {
        Self::new().all(DEFAULT_DURATION, Easing::Spring)
    }

    /// Returns true if any transition is configured.
    pub fn has_any(&self) -> bool {
        self.max_height.is_some() || self.opacity.is_some()
    }
}
