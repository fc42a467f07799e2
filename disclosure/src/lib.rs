pub mod animation;
pub mod transitions;
pub mod widget;

pub use animation::{AnimatedValue, AnimationState, PanelStyle, TransitionProperty};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use widget::*;
