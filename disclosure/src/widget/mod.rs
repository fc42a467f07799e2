//! Disclosure widget - reveals module setup instructions on demand.
//!
//! The widget renders a summary header and, beneath it, a panel holding
//! arbitrary child content followed by a fixed footer: which plugin module
//! to apply, the command to run, and a reminder to register the module in
//! the settings file.
//!
//! The panel's height cap and opacity animate between the collapsed and
//! expanded values; see [`crate::animation`].

mod config;
mod content;
mod events;
mod footer;
mod state;

pub use config::{DEFAULT_HEIGHT_CAP, DisclosureConfig};
pub use content::{Block, Inline};
pub use events::{EventResult, Interaction, Key, Modifiers, Target};
pub use footer::{COMMAND_LANGUAGE, command_line, setup_footer};
pub use state::{DEFAULT_SUMMARY, Disclosure, DisclosureId, DisclosureState, DisclosureView};
