//! Disclosure configuration.

use crate::transitions::Transitions;

/// Default height cap of the revealed panel, large enough for a few
/// paragraphs and a code block without clipping.
pub const DEFAULT_HEIGHT_CAP: f32 = 1000.0;

/// Per-widget configuration.
///
/// Every field has a default matching the course site; override with the
/// builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureConfig {
    /// Build tool launcher used in the command block (`./<runner> <task>`).
    pub runner: String,

    /// Build script the module's plugin must be applied in.
    pub build_file: String,

    /// Settings file the new module must be added to.
    pub settings_file: String,

    /// Height the panel animates to when expanded.
    pub height_cap: f32,

    /// Transitions used for expand/collapse.
    pub transitions: Transitions,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            runner: "gradlew".into(),
            build_file: "build.gradle.kts".into(),
            settings_file: "settings.gradle.kts".into(),
            height_cap: DEFAULT_HEIGHT_CAP,
            transitions: Transitions::spring(),
        }
    }
}

impl DisclosureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the build tool launcher.
    pub fn runner(mut self, runner: impl Into<String>) -> Self {
        self.runner = runner.into();
        self
    }

    /// Set the build script name.
    pub fn build_file(mut self, file: impl Into<String>) -> Self {
        self.build_file = file.into();
        self
    }

    /// Set the settings file name.
    pub fn settings_file(mut self, file: impl Into<String>) -> Self {
        self.settings_file = file.into();
        self
    }

    /// Set the expanded height cap.
    pub fn height_cap(mut self, cap: f32) -> Self {
        self.height_cap = cap;
        self
    }

    /// Set the transitions.
    pub fn transitions(mut self, transitions: Transitions) -> Self {
        self.transitions = transitions;
        self
    }
}
