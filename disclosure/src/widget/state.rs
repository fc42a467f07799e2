//! Disclosure widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use log::trace;

use crate::animation::{AnimationState, PanelStyle};

use super::config::DisclosureConfig;
use super::content::Block;
use super::footer::setup_footer;

/// Header text shown on the clickable summary.
pub const DEFAULT_SUMMARY: &str = "Comencemos por crear un módulo para la lección...";

/// Unique identifier for a Disclosure widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisclosureId(usize);

impl DisclosureId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__disclosure_{}", self.0)
    }
}

/// Logical state of a disclosure.
///
/// Being mid-animation is not a state of its own; it only shows up in the
/// interpolated [`PanelStyle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    /// The other state.
    pub fn flipped(self) -> Self {
        match self {
            DisclosureState::Collapsed => DisclosureState::Expanded,
            DisclosureState::Expanded => DisclosureState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DisclosureState::Expanded
    }
}

/// Everything a renderer needs to draw one frame of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureView {
    /// Widget id, for binding the header to the panel.
    pub id: String,
    /// Header text.
    pub summary: String,
    /// Value of the header's `aria-expanded` attribute.
    pub aria_expanded: bool,
    /// Interpolated panel style.
    pub style: PanelStyle,
    /// Children followed by the setup footer.
    pub body: Vec<Block>,
}

/// Internal state for a Disclosure widget
#[derive(Debug)]
struct DisclosureInner {
    state: DisclosureState,
    summary: String,
    module: String,
    task: String,
    children: Vec<Block>,
    config: DisclosureConfig,
    animation: AnimationState,
}

impl DisclosureInner {
    fn target_style(&self) -> PanelStyle {
        match self.state {
            DisclosureState::Collapsed => PanelStyle::COLLAPSED,
            DisclosureState::Expanded => PanelStyle::expanded(self.config.height_cap),
        }
    }

    fn set_state(&mut self, state: DisclosureState, now: Instant) {
        self.state = state;
        let target = self.target_style();
        self.animation
            .animate_to(target, &self.config.transitions, now);
    }

    fn body(&self) -> Vec<Block> {
        let mut body = self.children.clone();
        body.extend(setup_footer(&self.module, &self.task, &self.config));
        body
    }
}

/// A collapsible panel revealing module setup instructions.
///
/// The header toggles between [`DisclosureState::Collapsed`] (initial) and
/// [`DisclosureState::Expanded`]. The logical state flips immediately on
/// every toggle; the panel's height cap and opacity follow through an
/// interruptible spring transition.
///
/// Cloning yields another handle to the same widget.
///
/// # Example
///
/// ```
/// use disclosure::{Block, Disclosure};
///
/// let setup = Disclosure::new("convention-plugins", "build")
///     .child(Block::paragraph("Crea un módulo nuevo llamado `lesson-1`."));
///
/// setup.toggle();
/// assert!(setup.aria_expanded());
/// ```
#[derive(Debug)]
pub struct Disclosure {
    id: DisclosureId,
    inner: Arc<RwLock<DisclosureInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Disclosure {
    /// Create a collapsed disclosure for a configuration module and task.
    pub fn new(module: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            id: DisclosureId::new(),
            inner: Arc::new(RwLock::new(DisclosureInner {
                state: DisclosureState::Collapsed,
                summary: DEFAULT_SUMMARY.into(),
                module: module.into(),
                task: task.into(),
                children: Vec::new(),
                config: DisclosureConfig::default(),
                animation: AnimationState::new(PanelStyle::COLLAPSED),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the configuration.
    pub fn with_config(self, config: DisclosureConfig) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.config = config;
            let state = guard.state;
            guard.set_state(state, Instant::now());
        }
        self
    }

    /// Set the header text.
    pub fn summary(self, summary: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.summary = summary.into();
        }
        self
    }

    /// Set the revealed children.
    pub fn children(self, children: Vec<Block>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.children = children;
        }
        self
    }

    /// Add a single child.
    pub fn child(self, child: Block) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.children.push(child);
        }
        self
    }

    /// Enable or disable reduced motion for this widget.
    pub fn reduced_motion(self, enabled: bool) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.animation.set_reduced_motion(enabled);
        }
        self
    }

    /// Get the unique ID for this disclosure
    pub fn id(&self) -> DisclosureId {
        self.id
    }

    /// Get the ID as a string (for node binding)
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Current logical state.
    pub fn state(&self) -> DisclosureState {
        self.inner
            .read()
            .map(|guard| guard.state)
            .unwrap_or_default()
    }

    /// Check if the disclosure is expanded
    pub fn is_expanded(&self) -> bool {
        self.state().is_expanded()
    }

    /// Value of the header's `aria-expanded` attribute.
    ///
    /// Tracks the logical state, never the animation.
    pub fn aria_expanded(&self) -> bool {
        self.is_expanded()
    }

    /// The configuration module named in the footer.
    pub fn module(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.module.clone())
            .unwrap_or_default()
    }

    /// The task run by the footer command.
    pub fn task(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.task.clone())
            .unwrap_or_default()
    }

    /// The setup footer blocks.
    pub fn footer(&self) -> Vec<Block> {
        self.inner
            .read()
            .map(|guard| setup_footer(&guard.module, &guard.task, &guard.config))
            .unwrap_or_default()
    }

    /// Interpolated panel style at `now`.
    pub fn style_at(&self, now: Instant) -> PanelStyle {
        self.inner
            .read()
            .map(|guard| guard.animation.style_at(now))
            .unwrap_or(PanelStyle::COLLAPSED)
    }

    /// The style the panel is animating toward.
    pub fn target_style(&self) -> PanelStyle {
        self.inner
            .read()
            .map(|guard| guard.target_style())
            .unwrap_or(PanelStyle::COLLAPSED)
    }

    /// Returns true while the panel is still moving at `now`.
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.inner
            .read()
            .map(|guard| guard.animation.has_active_transitions_at(now))
            .unwrap_or(false)
    }

    /// Snapshot for rendering the frame at `now`.
    pub fn view_at(&self, now: Instant) -> DisclosureView {
        let id = self.id_string();
        match self.inner.read() {
            Ok(guard) => DisclosureView {
                id,
                summary: guard.summary.clone(),
                aria_expanded: guard.state.is_expanded(),
                style: guard.animation.style_at(now),
                body: guard.body(),
            },
            Err(_) => DisclosureView {
                id,
                summary: String::new(),
                aria_expanded: false,
                style: PanelStyle::COLLAPSED,
                body: Vec::new(),
            },
        }
    }

    /// Snapshot for rendering the current frame.
    pub fn view(&self) -> DisclosureView {
        self.view_at(Instant::now())
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Flip the logical state, retargeting the animation from `now`.
    pub fn toggle_at(&self, now: Instant) {
        if let Ok(mut guard) = self.inner.write() {
            let next = guard.state.flipped();
            guard.set_state(next, now);
            self.dirty.store(true, Ordering::SeqCst);
            trace!("{} toggled to {:?}", self.id, next);
        }
    }

    /// Flip the logical state.
    pub fn toggle(&self) {
        self.toggle_at(Instant::now());
    }

    /// Set the expanded state at `now`. No-op if already there.
    pub fn set_expanded_at(&self, expanded: bool, now: Instant) {
        let state = if expanded {
            DisclosureState::Expanded
        } else {
            DisclosureState::Collapsed
        };
        if let Ok(mut guard) = self.inner.write()
            && guard.state != state
        {
            guard.set_state(state, now);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the expanded state
    pub fn set_expanded(&self, expanded: bool) {
        self.set_expanded_at(expanded, Instant::now());
    }

    /// Expand the disclosure
    pub fn expand(&self) {
        self.set_expanded(true);
    }

    /// Collapse the disclosure
    pub fn collapse(&self) {
        self.set_expanded(false);
    }

    /// Per-frame update: drops finished transitions.
    pub fn tick(&self, now: Instant) {
        if let Ok(mut guard) = self.inner.write() {
            guard.animation.prune(now);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Disclosure {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
