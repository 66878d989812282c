// Activation State
// Active tab index and the single-active-button invariant

use crate::core::element_tree::ElementTree;
use crate::core::registry::ButtonRegistry;

/// Which tab is active
///
/// `active_index` is integral when settled and fractional only while a drag
/// is being followed. The active button is kept as a position in the
/// [`ButtonRegistry`] and resolved on demand, so a rebuilt registry never
/// leaves a dangling reference behind.
#[derive(Debug, Clone, Default)]
pub struct ActivationState {
    active_index: f64,
    active_button: Option<usize>,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> f64 {
        self.active_index
    }

    /// Position of the button currently flagged active
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    pub fn is_transitioning(&self) -> bool {
        self.active_index.fract() > 0.0
    }

    /// Commit `index` as the active tab
    ///
    /// Out-of-range indices are rejected and leave the state untouched.
    /// Returns true if the activation was applied.
    pub fn activate(&mut self, tree: &mut ElementTree, registry: &ButtonRegistry, index: usize) -> bool {
        if index >= registry.len() {
            tracing::warn!(index, count = registry.len(), "rejected out-of-range tab activation");
            return false;
        }

        self.active_index = index as f64;
        self.mark_active(tree, registry, index);
        tracing::debug!(index, "activated tab");
        true
    }

    /// Follow a drag towards `index` without committing a new active button
    ///
    /// The target is clamped to the registry's buttons; non-finite values
    /// and an empty registry leave the state untouched.
    pub fn set_transition_target(&mut self, registry: &ButtonRegistry, index: f64) {
        if !index.is_finite() || registry.is_empty() {
            return;
        }
        let last = (registry.len() - 1) as f64;
        self.active_index = index.clamp(0.0, last);
    }

    /// True when the active index has moved off the committed button
    pub fn is_uncommitted(&self) -> bool {
        match self.active_button {
            Some(button) => self.active_index != button as f64,
            None => true,
        }
    }

    /// Re-assert the active flag after the registry was rebuilt
    ///
    /// Buttons recreated by the host lose their flag; the button now sitting
    /// at the (floored) active index gets it back. If the toolbar shrank
    /// below the active index, the last button takes over.
    pub fn restore(&mut self, tree: &mut ElementTree, registry: &ButtonRegistry) {
        if registry.is_empty() {
            self.active_button = None;
            return;
        }

        let index = self.active_index.floor() as usize;
        if index >= registry.len() {
            let last = registry.len() - 1;
            tracing::debug!(index, last, "active tab removed, falling back to last tab");
            self.active_index = last as f64;
            self.mark_active(tree, registry, last);
        } else {
            self.mark_active(tree, registry, index);
        }
    }

    /// Flag the button at `index` and clear every other button in the registry
    fn mark_active(&mut self, tree: &mut ElementTree, registry: &ButtonRegistry, index: usize) {
        for (position, button) in registry.iter().enumerate() {
            tree.set_active(button, position == index);
        }
        self.active_button = Some(index);
    }
}
