// Button Registry
// Ordered index of the tab buttons owned by a toolbar

use crate::core::element_tree::{ElementHandle, ElementKind, ElementTree};

/// Layout of one button as read from the element tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
    /// Distance from the toolbar's left edge
    pub offset_left: f64,
    pub width: f64,
}

/// Ordered, non-owning list of a toolbar's buttons
///
/// Rebuilt with [`ButtonRegistry::reindex`] whenever the toolbar's children
/// may have changed; positions in the list are the buttons' tab indices.
#[derive(Debug, Clone, Default)]
pub struct ButtonRegistry {
    buttons: Vec<ElementHandle>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the toolbar's buttons in document order and number them from zero
    pub fn reindex(&mut self, tree: &mut ElementTree, toolbar: ElementHandle) -> &[ElementHandle] {
        let buttons = tree.descendants_of_kind(toolbar, ElementKind::Button);
        for (index, &button) in buttons.iter().enumerate() {
            tree.set_button_index(button, index);
        }
        tracing::trace!(count = buttons.len(), "reindexed toolbar buttons");
        self.buttons = buttons;
        &self.buttons
    }

    pub fn get(&self, index: usize) -> Option<ElementHandle> {
        self.buttons.get(index).copied()
    }

    pub fn position(&self, button: ElementHandle) -> Option<usize> {
        self.buttons.iter().position(|&b| b == button)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementHandle> + '_ {
        self.buttons.iter().copied()
    }

    /// Current layout of the button at `index`
    pub fn layout(&self, tree: &ElementTree, index: usize) -> Option<ButtonLayout> {
        let button = self.get(index)?;
        Some(ButtonLayout {
            offset_left: f64::from(tree.offset_left(button)?),
            width: f64::from(tree.client_width(button)?),
        })
    }
}
