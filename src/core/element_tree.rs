// Element Tree (HWND-like handles)
// Host tree that toolbar buttons and their inner labels/icons live in
//
// Usage:
//   let mut tree = ElementTree::new();
//   let toolbar = tree.create_root(ElementKind::Toolbar, Some("main-toolbar"), rect);
//   let button = tree.append_child(toolbar, ElementKind::Button, None, button_rect);
//   // Later...
//   if let Some(hit) = tree.hit_test(toolbar, column, row) {
//       let button = tree.closest(hit, ElementKind::Button);
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to an element in the tree (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What an element is, used for ancestor and descendant queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Scrollable container owning the tab buttons
    Toolbar,
    /// One tab trigger
    Button,
    /// Text inside a button
    Label,
    /// Glyph inside a button
    Icon,
}

/// Layout rectangle of an element
///
/// Coordinates are unscrolled: a button keeps its `x` while the toolbar scrolls,
/// only the on-screen position moves by the toolbar's `scroll_left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementMetrics {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ElementMetrics {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && (x as u32) < self.x as u32 + self.width as u32
            && y >= self.y
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for ElementMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<ElementMetrics> for Rect {
    fn from(metrics: ElementMetrics) -> Self {
        Self {
            x: metrics.x,
            y: metrics.y,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

#[derive(Debug, Clone)]
struct Element {
    name: Option<String>,
    kind: ElementKind,
    metrics: ElementMetrics,
    parent: Option<u64>,
    children: Vec<u64>,
    /// Position among the toolbar's buttons, written by the button registry
    index: Option<usize>,
    /// Active flag, written by the activation state
    active: bool,
    /// Horizontal scroll offset (toolbars only)
    scroll_left: u16,
}

/// Arena of elements with parent/child links
#[derive(Debug, Clone)]
pub struct ElementTree {
    elements: HashMap<u64, Element>,
    name_to_handle: HashMap<String, u64>,
    roots: Vec<u64>,
    next_id: u64,
}

impl ElementTree {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            name_to_handle: HashMap::new(),
            roots: Vec::new(),
            next_id: 1, // 0 is never handed out
        }
    }

    /// Create a parentless element
    pub fn create_root(&mut self, kind: ElementKind, name: Option<&str>, rect: Rect) -> ElementHandle {
        let id = self.insert(kind, name, rect, None);
        self.roots.push(id);
        ElementHandle(id)
    }

    /// Append an element as the last child of `parent`
    /// Returns None if the parent does not exist
    pub fn append_child(
        &mut self,
        parent: ElementHandle,
        kind: ElementKind,
        name: Option<&str>,
        rect: Rect,
    ) -> Option<ElementHandle> {
        if !self.elements.contains_key(&parent.0) {
            return None;
        }
        let id = self.insert(kind, name, rect, Some(parent.0));
        self.elements.get_mut(&parent.0)?.children.push(id);
        Some(ElementHandle(id))
    }

    fn insert(&mut self, kind: ElementKind, name: Option<&str>, rect: Rect, parent: Option<u64>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.elements.insert(
            id,
            Element {
                name: name.map(|s| s.to_string()),
                kind,
                metrics: ElementMetrics::from(rect),
                parent,
                children: Vec::new(),
                index: None,
                active: false,
                scroll_left: 0,
            },
        );
        if let Some(name) = name {
            self.name_to_handle.insert(name.to_string(), id);
        }
        id
    }

    /// Remove an element and its whole subtree
    pub fn remove(&mut self, handle: ElementHandle) -> bool {
        let Some(element) = self.elements.get(&handle.0) else {
            return false;
        };
        match element.parent {
            Some(parent_id) => {
                if let Some(parent) = self.elements.get_mut(&parent_id) {
                    parent.children.retain(|&c| c != handle.0);
                }
            }
            None => self.roots.retain(|&r| r != handle.0),
        }

        let mut stack = vec![handle.0];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.elements.remove(&id) {
                if let Some(name) = removed.name {
                    self.name_to_handle.remove(&name);
                }
                stack.extend(removed.children);
            }
        }
        true
    }

    /// Remove every child of `parent`, keeping the parent itself
    pub fn clear_children(&mut self, parent: ElementHandle) {
        for child in self.children(parent) {
            self.remove(child);
        }
    }

    /// Update an element's layout rectangle
    pub fn update(&mut self, handle: ElementHandle, rect: Rect) -> bool {
        if let Some(element) = self.elements.get_mut(&handle.0) {
            element.metrics = ElementMetrics::from(rect);
            true
        } else {
            false
        }
    }

    pub fn exists(&self, handle: ElementHandle) -> bool {
        self.elements.contains_key(&handle.0)
    }

    pub fn get_handle(&self, name: &str) -> Option<ElementHandle> {
        self.name_to_handle.get(name).map(|&id| ElementHandle(id))
    }

    pub fn get_name(&self, handle: ElementHandle) -> Option<&str> {
        self.elements.get(&handle.0).and_then(|e| e.name.as_deref())
    }

    pub fn get_metrics(&self, handle: ElementHandle) -> Option<ElementMetrics> {
        self.elements.get(&handle.0).map(|e| e.metrics)
    }

    pub fn kind(&self, handle: ElementHandle) -> Option<ElementKind> {
        self.elements.get(&handle.0).map(|e| e.kind)
    }

    pub fn parent(&self, handle: ElementHandle) -> Option<ElementHandle> {
        self.elements
            .get(&handle.0)
            .and_then(|e| e.parent)
            .map(ElementHandle)
    }

    pub fn children(&self, handle: ElementHandle) -> Vec<ElementHandle> {
        self.elements
            .get(&handle.0)
            .map(|e| e.children.iter().map(|&id| ElementHandle(id)).collect())
            .unwrap_or_default()
    }

    /// All descendants of `root` with the given kind, in document (pre-order) order
    pub fn descendants_of_kind(&self, root: ElementHandle, kind: ElementKind) -> Vec<ElementHandle> {
        let mut found = Vec::new();
        let mut stack: Vec<u64> = match self.elements.get(&root.0) {
            Some(element) => element.children.iter().rev().copied().collect(),
            None => return found,
        };

        while let Some(id) = stack.pop() {
            if let Some(element) = self.elements.get(&id) {
                if element.kind == kind {
                    found.push(ElementHandle(id));
                }
                stack.extend(element.children.iter().rev().copied());
            }
        }
        found
    }

    /// Nearest element of `kind`, starting at `handle` itself and walking up the ancestors
    pub fn closest(&self, handle: ElementHandle, kind: ElementKind) -> Option<ElementHandle> {
        let mut current = Some(handle.0);
        while let Some(id) = current {
            let element = self.elements.get(&id)?;
            if element.kind == kind {
                return Some(ElementHandle(id));
            }
            current = element.parent;
        }
        None
    }

    /// Deepest element under the screen point (column, row) inside `root`
    ///
    /// Descendants are tested in content coordinates, i.e. shifted by the
    /// root's horizontal scroll. Later siblings win over earlier ones, as
    /// they paint on top.
    pub fn hit_test(&self, root: ElementHandle, column: u16, row: u16) -> Option<ElementHandle> {
        let root_element = self.elements.get(&root.0)?;
        if !root_element.metrics.contains(column, row) {
            return None;
        }
        let content_column = column.saturating_add(root_element.scroll_left);

        let mut hit = root.0;
        let mut candidates = root_element.children.clone();
        loop {
            let next = candidates.iter().rev().copied().find(|id| {
                self.elements
                    .get(id)
                    .map(|e| e.metrics.contains(content_column, row))
                    .unwrap_or(false)
            });
            match next {
                Some(id) => {
                    hit = id;
                    candidates = self.elements.get(&id).map(|e| e.children.clone()).unwrap_or_default();
                }
                None => return Some(ElementHandle(hit)),
            }
        }
    }

    /// Horizontal distance from the nearest toolbar ancestor's left edge
    pub fn offset_left(&self, handle: ElementHandle) -> Option<u16> {
        let metrics = self.get_metrics(handle)?;
        let origin = self
            .parent(handle)
            .and_then(|p| self.closest(p, ElementKind::Toolbar))
            .and_then(|t| self.get_metrics(t))
            .map(|m| m.x)
            .unwrap_or(0);
        Some(metrics.x.saturating_sub(origin))
    }

    pub fn client_width(&self, handle: ElementHandle) -> Option<u16> {
        self.get_metrics(handle).map(|m| m.width)
    }

    pub fn scroll_left(&self, handle: ElementHandle) -> u16 {
        self.elements.get(&handle.0).map(|e| e.scroll_left).unwrap_or(0)
    }

    pub fn set_scroll_left(&mut self, handle: ElementHandle, scroll_left: u16) -> bool {
        if let Some(element) = self.elements.get_mut(&handle.0) {
            element.scroll_left = scroll_left;
            true
        } else {
            false
        }
    }

    pub fn button_index(&self, handle: ElementHandle) -> Option<usize> {
        self.elements.get(&handle.0).and_then(|e| e.index)
    }

    pub fn set_button_index(&mut self, handle: ElementHandle, index: usize) -> bool {
        if let Some(element) = self.elements.get_mut(&handle.0) {
            element.index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, handle: ElementHandle) -> bool {
        self.elements.get(&handle.0).map(|e| e.active).unwrap_or(false)
    }

    pub fn set_active(&mut self, handle: ElementHandle, active: bool) -> bool {
        if let Some(element) = self.elements.get_mut(&handle.0) {
            element.active = active;
            true
        } else {
            false
        }
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, width: u16) -> Rect {
        Rect { x, y: 0, width, height: 1 }
    }

    fn toolbar_with_label() -> (ElementTree, ElementHandle, ElementHandle, ElementHandle) {
        let mut tree = ElementTree::new();
        let toolbar = tree.create_root(ElementKind::Toolbar, Some("toolbar"), rect(10, 40));
        let button = tree.append_child(toolbar, ElementKind::Button, None, rect(12, 10)).unwrap();
        let label = tree.append_child(button, ElementKind::Label, None, rect(13, 8)).unwrap();
        (tree, toolbar, button, label)
    }

    #[test]
    fn test_closest_walks_up_from_label() {
        let (tree, toolbar, button, label) = toolbar_with_label();
        assert_eq!(tree.closest(label, ElementKind::Button), Some(button));
        assert_eq!(tree.closest(button, ElementKind::Button), Some(button));
        assert_eq!(tree.closest(toolbar, ElementKind::Button), None);
    }

    #[test]
    fn test_hit_test_returns_deepest_element() {
        let (tree, toolbar, button, label) = toolbar_with_label();
        assert_eq!(tree.hit_test(toolbar, 14, 0), Some(label));
        assert_eq!(tree.hit_test(toolbar, 12, 0), Some(button));
        assert_eq!(tree.hit_test(toolbar, 30, 0), Some(toolbar));
        assert_eq!(tree.hit_test(toolbar, 5, 0), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let (mut tree, toolbar, button, _label) = toolbar_with_label();
        tree.set_scroll_left(toolbar, 5);
        // Screen column 10 now shows content column 15, inside the label
        assert_eq!(tree.closest(tree.hit_test(toolbar, 10, 0).unwrap(), ElementKind::Button), Some(button));
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut tree = ElementTree::new();
        let toolbar = tree.create_root(ElementKind::Toolbar, None, rect(0, 30));
        let wrapper = tree.append_child(toolbar, ElementKind::Label, None, rect(0, 20)).unwrap();
        let first = tree.append_child(wrapper, ElementKind::Button, None, rect(0, 10)).unwrap();
        let second = tree.append_child(wrapper, ElementKind::Button, None, rect(10, 10)).unwrap();
        let third = tree.append_child(toolbar, ElementKind::Button, None, rect(20, 10)).unwrap();

        assert_eq!(
            tree.descendants_of_kind(toolbar, ElementKind::Button),
            vec![first, second, third]
        );
    }

    #[test]
    fn test_offset_left_is_relative_to_toolbar() {
        let (tree, _toolbar, button, label) = toolbar_with_label();
        assert_eq!(tree.offset_left(button), Some(2));
        assert_eq!(tree.offset_left(label), Some(3));
        assert_eq!(tree.client_width(button), Some(10));
    }

    #[test]
    fn test_remove_drops_subtree_and_name() {
        let (mut tree, toolbar, button, label) = toolbar_with_label();
        assert!(tree.remove(button));
        assert!(!tree.exists(label));
        assert!(tree.children(toolbar).is_empty());
        assert!(tree.remove(toolbar));
        assert_eq!(tree.get_handle("toolbar"), None);
    }
}
