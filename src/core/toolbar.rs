// Super Tabs Toolbar
// Routes clicks, resizes and drags into activation and indicator alignment

use crate::config::{SuperTabsConfig, ToolbarConfig, ToolbarPosition};
use crate::core::activation::ActivationState;
use crate::core::element_tree::{ElementHandle, ElementKind, ElementTree};
use crate::core::events::ToolbarEvent;
use crate::core::geometry::IndicatorGeometry;
use crate::core::publisher::{IndicatorPublisher, IndicatorStyle};
use crate::core::registry::ButtonRegistry;

/// Notifications emitted to whoever hosts the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarNotification {
    /// A button was clicked (or clicked programmatically)
    ButtonClicked { button: ElementHandle, index: usize },
    /// A tab was committed as active
    Activated { index: usize },
}

/// Interactive core of a tab toolbar
///
/// Owns the button registry, the activation state and the indicator
/// publisher for one toolbar element. The element tree stays with the host
/// and is passed in by reference, the way layout is owned by the host.
///
/// # Usage
///
/// ```rust,ignore
/// let mut toolbar = SuperTabsToolbar::new(toolbar_handle, &config.toolbar, &config.super_tabs);
/// toolbar.on_children_changed(&mut tree);
///
/// // Input
/// toolbar.dispatch(&mut tree, EventHandler::handle(event));
///
/// // Before painting
/// toolbar.run_frame(&tree);
/// for notification in toolbar.take_notifications() { /* ... */ }
/// ```
#[derive(Debug)]
pub struct SuperTabsToolbar {
    handle: ElementHandle,
    position: ToolbarPosition,
    color: String,
    buttons: ButtonRegistry,
    state: ActivationState,
    publisher: IndicatorPublisher,
    notifications: Vec<ToolbarNotification>,
    /// Set while a press that started on the toolbar is held
    pointer_down: bool,
}

impl SuperTabsToolbar {
    pub fn new(handle: ElementHandle, config: &ToolbarConfig, shared: &SuperTabsConfig) -> Self {
        Self {
            handle,
            position: config.position,
            color: config.color.clone(),
            buttons: ButtonRegistry::new(),
            state: ActivationState::new(),
            publisher: IndicatorPublisher::new(
                config.show_indicator,
                shared.transition_duration,
                config.frame_policy.scheduler(),
            ),
            notifications: Vec::new(),
            pointer_down: false,
        }
    }

    pub fn handle(&self) -> ElementHandle {
        self.handle
    }

    pub fn position(&self) -> ToolbarPosition {
        self.position
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    pub fn active_index(&self) -> f64 {
        self.state.active_index()
    }

    /// Index of the committed tab, ignoring any drag in progress
    pub fn active_button(&self) -> Option<usize> {
        self.state.active_button()
    }

    pub fn show_indicator(&self) -> bool {
        self.publisher.show_indicator()
    }

    /// Style last written onto the indicator
    pub fn indicator_style(&self) -> Option<IndicatorStyle> {
        self.publisher.style()
    }

    pub fn is_dragging(&self) -> bool {
        self.publisher.is_dragging()
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                      Public operations                                     │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Programmatic click: notify, then commit the button's tab
    pub fn on_button_click(&mut self, tree: &mut ElementTree, button: ElementHandle) -> bool {
        let Some(index) = self.buttons.position(button) else {
            tracing::debug!(button = button.id(), "button is not part of this toolbar");
            return false;
        };
        self.notifications.push(ToolbarNotification::ButtonClicked { button, index });
        self.set_active_tab(tree, index)
    }

    /// Commit `index` as the active tab and align the indicator to it
    pub fn set_active_tab(&mut self, tree: &mut ElementTree, index: usize) -> bool {
        if !self.state.activate(tree, &self.buttons, index) {
            return false;
        }
        self.publisher.schedule(index as f64);
        self.notifications.push(ToolbarNotification::Activated { index });
        true
    }

    /// Align the indicator to `index` without committing it; fractions follow a drag
    pub fn set_selected_tab(&mut self, index: f64) {
        self.publisher.schedule(index);
    }

    /// Report drag progress towards a fractional tab index
    pub fn follow_drag(&mut self, index: f64) {
        self.state.set_transition_target(&self.buttons, index);
        self.publisher.schedule(self.state.active_index());
    }

    /// Commit the tab nearest to the drag position
    ///
    /// Returns false if the drag ended on the tab that was already committed.
    pub fn settle(&mut self, tree: &mut ElementTree) -> bool {
        if self.buttons.is_empty() || !self.state.is_uncommitted() {
            return false;
        }
        let nearest = self.state.active_index().round() as usize;
        self.set_active_tab(tree, nearest.min(self.buttons.len().saturating_sub(1)))
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                       Event handlers                                       │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Click on `target`: resolve it to its enclosing button and activate it
    ///
    /// Returns the resolved button, or None when the click landed on the
    /// toolbar background (or outside the toolbar's buttons).
    pub fn on_click(&mut self, tree: &mut ElementTree, target: ElementHandle) -> Option<ElementHandle> {
        let button = tree.closest(target, ElementKind::Button)?;
        let Some(index) = self.buttons.position(button) else {
            tracing::trace!(button = button.id(), "ignored click on unregistered button");
            return None;
        };

        if !self.set_active_tab(tree, index) {
            return None;
        }
        self.notifications.push(ToolbarNotification::ButtonClicked { button, index });
        Some(button)
    }

    /// Click at a screen cell
    pub fn on_click_at(&mut self, tree: &mut ElementTree, column: u16, row: u16) -> Option<ElementHandle> {
        let target = tree.hit_test(self.handle, column, row)?;
        self.on_click(tree, target)
    }

    /// The viewport changed size; offsets must be measured again
    pub fn on_resize(&mut self) {
        self.publisher.schedule(self.state.active_index());
    }

    /// The toolbar's children may have been added, removed or reordered
    pub fn on_children_changed(&mut self, tree: &mut ElementTree) {
        self.buttons.reindex(tree, self.handle);
        self.state.restore(tree, &self.buttons);
        self.publisher.schedule(self.state.active_index());
    }

    /// Scroll the toolbar content by `delta` cells, clamped to its overflow
    pub fn scroll_by(&mut self, tree: &mut ElementTree, delta: i32) {
        let Some(metrics) = tree.get_metrics(self.handle) else {
            return;
        };
        let content_width = self
            .buttons
            .iter()
            .filter_map(|b| Some(tree.offset_left(b)? + tree.client_width(b)?))
            .max()
            .unwrap_or(0);
        let max_scroll = i32::from(content_width.saturating_sub(metrics.width));
        let scroll = (i32::from(tree.scroll_left(self.handle)) + delta).clamp(0, max_scroll);

        tree.set_scroll_left(self.handle, scroll as u16);
        self.publisher.schedule(self.state.active_index());
    }

    /// Activate the neighbouring tab, wrapping at either end
    pub fn navigate(&mut self, tree: &mut ElementTree, direction: i32) -> bool {
        let count = self.buttons.len();
        if count == 0 {
            return false;
        }
        let current = (self.state.active_index().round() as usize).min(count - 1);
        let next = if direction < 0 {
            if current > 0 { current - 1 } else { count - 1 }
        } else {
            (current + 1) % count
        };
        self.set_active_tab(tree, next)
    }

    /// Fractional tab index under a screen column
    ///
    /// Measured between button centres, so a pointer over the middle of
    /// button `i` maps to exactly `i`. Clamped to the first and last button.
    pub fn index_at_column(&self, tree: &ElementTree, column: u16) -> Option<f64> {
        let origin = tree.get_metrics(self.handle)?.x;
        let x = f64::from(column) - f64::from(origin) + f64::from(tree.scroll_left(self.handle));

        let centres: Vec<f64> = (0..self.buttons.len())
            .filter_map(|i| self.buttons.layout(tree, i))
            .map(|layout| layout.offset_left + layout.width / 2.0)
            .collect();
        let (first, last) = (*centres.first()?, *centres.last()?);

        if x <= first {
            return Some(0.0);
        }
        if x >= last {
            return Some((centres.len() - 1) as f64);
        }
        centres.windows(2).enumerate().find_map(|(i, pair)| {
            let (a, b) = (pair[0], pair[1]);
            (x >= a && x < b && b > a).then(|| i as f64 + (x - a) / (b - a))
        })
    }

    /// Route a toolbar event; returns true if it was handled
    pub fn dispatch(&mut self, tree: &mut ElementTree, event: ToolbarEvent) -> bool {
        match event {
            ToolbarEvent::Click { column, row } => {
                let inside = tree.hit_test(self.handle, column, row).is_some();
                self.pointer_down = inside;
                inside && self.on_click_at(tree, column, row).is_some()
            }
            ToolbarEvent::Drag { column, .. } if self.pointer_down => {
                match self.index_at_column(tree, column) {
                    Some(index) => {
                        self.follow_drag(index);
                        true
                    }
                    None => false,
                }
            }
            ToolbarEvent::Release { .. } if self.pointer_down => {
                self.pointer_down = false;
                self.settle(tree)
            }
            ToolbarEvent::Previous => self.navigate(tree, -1),
            ToolbarEvent::Next => self.navigate(tree, 1),
            ToolbarEvent::ScrollLeft(step) => {
                self.scroll_by(tree, -i32::from(step));
                true
            }
            ToolbarEvent::ScrollRight(step) => {
                self.scroll_by(tree, i32::from(step));
                true
            }
            ToolbarEvent::Resize { .. } => {
                self.on_resize();
                true
            }
            _ => false,
        }
    }

    /// Paint opportunity: run the alignments scheduled since the last frame
    pub fn run_frame(&mut self, tree: &ElementTree) -> Option<IndicatorGeometry> {
        self.publisher.run_frame(tree, &self.buttons, self.handle)
    }

    /// Drain the notifications emitted since the last call
    pub fn take_notifications(&mut self) -> Vec<ToolbarNotification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::publisher::FramePolicy;
    use ratatui::layout::Rect;
    use std::time::Duration;

    struct Fixture {
        tree: ElementTree,
        toolbar_handle: ElementHandle,
        buttons: Vec<ElementHandle>,
        labels: Vec<ElementHandle>,
        toolbar: SuperTabsToolbar,
    }

    /// Three 80-wide buttons at offsets 0, 80 and 160, each holding a label
    fn fixture(config: ToolbarConfig) -> Fixture {
        let mut tree = ElementTree::new();
        let toolbar_handle = tree.create_root(ElementKind::Toolbar, Some("toolbar"), Rect::new(0, 0, 240, 2));
        let mut buttons = Vec::new();
        let mut labels = Vec::new();
        for i in 0..3u16 {
            let button = tree
                .append_child(toolbar_handle, ElementKind::Button, None, Rect::new(i * 80, 0, 80, 1))
                .unwrap();
            let label = tree
                .append_child(button, ElementKind::Label, None, Rect::new(i * 80 + 2, 0, 20, 1))
                .unwrap();
            buttons.push(button);
            labels.push(label);
        }

        let shared = SuperTabsConfig { transition_duration: 300 };
        let mut toolbar = SuperTabsToolbar::new(toolbar_handle, &config, &shared);
        toolbar.on_children_changed(&mut tree);
        toolbar.run_frame(&tree);
        Fixture { tree, toolbar_handle, buttons, labels, toolbar }
    }

    fn clicked(notifications: &[ToolbarNotification]) -> Vec<usize> {
        notifications
            .iter()
            .filter_map(|n| match n {
                ToolbarNotification::ButtonClicked { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    fn active_flags(f: &Fixture) -> Vec<bool> {
        f.buttons.iter().map(|&b| f.tree.is_active(b)).collect()
    }

    #[test]
    fn test_mount_activates_first_tab() {
        let f = fixture(ToolbarConfig::default());
        assert_eq!(active_flags(&f), vec![true, false, false]);
        assert_eq!(f.tree.button_index(f.buttons[2]), Some(2));
        if f.toolbar.show_indicator() {
            assert_eq!(f.toolbar.indicator_style().unwrap().position_x, 0.0);
        }
    }

    #[test]
    fn test_activate_then_drag_then_resize_scenario() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });

        assert!(f.toolbar.set_active_tab(&mut f.tree, 1));
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry, IndicatorGeometry { position_x: 80.0, width: 80.0, is_interpolating: false });

        f.toolbar.set_selected_tab(1.5);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry, IndicatorGeometry { position_x: 120.0, width: 80.0, is_interpolating: true });
        assert_eq!(f.toolbar.indicator_style().unwrap().transition_duration, Duration::ZERO);
        // Geometry-only: activation is unchanged
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert_eq!(active_flags(&f), vec![false, true, false]);

        // Viewport grows, offsets shift to 0, 90, 180
        for (i, &button) in f.buttons.iter().enumerate() {
            f.tree.update(button, Rect::new(i as u16 * 90, 0, 80, 1));
        }
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Resize { width: 270, height: 10 }));
        f.toolbar.set_selected_tab(0.0);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 0.0);
        assert_eq!(geometry.width, 80.0);
        assert_eq!(f.toolbar.indicator_style().unwrap().transition_duration, Duration::from_millis(300));
    }

    #[test]
    fn test_resize_realigns_to_active_tab() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });
        f.toolbar.set_active_tab(&mut f.tree, 2);
        f.toolbar.run_frame(&f.tree);

        f.tree.update(f.buttons[2], Rect::new(200, 0, 60, 1));
        f.toolbar.on_resize();
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 200.0);
        assert_eq!(geometry.width, 60.0);
    }

    #[test]
    fn test_click_on_inner_label_resolves_button() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.take_notifications();

        let resolved = f.toolbar.on_click(&mut f.tree, f.labels[2]);
        assert_eq!(resolved, Some(f.buttons[2]));
        assert_eq!(f.toolbar.active_index(), 2.0);
        assert_eq!(active_flags(&f), vec![false, false, true]);
        assert_eq!(clicked(&f.toolbar.take_notifications()), vec![2]);
    }

    #[test]
    fn test_click_at_screen_cell() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.take_notifications();

        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 165, row: 0 }));
        assert_eq!(f.toolbar.active_index(), 2.0);
        assert_eq!(clicked(&f.toolbar.take_notifications()), vec![2]);
    }

    #[test]
    fn test_click_on_background_is_ignored() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.set_active_tab(&mut f.tree, 1);
        f.toolbar.take_notifications();

        assert_eq!(f.toolbar.on_click(&mut f.tree, f.toolbar_handle), None);
        // Row 1 is inside the toolbar but below every button
        assert!(!f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 10, row: 1 }));
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert!(f.toolbar.take_notifications().is_empty());
    }

    #[test]
    fn test_programmatic_button_click() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.take_notifications();

        assert!(f.toolbar.on_button_click(&mut f.tree, f.buttons[1]));
        let notifications = f.toolbar.take_notifications();
        assert_eq!(
            notifications,
            vec![
                ToolbarNotification::ButtonClicked { button: f.buttons[1], index: 1 },
                ToolbarNotification::Activated { index: 1 },
            ]
        );
        assert!(!f.toolbar.on_button_click(&mut f.tree, f.labels[0]));
    }

    #[test]
    fn test_out_of_range_active_tab_is_rejected() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.set_active_tab(&mut f.tree, 1);
        f.toolbar.take_notifications();

        assert!(!f.toolbar.set_active_tab(&mut f.tree, 5));
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert_eq!(active_flags(&f), vec![false, true, false]);
        assert!(f.toolbar.take_notifications().is_empty());
    }

    #[test]
    fn test_hidden_indicator_never_aligns() {
        let mut f = fixture(ToolbarConfig { show_indicator: false, ..ToolbarConfig::default() });
        f.toolbar.set_active_tab(&mut f.tree, 2);
        assert_eq!(f.toolbar.run_frame(&f.tree), None);
        assert_eq!(f.toolbar.indicator_style(), None);
        assert_eq!(active_flags(&f), vec![false, false, true]);
    }

    #[test]
    fn test_reindex_keeps_active_button() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.set_active_tab(&mut f.tree, 1);

        f.toolbar.on_children_changed(&mut f.tree);
        assert!(f.tree.is_active(f.buttons[1]));
        assert_eq!(active_flags(&f), vec![false, true, false]);
    }

    #[test]
    fn test_reindex_after_removing_active_tail() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.set_active_tab(&mut f.tree, 2);

        f.tree.remove(f.buttons[2]);
        f.toolbar.on_children_changed(&mut f.tree);
        assert_eq!(f.toolbar.buttons().len(), 2);
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert!(!f.tree.is_active(f.buttons[0]));
        assert!(f.tree.is_active(f.buttons[1]));
    }

    #[test]
    fn test_drag_follows_and_settles() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });
        f.toolbar.take_notifications();

        // Press on button 0, drag to halfway between the centres of 0 and 1
        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 40, row: 0 });
        f.toolbar.run_frame(&f.tree);
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Drag { column: 80, row: 0 }));
        assert_eq!(f.toolbar.active_index(), 0.5);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert!(geometry.is_interpolating);
        assert_eq!(geometry.position_x, 40.0);
        assert!(f.toolbar.is_dragging());
        assert_eq!(active_flags(&f), vec![true, false, false]);

        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Drag { column: 100, row: 0 });
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Release { column: 100, row: 0 }));
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert_eq!(active_flags(&f), vec![false, true, false]);
        assert!(!f.toolbar.run_frame(&f.tree).unwrap().is_interpolating);
    }

    #[test]
    fn test_drag_released_on_button_centre_commits() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });
        f.toolbar.take_notifications();

        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 40, row: 0 });
        f.toolbar.take_notifications();
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Drag { column: 120, row: 0 }));
        assert_eq!(f.toolbar.active_index(), 1.0);
        assert_eq!(f.toolbar.active_button(), Some(0));

        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Release { column: 120, row: 0 }));
        assert_eq!(f.toolbar.active_button(), Some(1));
        assert_eq!(active_flags(&f), vec![false, true, false]);
        assert_eq!(f.toolbar.take_notifications(), vec![ToolbarNotification::Activated { index: 1 }]);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 80.0);
    }

    #[test]
    fn test_drag_released_past_last_button_commits_last() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 40, row: 0 });
        f.toolbar.take_notifications();

        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Drag { column: 239, row: 0 });
        assert_eq!(f.toolbar.active_index(), 2.0);
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Release { column: 239, row: 0 }));
        assert_eq!(f.toolbar.active_button(), Some(2));
        assert_eq!(active_flags(&f), vec![false, false, true]);
        assert_eq!(f.toolbar.take_notifications(), vec![ToolbarNotification::Activated { index: 2 }]);
    }

    #[test]
    fn test_release_on_committed_tab_is_a_no_op() {
        let mut f = fixture(ToolbarConfig::default());
        f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Click { column: 40, row: 0 });
        f.toolbar.take_notifications();

        assert!(!f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Release { column: 40, row: 0 }));
        assert!(f.toolbar.take_notifications().is_empty());
    }

    #[test]
    fn test_follow_drag_beyond_last_tab_is_clamped() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });
        f.toolbar.follow_drag(7.0);
        assert_eq!(f.toolbar.active_index(), 2.0);

        f.toolbar.on_resize();
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 160.0);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut f = fixture(ToolbarConfig::default());
        assert!(!f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Drag { column: 80, row: 0 }));
        assert_eq!(f.toolbar.active_index(), 0.0);
    }

    #[test]
    fn test_index_at_column() {
        let f = fixture(ToolbarConfig::default());
        assert_eq!(f.toolbar.index_at_column(&f.tree, 0), Some(0.0));
        assert_eq!(f.toolbar.index_at_column(&f.tree, 40), Some(0.0));
        assert_eq!(f.toolbar.index_at_column(&f.tree, 60), Some(0.25));
        assert_eq!(f.toolbar.index_at_column(&f.tree, 120), Some(1.0));
        assert_eq!(f.toolbar.index_at_column(&f.tree, 239), Some(2.0));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut f = fixture(ToolbarConfig::default());
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Previous));
        assert_eq!(f.toolbar.active_index(), 2.0);
        assert!(f.toolbar.dispatch(&mut f.tree, ToolbarEvent::Next));
        assert_eq!(f.toolbar.active_index(), 0.0);
    }

    #[test]
    fn test_scroll_is_clamped_and_shifts_indicator() {
        let mut f = fixture(ToolbarConfig { show_indicator: true, ..ToolbarConfig::default() });
        f.tree.update(f.toolbar_handle, Rect::new(0, 0, 200, 2));
        f.toolbar.set_active_tab(&mut f.tree, 1);

        f.toolbar.scroll_by(&mut f.tree, 100);
        assert_eq!(f.tree.scroll_left(f.toolbar_handle), 40);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 40.0);

        f.toolbar.scroll_by(&mut f.tree, -100);
        assert_eq!(f.tree.scroll_left(f.toolbar_handle), 0);
    }

    #[test]
    fn test_queue_policy_applies_last_request() {
        let mut f = fixture(ToolbarConfig {
            show_indicator: true,
            frame_policy: FramePolicy::Queue,
            ..ToolbarConfig::default()
        });
        f.toolbar.set_active_tab(&mut f.tree, 2);
        f.toolbar.set_selected_tab(0.5);
        let geometry = f.toolbar.run_frame(&f.tree).unwrap();
        assert_eq!(geometry.position_x, 40.0);
    }
}
