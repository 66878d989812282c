// Application State
// Host of the toolbar: owns the element tree and reacts to notifications

use ratatui::layout::Rect;

use crate::config::{AppConfig, TabConfig};
use crate::constants::HWND_MAIN_TOOLBAR;
use crate::core::element_tree::ElementTree;
use crate::core::events::ToolbarEvent;
use crate::core::geometry::IndicatorGeometry;
use crate::core::toolbar::{SuperTabsToolbar, ToolbarNotification};
use crate::ui::layout::{build_toolbar, layout_toolbar};

/// Main application state
pub struct App {
    pub tree: ElementTree,
    pub toolbar: SuperTabsToolbar,
    pub tabs: Vec<TabConfig>,
    /// Human-readable description of the last notification
    pub status: Option<String>,
    pub should_quit: bool,
    viewport: Rect,
}

impl App {
    /// Mount the toolbar described by `config` into a viewport
    pub fn new(config: &AppConfig, viewport: Rect) -> Self {
        let tabs = config.toolbar.tabs.clone();
        let mut tree = ElementTree::new();
        let handle = build_toolbar(&mut tree, HWND_MAIN_TOOLBAR, viewport, config.toolbar.position, &tabs);

        let mut toolbar = SuperTabsToolbar::new(handle, &config.toolbar, &config.super_tabs);
        toolbar.on_children_changed(&mut tree);

        Self {
            tree,
            toolbar,
            tabs,
            status: None,
            should_quit: false,
            viewport,
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Tab whose button is committed as active; unaffected by a drag in progress
    pub fn active_tab(&self) -> Option<&TabConfig> {
        self.toolbar.active_button().and_then(|index| self.tabs.get(index))
    }

    /// Re-fit the toolbar to a new viewport
    pub fn relayout(&mut self, viewport: Rect) {
        self.viewport = viewport;
        let rebuilt = layout_toolbar(
            &mut self.tree,
            self.toolbar.handle(),
            viewport,
            self.toolbar.position(),
            &self.tabs,
        );
        if rebuilt {
            self.toolbar.on_children_changed(&mut self.tree);
        }
    }

    /// Handle a toolbar event
    pub fn handle_event(&mut self, event: ToolbarEvent) {
        match event {
            ToolbarEvent::Quit => self.quit(),
            ToolbarEvent::Resize { width, height } => {
                self.relayout(Rect::new(0, 0, width, height));
                self.toolbar.dispatch(&mut self.tree, event);
            }
            ToolbarEvent::None => {}
            _ => {
                self.toolbar.dispatch(&mut self.tree, event);
            }
        }
        self.drain_notifications();
    }

    /// Paint opportunity: apply pending indicator alignments
    pub fn frame(&mut self) -> Option<IndicatorGeometry> {
        self.toolbar.run_frame(&self.tree)
    }

    fn drain_notifications(&mut self) {
        for notification in self.toolbar.take_notifications() {
            match notification {
                ToolbarNotification::ButtonClicked { index, .. } => {
                    let label = self.tabs.get(index).map(|t| t.label.as_str()).unwrap_or("?");
                    tracing::info!(index, label, "tab button clicked");
                    self.status = Some(format!("Clicked {}", label));
                }
                ToolbarNotification::Activated { index } => {
                    if let Some(tab) = self.tabs.get(index) {
                        tracing::info!(index, id = %tab.id, "tab activated");
                        if self.status.is_none() {
                            self.status = Some(format!("Activated {}", tab.label));
                        }
                    }
                }
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
