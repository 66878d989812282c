// Toolbar Layout
// Places the toolbar and its buttons into the element tree

use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::{TabConfig, ToolbarPosition};
use crate::core::element_tree::{ElementHandle, ElementKind, ElementTree};

/// Rows the toolbar occupies: one for buttons, one for the indicator
pub const TOOLBAR_HEIGHT: u16 = 2;

/// Horizontal padding inside a button, per side
const BUTTON_PADDING: u16 = 2;

/// Split the screen into toolbar and content areas
pub fn split_areas(area: Rect, position: ToolbarPosition) -> (Rect, Rect) {
    match position {
        ToolbarPosition::Top => {
            let [toolbar, content] =
                Layout::vertical([Constraint::Length(TOOLBAR_HEIGHT), Constraint::Min(0)]).areas(area);
            (toolbar, content)
        }
        ToolbarPosition::Bottom => {
            let [content, toolbar] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(TOOLBAR_HEIGHT)]).areas(area);
            (toolbar, content)
        }
    }
}

/// Row of the toolbar the buttons sit on; the indicator takes the other one
pub fn button_row(toolbar: Rect, position: ToolbarPosition) -> u16 {
    match position {
        ToolbarPosition::Top => toolbar.y,
        ToolbarPosition::Bottom => toolbar.y.saturating_add(1),
    }
}

pub fn indicator_row(toolbar: Rect, position: ToolbarPosition) -> u16 {
    match position {
        ToolbarPosition::Top => toolbar.y.saturating_add(1),
        ToolbarPosition::Bottom => toolbar.y,
    }
}

/// Rectangles for one button and its inner elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRects {
    pub button: Rect,
    pub icon: Option<Rect>,
    pub label: Rect,
}

/// Width a tab needs to show its icon and label
pub fn natural_width(tab: &TabConfig) -> u16 {
    let icon = tab
        .icon
        .as_ref()
        .map(|i| i.chars().count() as u16 + 1)
        .unwrap_or(0);
    icon + tab.label.chars().count() as u16 + BUTTON_PADDING * 2
}

/// Lay buttons out left to right
///
/// Each button gets an equal share of the toolbar but never less than its
/// natural width; if that overflows the toolbar the content scrolls.
pub fn compute_button_rects(toolbar: Rect, position: ToolbarPosition, tabs: &[TabConfig]) -> Vec<ButtonRects> {
    if tabs.is_empty() {
        return Vec::new();
    }
    let share = toolbar.width / tabs.len() as u16;
    let y = button_row(toolbar, position);

    let mut x = toolbar.x;
    let mut rects = Vec::with_capacity(tabs.len());
    for tab in tabs {
        let natural = natural_width(tab);
        let width = natural.max(share);
        let button = Rect { x, y, width, height: 1 };

        // Centre icon + label inside the button
        let mut content_x = x + (width - natural) / 2 + BUTTON_PADDING;
        let icon = tab.icon.as_ref().map(|i| {
            let rect = Rect { x: content_x, y, width: i.chars().count() as u16, height: 1 };
            content_x += rect.width + 1;
            rect
        });
        let label = Rect { x: content_x, y, width: tab.label.chars().count() as u16, height: 1 };

        rects.push(ButtonRects { button, icon, label });
        x = x.saturating_add(width);
    }
    rects
}

/// Create the toolbar element and its buttons
pub fn build_toolbar(
    tree: &mut ElementTree,
    name: &str,
    area: Rect,
    position: ToolbarPosition,
    tabs: &[TabConfig],
) -> ElementHandle {
    let (toolbar_area, _) = split_areas(area, position);
    let toolbar = tree.create_root(ElementKind::Toolbar, Some(name), toolbar_area);
    layout_toolbar(tree, toolbar, area, position, tabs);
    toolbar
}

/// Fit an existing toolbar to `area`
///
/// Updates rectangles in place when the buttons still match `tabs`;
/// otherwise recreates the buttons. Returns true if the structure changed,
/// in which case the toolbar must be told its children changed.
pub fn layout_toolbar(
    tree: &mut ElementTree,
    toolbar: ElementHandle,
    area: Rect,
    position: ToolbarPosition,
    tabs: &[TabConfig],
) -> bool {
    let (toolbar_area, _) = split_areas(area, position);
    tree.update(toolbar, toolbar_area);
    let rects = compute_button_rects(toolbar_area, position, tabs);

    let buttons = tree.children(toolbar);
    let matches = buttons.len() == rects.len()
        && buttons.iter().zip(tabs).all(|(&b, tab)| {
            tree.get_name(b) == Some(tab.id.as_str())
                && tree.children(b).len() == 1 + usize::from(tab.icon.is_some())
        });

    if matches {
        for (&button, rect) in buttons.iter().zip(&rects) {
            tree.update(button, rect.button);
            let children = tree.children(button);
            let inner = rect.icon.into_iter().chain(std::iter::once(rect.label));
            for (child, inner_rect) in children.into_iter().zip(inner) {
                tree.update(child, inner_rect);
            }
        }
        return false;
    }

    tree.clear_children(toolbar);
    for (tab, rect) in tabs.iter().zip(&rects) {
        let Some(button) = tree.append_child(toolbar, ElementKind::Button, Some(&tab.id), rect.button) else {
            continue;
        };
        if let Some(icon) = rect.icon {
            tree.append_child(button, ElementKind::Icon, None, icon);
        }
        tree.append_child(button, ElementKind::Label, None, rect.label);
    }
    tracing::debug!(buttons = rects.len(), "rebuilt toolbar buttons");
    true
}
