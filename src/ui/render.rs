// Rendering
// Draws the toolbar, its indicator and the content of the active tab

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::INDICATOR_INTRINSIC_WIDTH;
use crate::core::element_tree::{ElementHandle, ElementKind};
use crate::core::publisher::IndicatorStyle;
use crate::core::App;
use super::layout::{indicator_row, split_areas};
use super::styles::{parse_color, Styles};

const INDICATOR_SYMBOL: &str = "━";

/// Tween between the indicator's previous and current style
///
/// A zero transition duration jumps straight to the target, which is what
/// the toolbar asks for while a drag is being followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorAnimation {
    from: (f64, f64),
    to: (f64, f64),
    started: Option<Instant>,
    duration: Duration,
}

impl IndicatorAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving towards `style` from wherever the indicator is at `now`
    pub fn retarget(&mut self, style: IndicatorStyle, now: Instant) {
        let target = (style.position_x, style.scale_x * INDICATOR_INTRINSIC_WIDTH);
        self.from = self.sample(now).unwrap_or(target);
        self.to = target;
        self.started = Some(now);
        self.duration = style.transition_duration;
    }

    /// Position and width at `now`, or None before the first target
    pub fn sample(&self, now: Instant) -> Option<(f64, f64)> {
        let started = self.started?;
        if self.duration.is_zero() {
            return Some(self.to);
        }

        let t = (now.saturating_duration_since(started).as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        // Ease out
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        let lerp = |a: f64, b: f64| a + (b - a) * eased;
        Some((lerp(self.from.0, self.to.0), lerp(self.from.1, self.to.1)))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            Some(started) => !self.duration.is_zero() && now < started + self.duration,
            None => false,
        }
    }
}

/// Render the whole application
pub fn render_app(f: &mut Frame, app: &App, indicator: Option<(f64, f64)>) {
    let (toolbar_area, content_area) = split_areas(f.area(), app.toolbar.position());

    render_toolbar(f.buffer_mut(), app, toolbar_area);
    if let Some((x, width)) = indicator.filter(|_| app.toolbar.show_indicator()) {
        render_indicator(f.buffer_mut(), app, toolbar_area, x, width);
    }
    render_content(f, app, content_area);
}

/// Paint every button's icon and label, shifted by the toolbar's scroll
fn render_toolbar(buf: &mut Buffer, app: &App, area: Rect) {
    let tree = &app.tree;
    let toolbar = app.toolbar.handle();
    let scroll = i32::from(tree.scroll_left(toolbar));
    let color = parse_color(app.toolbar.color());

    for button in app.toolbar.buttons().iter() {
        let style = if tree.is_active(button) {
            Styles::button_active(color)
        } else {
            Styles::button_inactive()
        };

        for kind in [ElementKind::Icon, ElementKind::Label] {
            for element in tree.descendants_of_kind(button, kind) {
                let Some(metrics) = tree.get_metrics(element) else {
                    continue;
                };
                let text = element_text(app, button, kind);
                paint_clipped(buf, area, i32::from(metrics.x) - scroll, metrics.y, text, style);
            }
        }
    }
}

/// Text shown by an icon or label element of `button`
fn element_text(app: &App, button: ElementHandle, kind: ElementKind) -> &str {
    let tab = app
        .tree
        .button_index(button)
        .and_then(|index| app.tabs.get(index));
    match (tab, kind) {
        (Some(tab), ElementKind::Icon) => tab.icon.as_deref().unwrap_or(""),
        (Some(tab), ElementKind::Label) => tab.label.as_str(),
        _ => "",
    }
}

fn render_indicator(buf: &mut Buffer, app: &App, area: Rect, x: f64, width: f64) {
    let row = indicator_row(area, app.toolbar.position());
    let start = i32::from(area.x) + x.round() as i32;
    let cells = width.round().max(0.0) as usize;
    let line = INDICATOR_SYMBOL.repeat(cells);
    paint_clipped(buf, area, start, row, &line, Styles::indicator(parse_color(app.toolbar.color())));
}

/// Write `text` starting at column `x`, dropping cells outside `clip`
fn paint_clipped(buf: &mut Buffer, clip: Rect, x: i32, y: u16, text: &str, style: Style) {
    if y < clip.top() || y >= clip.bottom() {
        return;
    }
    let (left, right) = (i32::from(clip.left()), i32::from(clip.right()));
    for (offset, ch) in text.chars().enumerate() {
        let column = x + offset as i32;
        if column < left {
            continue;
        }
        if column >= right {
            break;
        }
        if let Some(cell) = buf.cell_mut((column as u16, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

/// Content box for the active tab
fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let color = parse_color(app.toolbar.color());
    let (title, id) = match app.active_tab() {
        Some(tab) => (format!(" {} ", tab.label), tab.id.as_str()),
        None => (" No tabs ".to_string(), ""),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::content_border())
        .title(Span::styled(title, Styles::content_title(color)));

    let mut lines = vec![
        Line::from(format!("Tab id: {}", id)),
        Line::from(format!("Active index: {:.2}", app.toolbar.active_index())),
    ];
    if let Some(status) = &app.status {
        lines.push(Line::from(status.as_str()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←/→ switch tabs · click or drag the toolbar · q quit",
        Styles::hint(),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
