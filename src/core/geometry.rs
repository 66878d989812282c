// Indicator Geometry
// Position and width of the indicator for a (possibly fractional) tab index

use crate::core::element_tree::{ElementHandle, ElementTree};
use crate::core::registry::ButtonRegistry;
use crate::constants::INDICATOR_INTRINSIC_WIDTH;

/// Where the indicator goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    /// Left edge relative to the toolbar's visible origin
    pub position_x: f64,
    pub width: f64,
    /// True while the index is fractional (drag in progress)
    pub is_interpolating: bool,
}

impl IndicatorGeometry {
    /// Horizontal scale factor against the indicator's intrinsic width
    pub fn scale_x(&self) -> f64 {
        self.width / INDICATOR_INTRINSIC_WIDTH
    }

    /// Compute the indicator geometry for `index`
    ///
    /// An integral index overlays that button exactly. A fractional index
    /// `i + r` blends buttons `i` and `i + 1` linearly by `r`. The result is
    /// shifted by the toolbar's horizontal scroll.
    ///
    /// Returns None for an empty registry, a negative or non-finite index,
    /// or an index whose buttons do not exist.
    pub fn compute(
        index: f64,
        tree: &ElementTree,
        registry: &ButtonRegistry,
        toolbar: ElementHandle,
    ) -> Option<Self> {
        if registry.is_empty() || !index.is_finite() || index < 0.0 {
            return None;
        }

        let lower = index.floor();
        let remainder = index - lower;
        let is_interpolating = remainder > 0.0;

        let a = registry.layout(tree, lower as usize)?;
        let (position, width) = if is_interpolating {
            let b = registry.layout(tree, index.ceil() as usize)?;
            (
                a.offset_left + remainder * (b.offset_left - a.offset_left),
                a.width + remainder * (b.width - a.width),
            )
        } else {
            (a.offset_left, a.width)
        };

        Some(Self {
            position_x: position - f64::from(tree.scroll_left(toolbar)),
            width,
            is_interpolating,
        })
    }
}
