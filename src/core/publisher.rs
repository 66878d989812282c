// Indicator Publisher
// Defers indicator alignment to the next frame and applies the computed style

use std::collections::VecDeque;
use std::time::Duration;

use serde::Deserialize;

use crate::core::element_tree::{ElementHandle, ElementTree};
use crate::core::geometry::IndicatorGeometry;
use crate::core::registry::ButtonRegistry;

/// Run-before-next-frame capability
///
/// Alignment requests are parked here until the host reaches its next paint
/// and asks for the indices that are due.
pub trait FrameScheduler: std::fmt::Debug {
    /// Ask for `index` to be aligned on the next frame
    fn request_frame(&mut self, index: f64);

    /// Take every index due on this frame, oldest first
    fn take_due(&mut self) -> Vec<f64>;

    fn has_pending(&self) -> bool;
}

/// Keeps only the latest request per frame
#[derive(Debug, Default)]
pub struct CoalescingScheduler {
    pending: Option<f64>,
}

impl FrameScheduler for CoalescingScheduler {
    fn request_frame(&mut self, index: f64) {
        self.pending = Some(index);
    }

    fn take_due(&mut self) -> Vec<f64> {
        self.pending.take().into_iter().collect()
    }

    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Runs every request back to back on the next frame; the last one wins
#[derive(Debug, Default)]
pub struct QueuedScheduler {
    pending: VecDeque<f64>,
}

impl FrameScheduler for QueuedScheduler {
    fn request_frame(&mut self, index: f64) {
        self.pending.push_back(index);
    }

    fn take_due(&mut self) -> Vec<f64> {
        self.pending.drain(..).collect()
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Which scheduler a toolbar uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramePolicy {
    #[default]
    Coalesce,
    Queue,
}

impl FramePolicy {
    pub fn scheduler(self) -> Box<dyn FrameScheduler> {
        match self {
            FramePolicy::Coalesce => Box::new(CoalescingScheduler::default()),
            FramePolicy::Queue => Box::new(QueuedScheduler::default()),
        }
    }

    pub fn from_str(policy: &str) -> Self {
        match policy.to_lowercase().as_str() {
            "queue" => FramePolicy::Queue,
            _ => FramePolicy::Coalesce,
        }
    }
}

/// Visual parameters written onto the indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    /// Horizontal position in cells
    pub position_x: f64,
    /// Width relative to the indicator's intrinsic width
    pub scale_x: f64,
    /// Zero while following a drag
    pub transition_duration: Duration,
}

#[derive(Debug)]
pub struct IndicatorPublisher {
    show_indicator: bool,
    transition_duration: Duration,
    scheduler: Box<dyn FrameScheduler>,
    style: Option<IndicatorStyle>,
    is_dragging: bool,
}

impl IndicatorPublisher {
    pub fn new(show_indicator: bool, transition_duration_ms: u64, scheduler: Box<dyn FrameScheduler>) -> Self {
        Self {
            show_indicator,
            transition_duration: Duration::from_millis(transition_duration_ms),
            scheduler,
            style: None,
            is_dragging: false,
        }
    }

    pub fn show_indicator(&self) -> bool {
        self.show_indicator
    }

    /// Last style applied, if any frame has aligned the indicator yet
    pub fn style(&self) -> Option<IndicatorStyle> {
        self.style
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Align the indicator to `index` on the next frame
    pub fn schedule(&mut self, index: f64) {
        if !self.show_indicator {
            return;
        }
        self.scheduler.request_frame(index);
    }

    /// Run the alignments due on this frame against the current layout
    ///
    /// Returns the geometry applied last, or None if nothing was applied.
    pub fn run_frame(
        &mut self,
        tree: &ElementTree,
        registry: &ButtonRegistry,
        toolbar: ElementHandle,
    ) -> Option<IndicatorGeometry> {
        let mut applied = None;
        for index in self.scheduler.take_due() {
            match IndicatorGeometry::compute(index, tree, registry, toolbar) {
                Some(geometry) => {
                    self.apply(geometry);
                    applied = Some(geometry);
                }
                None => tracing::trace!(index, "skipped indicator alignment"),
            }
        }
        applied
    }

    /// Write `geometry` onto the indicator
    pub fn apply(&mut self, geometry: IndicatorGeometry) {
        self.is_dragging = geometry.is_interpolating;
        self.style = Some(IndicatorStyle {
            position_x: geometry.position_x,
            scale_x: geometry.scale_x(),
            transition_duration: if geometry.is_interpolating {
                Duration::ZERO
            } else {
                self.transition_duration
            },
        });
    }
}
