// Core infrastructure module
// Element tree, toolbar state machine and indicator alignment

pub mod activation;
pub mod app;
pub mod element_tree;
pub mod events;
pub mod geometry;
pub mod publisher;
pub mod registry;
pub mod toolbar;

pub use activation::ActivationState;
pub use app::App;
pub use element_tree::{ElementHandle, ElementKind, ElementMetrics, ElementTree};
pub use events::{EventHandler, ToolbarEvent};
pub use geometry::IndicatorGeometry;
pub use publisher::{CoalescingScheduler, FramePolicy, FrameScheduler, IndicatorPublisher, IndicatorStyle, QueuedScheduler};
pub use registry::{ButtonLayout, ButtonRegistry};
pub use toolbar::{SuperTabsToolbar, ToolbarNotification};
