//! Scenario tooling for gridpath: text layouts, random obstacle maps,
//! preset scenarios and text overlays of search results.

pub mod layout;
pub mod obstacles;
pub mod render;
pub mod scenarios;

pub use layout::{Layout, LayoutError};
pub use obstacles::{Generated, ObstacleConfig, ObstacleGen};
pub use render::Overlay;
pub use scenarios::{Scenario, presets};
