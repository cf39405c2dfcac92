//! Grid navigation primitives: grid model, connectivity graph, and path planning.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod graph;
pub mod grid;
pub mod math;
pub mod navigator;
pub mod planner;

pub use graph::NavGraph;
pub use grid::{Cell, GridModel};
pub use math::Vec2;
pub use navigator::{NavPath, Navigator};
pub use planner::PathPlanner;
