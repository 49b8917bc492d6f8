//! Scene glue for tracegrid: layouts, live block maps, per-agent navigators.
//!
//! The path searches only need a cell set and a blocking predicate. This
//! crate supplies both from an ASCII [`Layout`] (or any iterator of
//! [`CellDescriptor`]s), keeps the live blocked state in a [`BlockMap`], and
//! drives re-planning from world positions with a [`Navigator`].

pub mod blocks;
pub mod config;
pub mod error;
pub mod layout;
pub mod mapgen;
pub mod navigator;
pub mod scene;

pub use blocks::BlockMap;
pub use config::{Rounding, SceneConfig};
pub use error::SceneError;
pub use layout::{CellDescriptor, Layout, LayoutError};
pub use mapgen::scatter_blocks;
pub use navigator::{NavUpdate, Navigator};
pub use scene::Scene;
