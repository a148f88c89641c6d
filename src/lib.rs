//! Shape Arena - a turn-based arena of colliding geometric shapes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, overlap tests, loaders,
//!   launchers, arena resolution)
//!
//! Shapes start out on an inventory ("floor"), get pulled into per-id
//! loaders, staged one at a time by launchers and fired into the arena.
//! A resolution pass then consumes the arena pairwise: the smaller shape
//! of an overlapping pair is crushed for points, the larger one recolours
//! its partner and spawns an inverted clone.

pub mod sim;

pub use sim::{
    Anchor, Arena, Armory, CloneIds, Discipline, Geometry, Inventory, Launcher, Loader,
    ResolveReport, Session, Shape, ShapeKind, Side, overlaps, resolve,
};

/// Simulation constants
pub mod consts {
    /// Geometric extent of one text character when a text is reduced to a
    /// segment for overlap testing
    pub const TEXT_EXTENT_PER_CHAR: f64 = 10.0;
    /// Synthetic area contributed by one text character
    pub const TEXT_AREA_PER_CHAR: f64 = 20.0;
    /// Synthetic area per unit of segment length
    pub const SEGMENT_AREA_PER_UNIT: f64 = 2.0;

    /// First id handed out for clones produced during resolution.
    /// Keeps clone ids clear of the organic id range.
    pub const CLONE_ID_BASE: i32 = 100_000;
}
