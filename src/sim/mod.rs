//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No wall-clock or RNG input anywhere
//! - Single-threaded, every operation runs to completion
//! - Each shape is owned by exactly one container at any instant
//!   (inventory, loader buffer, launcher ready slot, or arena)
//! - No rendering or platform dependencies

pub mod arena;
pub mod armory;
pub mod inventory;
pub mod launcher;
pub mod loader;
pub mod overlap;
pub mod session;
pub mod shape;

pub use arena::{Arena, CloneIds, ResolveReport, resolve};
pub use armory::Armory;
pub use inventory::Inventory;
pub use launcher::{Launcher, Side};
pub use loader::{Discipline, Loader};
pub use overlap::{Orientation, overlaps};
pub use session::Session;
pub use shape::{Anchor, Circle, Geometry, Rect, Segment, Shape, ShapeKind, Text, TextStyle};
