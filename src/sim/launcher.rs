//! Launchers - position and fire one staged shape at a time into the arena
//!
//! A launcher sits at an anchor point with two loaders attached (by id; the
//! armory owns them). Staging pulls the next shape out of one loader into
//! the single ready slot, cycling any previous occupant onto the opposite
//! loader. Firing hands the staged shape back, offset from the anchor.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::loader::Loader;
use super::shape::Shape;

/// Logical side selector for staging.
///
/// The side mapping is inverted on purpose: staging from the logical right
/// dispenses from the left-attached loader and vice versa. Historical
/// behaviour that scripts depend on; do not "fix".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launcher {
    id: i32,
    anchor: DVec2,
    left: Option<i32>,
    right: Option<i32>,
    ready: Option<Shape>,
}

impl Launcher {
    pub fn new(id: i32, anchor: DVec2) -> Self {
        Self {
            id,
            anchor,
            left: None,
            right: None,
            ready: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn anchor(&self) -> DVec2 {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: DVec2) {
        self.anchor = anchor;
    }

    /// Attach the left and right loaders by id. Reattaching replaces both.
    pub fn attach(&mut self, left: i32, right: i32) {
        self.left = Some(left);
        self.right = Some(right);
    }

    pub fn left_loader(&self) -> Option<i32> {
        self.left
    }

    pub fn right_loader(&self) -> Option<i32> {
        self.right
    }

    /// The shape currently staged for firing, if any
    pub fn ready(&self) -> Option<&Shape> {
        self.ready.as_ref()
    }

    /// Stage `times` shapes in sequence from `source`, cycling each displaced
    /// occupant of the ready slot onto `opposite`.
    ///
    /// Stops early once `source` is empty; a stage that cannot refill the
    /// slot leaves it untouched.
    pub fn stage(&mut self, times: usize, source: &mut Loader, opposite: &mut Loader) {
        for _ in 0..times {
            if source.is_empty() {
                break;
            }
            if let Some(prev) = self.ready.take() {
                opposite.push(prev);
            }
            self.ready = source.dispense();
        }
    }

    /// Stage when both sides are attached to the same loader: displaced
    /// shapes cycle back into the source itself.
    pub fn stage_cycling(&mut self, times: usize, loader: &mut Loader) {
        for _ in 0..times {
            if loader.is_empty() {
                break;
            }
            let next = loader.dispense();
            if let Some(prev) = self.ready.take() {
                loader.push(prev);
            }
            self.ready = next;
        }
    }

    /// Fire the staged shape: remove it from the slot, place it at
    /// `anchor + offset` and hand it back. Returns `None` (and logs) when
    /// nothing is staged.
    pub fn fire(&mut self, offset: DVec2) -> Option<Shape> {
        match self.ready.take() {
            Some(mut shape) => {
                shape.set_position(self.anchor + offset);
                Some(shape)
            }
            None => {
                log::warn!("launcher {}: nothing staged, fire ignored", self.id);
                None
            }
        }
    }
}
