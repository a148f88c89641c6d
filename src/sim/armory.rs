//! The armory - id-keyed registry of loaders and launchers
//!
//! Command scripts refer to loaders and launchers by integer id alone, so
//! the armory resolves every id with find-or-create semantics and mediates
//! the operations that need more than one of its members at once (staging
//! moves shapes between two loaders and a launcher).

use std::collections::HashMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::inventory::Inventory;
use super::launcher::{Launcher, Side};
use super::loader::{Discipline, Loader};
use super::shape::Shape;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armory {
    loaders: HashMap<i32, Loader>,
    launchers: HashMap<i32, Launcher>,
    /// Discipline given to every loader created by this armory
    discipline: Discipline,
}

impl Default for Armory {
    fn default() -> Self {
        Self::new(Discipline::default())
    }
}

impl Armory {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            loaders: HashMap::new(),
            launchers: HashMap::new(),
            discipline,
        }
    }

    /// Look up a loader by id, creating it on first reference
    pub fn loader_mut(&mut self, id: i32) -> &mut Loader {
        let discipline = self.discipline;
        self.loaders
            .entry(id)
            .or_insert_with(|| Loader::new(id, discipline))
    }

    /// Look up a launcher by id, creating it at the origin on first reference
    pub fn launcher_mut(&mut self, id: i32) -> &mut Launcher {
        self.launchers
            .entry(id)
            .or_insert_with(|| Launcher::new(id, DVec2::ZERO))
    }

    pub fn loader(&self, id: i32) -> Option<&Loader> {
        self.loaders.get(&id)
    }

    pub fn launcher(&self, id: i32) -> Option<&Launcher> {
        self.launchers.get(&id)
    }

    /// Move a launcher's anchor
    pub fn position_launcher(&mut self, id: i32, anchor: DVec2) {
        self.launcher_mut(id).set_anchor(anchor);
    }

    /// Attach a pair of loaders to a launcher, creating any that are missing
    pub fn attach(&mut self, launcher_id: i32, left: i32, right: i32) {
        self.loader_mut(left);
        self.loader_mut(right);
        self.launcher_mut(launcher_id).attach(left, right);
    }

    /// Pull up to `n` shapes from the inventory into a loader.
    /// Returns the count actually moved.
    pub fn load(&mut self, loader_id: i32, n: usize, inventory: &mut Inventory) -> usize {
        self.loader_mut(loader_id).transfer(n, inventory)
    }

    /// Stage `times` shapes on a launcher from the given logical side.
    ///
    /// The side mapping is inverted (see [`Side`]): logical `Right`
    /// dispenses from the left-attached loader and cycles displaced shapes
    /// onto the right one, and vice versa. A launcher without attached
    /// loaders logs and no-ops.
    pub fn stage(&mut self, launcher_id: i32, side: Side, times: usize) {
        let launcher = self.launcher_mut(launcher_id);
        let (left, right) = (launcher.left_loader(), launcher.right_loader());
        let (Some(left), Some(right)) = (left, right) else {
            log::warn!("launcher {launcher_id}: no loaders attached, stage ignored");
            return;
        };

        let (source_id, opposite_id) = match side {
            Side::Right => (left, right),
            Side::Left => (right, left),
        };

        if source_id == opposite_id {
            // Both sides share one loader; cycle within it
            let Some(mut loader) = self.loaders.remove(&source_id) else {
                return;
            };
            self.launcher_mut(launcher_id)
                .stage_cycling(times, &mut loader);
            self.loaders.insert(source_id, loader);
            return;
        }

        // Take the source out of the map to borrow both loaders at once
        let Some(mut source) = self.loaders.remove(&source_id) else {
            return;
        };
        let discipline = self.discipline;
        let opposite = self
            .loaders
            .entry(opposite_id)
            .or_insert_with(|| Loader::new(opposite_id, discipline));
        if let Some(launcher) = self.launchers.get_mut(&launcher_id) {
            launcher.stage(times, &mut source, opposite);
        }
        self.loaders.insert(source_id, source);
    }

    /// Fire a launcher's staged shape with the given offset from its anchor
    pub fn fire(&mut self, launcher_id: i32, offset: DVec2) -> Option<Shape> {
        self.launcher_mut(launcher_id).fire(offset)
    }

    /// Burst fire: repeat stage-one + fire into the arena, walking the
    /// offset by `step` each shot, until the source loader is exhausted.
    /// Returns the number of shots fired.
    pub fn burst(
        &mut self,
        launcher_id: i32,
        side: Side,
        offset: DVec2,
        step: DVec2,
        arena: &mut Arena,
    ) -> u32 {
        let mut shots = 0;
        loop {
            self.stage(launcher_id, side, 1);
            if self.launcher_mut(launcher_id).ready().is_none() {
                break;
            }
            let shot_offset = offset + step * shots as f64;
            if let Some(shape) = self.fire(launcher_id, shot_offset) {
                arena.push(shape);
                shots += 1;
            }
        }
        shots
    }
}
