//! Session state - everything one run of the game owns
//!
//! Bundles the inventory, arena and armory with the running score and
//! counters, and folds resolution reports into the totals. Serializable as
//! a whole so a run can be snapshotted to JSON and restored.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, CloneIds, ResolveReport, resolve};
use super::armory::Armory;
use super::inventory::Inventory;
use super::launcher::Side;
use super::loader::Discipline;
use super::shape::Shape;

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub inventory: Inventory,
    pub arena: Arena,
    pub armory: Armory,
    /// Accumulated crushed-area score
    pub score: f64,
    pub shots_fired: u32,
    pub crushed_total: u32,
    pub cloned_total: u32,
    /// Annotation shapes produced by crushes, for the renderer to drain
    pub annotations: Vec<Shape>,
    clone_ids: CloneIds,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Discipline::default())
    }
}

impl Session {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            inventory: Inventory::new(),
            arena: Arena::new(),
            armory: Armory::new(discipline),
            score: 0.0,
            shots_fired: 0,
            crushed_total: 0,
            cloned_total: 0,
            annotations: Vec::new(),
            clone_ids: CloneIds::new(),
        }
    }

    /// Pull up to `n` shapes from the inventory into a loader.
    /// Returns the count actually moved.
    pub fn load(&mut self, loader_id: i32, n: usize) -> usize {
        self.armory.load(loader_id, n, &mut self.inventory)
    }

    /// Fire a launcher's staged shape into the arena.
    /// Returns whether a shot actually happened.
    pub fn fire(&mut self, launcher_id: i32, offset: DVec2) -> bool {
        match self.armory.fire(launcher_id, offset) {
            Some(shape) => {
                self.arena.push(shape);
                self.shots_fired += 1;
                true
            }
            None => false,
        }
    }

    /// Burst fire into the arena (stage + fire until the source loader
    /// empties); counts every shot.
    pub fn burst(&mut self, launcher_id: i32, side: Side, offset: DVec2, step: DVec2) -> u32 {
        let shots = self
            .armory
            .burst(launcher_id, side, offset, step, &mut self.arena);
        self.shots_fired += shots;
        shots
    }

    /// Run one resolution pass and fold the outcome into the running totals
    pub fn resolve(&mut self) -> ResolveReport {
        let report = resolve(
            &mut self.arena,
            &mut self.inventory,
            &mut self.clone_ids,
            &mut self.annotations,
        );
        self.score += report.score_delta;
        self.crushed_total += report.crushed;
        self.cloned_total += report.cloned;
        report
    }

    /// Snapshot the whole session as JSON
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restore a session from a snapshot
    pub fn restore(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn seeded_session() -> Session {
        let mut session = Session::default();
        // Small circle then big circle; fired to the same spot they overlap
        session
            .inventory
            .push(Shape::circle(1, dvec2(0.0, 0.0), 1.0, "red", "blue"));
        session
            .inventory
            .push(Shape::circle(2, dvec2(0.0, 0.0), 5.0, "green", "yellow"));
        session
    }

    #[test]
    fn test_full_round_accumulates_score() {
        let mut session = seeded_session();

        session.armory.attach(0, 1, 2);
        session.armory.position_launcher(0, dvec2(50.0, 50.0));
        assert_eq!(session.load(1, 2), 2);

        session.armory.stage(0, Side::Right, 1);
        assert!(session.fire(0, dvec2(0.0, 0.0)));
        session.armory.stage(0, Side::Right, 1);
        assert!(session.fire(0, dvec2(0.0, 0.0)));
        assert_eq!(session.shots_fired, 2);
        assert_eq!(session.arena.len(), 2);

        let report = session.resolve();
        assert_eq!(report.crushed, 1);
        assert!((session.score - std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(session.crushed_total, 1);
        assert_eq!(session.inventory.len(), 1);
        assert_eq!(session.annotations.len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut session = seeded_session();
        session.score = 42.5;
        session.shots_fired = 3;

        let json = session.snapshot().expect("serializes");
        let restored = Session::restore(&json).expect("deserializes");

        assert_eq!(restored.score, 42.5);
        assert_eq!(restored.shots_fired, 3);
        assert_eq!(restored.inventory.len(), 2);
    }
}
