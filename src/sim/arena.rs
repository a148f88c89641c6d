//! The arena and its pairwise interaction-resolution pass
//!
//! Active shapes queue up in FIFO order. A resolution pass consumes them
//! two at a time: non-overlapping pairs return to the inventory unchanged,
//! otherwise the strictly smaller shape is crushed for points while the
//! larger-or-equal one recolours its partner and spawns an inverted clone.
//! The return order to the inventory is part of the contract - it is the
//! pairing order of the next pass.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::inventory::Inventory;
use super::overlap::overlaps;
use super::shape::{Anchor, Shape};
use crate::consts::CLONE_ID_BASE;

/// FIFO container of the shapes currently in play
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arena {
    shapes: VecDeque<Shape>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push_back(shape);
    }

    pub fn pop(&mut self) -> Option<Shape> {
        self.shapes.pop_front()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Front-to-back view for renderers; leaves order and membership intact
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

/// Allocator for clone ids.
///
/// Monotonic, based well above the organic id range so clones never collide
/// with caller-assigned ids or with each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloneIds {
    next: i32,
}

impl Default for CloneIds {
    fn default() -> Self {
        Self {
            next: CLONE_ID_BASE,
        }
    }
}

impl CloneIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Outcome of a single resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveReport {
    /// Sum of the areas of crushed shapes
    pub score_delta: f64,
    /// Shapes destroyed this pass
    pub crushed: u32,
    /// Clones created this pass
    pub cloned: u32,
}

/// Run one resolution pass over the arena's current contents.
///
/// Pops shapes pairwise in FIFO order, I then J:
/// - no overlap: I and J return to the inventory in that order;
/// - overlap with `area(I) < area(J)`: I is crushed - destroyed, its area
///   scored, a marker pushed onto `annotations`; J returns unchanged;
/// - overlap with `area(I) >= area(J)` (ties included): J's border takes
///   I's fill colour, I is cloned with inverted colours and a fresh id,
///   and the three return in the order J, I, clone.
///
/// An odd shape left at the end returns to the inventory untouched. Runs to
/// exhaustion of the contents present when the pass started; nothing adds
/// shapes mid-pass.
pub fn resolve(
    arena: &mut Arena,
    inventory: &mut Inventory,
    ids: &mut CloneIds,
    annotations: &mut Vec<Shape>,
) -> ResolveReport {
    let mut report = ResolveReport::default();

    while arena.len() >= 2 {
        let (Some(first), Some(second)) = (arena.pop(), arena.pop()) else {
            break;
        };

        if !overlaps(&first, &second) {
            inventory.push(first);
            inventory.push(second);
            continue;
        }

        let area_first = first.area();
        let area_second = second.area();

        if area_first < area_second {
            // Crush: the smaller first shape is destroyed and scored
            report.score_delta += area_first;
            report.crushed += 1;
            annotations.push(crush_marker(&first, ids.next()));
            inventory.push(second);
        } else {
            // Modify: recolour the partner, clone the survivor inverted
            let mut second = second;
            second.set_border_color(first.fill_color());
            let clone = first.inverted(ids.next());
            report.cloned += 1;

            inventory.push(second);
            inventory.push(first);
            inventory.push(clone);
        }
    }

    // Odd count: the unpaired shape goes back untouched
    if let Some(last) = arena.pop() {
        inventory.push(last);
    }

    log::debug!(
        "resolve pass: crushed={} cloned={} score_delta={:.2}",
        report.crushed,
        report.cloned,
        report.score_delta
    );

    report
}

/// Annotation shape marking where a crushed shape stood, for the renderer
fn crush_marker(victim: &Shape, id: i32) -> Shape {
    Shape::text(id, victim.position(), Anchor::Middle, "*", "red", "red")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn circle(id: i32, x: f64, r: f64, border: &str, fill: &str) -> Shape {
        Shape::circle(id, dvec2(x, 0.0), r, border, fill)
    }

    fn pass(arena: &mut Arena, inventory: &mut Inventory) -> (ResolveReport, Vec<Shape>) {
        let mut ids = CloneIds::new();
        let mut annotations = Vec::new();
        let report = resolve(arena, inventory, &mut ids, &mut annotations);
        (report, annotations)
    }

    #[test]
    fn test_smaller_first_shape_is_crushed() {
        let mut arena = Arena::new();
        // Concentric circles: r=1 area pi, r=5 area 25pi
        arena.push(circle(1, 0.0, 1.0, "red", "blue"));
        arena.push(circle(2, 0.0, 5.0, "green", "yellow"));
        let mut inventory = Inventory::new();

        let (report, annotations) = pass(&mut arena, &mut inventory);

        assert_eq!(report.crushed, 1);
        assert_eq!(report.cloned, 0);
        assert!((report.score_delta - std::f64::consts::PI).abs() < 1e-9);
        assert!(arena.is_empty());
        // Only the survivor returns
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.pop().map(|s| s.id), Some(2));
        assert_eq!(annotations.len(), 1);
    }

    #[test]
    fn test_larger_first_shape_modifies_and_clones() {
        let mut arena = Arena::new();
        arena.push(circle(1, 0.0, 5.0, "red", "blue"));
        arena.push(circle(2, 0.0, 1.0, "green", "yellow"));
        let mut inventory = Inventory::new();

        let (report, _) = pass(&mut arena, &mut inventory);

        assert_eq!(report.crushed, 0);
        assert_eq!(report.cloned, 1);
        assert_eq!(report.score_delta, 0.0);

        // Contract order: J, then I, then the clone
        assert_eq!(inventory.len(), 3);
        let j = inventory.pop().unwrap();
        let i = inventory.pop().unwrap();
        let clone = inventory.pop().unwrap();

        assert_eq!(j.id, 2);
        // J's border takes I's fill colour; J's own fill is untouched
        assert_eq!(j.border_color(), "blue");
        assert_eq!(j.fill_color(), "yellow");

        // I keeps its original colours
        assert_eq!(i.id, 1);
        assert_eq!(i.border_color(), "red");
        assert_eq!(i.fill_color(), "blue");

        // Clone has inverted colours and a generated id
        assert_eq!(clone.id, CLONE_ID_BASE);
        assert_eq!(clone.border_color(), "blue");
        assert_eq!(clone.fill_color(), "red");
    }

    #[test]
    fn test_equal_areas_take_the_modify_branch() {
        let mut arena = Arena::new();
        arena.push(circle(1, 0.0, 3.0, "red", "blue"));
        arena.push(circle(2, 1.0, 3.0, "green", "yellow"));
        let mut inventory = Inventory::new();

        let (report, _) = pass(&mut arena, &mut inventory);

        assert_eq!(report.crushed, 0);
        assert_eq!(report.cloned, 1);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_non_overlapping_pair_returns_in_order() {
        let mut arena = Arena::new();
        arena.push(circle(1, 0.0, 1.0, "red", "blue"));
        arena.push(circle(2, 100.0, 1.0, "green", "yellow"));
        let mut inventory = Inventory::new();

        let (report, annotations) = pass(&mut arena, &mut inventory);

        assert_eq!(report, ResolveReport::default());
        assert!(annotations.is_empty());
        assert_eq!(inventory.pop().map(|s| s.id), Some(1));
        assert_eq!(inventory.pop().map(|s| s.id), Some(2));
    }

    #[test]
    fn test_odd_leftover_returns_untouched() {
        let mut arena = Arena::new();
        // A and B overlap; C is unpaired
        arena.push(circle(1, 0.0, 1.0, "red", "blue"));
        arena.push(circle(2, 0.0, 5.0, "green", "yellow"));
        arena.push(circle(3, 50.0, 2.0, "black", "white"));
        let mut inventory = Inventory::new();

        let (report, _) = pass(&mut arena, &mut inventory);

        assert_eq!(report.crushed, 1);
        // Survivor of the pair, then the unpaired C
        assert_eq!(inventory.pop().map(|s| s.id), Some(2));
        let c = inventory.pop().unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.border_color(), "black");
        assert_eq!(c.fill_color(), "white");
    }

    #[test]
    fn test_iteration_roundtrip_preserves_arena() {
        let mut arena = Arena::new();
        for id in 0..4 {
            arena.push(circle(id, id as f64 * 10.0, 1.0, "red", "blue"));
        }

        let seen: Vec<i32> = arena.iter().map(|s| s.id).collect();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(arena.len(), 4);
        assert_eq!(arena.pop().map(|s| s.id), Some(0));
    }

    #[test]
    fn test_clone_ids_are_unique_across_passes() {
        let mut ids = CloneIds::new();
        let mut annotations = Vec::new();
        let mut inventory = Inventory::new();

        let mut arena = Arena::new();
        arena.push(circle(1, 0.0, 5.0, "red", "blue"));
        arena.push(circle(2, 0.0, 1.0, "green", "yellow"));
        resolve(&mut arena, &mut inventory, &mut ids, &mut annotations);

        let mut arena = Arena::new();
        arena.push(circle(1, 0.0, 5.0, "red", "blue"));
        arena.push(circle(2, 0.0, 1.0, "green", "yellow"));
        resolve(&mut arena, &mut inventory, &mut ids, &mut annotations);

        let clone_ids: Vec<i32> = inventory
            .iter()
            .filter(|s| s.id >= CLONE_ID_BASE)
            .map(|s| s.id)
            .collect();
        assert_eq!(clone_ids, vec![CLONE_ID_BASE, CLONE_ID_BASE + 1]);
    }
}
