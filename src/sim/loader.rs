//! Loaders - per-id buffers feeding shapes from the inventory to a launcher
//!
//! The dispense discipline is configurable: FIFO fires the oldest-loaded
//! shape first, LIFO the most recently loaded. Both exist because the game
//! is specified over an abstract buffer; FIFO is the default.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::inventory::Inventory;
use super::shape::Shape;

/// Dispense order of a loader's buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Discipline {
    /// Oldest-loaded shape dispenses first (queue)
    #[default]
    Fifo,
    /// Most recently loaded shape dispenses first (stack)
    Lifo,
}

/// A shape buffer identified by an integer id, unique within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loader {
    id: i32,
    discipline: Discipline,
    buffer: VecDeque<Shape>,
}

impl Loader {
    pub fn new(id: i32, discipline: Discipline) -> Self {
        Self {
            id,
            discipline,
            buffer: VecDeque::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Pull up to `n` shapes from the front of the inventory into this
    /// loader, in inventory pop order. Stops early when the inventory runs
    /// out. Returns the count actually moved.
    pub fn transfer(&mut self, n: usize, from: &mut Inventory) -> usize {
        let mut moved = 0;
        for _ in 0..n {
            match from.pop() {
                Some(shape) => {
                    self.buffer.push_back(shape);
                    moved += 1;
                }
                None => break,
            }
        }
        moved
    }

    /// Insert a shape directly (used when a launcher cycles its ready slot
    /// back onto a loader)
    pub fn push(&mut self, shape: Shape) {
        self.buffer.push_back(shape);
    }

    /// Remove the next shape per the loader's discipline
    pub fn dispense(&mut self) -> Option<Shape> {
        match self.discipline {
            Discipline::Fifo => self.buffer.pop_front(),
            Discipline::Lifo => self.buffer.pop_back(),
        }
    }

    /// Buffer view in insertion order; leaves contents intact
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.buffer.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn circle(id: i32) -> Shape {
        Shape::circle(id, dvec2(0.0, 0.0), 1.0, "red", "blue")
    }

    fn inventory_of(ids: &[i32]) -> Inventory {
        let mut inv = Inventory::new();
        for &id in ids {
            inv.push(circle(id));
        }
        inv
    }

    #[test]
    fn test_transfer_stops_at_empty_inventory() {
        let mut inv = inventory_of(&[1, 2]);
        let mut loader = Loader::new(10, Discipline::Fifo);

        assert_eq!(loader.transfer(5, &mut inv), 2);
        assert_eq!(loader.len(), 2);
        assert!(inv.is_empty());
        // Further transfers are a clean no-op
        assert_eq!(loader.transfer(3, &mut inv), 0);
    }

    #[test]
    fn test_fifo_dispenses_oldest_first() {
        let mut inv = inventory_of(&[1, 2, 3]);
        let mut loader = Loader::new(10, Discipline::Fifo);
        loader.transfer(3, &mut inv);

        assert_eq!(loader.dispense().map(|s| s.id), Some(1));
        assert_eq!(loader.dispense().map(|s| s.id), Some(2));
        assert_eq!(loader.dispense().map(|s| s.id), Some(3));
        assert_eq!(loader.dispense(), None);
    }

    #[test]
    fn test_lifo_dispenses_newest_first() {
        let mut inv = inventory_of(&[1, 2, 3]);
        let mut loader = Loader::new(10, Discipline::Lifo);
        loader.transfer(3, &mut inv);

        assert_eq!(loader.dispense().map(|s| s.id), Some(3));
        assert_eq!(loader.dispense().map(|s| s.id), Some(2));
        assert_eq!(loader.dispense().map(|s| s.id), Some(1));
        assert_eq!(loader.dispense(), None);
    }
}
