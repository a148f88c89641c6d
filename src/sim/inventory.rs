//! The inventory ("floor") - FIFO pool of shapes not yet committed to play
//!
//! Shapes parsed from the initial description land here, loaders pull from
//! the front, and resolution survivors are pushed onto the back. Order is
//! load-bearing: it decides the pairing order of the next resolution pass.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::shape::Shape;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    shapes: VecDeque<Shape>,
}

impl Inventory {
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

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_fifo_order() {
        let mut inv = Inventory::new();
        inv.push(Shape::circle(1, dvec2(0.0, 0.0), 1.0, "red", "blue"));
        inv.push(Shape::circle(2, dvec2(0.0, 0.0), 1.0, "red", "blue"));

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.pop().map(|s| s.id), Some(1));
        assert_eq!(inv.pop().map(|s| s.id), Some(2));
        assert_eq!(inv.pop(), None);
    }

    #[test]
    fn test_iter_is_non_destructive() {
        let mut inv = Inventory::new();
        for id in 0..5 {
            inv.push(Shape::circle(id, dvec2(0.0, 0.0), 1.0, "red", "blue"));
        }
        let seen: Vec<i32> = inv.iter().map(|s| s.id).collect();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(inv.len(), 5);
        assert_eq!(inv.pop().map(|s| s.id), Some(0));
    }
}
