//! In-memory [`WorldBuilder`] backed by a plain hash map.
//!
//! Useful as the default target when no engine is wired up, and as an
//! inspectable double in tests.

use crate::map::planner::TilePlacement;
use crate::world::WorldBuilder;
use std::collections::HashMap;

/// A named group of placed tiles plus its aggregate scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Tiles in placement order.
    pub tiles: Vec<TilePlacement>,
    /// Aggregate scale applied to the container as a whole.
    pub scale: f32,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            scale: 1.0,
        }
    }
}

/// World implementation that records containers in memory.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    containers: HashMap<String, Container>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// The named container, if it has been created.
    pub fn container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    /// Names of every container currently in the world, in no fixed order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Number of containers in the world.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl WorldBuilder for MemoryWorld {
    fn contains(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }

    fn destroy(&mut self, name: &str) {
        self.containers.remove(name);
    }

    fn create(&mut self, name: &str) {
        self.containers.insert(name.to_owned(), Container::default());
    }

    fn place(&mut self, name: &str, placement: TilePlacement) {
        // Containers appear on demand so a stray place cannot panic.
        self.containers.entry(name.to_owned()).or_default().tiles.push(placement);
    }

    fn set_scale(&mut self, name: &str, scale: f32) {
        self.containers.entry(name.to_owned()).or_default().scale = scale;
    }
}
