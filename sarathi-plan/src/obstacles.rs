//! Static obstacle collection shared between the planner and its host.
//!
//! The host thread that perceives obstacles may keep inserting while other
//! threads plan; the planner reads one [`ObstacleSet::items`] snapshot per
//! invocation, so membership is stable for the duration of a search.

use parking_lot::RwLock;

use crate::core::geometry::OrientedBox;

/// A static obstacle, described by its perception bounding box.
#[derive(Debug, Clone)]
pub struct Obstacle {
    id: u32,
    bounding_box: OrientedBox,
}

impl Obstacle {
    /// Create an obstacle from its perception bounding box.
    pub fn new(id: u32, bounding_box: OrientedBox) -> Self {
        Self { id, bounding_box }
    }

    /// Obstacle identifier.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Oriented bounding box as perceived, in world coordinates.
    #[inline]
    pub fn perception_bounding_box(&self) -> OrientedBox {
        self.bounding_box
    }
}

/// Thread-safe indexed obstacle collection.
#[derive(Debug, Default)]
pub struct ObstacleSet {
    items: RwLock<Vec<Obstacle>>,
}

impl ObstacleSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an obstacle.
    pub fn insert(&self, obstacle: Obstacle) {
        self.items.write().push(obstacle);
    }

    /// Snapshot of the current contents.
    pub fn items(&self) -> Vec<Obstacle> {
        self.items.read().clone()
    }

    /// Look up an obstacle by identifier.
    pub fn get(&self, id: u32) -> Option<Obstacle> {
        self.items.read().iter().find(|o| o.id() == id).cloned()
    }

    /// Number of obstacles.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
