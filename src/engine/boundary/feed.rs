use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info};

use crate::engine::BoundaryError;
use crate::engine::boundary::{BoundaryFetch, BoundarySource};

/// One boundary update, as seen by readers.
///
/// Points and point count only ever travel together inside one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundarySnapshot {
    /// 0 until the first push; +1 per push afterwards.
    pub generation: u64,
    pub fetch: BoundaryFetch,
}

/// Latest-wins boundary cell shared between tracking callbacks and the render thread.
///
/// Cloning yields another handle to the same cell. Writers replace the whole
/// snapshot; readers get an `Arc` to an immutable one.
#[derive(Debug, Clone, Default)]
pub struct BoundaryFeed {
    current: Arc<RwLock<Arc<BoundarySnapshot>>>,
}

impl BoundaryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot. Returns the new generation.
    pub fn push(&self, fetch: BoundaryFetch) -> u64 {
        // The snapshot is swapped as a whole, so a poisoned lock still guards consistent data.
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = slot.generation.wrapping_add(1);
        *slot = Arc::new(BoundarySnapshot { generation, fetch });
        debug!("[BoundaryFeed] pushed generation={}", generation);
        generation
    }

    /// Query `source` and push whatever it reports.
    pub fn refresh_from(&self, source: &dyn BoundarySource) -> u64 {
        let fetch = source.fetch_boundary();
        match fetch.polygon() {
            Some(polygon) => debug!(
                "[BoundaryFeed] '{}' reported {} boundary points",
                source.name(),
                polygon.len()
            ),
            None => info!("[BoundaryFeed] {}", no_boundary_data(source)),
        }
        self.push(fetch)
    }

    pub fn latest(&self) -> Arc<BoundarySnapshot> {
        let slot = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*slot)
    }

    pub fn generation(&self) -> u64 {
        self.latest().generation
    }
}

fn no_boundary_data(source: &dyn BoundarySource) -> BoundaryError {
    BoundaryError::NoBoundaryData {
        source_name: source.name().to_string(),
    }
}
