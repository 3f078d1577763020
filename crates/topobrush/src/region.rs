//! Bounded topological expansion from a seed triangle.
//!
//! The brush grows in levels. Level 0 holds the seed; each following level
//! holds the neighbors of the previous level that are not already in the
//! previous level or in the level being built. Earlier levels are not
//! consulted, so on cyclic graphs a triangle can show up again two or more
//! levels after it was first reached. The final result is deduplicated, so
//! this only affects the per-level lists, never the selected set.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::topology::MeshTopology;
use crate::types::TriangleId;
use crate::validation::MeshError;

/// Grows brush regions and remembers every triangle ever selected.
#[derive(Debug, Clone, Default)]
pub struct RegionSelector {
    /// Union of all expansion results for the session; never shrinks
    selected: BTreeSet<TriangleId>,
}

impl RegionSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `radius` levels around `seed` and add the result to the
    /// accumulated selection.
    ///
    /// A radius of 1 or less (including negative values) returns only the seed.
    pub fn expand(
        &mut self,
        topology: &MeshTopology,
        seed: TriangleId,
        radius: i32,
    ) -> Result<BTreeSet<TriangleId>, MeshError> {
        let result = expand_region(topology, seed, radius)?;

        self.selected.extend(result.iter().copied());

        debug!(
            "RegionSelector::expand: seed={} radius={} -> {} triangles ({} selected in session)",
            seed.0,
            radius,
            result.len(),
            self.selected.len()
        );

        Ok(result)
    }

    /// Every triangle returned by any expansion so far
    pub fn selected(&self) -> &BTreeSet<TriangleId> {
        &self.selected
    }

    pub fn is_selected(&self, id: TriangleId) -> bool {
        self.selected.contains(&id)
    }
}

/// Union of all expansion levels around `seed`.
///
/// Only the latest level is kept. Each level is a function of the one before
/// it, so once a level is empty or repeats the level two rounds back the
/// remaining levels only cycle through triangles already collected.
pub fn expand_region(
    topology: &MeshTopology,
    seed: TriangleId,
    radius: i32,
) -> Result<BTreeSet<TriangleId>, MeshError> {
    topology.validate(seed)?;

    let mut result = BTreeSet::from([seed]);
    let mut previous = vec![seed];
    let mut previous_members = HashSet::from([seed]);
    let mut before_members: HashSet<TriangleId> = HashSet::new();

    for _ in 1..radius.max(1) {
        let (level, members) = next_level(topology, &previous, &previous_members)?;
        if members.is_empty() || members == before_members {
            break;
        }

        result.extend(level.iter().copied());
        before_members = std::mem::replace(&mut previous_members, members);
        previous = level;
    }

    Ok(result)
}

/// Per-level triangle lists for an expansion, in discovery order.
///
/// Level 0 is `[seed]`; exactly `max(radius, 1)` levels are produced.
pub fn expand_levels(
    topology: &MeshTopology,
    seed: TriangleId,
    radius: i32,
) -> Result<Vec<Vec<TriangleId>>, MeshError> {
    topology.validate(seed)?;

    let mut levels: Vec<Vec<TriangleId>> = vec![vec![seed]];
    let mut previous_members: HashSet<TriangleId> = HashSet::from([seed]);

    for _ in 1..radius.max(1) {
        let Some(previous) = levels.last() else {
            break;
        };

        let (level, members) = next_level(topology, previous, &previous_members)?;
        levels.push(level);
        previous_members = members;
    }

    Ok(levels)
}

/// Neighbors of `previous` that are in neither `previous` nor the new level
/// so far, with the new level's membership set.
fn next_level(
    topology: &MeshTopology,
    previous: &[TriangleId],
    previous_members: &HashSet<TriangleId>,
) -> Result<(Vec<TriangleId>, HashSet<TriangleId>), MeshError> {
    let mut level = Vec::new();
    let mut members = HashSet::new();
    for &triangle in previous {
        for &neighbor in topology.neighbors(triangle)? {
            if !previous_members.contains(&neighbor) && members.insert(neighbor) {
                level.push(neighbor);
            }
        }
    }
    Ok((level, members))
}
