//! Movement domain: ground and wall probing with ray casts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::engine::{CollisionProbes, MotionEngine};
use crate::movement::{ContactProbes, GameLayer, Player};

/// Rays cast per probed side.
pub(crate) const RAYS_PER_SIDE: usize = 5;

/// Rays start this far inside the corners so a wall does not read as floor.
const CORNER_INSET: f32 = 0.9;

/// Per-ray hits for one step, each side ordered bottom-to-top (left/right)
/// or left-to-right (down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RayHits {
    pub down: [bool; RAYS_PER_SIDE],
    pub left: [bool; RAYS_PER_SIDE],
    pub right: [bool; RAYS_PER_SIDE],
}

impl RayHits {
    /// Reduce raw hits to probe booleans. A top corner is touched when its
    /// side is touched but the two highest rays on that side see open space.
    pub(crate) fn aggregate(&self) -> CollisionProbes {
        let touching_left = self.left.iter().any(|hit| *hit);
        let touching_right = self.right.iter().any(|hit| *hit);

        CollisionProbes {
            grounded: self.down.iter().any(|hit| *hit),
            touching_left,
            touching_right,
            touching_top_left: touching_left && top_clear(&self.left),
            touching_top_right: touching_right && top_clear(&self.right),
        }
    }
}

fn top_clear(side: &[bool; RAYS_PER_SIDE]) -> bool {
    side[RAYS_PER_SIDE - 2..].iter().all(|hit| !*hit)
}

/// Evenly spread offsets in [-1, 1] scaled by `half_extent * CORNER_INSET`.
fn ray_offsets(half_extent: f32) -> [f32; RAYS_PER_SIDE] {
    let span = half_extent * CORNER_INSET;
    let step = 2.0 / (RAYS_PER_SIDE - 1) as f32;
    std::array::from_fn(|i| (-1.0 + step * i as f32) * span)
}

pub(crate) fn probe_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &MotionEngine, &mut ContactProbes), With<Player>>,
) {
    // Anything solid can be stood on; only walls can be grabbed.
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, engine, mut probes) in &mut query {
        let half = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(0.25, 0.5),
        };
        let center = transform.translation.truncate();
        let tuning = engine.tuning();

        let mut hits = RayHits::default();
        let cast = |origin: Vec2, direction: Dir2, length: f32, filter: &SpatialQueryFilter| {
            spatial_query
                .cast_ray(origin, direction, length, true, filter)
                .is_some()
        };

        for (i, dx) in ray_offsets(half.x).into_iter().enumerate() {
            let origin = center + Vec2::new(dx, -half.y);
            hits.down[i] = cast(origin, Dir2::NEG_Y, tuning.ground_probe_length, &ground_filter);
        }
        for (i, dy) in ray_offsets(half.y).into_iter().enumerate() {
            let left = center + Vec2::new(-half.x, dy);
            let right = center + Vec2::new(half.x, dy);
            hits.left[i] = cast(left, Dir2::NEG_X, tuning.wall_probe_length, &wall_filter);
            hits.right[i] = cast(right, Dir2::X, tuning.wall_probe_length, &wall_filter);
        }

        let next = hits.aggregate();
        if next.grounded != probes.0.grounded {
            debug!("Ground contact changed: grounded={}", next.grounded);
        }
        probes.0 = next;
    }
}
