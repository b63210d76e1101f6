//! Movement domain: box-overlap contact sampling against level geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::ProbeGeometry;
use crate::movement::facing::Facing;
use crate::movement::probe::{ContactSample, ContactSampler, ProbeBox, ProbeBoxes};
use crate::movement::{FALLBACK_HALF_EXTENTS, GameLayer};

/// Half extents of the player's box collider.
pub(crate) fn collider_half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => FALLBACK_HALF_EXTENTS,
    }
}

/// Samples the three probes with avian spatial queries.
pub(crate) struct SpatialContactSampler<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub origin: Vec2,
    pub half_extents: Vec2,
    pub geometry: &'a ProbeGeometry,
}

impl SpatialContactSampler<'_, '_, '_> {
    fn overlaps(&self, probe: ProbeBox) -> bool {
        // Only GameLayer::Ground geometry counts
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        let shape = Collider::rectangle(probe.size.x, probe.size.y);

        !self
            .spatial_query
            .shape_intersections(&shape, probe.center, 0.0, &filter)
            .is_empty()
    }
}

impl ContactSampler for SpatialContactSampler<'_, '_, '_> {
    fn sample(&self, facing: Facing) -> ContactSample {
        let boxes = ProbeBoxes::around(self.origin, self.half_extents, facing, self.geometry);

        ContactSample {
            on_ground: self.overlaps(boxes.ground),
            front_wall: self.overlaps(boxes.front),
            back_wall: self.overlaps(boxes.back),
        }
    }
}
