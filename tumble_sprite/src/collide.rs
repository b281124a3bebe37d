// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision dispatch over the two detection paths.
//!
//! Rotation in play means the O(1) oriented-box vertex test; two unrotated
//! participants instead get the legacy pixel-accurate scan over their overlap
//! region. The trade is deliberate: exhaustive O(area) exactness where
//! rectangles are axis-aligned, cheap approximation where they are not.

use kurbo::{Point, Rect};
use tumble_box::BoundingBox;

use crate::sprite::Collidable;

/// Border, in pixels, grown around each participant's box for a query.
const QUERY_BORDER: f64 = 1.0;

/// Whether two participants are in collision.
///
/// If either participant rotates, its oriented bounding box is tested with
/// [`BoundingBox::intersects`]; a participant whose box is degenerate
/// collides with nothing. Otherwise the aligned boxes are intersected and
/// every integer-stepped point of the overlap is tested against both
/// participants' opaque-point predicates.
pub fn colliding(a: &dyn Collidable, b: &dyn Collidable) -> bool {
    let (Ok(box_a), Ok(box_b)) = (
        a.bounding_box(QUERY_BORDER),
        b.bounding_box(QUERY_BORDER),
    ) else {
        return false;
    };
    if a.rotates() || b.rotates() {
        return box_a.intersects(&box_b);
    }
    match (box_a, box_b) {
        (BoundingBox::Aligned(ra), BoundingBox::Aligned(rb)) => pixel_scan(a, b, ra, rb),
        // A participant reporting no rotation but an oriented box still gets
        // the rotation-aware test.
        _ => box_a.intersects(&box_b),
    }
}

/// Exhaustive scan of the overlap region, pixel by pixel.
fn pixel_scan(a: &dyn Collidable, b: &dyn Collidable, ra: Rect, rb: Rect) -> bool {
    // Inclusive interval overlap; a shared edge still yields a scan line.
    if !(ra.x0 <= rb.x1 && rb.x0 <= ra.x1 && ra.y0 <= rb.y1 && rb.y0 <= ra.y1) {
        return false;
    }
    let overlap = ra.intersect(rb);
    let mut x = overlap.x0;
    while x <= overlap.x1 {
        let mut y = overlap.y0;
        while y <= overlap.y1 {
            let pt = Point::new(x, y);
            if a.contains_point(pt) && b.contains_point(pt) {
                return true;
            }
            y += 1.0;
        }
        x += 1.0;
    }
    false
}
