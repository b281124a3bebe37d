// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sprite carrier and the capability traits collision dispatch works over.
//!
//! Components participate in geometry through small capability traits
//! (position, rotation, collision) rather than a concrete widget hierarchy;
//! the engine never names a widget type.

use alloc::boxed::Box;
use kurbo::{Point, Rect, Size};
use tumble_box::{BoundingBox, Corners, DegenerateGeometry, Obb};

use crate::pose::Pose;
use crate::types::RotationCenter;

/// Something with a top-left position and a size on the canvas.
pub trait Positionable {
    /// Top-left corner of the unrotated rectangle.
    fn position(&self) -> Point;
    /// Move the top-left corner.
    fn set_position(&mut self, pt: Point);
    /// Unrotated extents.
    fn size(&self) -> Size;
}

/// Something that carries a heading and a rotation pivot.
pub trait Rotatable: Positionable {
    /// Heading in degrees, math convention.
    fn heading(&self) -> f64;
    /// Set the heading in degrees.
    fn set_heading(&mut self, degrees: f64);
    /// The pivot offsets rotation is applied about.
    fn rotation_center(&self) -> RotationCenter;
}

/// Something collision dispatch can query.
pub trait Collidable {
    /// Whether this participant's heading affects its drawn footprint. Decides
    /// which collision path applies when paired with another participant.
    fn rotates(&self) -> bool;
    /// The collision rectangle, grown by `border` pixels.
    ///
    /// A degenerate (zero-area) participant reports [`DegenerateGeometry`];
    /// the query treats it as colliding with nothing.
    fn bounding_box(&self, border: f64) -> Result<BoundingBox, DegenerateGeometry>;
    /// Whether the canvas point hits an opaque part of this participant.
    /// Consulted only by the non-rotated, pixel-accurate collision path.
    fn contains_point(&self, pt: Point) -> bool;
}

/// Host-supplied opacity predicate, in canvas coordinates.
///
/// Backed by whatever image or shape representation the host uses. Without
/// one, a sprite's whole rectangle counts as opaque.
pub trait PixelMask {
    /// Whether the canvas point hits an opaque pixel.
    fn contains(&self, pt: Point) -> bool;
}

/// A canvas sprite: a [`Pose`], motion state, and collision configuration.
pub struct Sprite {
    pose: Pose,
    speed: f64,
    rotates: bool,
    enabled: bool,
    mask: Option<Box<dyn PixelMask>>,
}

impl core::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sprite")
            .field("pose", &self.pose)
            .field("speed", &self.speed)
            .field("rotates", &self.rotates)
            .field("enabled", &self.enabled)
            .field("mask", &self.mask.as_ref().map(|_| "dyn PixelMask"))
            .finish_non_exhaustive()
    }
}

impl Sprite {
    /// A stationary, non-rotating, enabled sprite at `origin`.
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            pose: Pose::new(origin, size),
            speed: 0.0,
            rotates: false,
            enabled: true,
            mask: None,
        }
    }

    /// The sprite's pose.
    pub const fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Mutable access to the pose. Pose setters keep corners consistent.
    pub fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }

    /// Pixels moved along the heading per tick.
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the per-tick speed.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Whether the sprite draws (and collides) rotated by its heading.
    pub fn set_rotates(&mut self, rotates: bool) {
        self.rotates = rotates;
    }

    /// Whether the sprite participates in ticks and collision queries.
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the sprite.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Install a host opacity predicate for the pixel-accurate path.
    pub fn set_mask(&mut self, mask: Box<dyn PixelMask>) {
        self.mask = Some(mask);
    }

    /// Drop any installed opacity predicate.
    pub fn clear_mask(&mut self) {
        self.mask = None;
    }

    /// Inclusive rectangle test used when no mask is installed.
    ///
    /// Coordinates are inclusive pixel positions: a 10-wide sprite at x = 0
    /// covers pixels 0 through 9.
    fn rect_contains_point(&self, pt: Point) -> bool {
        let origin = self.pose.position();
        let size = self.pose.size();
        pt.x >= origin.x
            && pt.x <= origin.x + size.width - 1.0
            && pt.y >= origin.y
            && pt.y <= origin.y + size.height - 1.0
    }
}

impl Positionable for Sprite {
    fn position(&self) -> Point {
        self.pose.position()
    }

    fn set_position(&mut self, pt: Point) {
        self.pose.set_position(pt);
    }

    fn size(&self) -> Size {
        self.pose.size()
    }
}

impl Rotatable for Sprite {
    fn heading(&self) -> f64 {
        self.pose.heading()
    }

    fn set_heading(&mut self, degrees: f64) {
        self.pose.set_heading(degrees);
    }

    fn rotation_center(&self) -> RotationCenter {
        self.pose.rotation_center()
    }
}

impl Collidable for Sprite {
    fn rotates(&self) -> bool {
        self.rotates
    }

    /// The collision box in the representation matching [`rotates`](Self::rotates).
    ///
    /// Bounds use inclusive pixel coordinates, so the right/bottom edges sit
    /// one pixel inside the geometric rectangle before the border is applied.
    fn bounding_box(&self, border: f64) -> Result<BoundingBox, DegenerateGeometry> {
        let size = self.pose.size();
        if size.width <= 0.0 || size.height <= 0.0 {
            // The inclusive corner adjustments below would still yield finite
            // axes for a zero-area sprite, so reject it before they apply.
            return Err(DegenerateGeometry);
        }
        if !self.rotates {
            let origin = self.pose.position();
            return Ok(BoundingBox::Aligned(Rect::new(
                origin.x - border,
                origin.y - border,
                origin.x + size.width - 1.0 + border,
                origin.y + size.height - 1.0 + border,
            )));
        }
        let c = self.pose.corners();
        let corners = Corners {
            top_left: Point::new(c.top_left.x - border, c.top_left.y - border),
            top_right: Point::new(c.top_right.x + border - 1.0, c.top_right.y - border),
            bottom_left: Point::new(c.bottom_left.x - border, c.bottom_left.y - 1.0 + border),
            bottom_right: Point::new(
                c.bottom_right.x - 1.0 + border,
                c.bottom_right.y - 1.0 + border,
            ),
        };
        Obb::from_corners(self.pose.pivot(), corners).map(BoundingBox::Oriented)
    }

    fn contains_point(&self, pt: Point) -> bool {
        match &self.mask {
            Some(mask) => mask.contains(pt),
            None => self.rect_contains_point(pt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mask_is_inclusive_rect() {
        let sprite = Sprite::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(sprite.contains_point(Point::new(0.0, 0.0)));
        assert!(sprite.contains_point(Point::new(9.0, 9.0)));
        assert!(!sprite.contains_point(Point::new(9.5, 9.5)));
        assert!(!sprite.contains_point(Point::new(-0.5, 3.0)));
    }

    #[test]
    fn installed_mask_overrides_rect_test() {
        struct Nothing;
        impl PixelMask for Nothing {
            fn contains(&self, _pt: Point) -> bool {
                false
            }
        }
        let mut sprite = Sprite::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        sprite.set_mask(Box::new(Nothing));
        assert!(!sprite.contains_point(Point::new(5.0, 5.0)));
        sprite.clear_mask();
        assert!(sprite.contains_point(Point::new(5.0, 5.0)));
    }

    #[test]
    fn aligned_bounding_box_uses_inclusive_coordinates() {
        let sprite = Sprite::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let BoundingBox::Aligned(rect) = sprite.bounding_box(1.0).unwrap() else {
            panic!("non-rotating sprite must produce an aligned box");
        };
        assert_eq!(rect, Rect::new(-1.0, -1.0, 10.0, 10.0));
    }

    #[test]
    fn rotating_sprite_produces_oriented_box() {
        let mut sprite = Sprite::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        sprite.set_rotates(true);
        sprite.set_heading(30.0);
        let BoundingBox::Oriented(obb) = sprite.bounding_box(0.0).unwrap() else {
            panic!("rotating sprite must produce an oriented box");
        };
        assert_eq!(obb.center(), Point::new(5.0, 5.0));
        assert!(
            obb.bounds().contains(obb.center()),
            "enclosing box covers the pivot"
        );
    }

    #[test]
    fn zero_area_sprite_is_degenerate() {
        let mut sprite = Sprite::new(Point::new(3.0, 3.0), Size::new(0.0, 10.0));
        assert_eq!(sprite.bounding_box(0.0), Err(DegenerateGeometry));
        sprite.set_rotates(true);
        assert!(sprite.bounding_box(0.0).is_err());
    }
}
