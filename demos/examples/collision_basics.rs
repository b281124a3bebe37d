// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision basics.
//!
//! Show the two collision paths: the pixel-accurate scan for unrotated
//! sprites (with a host opacity mask) and the oriented-box test once a
//! heading is in play, plus the underlying box types from `tumble_box`.
//!
//! Run:
//! - `cargo run -p tumble_demos --example collision_basics`

use kurbo::{Point, Size};
use tumble_box::BoundingBox;
use tumble_sprite::{Collidable, PixelMask, Sprite, colliding};

/// Opaque only in the left half of the sprite's rectangle.
struct LeftHalf {
    split_x: f64,
}

impl PixelMask for LeftHalf {
    fn contains(&self, pt: Point) -> bool {
        pt.x < self.split_x
    }
}

fn main() {
    // Two overlapping unrotated sprites: the pixel scan finds shared pixels.
    let a = Sprite::new(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
    let b = Sprite::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
    println!("unrotated overlap: {}", colliding(&a, &b));
    assert!(colliding(&a, &b));

    // Mask out the overlapping half of `a` and the pair separates.
    let mut masked = Sprite::new(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
    masked.set_mask(Box::new(LeftHalf { split_x: 10.0 }));
    println!("masked overlap: {}", colliding(&masked, &b));
    assert!(!colliding(&masked, &b));

    // Rotation switches to the O(1) oriented-box test; the mask no longer
    // matters because only the rotated rectangle is consulted.
    let mut spinner = Sprite::new(Point::new(0.0, 0.0), Size::new(20.0, 20.0));
    spinner.set_rotates(true);
    spinner.pose_mut().set_heading(45.0);
    println!("rotated vs unrotated: {}", colliding(&spinner, &b));
    assert!(colliding(&spinner, &b));

    // The boxes behind the test are plain values you can inspect.
    match spinner.bounding_box(1.0).unwrap() {
        BoundingBox::Oriented(obb) => {
            println!("spinner center: {:?}", obb.center());
            println!("spinner enclosing bounds: {:?}", obb.bounds());
        }
        BoundingBox::Aligned(rect) => println!("spinner aligned: {rect:?}"),
    }
    match b.bounding_box(1.0).unwrap() {
        BoundingBox::Aligned(rect) => println!("b aligned (border 1): {rect:?}"),
        BoundingBox::Oriented(_) => unreachable!("b does not rotate"),
    }
}
