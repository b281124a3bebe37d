// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Box: Kurbo-native oriented bounding boxes for sprite collision.
//!
//! Tumble Box is the geometry leaf of the Tumble workspace.
//!
//! - [`Corners`]: the four corner roles of a (possibly rotated) rectangle.
//! - [`Obb`]: an oriented rectangle described by center, two orthonormal unit
//!   axes, and half-extents, with its corners and enclosing axis-aligned box.
//! - [`BoundingBox`]: either an axis-aligned rectangle or an [`Obb`], with a
//!   rotation-aware [`intersects`](BoundingBox::intersects) test.
//!
//! Boxes are values: built fresh per pose update and never mutated in place.
//! The intersection test is an approximate separating-axis check by corner
//! containment — fast and exact for touching/overlapping corners, but it
//! misses the "+"-crossing case where two rectangles overlap with no vertex
//! of either inside the other. See [`BoundingBox::intersects`] for the
//! compatibility rationale.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tumble_box::{BoundingBox, Corners, Obb};
//!
//! // An axis-aligned square and a smaller square rotated 45 degrees inside it.
//! let aligned = BoundingBox::Aligned(Rect::new(0.0, 0.0, 10.0, 10.0));
//! let diamond = Obb::from_corners(
//!     Point::new(5.0, 5.0),
//!     Corners {
//!         top_left: Point::new(5.0, 2.0),
//!         top_right: Point::new(8.0, 5.0),
//!         bottom_left: Point::new(2.0, 5.0),
//!         bottom_right: Point::new(5.0, 8.0),
//!     },
//! )
//! .unwrap();
//!
//! assert!(aligned.intersects(&BoundingBox::Oriented(diamond)));
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are finite `f64` canvas pixels, y increasing downward.
//! Containment comparisons are inclusive (`<=`) with no epsilon; exact
//! boundary alignment is numerically fragile and intentionally left so.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod obb;
pub mod types;

pub use obb::{BoundingBox, DegenerateGeometry, Obb};
pub use types::Corners;
