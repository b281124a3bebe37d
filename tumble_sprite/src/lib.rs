// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tumble Sprite: sprite poses, collision dispatch, and a ticking stage.
//!
//! Tumble Sprite drives the moving rectangles on a canvas; the geometry
//! underneath lives in [`tumble_box`].
//!
//! - [`Pose`]: position, size, heading, and rotation pivot, with the rotated
//!   corner positions kept consistent on every change.
//! - [`Sprite`]: a pose plus motion and collision configuration, exposing the
//!   [`Positionable`], [`Rotatable`], and [`Collidable`] capabilities.
//! - [`colliding`]: the two-path collision test, oriented-box when rotation
//!   is in play and pixel-accurate otherwise.
//! - [`Stage`]: owns sprites behind generational [`SpriteId`] handles, ticks
//!   them, and reports coalesced redraw damage and edge contacts.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tumble_sprite::{Sprite, Stage};
//!
//! let mut stage = Stage::new(320.0, 240.0);
//! let mut runner = Sprite::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
//! runner.set_speed(5.0);
//! let runner_id = stage.insert(runner);
//! let blocker = stage.insert(Sprite::new(Point::new(20.0, 10.0), Size::new(20.0, 20.0)));
//!
//! // One tick moves the runner 5 pixels along its heading (east by default).
//! let damage = stage.tick();
//! assert!(damage.redraw.is_some());
//!
//! let pairs = stage.collisions();
//! assert_eq!(pairs, vec![(runner_id, blocker)]);
//! ```
//!
//! Headings use the mathematical convention: degrees counterclockwise from
//! east, with positive y pointing down the canvas.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use tumble_sprite::Pose;
//!
//! let mut pose = Pose::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
//! pose.set_heading(90.0);
//! // A square is invariant under a quarter turn about its center.
//! let b = pose.bounds();
//! assert!(b.x0.abs() < 1e-9 && (b.x1 - 10.0).abs() < 1e-9);
//! assert!(b.y0.abs() < 1e-9 && (b.y1 - 10.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod collide;
pub mod pose;
pub mod sprite;
pub mod stage;
pub mod types;

pub use collide::colliding;
pub use pose::Pose;
pub use sprite::{Collidable, PixelMask, Positionable, Rotatable, Sprite};
pub use stage::{Redraw, SpriteId, Stage, TickDamage};
pub use types::{EdgeFlags, RotationCenter};
