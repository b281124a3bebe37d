// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner sets shared by the box representations.

use kurbo::{Point, Rect};

/// The four corners of a (possibly rotated) rectangle, named by the role each
/// point plays on screen: `top_left` is the corner that sits top-left when the
/// rectangle is unrotated, and keeps that name as the rectangle turns.
///
/// All coordinates are canvas pixels with y increasing downward. The corners
/// are expected to form a rectangle; producers that cannot guarantee this get
/// best-effort results downstream (see [`Obb::from_corners`](crate::Obb::from_corners)).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corners {
    /// Top-left corner role.
    pub top_left: Point,
    /// Top-right corner role.
    pub top_right: Point,
    /// Bottom-left corner role.
    pub bottom_left: Point,
    /// Bottom-right corner role.
    pub bottom_right: Point,
}

impl Corners {
    /// Corners of an axis-aligned rectangle, roles in their natural positions.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top_left: Point::new(rect.x0, rect.y0),
            top_right: Point::new(rect.x1, rect.y0),
            bottom_left: Point::new(rect.x0, rect.y1),
            bottom_right: Point::new(rect.x1, rect.y1),
        }
    }

    /// The corners as an array, in `[top_left, top_right, bottom_left, bottom_right]` order.
    pub const fn array(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// The enclosing axis-aligned box: componentwise min/max over all four corners.
    pub fn bounds(&self) -> Rect {
        let [a, b, c, d] = self.array();
        let x0 = a.x.min(b.x).min(c.x).min(d.x);
        let y0 = a.y.min(b.y).min(c.y).min(d.y);
        let x1 = a.x.max(b.x).max(c.x).max(d.x);
        let y1 = a.y.max(b.y).max(c.y).max(d.y);
        Rect::new(x0, y0, x1, y1)
    }
}
