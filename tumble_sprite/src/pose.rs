// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sprite pose: position, size, heading, and the derived corner set.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tumble_box::Corners;

use crate::types::{EdgeFlags, RotationCenter};

/// Padding, in pixels, applied on top of the penetration depth when pushing
/// a sprite back inside the canvas.
const EDGE_PADDING: f64 = 15.0;

/// Which corner of the unrotated rectangle a role is taken from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum RawCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Heading bands selecting the corner-role permutation.
///
/// The cut-offs are rough, empirically tuned estimates; testing showed no
/// clear improvement from more precise boundaries. Corner assignment makes
/// no continuity guarantee exactly at a band boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Band {
    East,
    North,
    West,
    South,
}

impl Band {
    /// Band for a heading already normalized into `(-180, 180]`.
    fn for_heading(heading: f64) -> Self {
        if (-45.0..45.0).contains(&heading) {
            Self::East
        } else if (45.0..135.0).contains(&heading) {
            Self::North
        } else if (-135.0..-45.0).contains(&heading) {
            Self::South
        } else {
            // `>= 135` and `< -135` share one permutation.
            Self::West
        }
    }

    /// Which unrotated corner takes each role, in
    /// `(top_left, top_right, bottom_left, bottom_right)` order.
    const fn roles(self) -> [RawCorner; 4] {
        use RawCorner::*;
        match self {
            Self::East => [TopLeft, TopRight, BottomLeft, BottomRight],
            Self::North => [TopRight, BottomRight, TopLeft, BottomLeft],
            Self::West => [BottomRight, BottomLeft, TopRight, TopLeft],
            Self::South => [BottomLeft, TopLeft, BottomRight, TopRight],
        }
    }
}

/// Normalize a heading into `(-180, 180]` degrees.
fn normalize_heading(degrees: f64) -> f64 {
    let mut h = degrees % 360.0;
    if h > 180.0 {
        h -= 360.0;
    } else if h <= -180.0 {
        h += 360.0;
    }
    h
}

/// A sprite's rectangle and rotation state, with the four corner positions
/// kept consistent with it.
///
/// The pose exclusively owns its corners: every mutation recomputes them
/// before returning, so a reader can never observe corners that are stale
/// with respect to position, size, heading, or rotation center. Consumers
/// get copies via [`corners`](Self::corners).
///
/// `heading` is in degrees, math convention (0 = east, counter-clockwise
/// positive); because canvas y grows downward, the rotation applied to
/// screen coordinates is `-heading` about the [pivot](Self::pivot).
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    heading: f64,
    rotation_center: RotationCenter,
    corners: Corners,
}

impl Pose {
    /// A pose at `origin` with the given size, heading 0, pivot at the center.
    pub fn new(origin: Point, size: Size) -> Self {
        let mut pose = Self {
            left: origin.x,
            top: origin.y,
            width: size.width,
            height: size.height,
            heading: 0.0,
            rotation_center: RotationCenter::default(),
            corners: Corners::from_rect(Rect::ZERO),
        };
        pose.recompute_corners();
        pose
    }

    /// Top-left corner of the unrotated rectangle.
    pub const fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Unrotated rectangle extents.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Heading in degrees, normalized into `(-180, 180]`.
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    /// The configured rotation pivot offsets.
    pub const fn rotation_center(&self) -> RotationCenter {
        self.rotation_center
    }

    /// Current corner set (a copy; the pose keeps ownership).
    pub const fn corners(&self) -> Corners {
        self.corners
    }

    /// Enclosing axis-aligned box of the current corners.
    pub fn bounds(&self) -> Rect {
        self.corners.bounds()
    }

    /// The pivot point rotation is applied about, in canvas coordinates.
    pub fn pivot(&self) -> Point {
        Point::new(
            self.left + self.width * (self.rotation_center.x_percent / 100.0),
            self.top + self.height * (self.rotation_center.y_percent / 100.0),
        )
    }

    /// Move the top-left corner to `pt`.
    pub fn set_position(&mut self, pt: Point) {
        self.left = pt.x;
        self.top = pt.y;
        self.recompute_corners();
    }

    /// Resize the unrotated rectangle.
    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
        self.recompute_corners();
    }

    /// Set the heading in degrees (any value; normalized on store).
    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_heading(degrees);
        self.recompute_corners();
    }

    /// Move the rotation pivot.
    pub fn set_rotation_center(&mut self, center: RotationCenter) {
        self.rotation_center = center;
        self.recompute_corners();
    }

    /// Move `speed` pixels along the heading and refresh the corners.
    pub fn advance(&mut self, speed: f64) {
        // The heading is math-convention; canvas y points down, so the
        // screen-space direction uses the negated angle.
        let dir = Vec2::from_angle((-self.heading).to_radians());
        self.left += speed * dir.x;
        self.top += speed * dir.y;
        self.recompute_corners();
    }

    /// Recompute the corner set from the current state.
    ///
    /// The heading band picks which unrotated corner plays each role, then a
    /// single rotation of `-heading` about the pivot maps all four role
    /// points to their canvas positions.
    fn recompute_corners(&mut self) {
        let raw = Corners::from_rect(Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        ));
        let pick = |c: RawCorner| match c {
            RawCorner::TopLeft => raw.top_left,
            RawCorner::TopRight => raw.top_right,
            RawCorner::BottomLeft => raw.bottom_left,
            RawCorner::BottomRight => raw.bottom_right,
        };
        let [tl, tr, bl, br] = Band::for_heading(self.heading).roles();
        let rotation = Affine::rotate_about((-self.heading).to_radians(), self.pivot());
        self.corners = Corners {
            top_left: rotation * pick(tl),
            top_right: rotation * pick(tr),
            bottom_left: rotation * pick(bl),
            bottom_right: rotation * pick(br),
        };
    }

    /// Whether a left-side corner touches or crosses the west boundary.
    pub fn over_west_edge(&self) -> bool {
        self.corners.top_left.x <= 0.0 || self.corners.bottom_left.x <= 0.0
    }

    /// Whether a right-side corner touches or crosses the east boundary.
    pub fn over_east_edge(&self, canvas_width: f64) -> bool {
        self.corners.top_right.x >= canvas_width || self.corners.bottom_right.x >= canvas_width
    }

    /// Whether a top-side corner touches or crosses the north boundary.
    pub fn over_north_edge(&self) -> bool {
        self.corners.top_left.y <= 0.0 || self.corners.top_right.y <= 0.0
    }

    /// Whether a bottom-side corner touches or crosses the south boundary.
    pub fn over_south_edge(&self, canvas_height: f64) -> bool {
        self.corners.bottom_left.y >= canvas_height || self.corners.bottom_right.y >= canvas_height
    }

    /// All canvas edges currently crossed.
    pub fn crossed_edges(&self, canvas_width: f64, canvas_height: f64) -> EdgeFlags {
        let mut flags = EdgeFlags::empty();
        flags.set(EdgeFlags::WEST, self.over_west_edge());
        flags.set(EdgeFlags::EAST, self.over_east_edge(canvas_width));
        flags.set(EdgeFlags::NORTH, self.over_north_edge());
        flags.set(EdgeFlags::SOUTH, self.over_south_edge(canvas_height));
        flags
    }

    /// Move the rectangle back inside the canvas if any part sticks out.
    ///
    /// A sprite too wide (or tall) for the canvas is aligned with the west
    /// (or north) edge instead. Otherwise a crossed edge shifts the sprite
    /// inward by the penetration depth plus a fixed 15-pixel padding. The
    /// corners are recomputed at most once, and the return value tells the
    /// caller whether to report a change — also at most once, so repeated
    /// repositioning cannot feed back on itself.
    ///
    /// Calling this twice with unchanged canvas dimensions leaves the second
    /// call a no-op.
    pub fn move_into_bounds(&mut self, canvas_width: f64, canvas_height: f64) -> bool {
        let mut moved = false;

        if self.width > canvas_width {
            // Clamp to the west edge, but only when not already there;
            // reporting a move for an already-clamped sprite would retrigger
            // repositioning on every call.
            if self.left != 0.0 {
                self.left = 0.0;
                moved = true;
            }
        } else if self.over_west_edge() {
            let penetration = self
                .corners
                .top_left
                .x
                .min(self.corners.bottom_left.x)
                .abs();
            self.left += penetration + EDGE_PADDING;
            moved = true;
        } else if self.over_east_edge(canvas_width) {
            let penetration =
                self.corners.top_right.x.max(self.corners.bottom_right.x) - canvas_width;
            self.left -= penetration + EDGE_PADDING;
            moved = true;
        }

        // Vertical checks read the corner set from before any horizontal
        // shift; only y-coordinates are consulted, which a horizontal shift
        // leaves untouched.
        if self.height > canvas_height {
            if self.top != 0.0 {
                self.top = 0.0;
                moved = true;
            }
        } else if self.over_north_edge() {
            let penetration = self.corners.top_left.y.min(self.corners.top_right.y).abs();
            self.top += penetration + EDGE_PADDING;
            moved = true;
        } else if self.over_south_edge(canvas_height) {
            let penetration =
                self.corners.bottom_left.y.max(self.corners.bottom_right.y) - canvas_height;
            self.top -= penetration + EDGE_PADDING;
            moved = true;
        }

        if moved {
            self.recompute_corners();
        }
        moved
    }
}
