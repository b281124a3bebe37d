// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small value types shared across the sprite model.

bitflags::bitflags! {
    /// Canvas edges a sprite's rectangle currently crosses.
    ///
    /// An edge counts as crossed when either of its two relevant corners
    /// touches or passes the boundary (`<= 0` or `>=` the canvas dimension).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EdgeFlags: u8 {
        /// Left canvas boundary (x = 0).
        const WEST  = 0b0000_0001;
        /// Right canvas boundary (x = width).
        const EAST  = 0b0000_0010;
        /// Top canvas boundary (y = 0).
        const NORTH = 0b0000_0100;
        /// Bottom canvas boundary (y = height).
        const SOUTH = 0b0000_1000;
    }
}

/// The pivot a sprite rotates around, as a percentage offset into its
/// unrotated rectangle. `(50, 50)` is the rectangle center.
///
/// Values are expected in `[0, 100]`. That range is a caller contract: it is
/// checked with a debug assertion at construction and nowhere else, and
/// out-of-range values simply place the pivot outside the rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationCenter {
    /// Percentage of the width, 0 = left edge, 100 = right edge.
    pub x_percent: f64,
    /// Percentage of the height, 0 = top edge, 100 = bottom edge.
    pub y_percent: f64,
}

impl RotationCenter {
    /// A rotation center at the given percentage offsets.
    pub fn new(x_percent: f64, y_percent: f64) -> Self {
        debug_assert!(
            (0.0..=100.0).contains(&x_percent) && (0.0..=100.0).contains(&y_percent),
            "rotation center percentages must be within [0, 100]"
        );
        Self {
            x_percent,
            y_percent,
        }
    }

    /// The rectangle center, the conventional pivot.
    pub const CENTER: Self = Self {
        x_percent: 50.0,
        y_percent: 50.0,
    };
}

impl Default for RotationCenter {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pivot_is_center() {
        assert_eq!(RotationCenter::default(), RotationCenter::new(50.0, 50.0));
    }

    #[test]
    fn edge_flags_combine() {
        let corner = EdgeFlags::WEST | EdgeFlags::NORTH;
        assert!(corner.contains(EdgeFlags::WEST));
        assert!(!corner.contains(EdgeFlags::SOUTH));
        assert_eq!(EdgeFlags::default(), EdgeFlags::empty());
    }
}
