//! Contours produced by outline decomposition
//!
//! A contour is one closed loop of a glyph outline, already flattened into
//! line segments. Its winding, read against the source font's orientation
//! convention, tells whether the loop bounds ink or a hole.

use crate::geometry::{signed_area2, Point};

/// Signed orientation of a contour's point order
///
/// Measured in the font's y-up design space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    Indeterminate,
}

impl Winding {
    /// Shoelace sign test over a closed ring.
    ///
    /// Fewer than three points or a zero area ring is indeterminate.
    pub fn of(points: &[Point]) -> Self {
        let sum = signed_area2(points);
        if sum > 0.0 {
            Winding::Clockwise
        } else if sum < 0.0 {
            Winding::CounterClockwise
        } else {
            Winding::Indeterminate
        }
    }

    /// +1 clockwise, -1 counter-clockwise, 0 indeterminate
    pub fn signum(self) -> i32 {
        match self {
            Winding::Clockwise => 1,
            Winding::CounterClockwise => -1,
            Winding::Indeterminate => 0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Winding::Clockwise => Winding::CounterClockwise,
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Indeterminate => Winding::Indeterminate,
        }
    }
}

/// Which filling convention the source outline follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineOrientation {
    /// `glyf` outlines: ink is on the right, outer contours run clockwise
    TrueType,
    /// CFF/CFF2 outlines: ink is on the left, outer contours run counter-clockwise
    PostScript,
}

impl OutlineOrientation {
    /// Winding of contours that bound ink under this convention
    pub fn solid_winding(self) -> Winding {
        match self {
            OutlineOrientation::TrueType => Winding::Clockwise,
            OutlineOrientation::PostScript => Winding::CounterClockwise,
        }
    }
}

/// One flattened, implicitly closed outline loop
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point>,
    pub winding: Winding,
    pub orientation: OutlineOrientation,
}

impl Contour {
    /// Build a contour and compute its winding.
    pub fn new(points: Vec<Point>, orientation: OutlineOrientation) -> Self {
        let winding = Winding::of(&points);
        Self {
            points,
            winding,
            orientation,
        }
    }

    /// Does the winding disagree with the solid winding of the convention?
    ///
    /// Whether the contour really is a hole also depends on nesting, which
    /// the decomposer checks.
    pub fn has_hole_winding(&self) -> bool {
        self.winding != Winding::Indeterminate && self.winding != self.orientation.solid_winding()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
