//! Text attributes: orientation, alignment and style flags

use kurbo::Vec2;

/// Text orientation
///
/// A right angle is stored as a tag; any other angle is stored as `Free`.
/// The two never coexist, so there is no stale angle behind a tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    #[default]
    Angle0,
    Angle90,
    Angle180,
    Angle270,
    /// Arbitrary angle in degrees, normalised into `[0, 360)`
    Free(f64),
}

impl Orientation {
    /// Normalise `degrees` and snap exact right angles to their tag
    pub fn from_degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Orientation::Angle0;
        }
        let normalized = degrees.rem_euclid(360.0);
        match normalized {
            a if a == 0.0 => Orientation::Angle0,
            a if a == 90.0 => Orientation::Angle90,
            a if a == 180.0 => Orientation::Angle180,
            a if a == 270.0 => Orientation::Angle270,
            a => Orientation::Free(a),
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            Orientation::Angle0 => 0.0,
            Orientation::Angle90 => 90.0,
            Orientation::Angle180 => 180.0,
            Orientation::Angle270 => 270.0,
            Orientation::Free(a) => a,
        }
    }

    pub fn is_right_angle(self) -> bool {
        !matches!(self, Orientation::Free(_))
    }

    /// Is the reading direction vertical (90 or 270)?
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Angle90 | Orientation::Angle270)
    }

    /// Quarter turn counter-clockwise: 0 → 90 → 180 → 270 → 0
    pub fn rotated_ccw(self) -> Self {
        Self::from_degrees(self.degrees() + 90.0)
    }

    /// Quarter turn clockwise: 0 → 270 → 180 → 90 → 0
    pub fn rotated_cw(self) -> Self {
        Self::from_degrees(self.degrees() - 90.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn flipped(self) -> Self {
        match self {
            HorizontalAlign::Left => HorizontalAlign::Right,
            HorizontalAlign::Center => HorizontalAlign::Center,
            HorizontalAlign::Right => HorizontalAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlign {
    pub fn flipped(self) -> Self {
        match self {
            VerticalAlign::Top => VerticalAlign::Bottom,
            VerticalAlign::Center => VerticalAlign::Center,
            VerticalAlign::Bottom => VerticalAlign::Top,
        }
    }
}

/// Everything that controls how a block of text is laid out
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    /// Glyph width and height in world units
    pub size: Vec2,
    pub orientation: Orientation,
    pub h_align: HorizontalAlign,
    pub v_align: VerticalAlign,
    pub bold: bool,
    pub italic: bool,
    pub mirrored: bool,
    pub underlined: bool,
    pub multiline: bool,
    /// Multiplier applied to the font's interline pitch
    pub line_spacing: f64,
    pub stroke_width: f64,
    /// Fold angles so text never reads upside down
    pub keep_upright: bool,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            size: Vec2::new(1.0, 1.0),
            orientation: Orientation::Angle0,
            h_align: HorizontalAlign::Center,
            v_align: VerticalAlign::Center,
            bold: false,
            italic: false,
            mirrored: false,
            underlined: false,
            multiline: true,
            line_spacing: 1.0,
            stroke_width: 0.0,
            keep_upright: false,
        }
    }
}

impl TextAttributes {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_align(mut self, h_align: HorizontalAlign, v_align: VerticalAlign) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Set an arbitrary angle, snapping right angles to their tag
    pub fn set_angle(&mut self, degrees: f64) {
        self.orientation = Orientation::from_degrees(degrees);
    }

    pub fn angle(&self) -> f64 {
        self.orientation.degrees()
    }

    pub fn rotate_ccw(&mut self) {
        self.orientation = self.orientation.rotated_ccw();
    }

    pub fn rotate_cw(&mut self) {
        self.orientation = self.orientation.rotated_cw();
    }

    /// Label spin
    ///
    /// Labels only read horizontally or vertically. The reading direction
    /// toggles between 0 and 90 degrees and the horizontal alignment flips
    /// each time, so the anchor stays on the same side of the text. With
    /// two reading directions a clockwise and a counter-clockwise spin land
    /// in the same place, so there is one operation for both.
    pub fn spin(&mut self) {
        self.orientation = if self.orientation.is_vertical() {
            Orientation::Angle0
        } else {
            Orientation::Angle90
        };
        self.h_align = self.h_align.flipped();
    }

    /// Angle used for drawing, folded when `keep_upright` is set
    ///
    /// Angles in (90, 270] are turned half way round so the text reads
    /// left to right or bottom to top.
    pub fn upright_angle(&self) -> f64 {
        let angle = self.angle();
        if self.keep_upright && angle > 90.0 && angle <= 270.0 {
            (angle - 180.0).rem_euclid(360.0)
        } else {
            angle
        }
    }

    /// Style flags for a plain run in these attributes
    pub fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            underline: self.underlined,
            ..TextStyle::default()
        }
    }
}

/// Per-run style flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub subscript: bool,
    pub superscript: bool,
    pub overbar: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn with_superscript(mut self) -> Self {
        self.superscript = true;
        self.subscript = false;
        self
    }

    pub fn with_subscript(mut self) -> Self {
        self.subscript = true;
        self.superscript = false;
        self
    }

    pub fn with_overbar(mut self) -> Self {
        self.overbar = true;
        self
    }

    pub fn is_script(&self) -> bool {
        self.subscript || self.superscript
    }
}
