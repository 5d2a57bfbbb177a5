// this_file: backends/vecfont-outline/src/outlines.rs

//! Recording glyph outlines in font units.

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{GlyphId, MetadataProvider};
use vecfont_core::DecomposeError;

/// One drawing command of a glyph outline, y-up font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    QuadTo {
        ctrl_x: f32,
        ctrl_y: f32,
        x: f32,
        y: f32,
    },
    CurveTo {
        ctrl1_x: f32,
        ctrl1_y: f32,
        ctrl2_x: f32,
        ctrl2_y: f32,
        x: f32,
        y: f32,
    },
    Close,
}

/// Commands collected from one glyph draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphOutline {
    commands: Vec<OutlineCommand>,
}

impl GlyphOutline {
    pub fn from_commands(commands: Vec<OutlineCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[OutlineCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Record the unhinted outline of `glyph_id` at the default location.
///
/// Glyph ids missing from the font yield an empty outline.
pub fn glyph_outline(
    font: &skrifa::FontRef<'_>,
    glyph_id: u32,
) -> Result<GlyphOutline, DecomposeError> {
    let outlines = font.outline_glyphs();
    let Some(glyph) = outlines.get(GlyphId::new(glyph_id)) else {
        return Ok(GlyphOutline::default());
    };

    let mut recorder = RecordingPen::default();
    let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
    glyph
        .draw(settings, &mut recorder)
        .map_err(|err| DecomposeError::Draw(err.to_string()))?;
    Ok(recorder.finish())
}

#[derive(Default)]
struct RecordingPen {
    commands: Vec<OutlineCommand>,
}

impl RecordingPen {
    fn finish(self) -> GlyphOutline {
        GlyphOutline {
            commands: self.commands,
        }
    }
}

impl OutlinePen for RecordingPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(OutlineCommand::LineTo(x, y));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands.push(OutlineCommand::QuadTo {
            ctrl_x: cx0,
            ctrl_y: cy0,
            x,
            y,
        });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(OutlineCommand::CurveTo {
            ctrl1_x: cx0,
            ctrl1_y: cy0,
            ctrl2_x: cx1,
            ctrl2_y: cy1,
            x,
            y,
        });
    }

    fn close(&mut self) {
        self.commands.push(OutlineCommand::Close);
    }
}
