//! Decoding stroke glyphs
//!
//! A glyph is a string of coordinate pairs, each coordinate stored as a
//! character offset from `'R'`. The first pair holds the left and right
//! bearing, every following pair is a point of the current stroke, and the
//! pair `" R"` lifts the pen. `"JZ"` is therefore an empty glyph sixteen
//! units wide.
//!
//! Hershey `.jhf` files wrap the same payload in numbered records:
//! a five column glyph id, a three column pair count (bearing included), then
//! the pairs, possibly continued on following lines.

use kurbo::{Point, Rect};
use vecfont_core::{FontLoadError, Result, StrokeGlyph};

/// Coordinates are stored as offsets from this character
pub const COORDINATE_BASE: u8 = b'R';

/// Shifts the design baseline onto y = 0
pub const FONT_OFFSET: i32 = -10;

/// Design units per glyph height
pub const STROKE_FONT_SCALE: f64 = 1.0 / 21.0;

/// A decoded glyph in unit size, left bearing at x = 0
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedGlyph {
    pub glyph: StrokeGlyph,
    /// Horizontal advance, right bearing minus left bearing
    pub advance: f64,
}

/// Decode one glyph string.
///
/// Returns `None` when the string has an odd length or no bearing pair.
pub fn decode_glyph(encoded: &str) -> Option<DecodedGlyph> {
    let bytes = encoded.as_bytes();
    if bytes.len() < 2 || bytes.len() % 2 != 0 {
        return None;
    }

    let left = coordinate(bytes[0]) * STROKE_FONT_SCALE;
    let right = coordinate(bytes[1]) * STROKE_FONT_SCALE;
    let advance = right - left;

    let mut glyph = StrokeGlyph::new();
    for pair in bytes[2..].chunks_exact(2) {
        if pair == b" R" {
            glyph.raise_pen();
            continue;
        }
        let x = coordinate(pair[0]) * STROKE_FONT_SCALE - left;
        let y = (coordinate(pair[1]) + f64::from(FONT_OFFSET)) * STROKE_FONT_SCALE;
        glyph.add_point(Point::new(x, y));
    }
    glyph.finalize();

    // The glyph cell: advance wide, one unit of height above the baseline
    let glyph = glyph.with_bounding_box(Rect::new(0.0, -1.0, advance, 0.0));
    Some(DecodedGlyph { glyph, advance })
}

fn coordinate(c: u8) -> f64 {
    f64::from(i32::from(c) - i32::from(COORDINATE_BASE))
}

/// Split a `.jhf` file into glyph strings, in file order
pub fn parse_jhf(text: &str) -> Result<Vec<String>> {
    let mut glyphs = Vec::new();
    let mut lines = text.lines().enumerate().peekable();

    while let Some((index, line)) = lines.next() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let invalid = |reason: &str| FontLoadError::InvalidStrokeTable {
            line: line_no,
            reason: reason.to_string(),
        };

        if !line.is_ascii() {
            return Err(invalid("non-ASCII character").into());
        }
        let header = line.get(..8).ok_or_else(|| invalid("record shorter than its header"))?;
        let count: usize = header[5..]
            .trim()
            .parse()
            .map_err(|_| invalid("vertex count is not a number"))?;
        if count == 0 {
            return Err(invalid("record without bearing pair").into());
        }

        let wanted = count * 2;
        let mut payload = line[8..].to_string();
        while payload.len() < wanted {
            match lines.next() {
                Some((_, more)) if more.is_ascii() => {
                    payload.push_str(more.trim_end_matches('\r'))
                }
                Some(_) => return Err(invalid("non-ASCII character in continuation").into()),
                None => return Err(invalid("record ends before all vertices").into()),
            }
        }
        if payload.len() > wanted {
            log::warn!(
                "stroke table line {}: ignoring {} trailing characters",
                line_no,
                payload.len() - wanted
            );
            payload.truncate(wanted);
        }
        glyphs.push(payload);
    }

    Ok(glyphs)
}
