//! Built-in block font: 5x7 bitmap capitals extruded cell by cell.
//!
//! Only faces on the outside of a glyph are emitted, so sampling never lands
//! inside the letter volume.

use crate::geometry::Surface;
use crate::outline::{push_quad, OutlineProvider, TextStyle};
use glam::Vec3;

pub const GLYPH_COLUMNS: usize = 5;
pub const GLYPH_ROWS: usize = 7;
const ADVANCE_COLUMNS: usize = GLYPH_COLUMNS + 1;

type Bitmap = [u8; GLYPH_ROWS];

/// Row bitmaps, top row first, bit 4 is the leftmost column.
fn glyph(ch: char) -> Option<Bitmap> {
    let rows = match ch.to_ascii_uppercase() {
        ' ' => [0, 0, 0, 0, 0, 0, 0],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        _ => return None,
    };
    Some(rows)
}

#[inline]
fn lit(bitmap: &Bitmap, col: isize, row: isize) -> bool {
    if col < 0 || row < 0 || col >= GLYPH_COLUMNS as isize || row >= GLYPH_ROWS as isize {
        return false;
    }
    bitmap[row as usize] & (1 << (GLYPH_COLUMNS as isize - 1 - col)) != 0
}

/// Outline provider backed by the built-in bitmap capitals.
///
/// `style.size` is the cap height; characters outside A-Z and space make the
/// whole string unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockFont;

impl BlockFont {
    fn push_glyph(out: &mut Vec<Vec3>, bitmap: &Bitmap, origin_x: f32, cell: f32, depth: f32) {
        for row in 0..GLYPH_ROWS as isize {
            for col in 0..GLYPH_COLUMNS as isize {
                if !lit(bitmap, col, row) {
                    continue;
                }
                let x0 = origin_x + col as f32 * cell;
                let x1 = x0 + cell;
                let y1 = (GLYPH_ROWS as isize - row) as f32 * cell;
                let y0 = y1 - cell;
                let (z0, z1) = (0.0, depth);

                // front and back
                push_quad(
                    out,
                    Vec3::new(x0, y0, z1),
                    Vec3::new(x1, y0, z1),
                    Vec3::new(x1, y1, z1),
                    Vec3::new(x0, y1, z1),
                );
                push_quad(
                    out,
                    Vec3::new(x1, y0, z0),
                    Vec3::new(x0, y0, z0),
                    Vec3::new(x0, y1, z0),
                    Vec3::new(x1, y1, z0),
                );
                if !lit(bitmap, col - 1, row) {
                    push_quad(
                        out,
                        Vec3::new(x0, y0, z0),
                        Vec3::new(x0, y0, z1),
                        Vec3::new(x0, y1, z1),
                        Vec3::new(x0, y1, z0),
                    );
                }
                if !lit(bitmap, col + 1, row) {
                    push_quad(
                        out,
                        Vec3::new(x1, y0, z1),
                        Vec3::new(x1, y0, z0),
                        Vec3::new(x1, y1, z0),
                        Vec3::new(x1, y1, z1),
                    );
                }
                if !lit(bitmap, col, row - 1) {
                    push_quad(
                        out,
                        Vec3::new(x0, y1, z1),
                        Vec3::new(x1, y1, z1),
                        Vec3::new(x1, y1, z0),
                        Vec3::new(x0, y1, z0),
                    );
                }
                if !lit(bitmap, col, row + 1) {
                    push_quad(
                        out,
                        Vec3::new(x0, y0, z0),
                        Vec3::new(x1, y0, z0),
                        Vec3::new(x1, y0, z1),
                        Vec3::new(x0, y0, z1),
                    );
                }
            }
        }
    }
}

impl OutlineProvider for BlockFont {
    fn text_surface(&self, text: &str, style: &TextStyle) -> Option<Surface> {
        let cell = style.size / GLYPH_ROWS as f32;
        let mut positions = Vec::new();
        for (k, ch) in text.chars().enumerate() {
            let bitmap = glyph(ch)?;
            let origin_x = (k * ADVANCE_COLUMNS) as f32 * cell;
            Self::push_glyph(&mut positions, &bitmap, origin_x, cell, style.depth);
        }
        Some(Surface::new(positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_capital_has_a_glyph() {
        for ch in 'A'..='Z' {
            let rows = glyph(ch).unwrap_or_else(|| panic!("missing glyph {ch}"));
            assert!(rows.iter().any(|r| *r != 0), "glyph {ch} is blank");
            assert!(rows.iter().all(|r| *r < 1 << GLYPH_COLUMNS));
        }
    }

    #[test]
    fn lowercase_maps_to_capitals() {
        assert_eq!(glyph('m'), glyph('M'));
        assert!(glyph('?').is_none());
    }
}
