//! Character sprites for the warrior, coins, and bombs.
//!
//! Each sprite is a glyph grid plus a parallel grid of colour keys. Sprites
//! are resampled to whatever cell rectangle the scaled hitbox covers, so the
//! art always matches what the collision code sees.

use super::cell_buffer::CellBuffer;
use ratatui::style::Color;

/// A glyph grid and its colour-key grid (same shape).
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub colors: &'static [&'static str],
}

impl Sprite {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    fn glyph(&self, row: usize, col: usize) -> Option<(char, Color)> {
        let ch = self.rows.get(row)?.chars().nth(col)?;
        if ch == ' ' {
            return None;
        }
        let key = self
            .colors
            .get(row)
            .and_then(|r| r.chars().nth(col))
            .unwrap_or(' ');
        Some((ch, palette(key)))
    }
}

/// Colour keys used by the sprite tables.
fn palette(key: char) -> Color {
    match key {
        'G' => Color::Rgb(255, 215, 0),   // gold
        'O' => Color::Rgb(255, 165, 0),   // orange
        'R' => Color::Rgb(255, 69, 0),    // plume / danger
        'S' => Color::Rgb(192, 192, 192), // silver
        'W' => Color::Rgb(230, 230, 250), // lavender plate
        'K' => Color::Rgb(244, 194, 161), // skin
        'B' => Color::Rgb(139, 69, 19),   // leather / beard
        'C' => Color::Rgb(220, 20, 60),   // crimson cape
        'D' => Color::Black,
        'X' => Color::Rgb(74, 74, 74), // bomb shell
        'F' => Color::Rgb(255, 99, 71), // fuse
        'Y' => Color::Yellow,
        _ => Color::White,
    }
}

pub const WARRIOR_STANDING: Sprite = Sprite {
    rows: &[
        " _^_ |", //
        "(o_o)|",
        "{0#]=+",
        "{ /\\  ",
    ],
    colors: &[
        " GRG S", //
        "KDBDKS",
        "CSWSKB",
        "C SS  ",
    ],
};

/// Airborne pose: cape flutters, sword tilts forward, legs tuck.
pub const WARRIOR_JUMPING: Sprite = Sprite {
    rows: &[
        " _^_ /", //
        "(o_o)/",
        "~0#]=+",
        "~ <>  ",
    ],
    colors: &[
        " GRG S", //
        "KDBDKS",
        "CSWSKB",
        "C SS  ",
    ],
};

pub const COIN: Sprite = Sprite {
    rows: &["($)"],
    colors: &["GBG"],
};

const BOMB_SPARK_ON: Sprite = Sprite {
    rows: &[" ,*", "(!)"],
    colors: &[" FY", "XRX"],
};

const BOMB_SPARK_OFF: Sprite = Sprite {
    rows: &[" ,+", "(!)"],
    colors: &[" FF", "XRX"],
};

/// Bomb sprite for the given game clock; the fuse spark flickers every 100ms.
pub fn bomb_sprite(clock_ms: u64) -> Sprite {
    if (clock_ms / 100) % 2 == 0 {
        BOMB_SPARK_ON
    } else {
        BOMB_SPARK_OFF
    }
}

pub fn warrior_sprite(is_jumping: bool) -> Sprite {
    if is_jumping {
        WARRIOR_JUMPING
    } else {
        WARRIOR_STANDING
    }
}

/// Draw `sprite` resampled to a `width` x `height` cell rectangle whose
/// top-left cell is (`col`, `row`). Blank glyphs leave the buffer untouched.
pub fn draw_sprite(
    buf: &mut CellBuffer,
    sprite: &Sprite,
    col: i32,
    row: i32,
    width: i32,
    height: i32,
) {
    let src_h = sprite.height();
    let src_w = sprite.width();
    if src_h == 0 || src_w == 0 || width <= 0 || height <= 0 {
        return;
    }

    for dy in 0..height {
        let src_row = sample_index(dy, height, src_h);
        for dx in 0..width {
            let src_col = sample_index(dx, width, src_w);
            if let Some((ch, fg)) = sprite.glyph(src_row, src_col) {
                buf.put(col + dx, row + dy, ch, fg);
            }
        }
    }
}

/// Nearest source index for destination cell `i` of `dest_len`, sampled
/// at the cell centre.
fn sample_index(i: i32, dest_len: i32, src_len: usize) -> usize {
    let idx = ((i as f64 + 0.5) * src_len as f64 / dest_len as f64) as usize;
    idx.min(src_len - 1)
}
