//! Per-character colour buffer.
//!
//! Scenes draw into a 2D grid of cells and then stamp it row by row as
//! `Paragraph` widgets, merging runs of equal colours into one span.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Vec<Cell>>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get(row as usize)?.get(col as usize)
    }

    /// Replace a cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.cells[row as usize][col as usize] = cell;
    }

    /// Draw a glyph over a cell, keeping its background.
    pub fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if let Some(&existing) = self.get(col, row) {
            self.set(col, row, Cell { ch, fg, ..existing });
        }
    }

    /// Fill a whole row's background, clearing its glyphs.
    pub fn fill_row(&mut self, row: i32, bg: Color) {
        for col in 0..self.width as i32 {
            self.set(
                col,
                row,
                Cell {
                    ch: ' ',
                    fg: Color::Reset,
                    bg,
                },
            );
        }
    }

    /// Write a string left to right starting at `col`.
    pub fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg);
        }
    }

    /// Text content of a row (for tests and debugging).
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|r| r.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    /// Stamp the buffer into `area`, clipped to the area's size.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.height.min(area.height) as usize;
        let cols = self.width.min(area.width) as usize;

        for (row_idx, row_data) in self.cells.iter().enumerate().take(rows) {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data.iter().take(cols) {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let line = Paragraph::new(Line::from(spans));
            let row_area = Rect::new(area.x, area.y + row_idx as u16, cols as u16, 1);
            frame.render_widget(line, row_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut buf = CellBuffer::new(4, 2);
        buf.put(-1, 0, 'x', Color::Red);
        buf.put(4, 0, 'x', Color::Red);
        buf.put(0, 2, 'x', Color::Red);
        assert_eq!(buf.row_text(0), "    ");
        assert_eq!(buf.row_text(1), "    ");
    }

    #[test]
    fn test_put_keeps_background() {
        let mut buf = CellBuffer::new(3, 1);
        buf.fill_row(0, Color::Blue);
        buf.put(1, 0, '$', Color::Yellow);
        let cell = buf.get(1, 0).copied().unwrap();
        assert_eq!(cell.ch, '$');
        assert_eq!(cell.fg, Color::Yellow);
        assert_eq!(cell.bg, Color::Blue);
    }

    #[test]
    fn test_put_str_clips() {
        let mut buf = CellBuffer::new(5, 1);
        buf.put_str(3, 0, "abc", Color::White);
        assert_eq!(buf.row_text(0), "   ab");
    }
}
