//! Cell grid the renderer paints into and the terminal flushes from.

use crate::layout::Rect;
use crate::types::{Rgb, TextStyle};

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second cell of a double-width character; never drawn on its own.
    pub wide_continuation: bool,
}

impl Cell {
    /// White space on black.
    pub const BLANK: Cell = Cell {
        char: ' ',
        fg: WHITE,
        bg: BLACK,
        style: TextStyle::new(),
        wide_continuation: false,
    };

    /// A drawn character.
    pub const fn glyph(char: char, fg: Rgb, bg: Rgb, style: TextStyle) -> Self {
        Self {
            char,
            fg,
            bg,
            style,
            wide_continuation: false,
        }
    }

    /// Filler for the right half of a wide character.
    pub const fn continuation(fg: Rgb, bg: Rgb) -> Self {
        Self {
            char: ' ',
            fg,
            bg,
            style: TextStyle::new(),
            wide_continuation: true,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of cells. Out-of-range reads return `None`, writes are dropped.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    fn position(&self, index: usize) -> (u16, u16) {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Set the background of every cell in `rect`, keeping characters.
    pub fn paint_background(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Characters of one row, skipping wide-character continuation cells.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// All rows as text with trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let (x, y) = self.position(i);
            (x, y, cell)
        })
    }

    /// Cells that differ from `previous`, which must have the same size.
    pub fn changes_since<'a>(
        &'a self,
        previous: &'a Buffer,
    ) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(i, (cell, _))| {
                let (x, y) = self.position(i);
                (x, y, cell)
            })
    }

    /// Blank every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::BLANK);
    }
}
