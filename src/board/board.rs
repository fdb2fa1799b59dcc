//! Mailbox board with a sentinel ring

use super::{Cell, Color, Pos, CELL_COUNT, WIDTH};

/// Game board: a 10x10 grid whose outer ring is `Cell::Edge`.
///
/// Directional scans walk the grid by index offsets and stop on the first
/// cell that is not an opponent disc, so the ring keeps every scan in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; CELL_COUNT],
        };
        board.reset();
        board
    }

    /// Restore the starting position in place
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];

        for i in 0..WIDTH {
            self.cells[i] = Cell::Edge;
            self.cells[WIDTH * i] = Cell::Edge;
            self.cells[WIDTH * i + WIDTH - 1] = Cell::Edge;
            self.cells[WIDTH * (WIDTH - 1) + i] = Cell::Edge;
        }

        let half = WIDTH / 2;
        self.cells[WIDTH * (half - 1) + half] = Cell::Black;
        self.cells[WIDTH * half + half - 1] = Cell::Black;
        self.cells[WIDTH * (half - 1) + half - 1] = Cell::White;
        self.cells[WIDTH * half + half] = Cell::White;
    }

    /// Board with the sentinel ring and an empty interior
    pub fn empty() -> Self {
        let mut board = Self::new();
        for pos in Pos::all_interior() {
            board.cells[pos.to_index()] = Cell::Empty;
        }
        board
    }

    /// Get cell at position; anything past the grid reads as `Cell::Edge`
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if (pos.row as usize) < WIDTH && (pos.col as usize) < WIDTH {
            self.cells[pos.to_index()]
        } else {
            Cell::Edge
        }
    }

    /// Get cell by raw index (0..CELL_COUNT)
    #[inline]
    pub fn at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, idx: usize, cell: Cell) {
        debug_assert!(self.cells[idx] != Cell::Edge);
        self.cells[idx] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a disc (without flipping).
    /// Use `rules::apply_move` for game moves. Ignored outside the interior.
    #[inline]
    pub fn place_disc(&mut self, pos: Pos, color: Color) {
        if Pos::is_interior(pos.row as i32, pos.col as i32) {
            self.cells[pos.to_index()] = color.cell();
        }
    }

    /// Remove a disc. Ignored outside the interior.
    #[inline]
    pub fn remove_disc(&mut self, pos: Pos) {
        if Pos::is_interior(pos.row as i32, pos.col as i32) {
            self.cells[pos.to_index()] = Cell::Empty;
        }
    }

    /// Number of discs of `color` on the board
    pub fn count(&self, color: Color) -> u32 {
        let cell = color.cell();
        self.cells.iter().filter(|&&c| c == cell).count() as u32
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.count(Color::Black) + self.count(Color::White)
    }

    /// Check if no interior cell is empty
    pub fn is_full(&self) -> bool {
        Pos::all_interior().all(|pos| !self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
