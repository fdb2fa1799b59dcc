//! Board representation for Reversi

pub mod board;
pub mod codec;


// Re-exports
pub use board::Board;
pub use codec::{Move, ScoredMove};

/// Grid side including the sentinel ring (10x10)
pub const WIDTH: usize = 10;
pub const CELL_COUNT: usize = WIDTH * WIDTH; // 100

/// Playable side (8x8)
pub const BOARD_SIZE: usize = WIDTH - 2;

/// Number of distinct color tags in the integer move encoding
pub const COLOR_SPAN: u32 = 3;

/// Disc colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Cell value holding a disc of this color
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Tag used in the integer move encoding
    #[inline]
    pub fn tag(self) -> u32 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    #[inline]
    pub fn from_tag(tag: u32) -> Option<Color> {
        match tag {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

/// Content of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    /// Sentinel ring around the playable area
    Edge,
}

impl Cell {
    /// Color of the disc on this cell, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
            Cell::Empty | Cell::Edge => None,
        }
    }
}

/// Position on the grid, 1-based inside the sentinel ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < WIDTH && (col as usize) < WIDTH);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * WIDTH + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / WIDTH) as u8,
            col: (idx % WIDTH) as u8,
        }
    }

    /// Check that (row, col) names a playable cell
    #[inline]
    pub fn is_interior(row: i32, col: i32) -> bool {
        row >= 1 && row <= BOARD_SIZE as i32 && col >= 1 && col <= BOARD_SIZE as i32
    }

    /// Build a playable position from 1-based coordinates
    pub fn interior(row: i32, col: i32) -> Option<Self> {
        Self::is_interior(row, col).then(|| Self::new(row as u8, col as u8))
    }

    /// Iterate over all playable positions in row-major order
    pub fn all_interior() -> impl Iterator<Item = Pos> {
        (1..=BOARD_SIZE as u8).flat_map(|row| (1..=BOARD_SIZE as u8).map(move |col| Pos { row, col }))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
