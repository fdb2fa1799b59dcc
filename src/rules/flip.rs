//! Disc flipping: the directional scan shared by move application and
//! move generation.
//!
//! From the origin cell, a direction captures when it holds a contiguous run
//! of opponent discs closed by a disc of the acting color. A run that ends on
//! an empty cell or the sentinel ring captures nothing.

use crate::board::{Board, Cell, Color, Move, Pos, WIDTH};

/// Index offsets for the 8 directions (both signs of the 4 axes)
const DIRECTIONS: [isize; 8] = [
    1,                       // →
    -1,                      // ←
    WIDTH as isize,          // ↓
    -(WIDTH as isize),       // ↑
    WIDTH as isize + 1,      // ↘
    -(WIDTH as isize + 1),   // ↖
    WIDTH as isize - 1,      // ↙
    -(WIDTH as isize - 1),   // ↗
];

#[inline]
fn step(idx: usize, dir: isize) -> usize {
    (idx as isize + dir) as usize
}

/// Number of opponent discs `color` would capture from `origin` along `dir`.
///
/// `origin` must be an interior index; the sentinel ring stops the scan
/// before it can leave the grid.
#[inline]
fn bracketed_run(board: &Board, origin: usize, dir: isize, color: Color) -> u32 {
    let opponent = color.opponent().cell();
    let mut idx = step(origin, dir);
    let mut run = 0;
    while board.at(idx) == opponent {
        idx = step(idx, dir);
        run += 1;
    }
    if board.at(idx) == color.cell() {
        run
    } else {
        0
    }
}

/// Check that a move targets an empty interior cell
#[inline]
fn is_open(board: &Board, pos: Pos) -> bool {
    Pos::is_interior(pos.row as i32, pos.col as i32) && board.is_empty(pos)
}

/// Count the discs a move would flip, without touching the board.
///
/// Returns 0 for occupied, sentinel and out-of-range positions.
#[inline]
pub fn count_flips(board: &Board, pos: Pos, color: Color) -> u32 {
    if !is_open(board, pos) {
        return 0;
    }
    let origin = pos.to_index();
    DIRECTIONS
        .iter()
        .map(|&dir| bracketed_run(board, origin, dir, color))
        .sum()
}

/// Positions that a move would flip, in scan order
pub fn flipped_positions(board: &Board, pos: Pos, color: Color) -> Vec<Pos> {
    let mut flipped = Vec::new();
    if !is_open(board, pos) {
        return flipped;
    }
    let origin = pos.to_index();
    for &dir in &DIRECTIONS {
        let run = bracketed_run(board, origin, dir, color);
        let mut idx = origin;
        for _ in 0..run {
            idx = step(idx, dir);
            flipped.push(Pos::from_index(idx));
        }
    }
    flipped
}

/// Apply a move, flipping every captured run.
///
/// Returns the number of flipped discs. An illegal move (outside the
/// interior, occupied, or capturing nothing) returns 0 and leaves the board
/// unchanged.
pub fn apply_move(board: &mut Board, mv: Move) -> u32 {
    if !is_open(board, mv.pos) {
        return 0;
    }

    let origin = mv.pos.to_index();
    let own: Cell = mv.color.cell();
    let mut flipped = 0;

    for &dir in &DIRECTIONS {
        let run = bracketed_run(board, origin, dir, mv.color);
        let mut idx = origin;
        for _ in 0..run {
            idx = step(idx, dir);
            board.set_at(idx, own);
        }
        flipped += run;
    }

    if flipped > 0 {
        board.set_at(origin, own);
    }
    flipped
}
