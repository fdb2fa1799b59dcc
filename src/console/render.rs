//! Text rendering of the board

use std::fmt::Write;

use crate::board::{Board, Cell, Color, Pos, BOARD_SIZE, WIDTH};
use crate::rules::game_outcome;

fn rule(out: &mut String) {
    out.push_str(&"--".repeat(WIDTH));
    out.push('\n');
}

fn column_labels(out: &mut String) {
    out.push_str("  ");
    for col in 1..=BOARD_SIZE {
        let _ = write!(out, "{col:2}");
    }
    out.push('\n');
}

/// Render the board, marking `last` with `X` when it holds a disc.
///
/// Ends with the verdict line once the game is over.
pub fn render_board(board: &Board, last: Option<Pos>) -> String {
    let mut out = String::new();
    rule(&mut out);
    column_labels(&mut out);

    for row in 1..=BOARD_SIZE as u8 {
        let _ = write!(out, "{row:2}");
        for col in 1..=BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            let cell = board.get(pos);
            let glyph = match cell {
                _ if last == Some(pos) && cell != Cell::Empty => 'X',
                Cell::Empty => '.',
                Cell::Black => '*',
                Cell::White => 'O',
                Cell::Edge => '#',
            };
            out.push(' ');
            out.push(glyph);
        }
        let _ = writeln!(out, "{row:2}");
    }

    column_labels(&mut out);
    let _ = writeln!(
        out,
        " Black {} - White {}",
        board.count(Color::Black),
        board.count(Color::White)
    );
    rule(&mut out);

    if let Some(outcome) = game_outcome(board) {
        let _ = writeln!(out, "{outcome}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let text = render_board(&Board::new(), None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "-".repeat(20));
        assert_eq!(lines[1], "   1 2 3 4 5 6 7 8");
        assert_eq!(lines[2], " 1 . . . . . . . . 1");
        assert_eq!(lines[5], " 4 . . . O * . . . 4");
        assert_eq!(lines[6], " 5 . . . * O . . . 5");
        assert_eq!(lines[10], "   1 2 3 4 5 6 7 8");
        assert_eq!(lines[11], " Black 2 - White 2");
        assert_eq!(lines[12], "-".repeat(20));
    }

    #[test]
    fn test_last_move_marker() {
        let mut board = Board::new();
        crate::rules::apply_move(
            &mut board,
            crate::board::Move::new(Pos::new(3, 4), Color::Black),
        );
        let text = render_board(&board, Some(Pos::new(3, 4)));
        assert!(text.contains(" 3 . . . X . . . . 3"));
        assert!(text.contains(" Black 4 - White 1"));
    }

    #[test]
    fn test_marker_ignored_on_empty_cell() {
        let text = render_board(&Board::new(), Some(Pos::new(1, 1)));
        assert!(text.contains(" 1 . . . . . . . . 1"));
    }

    #[test]
    fn test_verdict_line() {
        let mut board = Board::empty();
        board.place_disc(Pos::new(1, 1), Color::Black);
        board.place_disc(Pos::new(8, 8), Color::White);
        assert!(render_board(&board, None).ends_with("Drawn!\n"));

        board.place_disc(Pos::new(8, 1), Color::Black);
        assert!(render_board(&board, None).ends_with("Black win 1 points.\n"));
    }
}
