//! A game session: board, history, side to move and engine

use std::path::Path;

use tracing::{debug, info, instrument, trace};

use crate::board::{Board, Color, Move, Pos};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::HistoryError;
use crate::rules::{apply_move, game_outcome, GameOutcome};

use super::history::MoveHistory;

/// A move that was actually played on the board
#[derive(Debug, Clone)]
pub struct PlayedMove {
    pub mv: Move,
    pub flips: u32,
    /// Search details when the engine chose the move
    pub search: Option<MoveResult>,
}

/// One game of Reversi.
///
/// Owns the only board of the session. Human and engine moves go through
/// here so the history stays in step with the board.
pub struct Game {
    board: Board,
    history: MoveHistory,
    to_move: Color,
    engine: AIEngine,
}

impl Game {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            to_move: Color::Black,
            engine: AIEngine::with_config(config),
        }
    }

    /// Start over from the initial layout with Black to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.to_move = Color::Black;
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last()
    }

    pub fn depth(&self) -> u8 {
        self.engine.max_depth()
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.engine.set_max_depth(depth);
    }

    /// Play `color` at 1-based (row, col).
    ///
    /// Returns the number of flipped discs; 0 means the move was illegal and
    /// nothing changed. A legal move hands the turn to the opponent.
    pub fn play(&mut self, row: i32, col: i32, color: Color) -> u32 {
        match Pos::interior(row, col) {
            Some(pos) => self.play_move(Move::new(pos, color)),
            None => {
                trace!(row, col, ?color, "move outside the board");
                0
            }
        }
    }

    /// Play an already-built move; see [`Game::play`]
    pub fn play_move(&mut self, mv: Move) -> u32 {
        let flips = apply_move(&mut self.board, mv);
        if flips == 0 {
            trace!(%mv, "illegal move rejected");
            return 0;
        }
        self.history.push(mv);
        self.to_move = mv.color.opponent();
        debug!(%mv, flips, "move played");
        flips
    }

    /// Let the engine move for the side to move.
    ///
    /// The turn passes to the opponent whether or not a move was found;
    /// `None` means the engine passed.
    #[instrument(skip(self), fields(color = ?self.to_move, depth = self.depth()))]
    pub fn engine_move(&mut self) -> Option<PlayedMove> {
        let color = self.to_move;
        let result = self.engine.get_move_with_stats(&self.board, color);
        self.to_move = color.opponent();

        let mv = match result.best_move {
            Some(mv) => mv,
            None => {
                debug!(score = result.score, "engine passes");
                return None;
            }
        };

        let flips = apply_move(&mut self.board, mv);
        if flips == 0 {
            return None;
        }
        self.history.push(mv);
        debug!(%mv, flips, score = result.score, "engine played");

        Some(PlayedMove {
            mv,
            flips,
            search: Some(result),
        })
    }

    /// Ask for a move without playing it.
    ///
    /// Searches at most `max_depth` plies, never deeper than the game's depth.
    pub fn suggest(&self, color: Color, max_depth: u8) -> MoveResult {
        let depth = max_depth.min(self.depth());
        AIEngine::with_config(EngineConfig { depth }).get_move_with_stats(&self.board, color)
    }

    /// Take back the last move.
    ///
    /// Rebuilds the board by replaying the remaining history and gives the
    /// turn back to the color that made the undone move. Returns the number
    /// of moves left; an empty history is a no-op returning 0.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> usize {
        let Some(undone) = self.history.pop() else {
            return 0;
        };
        self.board = self.history.board();
        self.to_move = undone.color;
        debug!(%undone, remaining = self.history.len(), "undo");
        self.history.len()
    }

    /// `Some` once neither side can move
    pub fn outcome(&self) -> Option<GameOutcome> {
        game_outcome(&self.board)
    }

    /// Replace the game with a validated history
    pub fn load_history(&mut self, history: MoveHistory) {
        self.board = history.board();
        self.to_move = history
            .last()
            .map_or(Color::Black, |mv| mv.color.opponent());
        self.history = history;
        info!(moves = self.history.len(), "game restored");
    }

    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        self.history.save(path)
    }

    pub fn load(&mut self, path: &Path) -> Result<(), HistoryError> {
        let history = MoveHistory::load(path)?;
        self.load_history(history);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::test_support::random_moves;

    fn quick_game() -> Game {
        Game::new(EngineConfig { depth: 2 })
    }

    #[test]
    fn test_new_game() {
        let game = quick_game();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_play_records_and_switches() {
        let mut game = quick_game();
        assert_eq!(game.play(3, 4, Color::Black), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.last_move(), Some(Move::new(Pos::new(3, 4), Color::Black)));
        assert_eq!(game.board().get(Pos::new(4, 4)), Cell::Black);
    }

    #[test]
    fn test_illegal_play_changes_nothing() {
        let mut game = quick_game();
        assert_eq!(game.play(1, 1, Color::Black), 0);
        assert_eq!(game.play(4, 4, Color::Black), 0);
        assert_eq!(game.play(0, 4, Color::Black), 0);
        assert_eq!(game.play(9, 9, Color::White), 0);
        assert_eq!(game.play(-3, 400, Color::White), 0);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut game = quick_game();
        assert_eq!(game.undo(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_undo_restores_board_and_turn() {
        let mut game = quick_game();
        game.play(3, 4, Color::Black);
        let after_first = game.board().clone();
        game.play(3, 3, Color::White);

        assert_eq!(game.undo(), 1);
        assert_eq!(game.board(), &after_first);
        assert_eq!(game.to_move(), Color::White);

        assert_eq!(game.undo(), 0);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_undo_matches_replay() {
        let (moves, _) = random_moves(5, 24);
        let mut game = quick_game();
        for &mv in &moves {
            assert!(game.play_move(mv) > 0);
        }

        let mut expected = Game::new(EngineConfig { depth: 2 });
        for &mv in &moves[..moves.len() - 1] {
            expected.play_move(mv);
        }

        assert_eq!(game.undo(), moves.len() - 1);
        assert_eq!(game.board(), expected.board());
    }

    #[test]
    fn test_engine_move_plays_for_side_to_move() {
        let mut game = quick_game();
        let played = game.engine_move().expect("opening has moves");
        assert_eq!(played.mv.color, Color::Black);
        assert_eq!(played.flips, 1);
        assert!(played.search.is_some());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn test_engine_pass_flips_turn() {
        let mut game = quick_game();
        game.set_to_move(Color::White);
        // A lone disc: nobody can move
        game.board = Board::empty();
        game.board.place_disc(Pos::new(1, 1), Color::Black);

        assert!(game.engine_move().is_none());
        assert_eq!(game.to_move(), Color::Black);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_suggest_caps_depth() {
        let game = Game::new(EngineConfig { depth: 6 });
        let hint = game.suggest(Color::Black, 2);
        assert_eq!(hint.depth, 2);
        assert!(hint.best_move.is_some());
        assert!(game.history().is_empty());

        let shallow = quick_game();
        assert_eq!(shallow.suggest(Color::Black, 5).depth, 2);
    }

    #[test]
    fn test_reset() {
        let mut game = quick_game();
        game.play(3, 4, Color::Black);
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_save_load_round_trip() {
        let (moves, _) = random_moves(9, 15);
        let mut game = quick_game();
        for &mv in &moves {
            game.play_move(mv);
        }
        let path = std::env::temp_dir().join(format!("reversi-game-{}.json", std::process::id()));
        game.save(&path).unwrap();

        let mut restored = quick_game();
        restored.load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.history(), game.history());
        assert_eq!(restored.to_move(), moves.last().unwrap().color.opponent());
    }

    #[test]
    fn test_self_play_reaches_outcome() {
        let mut game = Game::new(EngineConfig { depth: 1 });
        let mut passes = 0;
        while game.outcome().is_none() {
            match game.engine_move() {
                Some(_) => passes = 0,
                None => passes += 1,
            }
            assert!(passes < 2, "one side must be able to move");
        }
        let outcome = game.outcome().unwrap();
        let diff = crate::eval::evaluate(game.board(), Color::Black);
        assert_eq!(outcome.margin, diff.unsigned_abs());
        assert!(game.history().len() <= 60);
    }
}
