//! Game state management for the Reversi GUI

use crate::board::{Color, Move, Pos};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::game::Game;
use crate::rules::{has_legal_move, is_legal_move, legal_moves, GameOutcome};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Hints use a quick shallow search on the UI thread
const HINT_DEPTH: u8 = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Color::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub outcome: Option<GameOutcome>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            game: Game::new(config),
            mode,
            outcome: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            config,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.config);
    }

    pub fn to_move(&self) -> Color {
        self.game.to_move()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.game.last_move().map(|mv| mv.pos)
    }

    pub fn move_count(&self) -> usize {
        self.game.history().len()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.to_move() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether the board should take clicks this frame
    pub fn accepts_input(&self) -> bool {
        self.outcome.is_none() && !self.is_ai_thinking() && self.is_human_turn()
    }

    /// Legal positions for the side to move when a human may play
    pub fn legal_positions(&self) -> Vec<Pos> {
        if !self.accepts_input() {
            return Vec::new();
        }
        legal_moves(self.game.board(), self.to_move())
            .into_iter()
            .map(|m| m.mv.pos)
            .collect()
    }

    /// Attempt to place a disc at the given position
    pub fn try_place_disc(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let color = self.to_move();
        if !is_legal_move(self.game.board(), pos, color) {
            return Err("Illegal move: nothing to flip".to_string());
        }

        self.game.play_move(Move::new(pos, color));
        self.message = None;
        self.after_move();
        Ok(())
    }

    /// Settle the position after any move or pass: detect the end of the
    /// game, otherwise pass for a side left without a capture
    fn after_move(&mut self) {
        self.suggested_move = None;
        self.move_timer.start();

        if let Some(outcome) = self.game.outcome() {
            info!(%outcome, moves = self.move_count(), "game over");
            self.outcome = Some(outcome);
            return;
        }

        let color = self.to_move();
        if !has_legal_move(self.game.board(), color) {
            debug!(?color, "automatic pass");
            self.message = Some(format!("{} has no move and passes", color.name()));
            self.game.set_to_move(color.opponent());
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let board = self.game.board().clone();
        let color = self.to_move();
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((move_result, elapsed)) = result else {
            return;
        };

        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);
        let color = self.to_move();

        match move_result.best_move {
            Some(mv) if self.game.play_move(mv) > 0 => {
                self.message = None;
            }
            _ => {
                self.message = Some(format!("{} has no move and passes", color.name()));
                self.game.set_to_move(color.opponent());
            }
        }
        self.last_ai_result = Some(move_result);
        self.after_move();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine which move it would play for the human
    pub fn request_suggestion(&mut self) {
        if !self.accepts_input() {
            return;
        }

        let result = self.game.suggest(self.to_move(), HINT_DEPTH);
        self.suggested_move = result.best_move.map(|mv| mv.pos);
        self.last_ai_result = Some(result);
    }

    /// Undo back to the previous position where a human was to move
    pub fn undo(&mut self) {
        if self.game.history().is_empty() || self.is_ai_thinking() {
            return;
        }

        self.game.undo();
        while self.is_ai_turn() && !self.game.history().is_empty() {
            self.game.undo();
        }

        self.outcome = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
