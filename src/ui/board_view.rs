//! Board rendering for the Reversi GUI

use crate::board::{Board, Cell, Color, Pos, BOARD_SIZE};
use crate::rules::is_legal_move;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardScene<'a> {
    pub board: &'a Board,
    pub to_move: Color,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    /// Legal moves to mark; empty when the human may not move
    pub legal: &'a [Pos],
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked legal position if any
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &BoardScene<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(200.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BORDER);
        painter.rect_filled(self.play_rect(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, scene.board);

        for &pos in scene.legal {
            painter.circle_filled(
                self.board_to_screen(pos),
                self.cell_size * HINT_RADIUS_RATIO,
                legal_hint(),
            );
        }

        if let Some(pos) = scene.last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(pos) = scene.suggested_move {
            self.draw_suggestion(&painter, pos, scene.to_move);
        }

        if !scene.accepts_input {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = is_legal_move(scene.board, board_pos, scene.to_move);
        if scene.board.get(board_pos) == Cell::Empty {
            self.draw_hover_preview(&painter, board_pos, scene.to_move, is_valid);
        }

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn play_rect(&self) -> Rect {
        self.board_rect.shrink(BOARD_MARGIN)
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let play = self.play_rect();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [Pos2::new(play.min.x + offset, play.min.y), Pos2::new(play.min.x + offset, play.max.y)],
                stroke,
            );
            painter.line_segment(
                [Pos2::new(play.min.x, play.min.y + offset), Pos2::new(play.max.x, play.min.y + offset)],
                stroke,
            );
        }
    }

    /// Row and column numbers, 1-8, matching the console
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 1..=BOARD_SIZE as u8 {
            let center = self.board_to_screen(Pos::new(i, i));
            let label = i.to_string();

            for pos in [
                Pos2::new(center.x, self.board_rect.min.y + half),
                Pos2::new(center.x, self.board_rect.max.y - half),
            ] {
                painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);
            }
            for pos in [
                Pos2::new(self.board_rect.min.x + half, center.y),
                Pos2::new(self.board_rect.max.x - half, center.y),
            ] {
                painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), LABEL);
            }
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all_interior() {
            if let Some(color) = board.get(pos).color() {
                self.draw_disc(painter, pos, color);
            }
        }
    }

    /// Draw a single disc with a soft shadow
    fn draw_disc(&self, painter: &Painter, pos: Pos, color: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match color {
            Color::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 70),
                );
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Color::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 50),
                );
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let (fill, text) = match turn {
            Color::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 110), WHITE_DISC),
            Color::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 110), BLACK_DISC),
        };
        painter.circle_filled(center, radius, fill);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(18.0),
            text,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Color, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = match (is_valid, turn) {
            (false, _) => hover_invalid(),
            (true, Color::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 90),
            (true, Color::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 90),
        };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a playable board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_rect().min;
        let col = (relative.x / self.cell_size).floor() as i32 + 1;
        let row = (relative.y / self.cell_size).floor() as i32 + 1;
        Pos::interior(row, col)
    }

    /// Center of the cell holding `pos`
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let play = self.play_rect();
        let x = play.min.x + (pos.col as f32 - 0.5) * self.cell_size;
        let y = play.min.y + (pos.row as f32 - 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(
                Pos2::ZERO,
                Vec2::splat(BOARD_SIZE as f32 * 50.0 + 2.0 * BOARD_MARGIN),
            ),
        }
    }

    #[test]
    fn test_cell_centers_map_back() {
        let view = view();
        for pos in Pos::all_interior() {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_margin_is_off_board() {
        let view = view();
        assert_eq!(view.screen_to_board(Pos2::new(5.0, 5.0)), None);
        let far = BOARD_SIZE as f32 * 50.0 + 2.0 * BOARD_MARGIN - 3.0;
        assert_eq!(view.screen_to_board(Pos2::new(far, 100.0)), None);
    }
}
