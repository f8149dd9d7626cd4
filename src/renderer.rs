use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, CELL_COLUMNS, COLOR_BORDER, COLOR_FOOD, COLOR_SNAKE_BODY, COLOR_SNAKE_HEAD,
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_too_small};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let (needed_width, needed_height) = required_area(state.bounds());
    if area.width < needed_width || area.height < needed_height {
        render_too_small(frame, area, needed_width, needed_height);
        return;
    }

    let play_area = render_hud(frame, area, state);
    let board_area = centered_board(play_area, state.bounds());

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    if state.is_game_over() {
        render_game_over_menu(
            frame,
            board_area,
            state.score(),
            state.snake().len(),
            state.death_reason(),
        );
        return;
    }

    render_food(frame, inner, state);
    render_snake(frame, inner, state);
}

/// Terminal size needed for the HUD row plus the bordered board.
#[must_use]
pub fn required_area(bounds: GridSize) -> (u16, u16) {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2);
    let height = bounds.height.saturating_add(3);
    (width, height)
}

fn centered_board(play_area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(play_area.width);
    let height = bounds.height.saturating_add(2).min(play_area.height);

    Rect {
        x: play_area.x + (play_area.width - width) / 2,
        y: play_area.y + (play_area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some(food) = state.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(COLOR_FOOD));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake().segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(COLOR_SNAKE_HEAD)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(COLOR_SNAKE_BODY));
        }
    }
}

/// Maps a logical cell to the terminal column/row of its left half.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{GridSize, GLYPH_SNAKE_HEAD};
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{logical_to_terminal, render, required_area};

    fn bounds() -> GridSize {
        GridSize {
            width: 6,
            height: 4,
        }
    }

    #[test]
    fn cells_map_to_two_columns() {
        let inner = Rect::new(1, 2, 12, 4);

        assert_eq!(
            logical_to_terminal(inner, bounds(), Position { x: 0, y: 0 }),
            Some((1, 2))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds(), Position { x: 5, y: 3 }),
            Some((11, 5))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds(), Position { x: 6, y: 0 }),
            None
        );
    }

    #[test]
    fn required_area_counts_border_and_hud() {
        assert_eq!(required_area(bounds()), (14, 7));
    }

    #[test]
    fn head_is_drawn_on_the_board() {
        let mut terminal =
            Terminal::new(TestBackend::new(14, 7)).expect("test terminal should build");
        let mut state = GameState::new_with_seed(bounds(), 1);
        state.set_layout(
            Snake::new(Position { x: 0, y: 0 }),
            Direction::Right,
            Position { x: 5, y: 3 },
        );

        terminal
            .draw(|frame| render(frame, &state))
            .expect("draw should succeed");

        // HUD row, then the top border; the first cell starts at (1, 2).
        let buffer = terminal.backend().buffer();
        let head_symbol = GLYPH_SNAKE_HEAD
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        assert_eq!(buffer[(1, 2)].symbol(), head_symbol);
    }

    #[test]
    fn small_terminal_shows_resize_hint() {
        let mut terminal =
            Terminal::new(TestBackend::new(40, 3)).expect("test terminal should build");
        let state = GameState::new_with_seed(bounds(), 1);

        terminal
            .draw(|frame| render(frame, &state))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..40).map(|x| buffer[(x, 0)].symbol().to_owned()).collect();
        assert!(first_row.contains("Terminal too small"));
    }
}
