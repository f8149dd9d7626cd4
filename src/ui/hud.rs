use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::COLOR_TEXT;
use crate::game::GameState;

const HUD_SEPARATOR: &str = " │ ";

/// Renders the one-line HUD and returns the remaining play area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state.score(), state.snake().len()))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::DarkGray)),
        hud_area,
    );

    play_area
}

fn info_line(score: u32, length: usize) -> Line<'static> {
    let value_style = Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw("Length: "),
        Span::styled(length.to_string(), value_style),
    ])
}
