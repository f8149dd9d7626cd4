use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOR_GAME_OVER, COLOR_TEXT};
use crate::game::DeathReason;

/// Draws the game-over screen as a centered popup over the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    length: usize,
    death_reason: Option<DeathReason>,
) {
    let texts = game_over_lines(score, length, death_reason);
    let popup = popup_for(area, &texts);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(COLOR_GAME_OVER)
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line<'_>> = texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if index == 0 {
                Line::styled(text.as_str(), title_style)
            } else {
                Line::styled(text.as_str(), Style::default().fg(COLOR_TEXT))
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Replaces the frame with a resize hint when the board does not fit.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, needed_width: u16, needed_height: u16) {
    let texts = vec![
        "Terminal too small".to_owned(),
        format!("Need {needed_width}x{needed_height}, have {}x{}", area.width, area.height),
        "[Esc]/[Q] Quit".to_owned(),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(texts.into_iter().map(Line::from).collect::<Vec<_>>())
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOR_TEXT)),
        area,
    );
}

fn game_over_lines(score: u32, length: usize, death_reason: Option<DeathReason>) -> Vec<String> {
    let cause = match death_reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::BoardFilled) => "Board filled!",
        None => "",
    };

    vec![
        "GAME OVER".to_owned(),
        String::new(),
        format!("Final score: {score}"),
        format!("Final length: {length}"),
        cause.to_owned(),
        String::new(),
        "Press any key to play again".to_owned(),
        "[Esc]/[Q] Quit".to_owned(),
    ]
}

/// Sizes a bordered popup around `texts` and centers it, clamped to `area`.
fn popup_for(area: Rect, texts: &[String]) -> Rect {
    let content_width = texts
        .iter()
        .map(|text| UnicodeWidthStr::width(text.as_str()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let height = u16::try_from(texts.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
