//! Overlay rendering (error notification, path prompt, toast, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{Prompt, UiState};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        let error_line_count = error_msg.chars().count().div_ceil(inner_width) as u16;
        let popup_height = 2 + error_line_count.max(1);

        let popup_area = centered(area, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_prompt(frame: &mut Frame, prompt: &Prompt) {
    let area = frame.area();
    let popup_area = centered(area, 70.min(area.width.saturating_sub(4)), 3);

    frame.render_widget(Clear, popup_area);

    let input = Paragraph::new(Line::from(vec![
        Span::raw(prompt.input.as_str()),
        Span::styled("█", Style::default().fg(Color::Green)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(prompt.kind.title())
            .title_bottom(Line::from(" Enter to confirm, Esc to cancel ").right_aligned())
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(input, popup_area);
}

pub fn render_toast(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 3.min(area.height),
    };

    frame.render_widget(Clear, toast_area);
    let toast = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(toast, toast_area);
}

const HELP_LINES: &[(&str, &str)] = &[
    ("Space", "Play / pause"),
    ("n / p", "Next / previous track"),
    ("← / →", "Back / forward 10s (Shift: 30s)"),
    ("[ / ]", "Back / forward 30s"),
    ("0-9", "Seek to 0%-90%"),
    ("+ / -", "Volume up / down"),
    ("s", "Toggle shuffle"),
    ("r", "Cycle repeat (Off, All, One)"),
    ("↑ / ↓", "Move in playlist"),
    ("Enter", "Play selected track"),
    ("a", "Add file or folder"),
    ("o / w", "Open / save playlist"),
    ("x", "Clear playlist"),
    ("f", "Toggle full paths"),
    ("q", "Quit"),
];

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered(area, 52, HELP_LINES.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<8}", key),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help, popup_area);
}
