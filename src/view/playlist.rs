//! Playlist rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

use crate::model::AppModel;
use super::utils::{calculate_num_width, truncate_string};

pub fn render_playlist(frame: &mut Frame, area: Rect, model: &AppModel) {
    let titles = model.playlist.titles(model.ui.show_full_path);
    let num_width = calculate_num_width(titles.len());
    let title_width = (area.width as usize).saturating_sub(num_width + 8);
    let current = model.current_index();

    let items: Vec<ListItem> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let is_current = current == Some(i);
            let marker = match (is_current, model.playback.is_playing) {
                (true, true) => "▶",
                (true, false) => "•",
                _ => " ",
            };

            let style = if i == model.ui.cursor {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!(
                "{:>width$} {} {}",
                i + 1,
                marker,
                truncate_string(title, title_width),
                width = num_width
            ))
            .style(style)
        })
        .collect();

    let block_title = format!(" Playlist ({}) ", titles.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Green)),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    if !titles.is_empty() {
        list_state.select(Some(model.ui.cursor));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}
