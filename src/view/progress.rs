//! Progress bar rendering

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::AppModel;
use super::utils::format_duration;

pub fn render_progress_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let playback = &model.playback;

    let status_text = match model.now_playing_title() {
        Some(title) if playback.is_playing => format!(" ▶ {} ", title),
        Some(title) => format!(" ⏸ {} ", title),
        None => " No track selected ".to_string(),
    };

    let shuffle_text = if playback.shuffle { "Shuffle: On" } else { "Shuffle: Off" };
    let controls_info = format!(
        " {} | Repeat: {} | Vol: {}% ",
        shuffle_text,
        playback.repeat.label(),
        playback.volume_percent()
    );

    let time_str = format!(
        "{}/{}",
        format_duration(playback.elapsed),
        format_duration(playback.total)
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(status_text)
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(playback.progress_ratio())
        .label(time_str);

    frame.render_widget(gauge, area);
}
