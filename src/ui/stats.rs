//! Progress card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::theme::{ACCENT, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED};

fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
}

/// Render the PART 1 case counter and completion gauge side by side
pub fn render_progress_cards(area: Rect, case_number: usize, total: usize, answered: usize, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    // Left card: current case
    let case_content = vec![
        Line::from(Span::styled(
            format!("{}/{}", case_number, total),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("CASE", Style::default().fg(TEXT_MUTED))),
    ];
    let case_paragraph = Paragraph::new(case_content)
        .block(card_block())
        .alignment(Alignment::Center);
    frame.render_widget(case_paragraph, card_layout[0]);

    // Right card: share of cases answered
    let percent = if total > 0 {
        (answered.min(total) * 100 / total) as u16
    } else {
        0
    };
    let gauge_color = if percent == 100 { GREEN_SUCCESS } else { ACCENT };
    let gauge = Gauge::default()
        .block(card_block().title(" ANSWERED "))
        .gauge_style(Style::default().fg(gauge_color).bg(BG_SECONDARY))
        .percent(percent)
        .label(format!("{}/{} cases ({}%)", answered.min(total), total, percent));
    frame.render_widget(gauge, card_layout[1]);
}
