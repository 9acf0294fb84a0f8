//! UI helper functions

use ratatui::prelude::*;

use crate::theme::{selected_style, TEXT_MUTED, TEXT_SECONDARY};

/// Display width in terminal columns; wide (CJK, Hangul) characters count two
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Word wrapping measured in terminal columns.
///
/// A word wider than `max_width` is broken between characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        if !current_line.is_empty() && current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if word_width <= max_width {
            current_line.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = text_width(c.encode_utf8(&mut [0; 4]));
            if current_width + char_width > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            current_line.push(c);
            current_width += char_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Horizontal radio group: `(•) Selected   ( ) Other`
pub fn choice_spans(labels: &[&str], selected: usize, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("     "));
        }
        if i == selected {
            let style = if focused {
                selected_style().add_modifier(Modifier::REVERSED)
            } else {
                selected_style()
            };
            spans.push(Span::styled(format!("(•) {}", label), style));
        } else {
            spans.push(Span::styled(
                format!("( ) {}", label),
                Style::default().fg(TEXT_SECONDARY),
            ));
        }
    }
    spans
}

/// `1 ──●── 5` style slider for a Likert value
pub fn slider_spans(value: u8, min: u8, max: u8) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(format!("{} ", min), Style::default().fg(TEXT_MUTED))];
    for step in min..=max {
        if step > min {
            spans.push(Span::styled("──", Style::default().fg(TEXT_MUTED)));
        }
        if step == value {
            spans.push(Span::styled(format!("[{}]", step), selected_style()));
        } else {
            spans.push(Span::styled(" ○ ", Style::default().fg(TEXT_MUTED)));
        }
    }
    spans.push(Span::styled(format!(" {}", max), Style::default().fg(TEXT_MUTED)));
    spans
}
