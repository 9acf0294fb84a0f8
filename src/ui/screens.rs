//! One render function per survey stage

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::helpers::{choice_spans, slider_spans, wrap_text};
use super::render::render_image;
use super::stats::render_progress_cards;
use crate::app::ExportStatus;
use crate::images::ResolvedImage;
use crate::models::form::{Method, TextInput, LIKERT, LIKERT_ITEMS};
use crate::models::{
    AdoptionIntent, CaseChoice, FinalPreference, IntroForm, PartTwoField, PartTwoForm, Variant,
};
use crate::theme::{
    field_style, ACCENT, ACCENT_DIM, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, GREEN_SUCCESS,
    RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::{format_duration, truncate_chars};

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn notice_line(notice: &Option<String>) -> Option<Line<'static>> {
    notice
        .as_ref()
        .map(|msg| Line::from(Span::styled(format!("! {}", msg), Style::default().fg(RED_ERROR))))
}

/// Startup failure: missing or empty reference folder
pub fn render_halt(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The survey cannot start.",
            Style::default().fg(AMBER_WARNING).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(TEXT_PRIMARY))),
        Line::from(""),
        Line::from(Span::styled(
            "Check the image folders and restart. Press q to quit.",
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(panel("Warning"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn render_intro(frame: &mut Frame, area: Rect, form: &IntroForm, notice: &Option<String>) {
    let purpose = "This survey evaluates algorithms that remove specular glare from intraoral \
                   camera images. Glare hides lesions and hampers diagnosis; your assessment \
                   helps measure how well each method restores diagnostic detail.";
    let width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        heading("Clinical Usefulness of Glare Removal in Intraoral Camera Images"),
        Line::from(Span::styled("Sahmyook University", Style::default().fg(TEXT_SECONDARY))),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(purpose, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_PRIMARY)))),
    );
    lines.push(Line::from(""));
    lines.push(heading("Evaluator information"));
    lines.push(Line::from(""));

    for (i, input) in form.fields.iter().enumerate() {
        let focused = form.focus == i;
        let marker = if input.config.required { "*" } else { " " };
        let value = if input.value.is_empty() && !focused {
            Span::styled(input.config.placeholder.to_string(), Style::default().fg(TEXT_MUTED))
        } else {
            Span::raw(input.value.clone())
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(
            Line::from(vec![
                Span::raw(format!(" {}{:<30}", marker, input.config.label)),
                value,
                Span::raw(cursor),
            ])
            .style(field_style(focused)),
        );
    }

    lines.push(Line::from(""));
    let submit_focused = form.focus == IntroForm::SUBMIT;
    lines.push(Line::from(Span::styled(
        "[ Start survey ]",
        if submit_focused {
            Style::default().fg(BG_SECONDARY).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT_DIM)
        },
    )));
    if let Some(line) = notice_line(notice) {
        lines.push(Line::from(""));
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines).block(panel("Introduction")), area);
}

pub fn render_instructions(frame: &mut Frame, area: Rect, total_cases: usize) {
    let lines = vec![
        heading("Please check your display before starting."),
        Line::from(""),
        Line::from("1. Set your monitor brightness to maximum."),
        Line::from("2. Dim the ambient lighting for more accurate judgement."),
        Line::from("3. The survey has two parts:"),
        Line::from(format!(
            "     PART 1: case-by-case image comparison ({} cases)",
            total_cases
        )),
        Line::from("     PART 2: overall evaluation of both methods"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter when ready to begin PART 1.",
            Style::default().fg(ACCENT),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(panel("Before You Begin"))
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_variant_image(frame: &mut Frame, area: Rect, variant: Variant, image: Option<&ResolvedImage>) {
    let block = panel(variant.caption());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match image {
        Some(resolved) => render_image(&resolved.image, inner.width, inner.height),
        None => vec![Line::from(Span::styled("loading...", Style::default().fg(TEXT_MUTED)))],
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub struct PartOneView<'a> {
    pub case_number: usize,
    pub total: usize,
    pub answered: usize,
    pub file_name: &'a str,
    pub choice: CaseChoice,
    pub images: Option<&'a [ResolvedImage]>,
}

pub fn render_part_one(frame: &mut Frame, area: Rect, view: &PartOneView) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress cards
            Constraint::Length(2), // Prompt
            Constraint::Min(6),    // Images
            Constraint::Length(3), // Choice
        ])
        .split(area);

    render_progress_cards(rows[0], view.case_number, view.total, view.answered, frame);

    let prompt = vec![
        Line::from(Span::styled(
            format!(
                "PART 1. Image case comparison ({}/{})  {}",
                view.case_number,
                view.total,
                truncate_chars(view.file_name, 40)
            ),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "Compared with the Original, which image has the glare removed best (most naturally)?",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(prompt).alignment(Alignment::Center), rows[1]);

    // Reference on the left, a narrow gap, then the two treatments
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(12, 37),
            Constraint::Ratio(1, 37),
            Constraint::Ratio(12, 37),
            Constraint::Ratio(12, 37),
        ])
        .split(rows[2]);
    let slots = [columns[0], columns[2], columns[3]];
    for (position, (variant, column)) in Variant::ALL.iter().zip(slots).enumerate() {
        let image = view.images.and_then(|imgs| imgs.get(position));
        render_variant_image(frame, column, *variant, image);
    }

    let labels: Vec<&str> = CaseChoice::ALL.iter().map(|c| c.label()).collect();
    let selected = CaseChoice::ALL
        .iter()
        .position(|c| *c == view.choice)
        .unwrap_or(0);
    let choice = Paragraph::new(Line::from(choice_spans(&labels, selected, true)))
        .block(panel("Your choice"))
        .alignment(Alignment::Center);
    frame.render_widget(choice, rows[3]);
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for part in wrap_text(text, width) {
        lines.push(Line::from(part).style(style));
    }
}

/// Label, then the value (or placeholder) indented below it
fn push_text_field(lines: &mut Vec<Line<'static>>, input: &TextInput, focused: bool, width: usize) {
    const INDENT: &str = "    ";
    push_wrapped(lines, input.config.label, width, field_style(focused));

    let value_width = width.saturating_sub(INDENT.len());
    if input.value.is_empty() && !focused {
        for part in wrap_text(input.config.placeholder, value_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", INDENT, part),
                Style::default().fg(TEXT_MUTED),
            )));
        }
        return;
    }

    let cursor = if focused { "▏" } else { "" };
    for part in wrap_text(&format!("{}{}", input.value, cursor), value_width) {
        lines.push(Line::from(format!("{}{}", INDENT, part)).style(field_style(focused)));
    }
}

/// Lines for the whole PART 2 form and the line index of the focused widget
fn part_two_lines(form: &PartTwoForm, width: usize) -> (Vec<Line<'static>>, usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Having reviewed all cases, please rate Method A and Method B on technical and clinical grounds.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
    ];
    let mut focus_line = 0;
    let focused = form.focused();

    for method in [Method::A, Method::B] {
        lines.push(heading(&format!(
            "{}. [{}] evaluation",
            if method == Method::A { 1 } else { 2 },
            method.label()
        )));
        let mut group = "";
        for (item, likert) in LIKERT_ITEMS.iter().enumerate() {
            if likert.group != group {
                group = likert.group;
                lines.push(Line::from(Span::styled(
                    group.to_string(),
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                )));
            }
            let is_focused = focused == PartTwoField::Rating(method, item);
            if is_focused {
                focus_line = lines.len();
            }
            push_wrapped(
                &mut lines,
                &format!("{}. {}", item + 1, likert.question),
                width,
                field_style(is_focused),
            );
            let mut spans = vec![Span::raw("    ")];
            spans.extend(slider_spans(form.answers.rating(method, item), LIKERT.min, LIKERT.max));
            lines.push(Line::from(spans).style(field_style(is_focused)));
        }
        lines.push(Line::from(""));
    }

    lines.push(heading("3. Overall preference and intent to adopt"));

    let is_focused = focused == PartTwoField::FinalPreference;
    if is_focused {
        focus_line = lines.len();
    }
    push_wrapped(
        &mut lines,
        "3.1 Considering visual quality and diagnostic usefulness, which result removed glare best?",
        width,
        field_style(is_focused),
    );
    let labels: Vec<&str> = FinalPreference::ALL.iter().map(|p| p.label()).collect();
    let selected = FinalPreference::ALL
        .iter()
        .position(|p| *p == form.answers.final_preference)
        .unwrap_or(0);
    lines.push(Line::from(choice_spans(&labels, selected, is_focused)));

    let is_focused = focused == PartTwoField::Reason;
    if is_focused {
        focus_line = lines.len();
    }
    push_text_field(&mut lines, &form.reason, is_focused, width);

    let is_focused = focused == PartTwoField::Adoption;
    if is_focused {
        focus_line = lines.len();
    }
    push_wrapped(
        &mut lines,
        "3.3 Would you adopt this technique in clinical practice?",
        width,
        field_style(is_focused),
    );
    let labels: Vec<&str> = AdoptionIntent::ALL.iter().map(|a| a.label()).collect();
    let selected = AdoptionIntent::ALL
        .iter()
        .position(|a| *a == form.answers.adoption_intent)
        .unwrap_or(0);
    lines.push(Line::from(choice_spans(&labels, selected, is_focused)));

    let is_focused = focused == PartTwoField::Opinion;
    if is_focused {
        focus_line = lines.len();
    }
    push_text_field(&mut lines, &form.opinion, is_focused, width);

    lines.push(Line::from(""));
    let is_focused = focused == PartTwoField::Submit;
    if is_focused {
        focus_line = lines.len();
    }
    lines.push(Line::from(Span::styled(
        "[ Submit survey ]",
        if is_focused {
            Style::default().fg(BG_SECONDARY).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT_DIM)
        },
    )));

    (lines, focus_line)
}

pub fn render_part_two(frame: &mut Frame, area: Rect, form: &PartTwoForm, notice: &Option<String>) {
    let block = panel("PART 2. Overall Evaluation");
    let inner = block.inner(area);
    let (mut lines, focus_line) = part_two_lines(form, inner.width as usize);
    if let Some(line) = notice_line(notice) {
        lines.push(line);
    }

    // Keep the focused widget roughly a third of the way down
    let height = inner.height as usize;
    let scroll = focus_line.saturating_sub(height / 3);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(TEXT_PRIMARY))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}

pub fn render_finished(
    frame: &mut Frame,
    area: Rect,
    status: Option<&ExportStatus>,
    elapsed: Option<std::time::Duration>,
) {
    let mut lines = vec![
        Line::from(""),
        heading("Thank you for taking part in this survey."),
        Line::from(""),
    ];
    if let Some(elapsed) = elapsed {
        lines.push(Line::from(Span::styled(
            format!("Time taken: {}", format_duration(elapsed)),
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::from(""));
    }
    match status {
        Some(ExportStatus::Saved(path)) => {
            lines.push(Line::from(Span::styled(
                "Your answers were saved successfully.",
                Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("File: {}", path.display())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "You may now close this window (press q).",
                Style::default().fg(TEXT_MUTED),
            )));
        }
        Some(ExportStatus::Failed(message)) => {
            lines.push(Line::from(Span::styled(
                "An error occurred while saving your answers:",
                Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(message.clone()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Your answers are still held in memory. Press r to try again.",
                Style::default().fg(AMBER_WARNING),
            )));
        }
        None => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("Complete"))
        .style(Style::default().fg(TEXT_PRIMARY))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_two_lines_track_focus() {
        let mut form = PartTwoForm::default();
        let (_, first) = part_two_lines(&form, 80);
        form.focus_next();
        let (_, second) = part_two_lines(&form, 80);
        assert!(second > first);

        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focused(), PartTwoField::Submit);
        let (lines, last) = part_two_lines(&form, 80);
        assert_eq!(last, lines.len() - 1);
    }

    #[test]
    fn test_part_two_lines_show_adoption_before_opinion() {
        let form = PartTwoForm::default();
        let (lines, _) = part_two_lines(&form, 200);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let adoption = text.iter().position(|t| t.starts_with("3.3")).unwrap();
        let reason = text.iter().position(|t| t.starts_with("3.2")).unwrap();
        let opinion = text.iter().position(|t| t.starts_with("4. Additional")).unwrap();
        assert!(reason < adoption && adoption < opinion);
        assert!(text.iter().any(|t| t.contains("(•) Moderate")));
    }

    #[test]
    fn test_part_two_wide_text_stays_within_panel() {
        let typed = "반사광이 자연스럽게 제거되었고 치아 표면의 미세한 디테일 보존이 우수함";
        let mut form = PartTwoForm::default();
        while form.focused() != PartTwoField::Reason {
            form.focus_next();
        }
        for c in typed.chars() {
            form.focused_input().unwrap().insert(c);
        }

        let (lines, focus) = part_two_lines(&form, 40);
        let adoption = lines
            .iter()
            .position(|l| l.spans.iter().any(|s| s.content.starts_with("3.3")))
            .unwrap();
        let reason_lines = &lines[focus..adoption];
        assert!(reason_lines.iter().all(|l| l.width() <= 40));

        // Nothing typed is dropped by wrapping
        let shown: String = reason_lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<String>()
            .chars()
            .filter(|c| ('가'..='힣').contains(c))
            .collect();
        let expected: String = typed.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(shown, expected);
    }
}
