//! UI module for glare-survey
//!
//! Frame layout is a one-line title, the stage screen, and a key-hint bar.
//! Rendering reads the `App` and never mutates it.

mod helpers;
mod render;
mod screens;
mod stats;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::Stage;
use crate::theme::{ACCENT, BG_PRIMARY, TEXT_MUTED};

fn key_hints(app: &App) -> &'static str {
    if app.halt.is_some() {
        return " q/Esc: Quit ";
    }
    match app.session.stage {
        Stage::Intro => " Tab/↓: Next field | Shift+Tab/↑: Previous | Enter: Start | Ctrl+C: Quit ",
        Stage::Instructions => " Enter: Begin PART 1 | q: Quit ",
        Stage::PartOne => {
            if app.session.current_index == 0 {
                " ←/→ or 1-3: Choose | Enter/n: Next | q: Quit "
            } else {
                " ←/→ or 1-3: Choose | Enter/n: Next | Backspace/p: Previous | q: Quit "
            }
        }
        Stage::PartTwo => " Tab/↓: Next | Shift+Tab/↑: Previous | ←/→: Adjust | Ctrl+S: Submit | Ctrl+C: Quit ",
        Stage::Finished => " r: Retry save | q: Quit ",
    }
}

fn title(app: &App) -> String {
    match app.session.stage {
        Stage::PartOne if !app.catalog.is_empty() => {
            let last = app.session.current_index + 1 == app.catalog.len();
            format!(
                " Glare Removal Survey · {} · Enter: {} ",
                app.session.stage.label(),
                if last { "To PART 2" } else { "Next" }
            )
        }
        stage => format!(" Glare Removal Survey · {} ", stage.label()),
    }
}

/// Draw the whole frame for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Paragraph::new("").style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Stage screen
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(title(app)).style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        main_layout[0],
    );

    let content = main_layout[1];
    if let Some(message) = &app.halt {
        screens::render_halt(frame, content, message);
    } else {
        match app.session.stage {
            Stage::Intro => screens::render_intro(frame, content, &app.intro_form, &app.notice),
            Stage::Instructions => screens::render_instructions(frame, content, app.catalog.len()),
            Stage::PartOne => {
                if let Some(case) = app.current_case() {
                    let view = screens::PartOneView {
                        case_number: app.session.current_index + 1,
                        total: app.catalog.len(),
                        answered: app.answered_cases(),
                        file_name: &case.file_name,
                        choice: app.case_choice,
                        images: app.current_images(),
                    };
                    screens::render_part_one(frame, content, &view);
                }
            }
            Stage::PartTwo => {
                screens::render_part_two(frame, content, &app.part_two_form, &app.notice)
            }
            Stage::Finished => screens::render_finished(
                frame,
                content,
                app.export_status.as_ref(),
                app.elapsed_at_finish,
            ),
        }
    }

    let keybindings = Paragraph::new(key_hints(app))
        .style(Style::default().fg(BG_PRIMARY).bg(TEXT_MUTED));
    frame.render_widget(keybindings, main_layout[2]);
}
