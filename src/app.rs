//! Application state and core logic for the survey TUI.
//!
//! `App` owns the one session for this run, the editable form state, and the
//! cached images of the case on screen. Keys are turned into session actions
//! here; drawing happens in `ui`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{error, info, warn};

use crate::catalog::{load_catalog, Catalog};
use crate::config::SurveyConfig;
use crate::export::export_record;
use crate::images::{resolve_image, ResolvedImage};
use crate::models::{case_keys, Case, CaseChoice, IntroForm, PartTwoField, PartTwoForm, Stage, Variant};
use crate::session::{transition, Action, SessionState};

/// Longest edge kept in memory for an on-screen image
const PREVIEW_EDGE: u32 = 480;

/// Ctrl or Alt held; such keys never type into a text field
fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Outcome of the export triggered when the survey finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

/// Application state
pub struct App {
    pub config: SurveyConfig,
    pub catalog: Catalog,
    pub session: SessionState,
    /// Set when startup could not produce a usable catalog
    pub halt: Option<String>,
    pub intro_form: IntroForm,
    pub part_two_form: PartTwoForm,
    /// Option highlighted in the PART 1 question for the current case
    pub case_choice: CaseChoice,
    /// Inline message for a rejected submission
    pub notice: Option<String>,
    pub export_status: Option<ExportStatus>,
    pub session_start: Instant,
    pub elapsed_at_finish: Option<Duration>,
    pub should_quit: bool,
    images: Option<(usize, Vec<ResolvedImage>)>,
}

impl App {
    pub fn new(config: SurveyConfig) -> Self {
        let reference = config.folder_for(Variant::Reference);
        let (catalog, halt) = match load_catalog(&reference) {
            Ok(catalog) => {
                info!("Loaded {} cases from {}", catalog.len(), reference.display());
                (catalog, None)
            }
            Err(e) => {
                error!("Cannot start survey: {}", e);
                (Catalog::default(), Some(e.to_string()))
            }
        };

        Self {
            config,
            catalog,
            session: SessionState::new(),
            halt,
            intro_form: IntroForm::default(),
            part_two_form: PartTwoForm::default(),
            case_choice: CaseChoice::default(),
            notice: None,
            export_status: None,
            session_start: Instant::now(),
            elapsed_at_finish: None,
            should_quit: false,
            images: None,
        }
    }

    pub fn current_case(&self) -> Option<&Case> {
        self.catalog.get(self.session.current_index)
    }

    /// Number of cases with a recorded PART 1 answer
    pub fn answered_cases(&self) -> usize {
        (0..self.catalog.len())
            .filter(|i| self.session.responses.get(&case_keys(*i).1).is_some())
            .count()
    }

    /// Load the image triple for the current case unless already cached.
    pub fn refresh_images(&mut self) {
        if self.session.stage != Stage::PartOne {
            return;
        }
        let index = self.session.current_index;
        if matches!(self.images, Some((cached, _)) if cached == index) {
            return;
        }
        let Some(case) = self.catalog.get(index) else {
            return;
        };

        let resolved = Variant::ALL
            .iter()
            .map(|variant| {
                let mut found = resolve_image(&self.config.folder_for(*variant), case);
                if found.is_placeholder() {
                    warn!("No {} image for case '{}'", variant.label(), case.file_name);
                }
                if found.image.width() > PREVIEW_EDGE || found.image.height() > PREVIEW_EDGE {
                    found.image = found.image.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE);
                }
                found
            })
            .collect();
        self.images = Some((index, resolved));
    }

    /// Cached images for the current case, in `Variant::ALL` order
    pub fn current_images(&self) -> Option<&[ResolvedImage]> {
        match &self.images {
            Some((index, images)) if *index == self.session.current_index => Some(images),
            _ => None,
        }
    }

    /// Apply one action to the session and react to the stage it lands in.
    pub fn dispatch(&mut self, action: Action) {
        let previous_stage = self.session.stage;
        match transition(&self.session, action, &self.catalog) {
            Ok(next) => {
                self.session = next;
                self.notice = None;
            }
            Err(e) => {
                warn!("Submission rejected: {}", e);
                self.notice = Some(e.to_string());
                return;
            }
        }

        self.case_choice = self.session.recorded_choice().unwrap_or_default();

        if previous_stage != Stage::Finished && self.session.stage == Stage::Finished {
            self.elapsed_at_finish = Some(self.session_start.elapsed());
            self.export();
        }
    }

    fn export(&mut self) {
        let now = chrono::Local::now();
        self.export_status = Some(
            match export_record(&self.session.responses, &self.config.output_dir, &now) {
                Ok(path) => ExportStatus::Saved(path),
                Err(e) => {
                    error!("{}", e);
                    ExportStatus::Failed(e.to_string())
                }
            },
        );
    }

    /// Try the export again after a failure; a saved record is left alone.
    pub fn retry_export(&mut self) {
        if matches!(self.export_status, Some(ExportStatus::Failed(_))) {
            info!("Retrying export");
            self.export();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.halt.is_some() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        if key.code == KeyCode::Char('q') && self.session.stage.accepts_quit_key() {
            self.should_quit = true;
            return;
        }

        match self.session.stage {
            Stage::Intro => self.handle_intro_key(key),
            Stage::Instructions => {
                if key.code == KeyCode::Enter {
                    self.dispatch(Action::BeginPartOne);
                }
            }
            Stage::PartOne => self.handle_part_one_key(key),
            Stage::PartTwo => self.handle_part_two_key(key),
            Stage::Finished => {
                if key.code == KeyCode::Char('r') {
                    self.retry_export();
                }
            }
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.intro_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.intro_form.focus_prev(),
            KeyCode::Enter => {
                let info = self.intro_form.to_info();
                self.dispatch(Action::SubmitIntro(info));
            }
            KeyCode::Backspace => {
                if let Some(input) = self.intro_form.focused_input() {
                    input.backspace();
                }
            }
            KeyCode::Char(c) if !is_chord(&key) => {
                if let Some(input) = self.intro_form.focused_input() {
                    input.insert(c);
                }
            }
            _ => {}
        }
    }

    fn handle_part_one_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.case_choice = self.case_choice.prev(),
            KeyCode::Right => self.case_choice = self.case_choice.next(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.case_choice = CaseChoice::ALL[index];
            }
            KeyCode::Enter | KeyCode::Char('n') => self.dispatch(Action::Next(self.case_choice)),
            KeyCode::Backspace | KeyCode::Char('p') => self.dispatch(Action::Previous),
            _ => {}
        }
    }

    fn handle_part_two_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.submit_part_two();
            return;
        }

        if key.code == KeyCode::Enter && self.part_two_form.focused() == PartTwoField::Submit {
            self.submit_part_two();
            return;
        }

        let form = &mut self.part_two_form;
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.decrease(),
            KeyCode::Right => form.increase(),
            KeyCode::Backspace => {
                if let Some(input) = form.focused_input() {
                    input.backspace();
                }
            }
            KeyCode::Char(c) if !is_chord(&key) => {
                if let Some(input) = form.focused_input() {
                    input.insert(c);
                }
            }
            _ => {}
        }
    }

    fn submit_part_two(&mut self) {
        let answers = self.part_two_form.to_answers();
        self.dispatch(Action::SubmitPartTwo(answers));
    }
}
