//! Typed form configuration and editable form state
//!
//! Every input on the intro and PART 2 screens is described here with its
//! type, bounds, and default. The UI only reads these; the app edits them.

use super::enums::{AdoptionIntent, FinalPreference};

/// Integer slider bounds and default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderConfig {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

impl SliderConfig {
    pub fn clamp(&self, value: u8) -> u8 {
        value.clamp(self.min, self.max)
    }
}

/// Five-point Likert scale used by every PART 2 rating
pub const LIKERT: SliderConfig = SliderConfig {
    min: 1,
    max: 5,
    default: 3,
};

/// Free-text field description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFieldConfig {
    pub label: &'static str,
    pub required: bool,
    pub digits_only: bool,
    /// Longest accepted value in characters
    pub max_len: Option<usize>,
    pub placeholder: &'static str,
}

/// One rated statement; the key suffix is shared by both methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikertItem {
    pub key_suffix: &'static str,
    pub group: &'static str,
    pub question: &'static str,
}

pub const LIKERT_ITEMS: [LikertItem; 6] = [
    LikertItem {
        key_suffix: "Naturalness",
        group: "Visual quality and fidelity",
        question: "Was the glare on the tooth surface removed naturally, without looking artificial?",
    },
    LikertItem {
        key_suffix: "Structure",
        group: "Visual quality and fidelity",
        question: "Were tooth structure and the surrounding gingiva preserved without distortion?",
    },
    LikertItem {
        key_suffix: "Color",
        group: "Visual quality and fidelity",
        question: "Were the natural color and brightness of the teeth kept without distortion?",
    },
    LikertItem {
        key_suffix: "Identify",
        group: "Clinical diagnostic usefulness",
        question: "Did caries or micro-cracks hidden by glare become easier to identify?",
    },
    LikertItem {
        key_suffix: "Accuracy",
        group: "Clinical diagnostic usefulness",
        question: "Does it reduce glare-induced misdiagnosis and help diagnostic accuracy?",
    },
    LikertItem {
        key_suffix: "Time",
        group: "Clinical diagnostic usefulness",
        question: "Would it shorten the time needed to capture a high-quality image in practice?",
    },
];

/// Which treatment a block of Likert items refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    A,
    B,
}

impl Method {
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Method::A => "Method_A",
            Method::B => "Method_B",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::A => "Method A",
            Method::B => "Method B",
        }
    }
}

/// Record key for a Likert rating, e.g. `Method_B_Color`
pub fn likert_key(method: Method, item: usize) -> String {
    format!("{}_{}", method.key_prefix(), LIKERT_ITEMS[item].key_suffix)
}

pub const NAME_FIELD: TextFieldConfig = TextFieldConfig {
    label: "Name",
    required: true,
    digits_only: false,
    max_len: None,
    placeholder: "",
};

pub const AFFILIATION_FIELD: TextFieldConfig = TextFieldConfig {
    label: "Hospital / institution",
    required: true,
    digits_only: false,
    max_len: None,
    placeholder: "",
};

pub const EXPERIENCE_FIELD: TextFieldConfig = TextFieldConfig {
    label: "Clinical experience (years)",
    required: false,
    digits_only: true,
    max_len: Some(2),
    placeholder: "0",
};

pub const SPECIALTY_FIELD: TextFieldConfig = TextFieldConfig {
    label: "Specialty",
    required: false,
    digits_only: false,
    max_len: None,
    placeholder: "",
};

pub const REASON_FIELD: TextFieldConfig = TextFieldConfig {
    label: "3.2 What was the decisive reason for your choice?",
    required: false,
    digits_only: false,
    max_len: None,
    placeholder: "e.g. better detail preservation, no unnatural look",
};

pub const OPINION_FIELD: TextFieldConfig = TextFieldConfig {
    label: "4. Additional expert comments",
    required: false,
    digits_only: false,
    max_len: None,
    placeholder: "Feel free to leave any comments.",
};

/// Single-line text buffer bound to a field config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub config: TextFieldConfig,
    pub value: String,
}

impl TextInput {
    pub fn new(config: TextFieldConfig) -> Self {
        Self {
            config,
            value: String::new(),
        }
    }

    /// Returns false when the character is rejected by the field.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || (self.config.digits_only && !c.is_ascii_digit()) {
            return false;
        }
        if self
            .config
            .max_len
            .is_some_and(|max| self.value.chars().count() >= max)
        {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

/// Evaluator identity submitted from the intro screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EvaluatorInfo {
    pub name: String,
    pub affiliation: String,
    pub experience_years: u32,
    pub specialty: String,
}

/// Intro form: four fields plus the submit button
#[derive(Debug, Clone)]
pub struct IntroForm {
    pub fields: [TextInput; 4],
    pub focus: usize,
}

impl Default for IntroForm {
    fn default() -> Self {
        Self {
            fields: [
                TextInput::new(NAME_FIELD),
                TextInput::new(AFFILIATION_FIELD),
                TextInput::new(EXPERIENCE_FIELD),
                TextInput::new(SPECIALTY_FIELD),
            ],
            focus: 0,
        }
    }
}

impl IntroForm {
    /// Index of the submit button in the focus cycle
    pub const SUBMIT: usize = 4;

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (Self::SUBMIT + 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Self::SUBMIT) % (Self::SUBMIT + 1);
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focus)
    }

    pub fn to_info(&self) -> EvaluatorInfo {
        EvaluatorInfo {
            name: self.fields[0].trimmed().to_string(),
            affiliation: self.fields[1].trimmed().to_string(),
            // Two digits at most; empty means no answer
            experience_years: self.fields[2].trimmed().parse().unwrap_or(0),
            specialty: self.fields[3].trimmed().to_string(),
        }
    }
}

/// Everything submitted from PART 2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartTwoAnswers {
    pub method_a: [u8; 6],
    pub method_b: [u8; 6],
    pub final_preference: FinalPreference,
    pub preference_reason: String,
    pub adoption_intent: AdoptionIntent,
    pub expert_opinion: String,
}

impl Default for PartTwoAnswers {
    fn default() -> Self {
        Self {
            method_a: [LIKERT.default; 6],
            method_b: [LIKERT.default; 6],
            final_preference: FinalPreference::default(),
            preference_reason: String::new(),
            adoption_intent: AdoptionIntent::default(),
            expert_opinion: String::new(),
        }
    }
}

impl PartTwoAnswers {
    pub fn rating(&self, method: Method, item: usize) -> u8 {
        match method {
            Method::A => self.method_a[item],
            Method::B => self.method_b[item],
        }
    }

    fn rating_mut(&mut self, method: Method, item: usize) -> &mut u8 {
        match method {
            Method::A => &mut self.method_a[item],
            Method::B => &mut self.method_b[item],
        }
    }
}

/// A focusable PART 2 widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartTwoField {
    Rating(Method, usize),
    FinalPreference,
    Reason,
    Adoption,
    Opinion,
    Submit,
}

impl PartTwoField {
    /// Focus order, top to bottom
    pub fn all() -> Vec<PartTwoField> {
        let mut fields = Vec::with_capacity(17);
        for method in [Method::A, Method::B] {
            for item in 0..LIKERT_ITEMS.len() {
                fields.push(PartTwoField::Rating(method, item));
            }
        }
        fields.extend([
            PartTwoField::FinalPreference,
            PartTwoField::Reason,
            PartTwoField::Adoption,
            PartTwoField::Opinion,
            PartTwoField::Submit,
        ]);
        fields
    }
}

/// PART 2 form: answers being edited plus focus position
#[derive(Debug, Clone)]
pub struct PartTwoForm {
    pub answers: PartTwoAnswers,
    pub reason: TextInput,
    pub opinion: TextInput,
    pub focus: usize,
    fields: Vec<PartTwoField>,
}

impl Default for PartTwoForm {
    fn default() -> Self {
        Self {
            answers: PartTwoAnswers::default(),
            reason: TextInput::new(REASON_FIELD),
            opinion: TextInput::new(OPINION_FIELD),
            focus: 0,
            fields: PartTwoField::all(),
        }
    }
}

impl PartTwoForm {
    pub fn focused(&self) -> PartTwoField {
        self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Right arrow on the focused widget
    pub fn increase(&mut self) {
        match self.focused() {
            PartTwoField::Rating(method, item) => {
                let value = self.answers.rating_mut(method, item);
                *value = LIKERT.clamp(value.saturating_add(1));
            }
            PartTwoField::FinalPreference => {
                self.answers.final_preference = self.answers.final_preference.next();
            }
            PartTwoField::Adoption => {
                self.answers.adoption_intent = self.answers.adoption_intent.increase();
            }
            _ => {}
        }
    }

    /// Left arrow on the focused widget
    pub fn decrease(&mut self) {
        match self.focused() {
            PartTwoField::Rating(method, item) => {
                let value = self.answers.rating_mut(method, item);
                *value = LIKERT.clamp(value.saturating_sub(1));
            }
            PartTwoField::FinalPreference => {
                self.answers.final_preference = self.answers.final_preference.prev();
            }
            PartTwoField::Adoption => {
                self.answers.adoption_intent = self.answers.adoption_intent.decrease();
            }
            _ => {}
        }
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused() {
            PartTwoField::Reason => Some(&mut self.reason),
            PartTwoField::Opinion => Some(&mut self.opinion),
            _ => None,
        }
    }

    /// Snapshot of the form as submitted answers
    pub fn to_answers(&self) -> PartTwoAnswers {
        PartTwoAnswers {
            preference_reason: self.reason.value.clone(),
            expert_opinion: self.opinion.value.clone(),
            ..self.answers.clone()
        }
    }
}
