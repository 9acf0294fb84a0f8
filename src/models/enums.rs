//! Enums used throughout the survey
//!
//! Stages of the evaluator flow, the image variants under comparison, and the
//! small answer enums whose labels end up in the exported record.

/// Screen the evaluator is currently on. Ordered; only PART 1 can step back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Intro,
    Instructions,
    PartOne,
    PartTwo,
    Finished,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Intro => "Evaluator Information",
            Stage::Instructions => "Before You Begin",
            Stage::PartOne => "PART 1",
            Stage::PartTwo => "PART 2",
            Stage::Finished => "Complete",
        }
    }

    /// Screens without free-text entry, where bare `q` quits.
    pub fn accepts_quit_key(&self) -> bool {
        matches!(self, Stage::Instructions | Stage::PartOne | Stage::Finished)
    }
}

/// One of the three image sources being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Reference,
    TreatmentA,
    TreatmentB,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Reference, Variant::TreatmentA, Variant::TreatmentB];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Reference => "Original",
            Variant::TreatmentA => "Method A",
            Variant::TreatmentB => "Method B",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Variant::Reference => "Original (reference)",
            Variant::TreatmentA => "Method A",
            Variant::TreatmentB => "Method B",
        }
    }
}

/// Per-case answer in PART 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseChoice {
    #[default]
    MethodA,
    MethodB,
    NoDifference,
}

impl CaseChoice {
    pub const ALL: [CaseChoice; 3] = [CaseChoice::MethodA, CaseChoice::MethodB, CaseChoice::NoDifference];

    pub fn label(&self) -> &'static str {
        match self {
            CaseChoice::MethodA => "Method A",
            CaseChoice::MethodB => "Method B",
            CaseChoice::NoDifference => "No significant difference",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn next(&self) -> Self {
        match self {
            CaseChoice::MethodA => CaseChoice::MethodB,
            CaseChoice::MethodB => CaseChoice::NoDifference,
            CaseChoice::NoDifference => CaseChoice::MethodA,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            CaseChoice::MethodA => CaseChoice::NoDifference,
            CaseChoice::MethodB => CaseChoice::MethodA,
            CaseChoice::NoDifference => CaseChoice::MethodB,
        }
    }
}

/// Overall preference asked at the end of PART 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalPreference {
    #[default]
    Original,
    MethodA,
    MethodB,
}

impl FinalPreference {
    pub const ALL: [FinalPreference; 3] = [
        FinalPreference::Original,
        FinalPreference::MethodA,
        FinalPreference::MethodB,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FinalPreference::Original => "Original",
            FinalPreference::MethodA => "Method A",
            FinalPreference::MethodB => "Method B",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FinalPreference::Original => FinalPreference::MethodA,
            FinalPreference::MethodA => FinalPreference::MethodB,
            FinalPreference::MethodB => FinalPreference::Original,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FinalPreference::Original => FinalPreference::MethodB,
            FinalPreference::MethodA => FinalPreference::Original,
            FinalPreference::MethodB => FinalPreference::MethodA,
        }
    }
}

/// Willingness to adopt the technique in practice (ordered scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum AdoptionIntent {
    VeryLow,
    Low,
    #[default]
    Moderate,
    High,
    VeryHigh,
}

impl AdoptionIntent {
    pub const ALL: [AdoptionIntent; 5] = [
        AdoptionIntent::VeryLow,
        AdoptionIntent::Low,
        AdoptionIntent::Moderate,
        AdoptionIntent::High,
        AdoptionIntent::VeryHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdoptionIntent::VeryLow => "Very low",
            AdoptionIntent::Low => "Low",
            AdoptionIntent::Moderate => "Moderate",
            AdoptionIntent::High => "High",
            AdoptionIntent::VeryHigh => "Very high",
        }
    }

    /// One step up the scale; saturates at the top like a select slider.
    pub fn increase(&self) -> Self {
        match self {
            AdoptionIntent::VeryLow => AdoptionIntent::Low,
            AdoptionIntent::Low => AdoptionIntent::Moderate,
            AdoptionIntent::Moderate => AdoptionIntent::High,
            AdoptionIntent::High | AdoptionIntent::VeryHigh => AdoptionIntent::VeryHigh,
        }
    }

    pub fn decrease(&self) -> Self {
        match self {
            AdoptionIntent::VeryLow | AdoptionIntent::Low => AdoptionIntent::VeryLow,
            AdoptionIntent::Moderate => AdoptionIntent::Low,
            AdoptionIntent::High => AdoptionIntent::Moderate,
            AdoptionIntent::VeryHigh => AdoptionIntent::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_default() {
        assert_eq!(Stage::default(), Stage::Intro);
    }

    #[test]
    fn test_quit_key_not_accepted_on_text_screens() {
        assert!(!Stage::Intro.accepts_quit_key());
        assert!(!Stage::PartTwo.accepts_quit_key());
        assert!(Stage::PartOne.accepts_quit_key());
    }

    #[test]
    fn test_case_choice_cycles() {
        let mut choice = CaseChoice::default();
        for _ in 0..3 {
            choice = choice.next();
        }
        assert_eq!(choice, CaseChoice::MethodA);
        assert_eq!(CaseChoice::MethodA.prev(), CaseChoice::NoDifference);
    }

    #[test]
    fn test_case_choice_label_round_trip() {
        for choice in CaseChoice::ALL {
            assert_eq!(CaseChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(CaseChoice::from_label("Original"), None);
    }

    #[test]
    fn test_adoption_intent_saturates() {
        assert_eq!(AdoptionIntent::default(), AdoptionIntent::Moderate);
        assert_eq!(AdoptionIntent::VeryHigh.increase(), AdoptionIntent::VeryHigh);
        assert_eq!(AdoptionIntent::VeryLow.decrease(), AdoptionIntent::VeryLow);
        assert_eq!(AdoptionIntent::Moderate.increase(), AdoptionIntent::High);
    }

    #[test]
    fn test_final_preference_default() {
        assert_eq!(FinalPreference::default(), FinalPreference::Original);
        assert_eq!(FinalPreference::MethodB.next(), FinalPreference::Original);
    }
}
