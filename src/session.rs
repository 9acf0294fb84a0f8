//! Page state machine for one evaluator session.
//!
//! `transition` is pure: it takes the current state and an action and returns
//! the next state, or `ValidationRejected` when the intro form is incomplete.
//! Rendering and export live elsewhere.

use tracing::info;

use crate::catalog::Catalog;
use crate::error::SurveyError;
use crate::models::form::{likert_key, Method, LIKERT_ITEMS};
use crate::models::{case_keys, CaseChoice, EvaluatorInfo, PartTwoAnswers, ResponseStore, Stage};

pub const KEY_NAME: &str = "Evaluator_Name";
pub const KEY_AFFILIATION: &str = "Affiliation";
pub const KEY_EXPERIENCE: &str = "Experience";
pub const KEY_SPECIALTY: &str = "Specialty";

/// Everything that changes while an evaluator works through the survey
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub stage: Stage,
    pub current_index: usize,
    pub responses: ResponseStore,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choice recorded earlier for the case at `current_index`, if any
    pub fn recorded_choice(&self) -> Option<CaseChoice> {
        let (_, choice_key) = case_keys(self.current_index);
        self.responses
            .get_text(&choice_key)
            .and_then(CaseChoice::from_label)
    }
}

/// One evaluator action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitIntro(EvaluatorInfo),
    BeginPartOne,
    Previous,
    Next(CaseChoice),
    SubmitPartTwo(PartTwoAnswers),
}

/// Apply `action` to `state`.
///
/// Actions that do not belong to the current stage leave the state unchanged.
pub fn transition(
    state: &SessionState,
    action: Action,
    catalog: &Catalog,
) -> Result<SessionState, SurveyError> {
    let mut next = state.clone();

    match (state.stage, action) {
        (Stage::Intro, Action::SubmitIntro(info)) => {
            let name = info.name.trim();
            let affiliation = info.affiliation.trim();
            if name.is_empty() || affiliation.is_empty() {
                return Err(SurveyError::validation(
                    "Please enter your name and affiliation.",
                ));
            }
            next.responses.record(KEY_NAME, name);
            next.responses.record(KEY_AFFILIATION, affiliation);
            next.responses.record(KEY_EXPERIENCE, info.experience_years);
            next.responses.record(KEY_SPECIALTY, info.specialty.trim());
            next.stage = Stage::Instructions;
        }
        (Stage::Instructions, Action::BeginPartOne) => {
            next.stage = Stage::PartOne;
            next.current_index = 0;
        }
        (Stage::PartOne, Action::Previous) => {
            next.current_index = state.current_index.saturating_sub(1);
        }
        (Stage::PartOne, Action::Next(choice)) => {
            let Some(case) = catalog.get(state.current_index) else {
                return Ok(next);
            };
            let (file_key, choice_key) = case_keys(state.current_index);
            next.responses.record(file_key, case.file_name.as_str());
            next.responses.record(choice_key, choice.label());

            if state.current_index + 1 >= catalog.len() {
                next.stage = Stage::PartTwo;
            } else {
                next.current_index += 1;
            }
        }
        (Stage::PartTwo, Action::SubmitPartTwo(answers)) => {
            record_part_two(&mut next.responses, &answers);
            next.stage = Stage::Finished;
        }
        _ => {}
    }

    if next.stage != state.stage {
        info!("Stage {:?} -> {:?}", state.stage, next.stage);
    }
    Ok(next)
}

fn record_part_two(responses: &mut ResponseStore, answers: &PartTwoAnswers) {
    for method in [Method::A, Method::B] {
        for item in 0..LIKERT_ITEMS.len() {
            responses.record(likert_key(method, item), answers.rating(method, item));
        }
    }
    responses.record("Final_Preference", answers.final_preference.label());
    responses.record("Preference_Reason", answers.preference_reason.as_str());
    responses.record("Adoption_Intent", answers.adoption_intent.label());
    responses.record("Expert_Opinion", answers.expert_opinion.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::responses::ResponseValue;
    use crate::models::Case;

    fn catalog(n: usize) -> Catalog {
        Catalog::from_cases((1..=n).map(|i| Case::new(&format!("case_{}.png", i))).collect())
    }

    fn info(name: &str, affiliation: &str) -> EvaluatorInfo {
        EvaluatorInfo {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
            experience_years: 12,
            specialty: "Prosthodontics".to_string(),
        }
    }

    fn at_part_one(catalog: &Catalog) -> SessionState {
        let s = transition(&SessionState::new(), Action::SubmitIntro(info("Park", "SU")), catalog).unwrap();
        transition(&s, Action::BeginPartOne, catalog).unwrap()
    }

    #[test]
    fn test_intro_requires_name_and_affiliation() {
        let cat = catalog(1);
        let state = SessionState::new();
        for (name, aff) in [("", ""), ("Park", ""), ("", "SU"), ("   ", "SU")] {
            let result = transition(&state, Action::SubmitIntro(info(name, aff)), &cat);
            assert!(matches!(result, Err(SurveyError::ValidationRejected { .. })));
        }
        assert_eq!(state.stage, Stage::Intro);
        assert_eq!(state.responses.len(), 0);
    }

    #[test]
    fn test_intro_advances_and_records_identity() {
        let cat = catalog(1);
        let next = transition(&SessionState::new(), Action::SubmitIntro(info(" Park ", "SU")), &cat).unwrap();
        assert_eq!(next.stage, Stage::Instructions);
        assert_eq!(next.responses.get_text(KEY_NAME), Some("Park"));
        assert_eq!(next.responses.get(KEY_EXPERIENCE), Some(&ResponseValue::Integer(12)));
        assert_eq!(next.responses.len(), 4);
    }

    #[test]
    fn test_part_one_navigation_with_three_cases() {
        let cat = catalog(3);
        let state = at_part_one(&cat);
        assert_eq!(state.stage, Stage::PartOne);
        assert_eq!(state.current_index, 0);

        // Previous at the first case does nothing
        let same = transition(&state, Action::Previous, &cat).unwrap();
        assert_eq!(same, state);

        let s1 = transition(&state, Action::Next(CaseChoice::MethodB), &cat).unwrap();
        assert_eq!(s1.current_index, 1);
        assert_eq!(s1.responses.get_text("Case_1_File"), Some("case_1.png"));
        assert_eq!(s1.responses.get_text("Case_1_Choice"), Some("Method B"));

        let s2 = transition(&s1, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        assert_eq!(s2.current_index, 2);
        let s3 = transition(&s2, Action::Next(CaseChoice::NoDifference), &cat).unwrap();
        assert_eq!(s3.stage, Stage::PartTwo);
        assert_eq!(s3.current_index, 2);
        assert_eq!(s3.responses.get_text("Case_3_File"), Some("case_3.png"));
        assert_eq!(
            s3.responses.get_text("Case_3_Choice"),
            Some("No significant difference")
        );
    }

    #[test]
    fn test_revisit_overwrites_choice() {
        let cat = catalog(3);
        let s = at_part_one(&cat);
        let s = transition(&s, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        let s = transition(&s, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        assert_eq!(s.current_index, 2);
        let before = s.responses.len();

        let s = transition(&s, Action::Previous, &cat).unwrap();
        assert_eq!(s.current_index, 1);
        assert_eq!(s.recorded_choice(), Some(CaseChoice::MethodA));
        let s = transition(&s, Action::Next(CaseChoice::MethodB), &cat).unwrap();

        assert_eq!(s.responses.len(), before);
        assert_eq!(s.responses.get_text("Case_2_Choice"), Some("Method B"));
        assert_eq!(s.current_index, 2);
    }

    #[test]
    fn test_part_two_records_all_keys_and_finishes() {
        let cat = catalog(1);
        let s = at_part_one(&cat);
        let s = transition(&s, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        assert_eq!(s.stage, Stage::PartTwo);

        let mut answers = PartTwoAnswers::default();
        answers.method_b[2] = 5;
        answers.preference_reason = "fewer artifacts".to_string();
        let done = transition(&s, Action::SubmitPartTwo(answers), &cat).unwrap();

        assert_eq!(done.stage, Stage::Finished);
        assert_eq!(done.responses.len(), 4 + 2 + 12 + 4);
        assert_eq!(done.responses.get("Method_B_Color"), Some(&ResponseValue::Integer(5)));
        assert_eq!(done.responses.get("Method_A_Time"), Some(&ResponseValue::Integer(3)));
        assert_eq!(done.responses.get_text("Adoption_Intent"), Some("Moderate"));
        assert_eq!(done.responses.get_text("Final_Preference"), Some("Original"));
    }

    #[test]
    fn test_finished_is_terminal() {
        let cat = catalog(1);
        let s = at_part_one(&cat);
        let s = transition(&s, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        let done = transition(&s, Action::SubmitPartTwo(PartTwoAnswers::default()), &cat).unwrap();

        let actions = vec![
            Action::SubmitIntro(info("Other", "X")),
            Action::BeginPartOne,
            Action::Previous,
            Action::Next(CaseChoice::MethodB),
            Action::SubmitPartTwo(PartTwoAnswers::default()),
        ];
        for action in actions {
            let after = transition(&done, action, &cat).unwrap();
            assert_eq!(after, done);
        }
    }

    #[test]
    fn test_out_of_stage_actions_are_ignored() {
        let cat = catalog(2);
        let state = SessionState::new();
        let after = transition(&state, Action::Next(CaseChoice::MethodA), &cat).unwrap();
        assert_eq!(after, state);
        let after = transition(&state, Action::BeginPartOne, &cat).unwrap();
        assert_eq!(after.stage, Stage::Intro);
    }
}
