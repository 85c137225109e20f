use lazy_static::lazy_static;
use regex::Regex;

use crate::profile::OnboardingDraft;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Gate for the Next button: whether the answers required by `step` are in.
/// Steps outside 1..=6 are never complete.
pub fn step_is_complete(draft: &OnboardingDraft, step: u8) -> bool {
    match step {
        1 => {
            !draft.name.is_empty()
                && !draft.email.is_empty()
                && !draft.password.is_empty()
                && !draft.birth_date.is_empty()
        }
        2 => draft.workouts_per_week.is_some(),
        3 => draft.goal.is_some(),
        4 => matches!(draft.current_weight, Some(w) if w > 0.0),
        5 => !draft.obstacles.is_empty(),
        6 => !draft.achievements.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Achievement, FieldUpdate, Goal, Obstacle, WorkoutFrequency};

    #[test]
    fn empty_draft_completes_no_step() {
        let draft = OnboardingDraft::default();
        for step in 1..=6 {
            assert!(!step_is_complete(&draft, step), "step {step}");
        }
    }

    #[test]
    fn step_one_needs_all_four_text_fields() {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::Name("Maria".to_string()));
        draft.apply(FieldUpdate::Email("maria@email.com".to_string()));
        draft.apply(FieldUpdate::Password("senha123".to_string()));
        assert!(!step_is_complete(&draft, 1));
        draft.apply(FieldUpdate::BirthDate("1988-01-30".to_string()));
        assert!(step_is_complete(&draft, 1));
    }

    #[test]
    fn step_four_rejects_zero_weight() {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::CurrentWeight(0.0));
        assert!(!step_is_complete(&draft, 4));
        draft.apply(FieldUpdate::CurrentWeight(70.0));
        assert!(step_is_complete(&draft, 4));
    }

    #[test]
    fn selection_steps_need_a_choice() {
        let mut draft = OnboardingDraft::default();
        assert!(!step_is_complete(&draft, 2));
        assert!(!step_is_complete(&draft, 3));
        assert!(!step_is_complete(&draft, 5));
        assert!(!step_is_complete(&draft, 6));

        draft.apply(FieldUpdate::WorkoutsPerWeek(WorkoutFrequency::TwoTimes));
        draft.apply(FieldUpdate::Goal(Goal::Gain));
        draft.apply(FieldUpdate::ToggleObstacle(Obstacle::LackOfConsistency));
        draft.apply(FieldUpdate::ToggleAchievement(Achievement::IncreaseEnergy));

        assert!(step_is_complete(&draft, 2));
        assert!(step_is_complete(&draft, 3));
        assert!(step_is_complete(&draft, 5));
        assert!(step_is_complete(&draft, 6));
    }

    #[test]
    fn out_of_range_steps_are_never_complete() {
        let draft = OnboardingDraft::default();
        assert!(!step_is_complete(&draft, 0));
        assert!(!step_is_complete(&draft, 7));
    }

    #[test]
    fn email_format_check() {
        assert!(is_valid_email("joao@email.com"));
        assert!(!is_valid_email("joao@email"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two words@email.com"));
    }
}
