use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::i18n::Language;
use crate::profile::password::hash_password;
use crate::profile::types::{
    Achievement, Goal, Obstacle, Sex, UserProfile, WorkoutFrequency,
};

/// In-progress questionnaire answers. Every field starts unset; the draft is
/// owned by the onboarding controller and consumed by `commit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub birth_date: String,
    pub sex: Option<Sex>,
    pub workouts_per_week: Option<WorkoutFrequency>,
    pub goal: Option<Goal>,
    pub current_weight: Option<f64>,
    pub desired_weight: Option<f64>,
    pub obstacles: Vec<Obstacle>,
    pub achievements: Vec<Achievement>,
}

/// A single questionnaire input event. Scalar variants overwrite; the toggle
/// variants flip membership in the multi-select answers.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Password(String),
    BirthDate(String),
    Sex(Sex),
    WorkoutsPerWeek(WorkoutFrequency),
    Goal(Goal),
    CurrentWeight(f64),
    DesiredWeight(f64),
    ToggleObstacle(Obstacle),
    ToggleAchievement(Achievement),
}

/// First unmet requirement found when converting a draft into a profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncompleteDraft {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("current weight must be greater than zero")]
    NonPositiveWeight,
    #[error("at least one obstacle must be selected")]
    NoObstacles,
    #[error("at least one achievement must be selected")]
    NoAchievements,
}

impl OnboardingDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            // Emails are normalized on entry, same as account registration.
            FieldUpdate::Email(value) => self.email = value.trim().to_lowercase(),
            FieldUpdate::Password(value) => self.password = value,
            FieldUpdate::BirthDate(value) => self.birth_date = value,
            FieldUpdate::Sex(value) => self.sex = Some(value),
            FieldUpdate::WorkoutsPerWeek(value) => self.workouts_per_week = Some(value),
            FieldUpdate::Goal(value) => self.goal = Some(value),
            FieldUpdate::CurrentWeight(value) => self.current_weight = Some(value),
            FieldUpdate::DesiredWeight(value) => self.desired_weight = Some(value),
            FieldUpdate::ToggleObstacle(value) => toggle(&mut self.obstacles, value),
            FieldUpdate::ToggleAchievement(value) => toggle(&mut self.achievements, value),
        }
    }

    /// Checks every requirement the six steps enforce, independent of how
    /// far the questionnaire actually got.
    pub fn check_complete(&self) -> Result<(), IncompleteDraft> {
        if self.name.is_empty() {
            return Err(IncompleteDraft::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(IncompleteDraft::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(IncompleteDraft::MissingField("password"));
        }
        if self.birth_date.is_empty() {
            return Err(IncompleteDraft::MissingField("birthDate"));
        }
        if self.workouts_per_week.is_none() {
            return Err(IncompleteDraft::MissingField("workoutsPerWeek"));
        }
        if self.goal.is_none() {
            return Err(IncompleteDraft::MissingField("goal"));
        }
        match self.current_weight {
            None => return Err(IncompleteDraft::MissingField("currentWeight")),
            Some(w) if w <= 0.0 => return Err(IncompleteDraft::NonPositiveWeight),
            Some(_) => {}
        }
        if self.obstacles.is_empty() {
            return Err(IncompleteDraft::NoObstacles);
        }
        if self.achievements.is_empty() {
            return Err(IncompleteDraft::NoAchievements);
        }
        Ok(())
    }

    /// Converts the draft into a committed profile. Total over complete
    /// drafts; an incomplete draft never produces a profile. Consumes the
    /// draft so the plaintext password is dropped with it.
    pub fn commit(self, language: Language) -> anyhow::Result<UserProfile> {
        self.check_complete()?;

        let password_hash = hash_password(&self.password)?;
        let profile = UserProfile {
            name: self.name,
            email: self.email,
            password_hash,
            birth_date: self.birth_date,
            sex: self.sex,
            // check_complete verified these are set
            workouts_per_week: self
                .workouts_per_week
                .ok_or(IncompleteDraft::MissingField("workoutsPerWeek"))?,
            goal: self.goal.ok_or(IncompleteDraft::MissingField("goal"))?,
            current_weight: self
                .current_weight
                .ok_or(IncompleteDraft::MissingField("currentWeight"))?,
            desired_weight: self.desired_weight,
            obstacles: self.obstacles,
            achievements: self.achievements,
            language,
            created_at: OffsetDateTime::now_utc(),
        };

        info!(user = %profile.name, email = %profile.email, "onboarding draft committed");
        Ok(profile)
    }
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, item: T) {
    if let Some(pos) = selected.iter().position(|x| *x == item) {
        selected.remove(pos);
    } else {
        selected.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::password::verify_password;

    fn filled_draft() -> OnboardingDraft {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::Name("João Silva".to_string()));
        draft.apply(FieldUpdate::Email("joao@email.com".to_string()));
        draft.apply(FieldUpdate::Password("segredo123".to_string()));
        draft.apply(FieldUpdate::BirthDate("1990-04-12".to_string()));
        draft.apply(FieldUpdate::WorkoutsPerWeek(WorkoutFrequency::ThreeToFive));
        draft.apply(FieldUpdate::Goal(Goal::Lose));
        draft.apply(FieldUpdate::CurrentWeight(70.0));
        draft.apply(FieldUpdate::DesiredWeight(65.0));
        draft.apply(FieldUpdate::ToggleObstacle(Obstacle::BusySchedule));
        draft.apply(FieldUpdate::ToggleAchievement(Achievement::EatHealthier));
        draft
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::ToggleObstacle(Obstacle::LackOfSupport));
        assert_eq!(draft.obstacles, vec![Obstacle::LackOfSupport]);
        draft.apply(FieldUpdate::ToggleObstacle(Obstacle::LackOfSupport));
        assert!(draft.obstacles.is_empty());

        draft.apply(FieldUpdate::ToggleAchievement(Achievement::StayMotivated));
        draft.apply(FieldUpdate::ToggleAchievement(Achievement::IncreaseEnergy));
        draft.apply(FieldUpdate::ToggleAchievement(Achievement::StayMotivated));
        assert_eq!(draft.achievements, vec![Achievement::IncreaseEnergy]);
    }

    #[test]
    fn email_is_normalized_on_entry() {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::Email(" JoAo@Email.com ".to_string()));
        assert_eq!(draft.email, "joao@email.com");
    }

    #[test]
    fn commit_carries_every_answer() {
        let draft = filled_draft();
        let expected = draft.clone();
        let profile = draft.commit(Language::Pt).expect("draft is complete");

        assert_eq!(profile.name, expected.name);
        assert_eq!(profile.email, expected.email);
        assert_eq!(profile.birth_date, expected.birth_date);
        assert_eq!(profile.workouts_per_week, WorkoutFrequency::ThreeToFive);
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.current_weight, 70.0);
        assert_eq!(profile.desired_weight, Some(65.0));
        assert_eq!(profile.obstacles, expected.obstacles);
        assert_eq!(profile.achievements, expected.achievements);
        assert_eq!(profile.language, Language::Pt);
    }

    #[test]
    fn commit_hashes_the_password() {
        let profile = filled_draft().commit(Language::En).expect("commit");
        assert_ne!(profile.password_hash, "segredo123");
        assert!(verify_password("segredo123", &profile.password_hash).expect("verify"));
    }

    #[test]
    fn commit_rejects_incomplete_draft() {
        let mut draft = filled_draft();
        draft.achievements.clear();
        let err = draft.check_complete().unwrap_err();
        assert_eq!(err, IncompleteDraft::NoAchievements);

        let mut draft = filled_draft();
        draft.name.clear();
        assert_eq!(
            draft.check_complete().unwrap_err(),
            IncompleteDraft::MissingField("name")
        );

        let mut draft = filled_draft();
        draft.current_weight = Some(0.0);
        assert_eq!(
            draft.check_complete().unwrap_err(),
            IncompleteDraft::NonPositiveWeight
        );
    }
}
