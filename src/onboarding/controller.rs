use tracing::{debug, info, warn};

use crate::i18n::Language;
use crate::onboarding::validation::{is_valid_email, step_is_complete};
use crate::profile::{FieldUpdate, OnboardingDraft, UserProfile};
use crate::store::KeyValueStore;

pub const TOTAL_STEPS: u8 = 6;

/// What pressing Next did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAdvance {
    /// The current step is incomplete; nothing moved. The UI keeps the
    /// button disabled, so this is a guard rather than an error.
    Blocked,
    Moved(u8),
    /// Step 6 committed: the profile was persisted and onboarding is over.
    Completed(UserProfile),
}

/// What pressing Back did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRetreat {
    Moved(u8),
    /// Back from step 1 leaves the questionnaire entirely.
    Exit,
}

/// Drives the six-step questionnaire: one mutable draft, strictly linear
/// movement, commit on the final step. Dropped (with its draft) as soon as
/// the session moves past onboarding.
#[derive(Debug)]
pub struct OnboardingController {
    step: u8,
    draft: OnboardingDraft,
    language: Language,
}

impl OnboardingController {
    pub fn new(language: Language) -> Self {
        Self {
            step: 1,
            draft: OnboardingDraft::default(),
            language,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// Whether the Next button is enabled on the current step.
    pub fn can_advance(&self) -> bool {
        step_is_complete(&self.draft, self.step)
    }

    /// Moves forward one step, or commits the draft on step 6. Blocked while
    /// the current step's answers are incomplete.
    pub fn advance(&mut self, store: &mut dyn KeyValueStore) -> anyhow::Result<StepAdvance> {
        if !self.can_advance() {
            debug!(step = self.step, "advance blocked: step incomplete");
            return Ok(StepAdvance::Blocked);
        }

        if self.step < TOTAL_STEPS {
            self.step += 1;
            debug!(step = self.step, "advanced to next step");
            return Ok(StepAdvance::Moved(self.step));
        }

        // Final step: the questionnaire answer set becomes the profile.
        if !is_valid_email(&self.draft.email) {
            warn!(email = %self.draft.email, "committing profile with suspicious email format");
        }

        let profile = self.draft.clone().commit(self.language)?;
        profile.save(store)?;
        // The draft (and the plaintext password with it) is done for.
        self.draft = OnboardingDraft::default();
        info!(user = %profile.name, "onboarding complete");
        Ok(StepAdvance::Completed(profile))
    }

    /// Moves back one step; from step 1 it exits to the previous screen.
    pub fn retreat(&mut self) -> StepRetreat {
        if self.step > 1 {
            self.step -= 1;
            debug!(step = self.step, "retreated to previous step");
            StepRetreat::Moved(self.step)
        } else {
            debug!("retreat from step 1: exiting onboarding");
            StepRetreat::Exit
        }
    }
}
