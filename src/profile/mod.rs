mod draft;
pub mod password;
mod repo;
mod types;

pub use draft::{FieldUpdate, IncompleteDraft, OnboardingDraft};
pub use types::{Achievement, Goal, Obstacle, Sex, UserProfile, WorkoutFrequency};
