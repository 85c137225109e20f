mod controller;
mod validation;

pub use controller::{OnboardingController, StepAdvance, StepRetreat, TOTAL_STEPS};
pub use validation::step_is_complete;
