use crate::model::Step;
use crate::voice::Speak;

/// Spoken when the walkthrough finishes.
pub const COMPLETION_MESSAGE: &str = "Cooking complete! Enjoy your meal.";

/// Shown when a recipe has no step list to walk through.
pub const NO_STEPS_MESSAGE: &str = "No step-by-step instructions available.";

/// Where the walkthrough currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingState {
    /// Zero-based index into the step list.
    AtStep(usize),
    /// Terminal: no navigation is offered once reached.
    Complete,
}

/// Guided one-step-at-a-time walkthrough of a recipe's instructions.
///
/// Every transition into a step speaks that step's text exactly once, and
/// entering [`CookingState::Complete`] speaks the completion message once.
pub struct CookingSession {
    steps: Vec<Step>,
    state: CookingState,
}

impl CookingSession {
    /// Start a walkthrough at the first step, narrating it.
    ///
    /// Returns `None` for an empty step list: the walkthrough is never
    /// entered and the caller shows [`NO_STEPS_MESSAGE`] instead.
    pub fn start(steps: Vec<Step>, voice: &dyn Speak) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        let session = CookingSession {
            steps,
            state: CookingState::AtStep(0),
        };
        voice.say(&session.steps[0].text);
        Some(session)
    }

    pub fn state(&self) -> CookingState {
        self.state
    }

    /// The step the walkthrough is at, or `None` once complete.
    pub fn current_step(&self) -> Option<&Step> {
        match self.state {
            CookingState::AtStep(index) => self.steps.get(index),
            CookingState::Complete => None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.state == CookingState::Complete
    }

    /// Move to the next step, or finish after the last one.
    pub fn next(&mut self, voice: &dyn Speak) {
        let CookingState::AtStep(index) = self.state else {
            return;
        };
        if index + 1 < self.steps.len() {
            self.state = CookingState::AtStep(index + 1);
            voice.say(&self.steps[index + 1].text);
        } else {
            self.state = CookingState::Complete;
            voice.say(COMPLETION_MESSAGE);
        }
    }

    /// Move back one step. At the first step this stays put, silently.
    pub fn prev(&mut self, voice: &dyn Speak) {
        let CookingState::AtStep(index) = self.state else {
            return;
        };
        if index > 0 {
            self.state = CookingState::AtStep(index - 1);
            voice.say(&self.steps[index - 1].text);
        }
    }

    /// Re-narrate the current step without moving.
    pub fn repeat(&self, voice: &dyn Speak) {
        if let Some(step) = self.current_step() {
            voice.say(&step.text);
        }
    }
}
