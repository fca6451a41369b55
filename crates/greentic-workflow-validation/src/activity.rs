use crate::descriptor::{self, ActivityDescriptor};
use crate::outcome::{ExecutionResult, Outcome, POSSIBLE_OUTCOMES};
use crate::rule::RequiredWhenChecked;
use crate::sink::ErrorSink;
use crate::submission::Submission;

/// Inputs the host hands to an activity for one execution.
pub struct ActivityContext<'a> {
    pub submission: Option<&'a Submission>,
    pub model_state: &'a mut dyn ErrorSink,
}

impl<'a> ActivityContext<'a> {
    pub fn new(submission: Option<&'a Submission>, model_state: &'a mut dyn ErrorSink) -> Self {
        Self {
            submission,
            model_state,
        }
    }
}

/// A node the workflow engine can wire into a graph and execute.
pub trait TaskActivity: Send + Sync {
    fn name(&self) -> &'static str;

    fn descriptor(&self) -> ActivityDescriptor;

    /// Exit edges the host must wire before anything runs.
    fn possible_outcomes(&self) -> Vec<Outcome>;

    fn execute(&self, ctx: &mut ActivityContext<'_>) -> ExecutionResult;
}

impl TaskActivity for RequiredWhenChecked {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn descriptor(&self) -> ActivityDescriptor {
        descriptor::required_when_checked()
    }

    fn possible_outcomes(&self) -> Vec<Outcome> {
        POSSIBLE_OUTCOMES.to_vec()
    }

    fn execute(&self, ctx: &mut ActivityContext<'_>) -> ExecutionResult {
        self.evaluate(ctx.submission, &mut *ctx.model_state)
    }
}
