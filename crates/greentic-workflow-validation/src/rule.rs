use tracing::{debug, trace};

use crate::config::RuleConfig;
use crate::outcome::{ExecutionResult, Outcome, POSSIBLE_OUTCOMES, Verdict};
use crate::sink::ErrorSink;
use crate::submission::Submission;

const CHECKED_VALUES: &[&str] = &["true", "on"];

/// Makes a list of fields mandatory while a checkbox field is checked.
#[derive(Debug, Clone)]
pub struct RequiredWhenChecked {
    config: RuleConfig,
    dependent_fields: Vec<String>,
}

impl RequiredWhenChecked {
    pub const NAME: &'static str = "ValidateRequiredWhenCheckedTask";

    /// Binds the rule to its configuration. The dependent-field list is parsed
    /// once here.
    pub fn new(config: RuleConfig) -> Self {
        let dependent_fields = config.dependent_field_names();
        Self {
            config,
            dependent_fields,
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn dependent_fields(&self) -> &[String] {
        &self.dependent_fields
    }

    pub fn possible_outcomes() -> [Outcome; 3] {
        POSSIBLE_OUTCOMES
    }

    /// Whether the trigger field was posted with a checked value.
    pub fn is_checked(&self, submission: &Submission) -> bool {
        let Some(value) = submission.get(&self.config.trigger_field) else {
            return false;
        };
        let text = value.as_text();
        CHECKED_VALUES
            .iter()
            .any(|checked| text.eq_ignore_ascii_case(checked))
    }

    /// Runs the rule. Every blank dependent field adds one entry to `sink`.
    pub fn evaluate<S>(&self, submission: Option<&Submission>, sink: &mut S) -> ExecutionResult
    where
        S: ErrorSink + ?Sized,
    {
        let Some(submission) = submission else {
            debug!(rule = Self::NAME, "no submission available, skipping validation");
            return ExecutionResult::valid();
        };

        if !self.is_checked(submission) {
            debug!(
                rule = Self::NAME,
                trigger = %self.config.trigger_field,
                "trigger field not checked"
            );
            return ExecutionResult::valid();
        }

        let mut verdict = Verdict::Valid;
        for field in &self.dependent_fields {
            let blank = submission.get(field).is_none_or(|value| value.is_blank());
            trace!(rule = Self::NAME, field = %field, blank, "checked dependent field");
            if !blank {
                continue;
            }
            sink.add_model_error(field, &self.config.error_message);
            verdict = Verdict::Invalid;
        }

        debug!(
            rule = Self::NAME,
            trigger = %self.config.trigger_field,
            ?verdict,
            "required-when-checked evaluated"
        );
        verdict.into()
    }
}
