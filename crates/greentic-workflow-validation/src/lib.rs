//! Conditional form validation activities for Greentic workflows.
//!
//! The [`RequiredWhenChecked`] rule makes a list of form fields mandatory
//! while a checkbox field is checked. Hosts pass the submitted form (if any)
//! and an [`ErrorSink`], and route on the returned [`ExecutionResult`].

pub mod activity;
pub mod config;
pub mod descriptor;
pub mod i18n;
pub mod outcome;
pub mod rule;
pub mod sink;
pub mod submission;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod cmd;

pub use activity::{ActivityContext, TaskActivity};
pub use config::{ConfigError, RuleConfig, parse_field_list};
pub use descriptor::{ActivityDescriptor, LocalizedDescriptor};
pub use i18n::{I18nText, Localizer};
pub use outcome::{ExecutionResult, Outcome, POSSIBLE_OUTCOMES, Verdict};
pub use rule::RequiredWhenChecked;
pub use sink::{ErrorSink, ModelError, ModelState};
pub use submission::{FieldValue, Submission, SubmissionError};
