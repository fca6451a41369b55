use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;

use crate::config::RuleConfig;
use crate::i18n::Localizer;
use crate::outcome::Outcome;
use crate::rule::RequiredWhenChecked;
use crate::sink::{ModelError, ModelState};
use crate::submission::Submission;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    /// Rule settings file (.toml or .json)
    #[arg(long, value_name = "rule.toml")]
    pub config: Option<PathBuf>,
    /// Checkbox field that gates the rule
    #[arg(long = "trigger-field", value_name = "FIELD")]
    pub trigger_field: Option<String>,
    /// Comma-separated fields required while the trigger is checked
    #[arg(long = "dependent-fields", value_name = "FIELDS")]
    pub dependent_fields: Option<String>,
    /// Message recorded for every blank dependent field
    #[arg(long = "error-message", value_name = "TEXT")]
    pub error_message: Option<String>,
    /// JSON object with the submitted form fields
    #[arg(long, value_name = "form.json", conflicts_with = "form")]
    pub submission: Option<PathBuf>,
    /// URL-encoded form body, e.g. `agree=on&reason=`
    #[arg(long, value_name = "BODY")]
    pub form: Option<String>,
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Exit with an error when the submission is invalid
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct EvaluateReport {
    pub outcomes: Vec<Outcome>,
    pub errors: Vec<ModelError>,
    pub submission_present: bool,
}

pub fn run(args: EvaluateArgs, localizer: &Localizer) -> Result<()> {
    let strict = args.strict;
    let json = args.json;
    let report = evaluate(&args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_human(&report, localizer));
    }

    if strict && !report.errors.is_empty() {
        bail!(localizer.tr_args(
            "cli.evaluate.strict_failed",
            &[("count", &report.errors.len().to_string())]
        ));
    }
    Ok(())
}

pub fn evaluate(args: &EvaluateArgs) -> Result<EvaluateReport> {
    let config = resolve_config(args)?;
    let submission = load_submission(args)?;
    let rule = RequiredWhenChecked::new(config);
    let mut state = ModelState::new();
    let result = rule.evaluate(submission.as_ref(), &mut state);
    Ok(EvaluateReport {
        outcomes: result.outcomes().to_vec(),
        errors: state.into_errors(),
        submission_present: submission.is_some(),
    })
}

fn resolve_config(args: &EvaluateArgs) -> Result<RuleConfig> {
    let mut config = match &args.config {
        Some(path) => RuleConfig::from_path(path)
            .with_context(|| format!("failed to load rule config {}", path.display()))?,
        None => RuleConfig::default(),
    };
    if let Some(trigger) = &args.trigger_field {
        config.trigger_field = trigger.clone();
    }
    if let Some(fields) = &args.dependent_fields {
        config.dependent_fields = fields.clone();
    }
    if let Some(message) = &args.error_message {
        config.error_message = message.clone();
    }
    Ok(config)
}

fn load_submission(args: &EvaluateArgs) -> Result<Option<Submission>> {
    if let Some(body) = &args.form {
        let body = body.trim_end_matches(['\r', '\n']);
        return Ok(Some(Submission::from_urlencoded(body)));
    }
    let Some(path) = &args.submission else {
        return Ok(None);
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read submission {}", path.display()))?;
    let submission = Submission::from_json_str(&raw)
        .with_context(|| format!("failed to decode submission {}", path.display()))?;
    Ok(Some(submission))
}

fn render_human(report: &EvaluateReport, localizer: &Localizer) -> String {
    let mut out = String::new();
    if !report.submission_present {
        out.push_str(&localizer.tr_key("cli.evaluate.no_submission"));
        out.push('\n');
    }
    let outcomes = report
        .outcomes
        .iter()
        .map(|outcome| localizer.tr_key(outcome.i18n_key()))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&localizer.tr_args("cli.evaluate.outcomes", &[("outcomes", &outcomes)]));
    out.push('\n');
    for error in &report.errors {
        out.push_str(&localizer.tr_args(
            "cli.evaluate.field_error",
            &[("field", &error.key), ("message", &error.message)],
        ));
        out.push('\n');
    }
    out
}
