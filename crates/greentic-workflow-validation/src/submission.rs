use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("submission must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("field '{field}' has unsupported value type {kind}")]
    UnsupportedValue { field: String, kind: &'static str },
    #[error("invalid submission JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One or more submitted values for a single form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    values: Vec<String>,
}

impl FieldValue {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn single(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// String form of the field. Repeated values are joined with `,`; a
    /// field without values reads as the empty string.
    pub fn as_text(&self) -> String {
        self.values.join(",")
    }

    /// True when the string form is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

/// Snapshot of submitted form data, keyed by case-sensitive field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    fields: BTreeMap<String, FieldValue>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Adds a value to the field, keeping any values already submitted.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value);
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// String form of a field, `None` when it was not submitted.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(FieldValue::as_text)
    }

    /// Decodes an `application/x-www-form-urlencoded` body. Repeated keys
    /// accumulate values in submission order.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut submission = Self::new();
        for (name, value) in url::form_urlencoded::parse(body.as_bytes()) {
            submission.append(name.into_owned(), value.into_owned());
        }
        submission
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }

    /// Builds a submission from a JSON object. Scalars become single values,
    /// arrays of scalars become repeated values and `null` means the field was
    /// posted without a value.
    pub fn from_json(value: &Value) -> Result<Self, SubmissionError> {
        let Value::Object(map) = value else {
            return Err(SubmissionError::NotAnObject(json_kind(value)));
        };
        let mut submission = Self::new();
        for (name, raw) in map {
            let values = match raw {
                Value::Array(items) => items
                    .iter()
                    .map(|item| scalar_text(name, item))
                    .collect::<Result<Vec<_>, _>>()?
                    .into_iter()
                    .flatten()
                    .collect(),
                other => scalar_text(name, other)?.into_iter().collect(),
            };
            submission.insert(name.clone(), FieldValue::new(values));
        }
        Ok(submission)
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

fn scalar_text(field: &str, value: &Value) -> Result<Option<String>, SubmissionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        Value::Array(_) | Value::Object(_) => Err(SubmissionError::UnsupportedValue {
            field: field.to_string(),
            kind: json_kind(value),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn repeated_values_join_with_commas() {
        let field = FieldValue::new(vec!["true".into(), "false".into()]);
        assert_eq!(field.as_text(), "true,false");
        assert_eq!(FieldValue::default().as_text(), "");
    }

    #[test]
    fn urlencoded_body_accumulates_repeated_keys() {
        let submission = Submission::from_urlencoded("agree=on&tags=a&tags=b+c&note=%20");
        assert_eq!(submission.text("agree").as_deref(), Some("on"));
        assert_eq!(submission.text("tags").as_deref(), Some("a,b c"));
        assert_eq!(submission.text("note").as_deref(), Some(" "));
        assert_eq!(submission.text("missing"), None);
    }

    #[test]
    fn urlencoded_values_keep_surrounding_whitespace() {
        let submission = Submission::from_urlencoded("reason=x&agree=true ");
        assert_eq!(submission.text("agree").as_deref(), Some("true "));
        let submission = Submission::from_urlencoded("agree=true%20");
        assert_eq!(submission.text("agree").as_deref(), Some("true "));
    }

    #[test]
    fn json_scalars_and_arrays_are_decoded() {
        let submission = Submission::from_json(&json!({
            "agree": true,
            "age": 42,
            "tags": ["x", "y"],
            "empty": null
        }))
        .expect("decode submission");
        assert_eq!(submission.text("agree").as_deref(), Some("true"));
        assert_eq!(submission.text("age").as_deref(), Some("42"));
        assert_eq!(submission.text("tags").as_deref(), Some("x,y"));
        assert!(submission.contains_key("empty"));
        assert_eq!(submission.text("empty").as_deref(), Some(""));
    }

    #[test]
    fn nested_objects_are_rejected() {
        let err = Submission::from_json(&json!({ "address": { "city": "Ghent" } }))
            .expect_err("nested object should fail");
        assert!(matches!(
            err,
            SubmissionError::UnsupportedValue { ref field, kind: "object" } if field == "address"
        ));

        let err = Submission::from_json(&json!(["agree"])).expect_err("array root should fail");
        assert!(matches!(err, SubmissionError::NotAnObject("array")));
    }
}
