use serde::{Deserialize, Serialize};

/// Accumulator for per-field validation errors owned by the host.
pub trait ErrorSink {
    fn add_model_error(&mut self, key: &str, message: &str);
}

/// A single field-level error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelError {
    pub key: String,
    pub message: String,
}

impl ModelError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl ErrorSink for Vec<ModelError> {
    fn add_model_error(&mut self, key: &str, message: &str) {
        self.push(ModelError::new(key, message));
    }
}

/// Ordered model validation state, as consulted when a form is re-rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelState {
    errors: Vec<ModelError>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelError> {
        self.errors.iter()
    }

    pub fn errors_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.errors
            .iter()
            .filter(move |error| error.key == key)
            .map(|error| error.message.as_str())
    }

    pub fn into_errors(self) -> Vec<ModelError> {
        self.errors
    }
}

impl ErrorSink for ModelState {
    fn add_model_error(&mut self, key: &str, message: &str) {
        self.errors.push(ModelError::new(key, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_state_keeps_insertion_order() {
        let mut state = ModelState::new();
        assert!(state.is_valid());
        state.add_model_error("b", "first");
        state.add_model_error("a", "second");
        state.add_model_error("b", "third");
        assert!(!state.is_valid());
        assert_eq!(state.len(), 3);
        assert_eq!(state.errors_for("b").collect::<Vec<_>>(), vec!["first", "third"]);
        let keys: Vec<_> = state.iter().map(|error| error.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "b"]);
    }
}
