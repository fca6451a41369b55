//! Presentation metadata for validation activities. Nothing here takes part in
//! evaluation; hosts use it to label nodes, outcome edges and property editors.

use serde::Serialize;

use crate::config::RuleConfig;
use crate::i18n::{I18nText, Localizer};
use crate::outcome::{Outcome, POSSIBLE_OUTCOMES};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub id: &'static str,
    pub label: I18nText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeDescriptor {
    pub outcome: Outcome,
    pub label: I18nText,
}

/// Static descriptor of an activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityDescriptor {
    pub name: &'static str,
    pub display_text: I18nText,
    pub category: I18nText,
    pub properties: Vec<PropertyDescriptor>,
    pub outcomes: Vec<OutcomeDescriptor>,
}

/// Descriptor with every key resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedDescriptor {
    pub name: String,
    pub locale: String,
    pub display_text: String,
    pub category: String,
    pub properties: Vec<LocalizedLabel>,
    pub outcomes: Vec<LocalizedLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedLabel {
    pub id: String,
    pub label: String,
}

const KEY_PREFIX: &str = "workflow.activity.required_when_checked";

pub fn required_when_checked() -> ActivityDescriptor {
    let property = |id: &'static str| PropertyDescriptor {
        id,
        label: I18nText::new(format!("{KEY_PREFIX}.{id}")),
    };
    ActivityDescriptor {
        name: crate::rule::RequiredWhenChecked::NAME,
        display_text: I18nText::new(format!("{KEY_PREFIX}.display_text")),
        category: I18nText::new("workflow.category.validation"),
        properties: vec![
            property("trigger_field"),
            property("dependent_fields"),
            property("error_message"),
        ],
        outcomes: POSSIBLE_OUTCOMES
            .into_iter()
            .map(|outcome| OutcomeDescriptor {
                outcome,
                label: I18nText::new(outcome.i18n_key()),
            })
            .collect(),
    }
}

/// One-line summary of a bound configuration, e.g. for a graph node caption.
pub fn summary(config: &RuleConfig) -> I18nText {
    I18nText::new(format!("{KEY_PREFIX}.summary"))
        .with_arg("fields", config.dependent_field_names().join(", "))
        .with_arg("trigger", config.trigger_field.clone())
}

impl ActivityDescriptor {
    pub fn localize(&self, localizer: &Localizer) -> LocalizedDescriptor {
        LocalizedDescriptor {
            name: self.name.to_string(),
            locale: localizer.locale().to_string(),
            display_text: localizer.resolve(&self.display_text),
            category: localizer.resolve(&self.category),
            properties: self
                .properties
                .iter()
                .map(|property| LocalizedLabel {
                    id: property.id.to_string(),
                    label: localizer.resolve(&property.label),
                })
                .collect(),
            outcomes: self
                .outcomes
                .iter()
                .map(|outcome| LocalizedLabel {
                    id: outcome.outcome.as_str().to_string(),
                    label: localizer.resolve(&outcome.label),
                })
                .collect(),
        }
    }
}
