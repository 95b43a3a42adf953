//! Conditional dependency rules.
//!
//! A condition targets a single attribute or dataset and fires either when
//! the target is present or when it holds a specific literal value. Each
//! condition carries one or more rules naming the items that become
//! mandatory once the condition fires.

use std::fmt;

use serde::Deserialize;

use crate::item::ItemKind;

/// A literal value appearing in a condition trigger or a required-value rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Int(value) => write!(f, "{value}"),
            Literal::Float(value) => write!(f, "{value}"),
            Literal::Text(value) => write!(f, "{value}"),
        }
    }
}

/// What makes a condition fire.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger<'a> {
    /// The target item exists in the file.
    Present,
    /// The target item holds this value.
    Equals(&'a Literal),
}

/// A required-value constraint inside a rule: the named item must hold the
/// given literal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequiredValue {
    #[serde(rename = "Attribute")]
    pub attribute: Option<String>,
    #[serde(rename = "Dataset")]
    pub dataset: Option<String>,
    #[serde(rename = "Value")]
    pub value: Literal,
}

impl RequiredValue {
    /// Name of the constrained item, whichever kind it is.
    pub fn name(&self) -> Option<&str> {
        self.attribute.as_deref().or(self.dataset.as_deref())
    }
}

/// One consequence of a fired condition.
///
/// The disjunction lists follow the schema convention used everywhere else:
/// each inner list names alternatives of which at least one must be present.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Rule {
    #[serde(rename = "Required_Attributes", default)]
    pub required_attributes: Vec<Vec<String>>,
    #[serde(rename = "Required_Datasets", default)]
    pub required_datasets: Vec<Vec<String>>,
    #[serde(rename = "Required_Value")]
    pub required_value: Option<RequiredValue>,
}

/// A dependency record from the schema's `Dependencies` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    /// Target attribute name. Exactly one of `attribute`/`dataset` is set in
    /// a well-formed record.
    #[serde(rename = "Attribute")]
    pub attribute: Option<String>,
    /// Target dataset name.
    #[serde(rename = "Dataset")]
    pub dataset: Option<String>,
    /// Trigger value; absent means "fires when the target is present".
    #[serde(rename = "Value")]
    pub value: Option<Literal>,
    #[serde(rename = "Rules", default)]
    pub rules: Vec<Rule>,
}

impl Condition {
    /// The condition's target, if the record names one.
    pub fn target(&self) -> Option<(ItemKind, &str)> {
        if let Some(name) = self.attribute.as_deref() {
            Some((ItemKind::Attribute, name))
        } else {
            self.dataset.as_deref().map(|name| (ItemKind::Dataset, name))
        }
    }

    /// Trigger kind derived from the optional literal value.
    pub fn trigger(&self) -> Trigger<'_> {
        match &self.value {
            Some(value) => Trigger::Equals(value),
            None => Trigger::Present,
        }
    }
}
