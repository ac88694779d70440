//! Form field validation.
//!
//! # Responsibility
//! - Check one field value against its declared constraints.
//!
//! # Invariants
//! - Length constraints apply only to text values, bounds only to numbers.
//! - Every declared constraint must pass.

/// Raw value of one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn to_display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Validatable {
    pub value: Option<FieldValue>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(FieldValue::Text(value.into())),
            ..Self::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            value: Some(FieldValue::Number(value)),
            ..Self::default()
        }
    }
}

/// Returns whether `input` satisfies all of its constraints.
///
/// Text length is measured in chars. `NaN` fails any numeric bound.
pub fn validate(input: &Validatable) -> bool {
    let Some(value) = input.value.as_ref() else {
        return !input.required;
    };

    let mut is_valid = true;
    if input.required {
        is_valid &= !value.to_display_string().trim().is_empty();
    }
    if let FieldValue::Text(text) = value {
        let length = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid &= length >= min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid &= length <= max_length;
        }
    }
    if let FieldValue::Number(number) = value {
        if let Some(min) = input.min {
            is_valid &= *number >= min;
        }
        if let Some(max) = input.max {
            is_valid &= *number <= max;
        }
    }
    is_valid
}
