//! Project input form.
//!
//! # Responsibility
//! - Hold raw field text until submit.
//! - Validate against `InputRules` and create the project through the store.
//!
//! # Invariants
//! - Invalid input leaves fields untouched and never reaches the store.
//! - Valid input clears every field after the project is created.

use crate::config::InputRules;
use crate::model::project::ProjectId;
use crate::state::{lock_or_recover, StateHandle};
use crate::validation::{validate, FieldValue};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submit errors surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidInput,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Invalid input, please try again!"),
        }
    }
}

impl Error for InputError {}

/// Validated submit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// New-project form bound to one store.
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
    rules: InputRules,
    state: StateHandle,
}

impl ProjectInput {
    pub fn new(state: StateHandle) -> Self {
        Self::with_rules(state, InputRules::default())
    }

    pub fn with_rules(state: StateHandle, rules: InputRules) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            people: String::new(),
            rules,
            state,
        }
    }

    /// Replaces all three field values at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Validates the current fields without touching the store.
    pub fn gather_user_input(&self) -> Result<ProjectDraft, InputError> {
        let people = parse_people(&self.people);
        let checks = [
            InputRules::bind(&self.rules.title, FieldValue::Text(self.title.clone())),
            InputRules::bind(
                &self.rules.description,
                FieldValue::Text(self.description.clone()),
            ),
            InputRules::bind(&self.rules.people, FieldValue::Number(people)),
        ];
        if !checks.iter().all(validate) {
            return Err(InputError::InvalidInput);
        }
        // Whole, non-negative head count whatever bounds the rules declare.
        if people.fract() != 0.0 || people < 0.0 || people > f64::from(u32::MAX) {
            return Err(InputError::InvalidInput);
        }

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Creates a project from the current fields, then clears them.
    ///
    /// Must not be called while the store is locked by the caller.
    pub fn submit_handler(&mut self) -> Result<ProjectId, InputError> {
        let draft = match self.gather_user_input() {
            Ok(draft) => draft,
            Err(err) => {
                info!("event=submit module=components status=error reason=invalid_input");
                return Err(err);
            }
        };

        let id = lock_or_recover(&self.state).add_project(
            draft.title,
            draft.description,
            draft.people,
        );
        self.clear_inputs();
        debug!("event=submit module=components status=ok id={id}");
        Ok(id)
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Numeric form-field coercion: blank is zero, junk is NaN.
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::{parse_people, InputError, ProjectInput};
    use crate::state::{lock_or_recover, new_state_handle};
    use std::sync::Arc;

    #[test]
    fn parse_people_coerces_blank_and_junk() {
        assert_eq!(parse_people("  "), 0.0);
        assert_eq!(parse_people(" 3 "), 3.0);
        assert!(parse_people("three").is_nan());
    }

    #[test]
    fn valid_submit_adds_project_and_clears_fields() {
        let state = new_state_handle();
        let mut input = ProjectInput::new(Arc::clone(&state));
        input.fill("Build API", "Backend work", "3");

        let id = input.submit_handler().expect("valid input should submit");
        let guard = lock_or_recover(&state);
        let project = guard.get(id).expect("created project should exist");
        assert_eq!(project.title, "Build API");
        assert_eq!(project.people, 3);
        assert!(input.title.is_empty());
        assert!(input.description.is_empty());
        assert!(input.people.is_empty());
    }

    #[test]
    fn invalid_submit_keeps_fields_and_store_untouched() {
        let state = new_state_handle();
        let mut input = ProjectInput::new(Arc::clone(&state));

        for (title, description, people) in [
            ("", "Backend work", "3"),
            ("Build API", "tiny", "3"),
            ("Build API", "Backend work", "0"),
            ("Build API", "Backend work", "6"),
            ("Build API", "Backend work", "many"),
            ("Build API", "Backend work", "2.5"),
            ("Build API", "Backend work", ""),
        ] {
            input.fill(title, description, people);
            let err = input
                .submit_handler()
                .expect_err("invalid input must be rejected");
            assert_eq!(err, InputError::InvalidInput);
            assert_eq!(err.to_string(), "Invalid input, please try again!");
            assert_eq!(input.people, people);
            assert_eq!(input.description, description);
        }
        assert!(lock_or_recover(&state).is_empty());
    }
}
