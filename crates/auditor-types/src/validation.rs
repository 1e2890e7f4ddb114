//! Questionnaire completeness checks.
//!
//! Mirrors the three steps of the assessment form. Validation is advisory:
//! the engine classifies incomplete inputs too, it only loses confidence.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::{AISystemInput, InputFlag};

const MIN_NAME_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 20;
const MIN_PURPOSE_LEN: usize = 10;

/// Result of validating one form step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepValidation {
    pub is_valid: bool,
    /// Field name → message.
    pub errors: BTreeMap<&'static str, String>,
    pub completed_fields: usize,
    pub total_fields: usize,
}

impl StepValidation {
    fn new(total_fields: usize) -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
            completed_fields: 0,
            total_fields,
        }
    }

    fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}

/// Validation of the whole questionnaire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub details: StepValidation,
    pub categories: StepValidation,
    pub context: StepValidation,
    pub is_all_valid: bool,
    pub total_completed: usize,
    pub total_fields: usize,
}

/// Step 1: name, description and intended purpose.
pub fn validate_details(input: &AISystemInput) -> StepValidation {
    let mut step = StepValidation::new(3);

    check_text(&mut step, "name", "Product name", &input.name, MIN_NAME_LEN);
    check_text(
        &mut step,
        "description",
        "Description",
        &input.description,
        MIN_DESCRIPTION_LEN,
    );
    check_text(
        &mut step,
        "intended_purpose",
        "Intended purpose",
        &input.intended_purpose,
        MIN_PURPOSE_LEN,
    );

    step.finish()
}

/// Step 2: domain and at least one category selection.
pub fn validate_categories(input: &AISystemInput) -> StepValidation {
    let mut step = StepValidation::new(2);

    if input.domain.trim().is_empty() {
        step.fail("domain", "Domain selection is required");
    } else {
        step.completed_fields += 1;
    }

    let has_selection = InputFlag::ANNEX_III
        .iter()
        .chain(std::iter::once(&InputFlag::IsGenAi))
        .any(|f| f.get(input));
    if has_selection {
        step.completed_fields += 1;
    } else {
        step.fail(
            "categories",
            "Select at least one category or 'None of the above'",
        );
    }

    step.finish()
}

/// Step 3: optional context. Always valid, only completion is tracked.
pub fn validate_context(input: &AISystemInput) -> StepValidation {
    let mut step = StepValidation::new(5);
    step.completed_fields = [
        input.user_type.is_some(),
        !input.data_types.is_empty(),
        // affects_rights is a plain bool and always answered
        true,
        input.automation_level.is_some(),
        input.output_type.is_some(),
    ]
    .iter()
    .filter(|filled| **filled)
    .count();
    step.finish()
}

/// All three steps. Step 3 never blocks submission.
pub fn validate_all(input: &AISystemInput) -> ValidationReport {
    let details = validate_details(input);
    let categories = validate_categories(input);
    let context = validate_context(input);

    ValidationReport {
        is_all_valid: details.is_valid && categories.is_valid,
        total_completed: details.completed_fields
            + categories.completed_fields
            + context.completed_fields,
        total_fields: details.total_fields + categories.total_fields + context.total_fields,
        details,
        categories,
        context,
    }
}

fn check_text(
    step: &mut StepValidation,
    field: &'static str,
    label: &str,
    value: &str,
    min_len: usize,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        step.fail(field, format!("{} is required", label));
    } else if trimmed.chars().count() < min_len {
        step.fail(
            field,
            format!("{} must be at least {} characters", label, min_len),
        );
    } else {
        step.completed_fields += 1;
    }
}

/// How much of the context that supports a classification is filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContextCompleteness {
    pub present: usize,
    pub total: usize,
}

impl ContextCompleteness {
    /// Counts `domain`, `description`, `intended_purpose`, `user_type`,
    /// `data_types`, `automation_level` and `output_type`.
    pub fn of(input: &AISystemInput) -> Self {
        let fields = [
            !input.domain.trim().is_empty(),
            !input.description.trim().is_empty(),
            !input.intended_purpose.trim().is_empty(),
            input.user_type.is_some(),
            !input.data_types.is_empty(),
            input.automation_level.is_some(),
            input.output_type.is_some(),
        ];
        Self {
            present: fields.iter().filter(|f| **f).count(),
            total: fields.len(),
        }
    }

    /// Share of present fields in [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.present as f64 / self.total as f64
    }

    pub fn missing(&self) -> usize {
        self.total - self.present
    }
}
