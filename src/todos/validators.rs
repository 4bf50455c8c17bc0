//! Validation for todo request payloads

use crate::common::{ValidationResult, Validator};

use super::models::{CreateTodoRequest, UpdateTodoRequest};

/// Todo text is short free text; anything longer is rejected
pub const MAX_TEXT_LENGTH: usize = 500;

fn validate_text(result: &mut ValidationResult, text: &str) {
    if text.trim().is_empty() {
        result.add_error("text", "text is required");
    }
    if text.len() > MAX_TEXT_LENGTH {
        result.add_error("text", "text must be at most 500 characters");
    }
}

impl Validator<CreateTodoRequest> for CreateTodoRequest {
    fn validate(&self, data: &CreateTodoRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_text(&mut result, &data.text);
        result
    }
}

impl Validator<UpdateTodoRequest> for UpdateTodoRequest {
    fn validate(&self, data: &UpdateTodoRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        if let Some(text) = &data.text {
            validate_text(&mut result, text);
        }
        result
    }
}
