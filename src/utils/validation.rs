use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Fields whose failures are reported with their own message instead of the
/// form-wide one.
const OPTIONAL_FIELDS: &[&str] = &["image"];

pub fn validate_payload<T: Validate>(payload: &T, required_message: &str) -> AppResult<()> {
    let err = match payload.validate() {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let fields = err.field_errors();
    log::debug!(
        "Validation failed for fields: {:?}",
        fields.keys().collect::<Vec<_>>()
    );

    if fields.keys().any(|field| !OPTIONAL_FIELDS.contains(field)) {
        return Err(AppError::Validation(required_message.to_string()));
    }

    let details = fields
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::Validation(details))
}
