use error_stack::Report;

use crate::KernelError;

/// Trims `value` and rejects it when nothing is left.
pub(in crate::entity) fn required(
    value: impl Into<String>,
    field: &'static str,
) -> error_stack::Result<String, KernelError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
