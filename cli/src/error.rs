use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::{AttachmentKind, FrameKind, Report};
use kernel::{ConflictKind, KernelError};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Malformed raw input, rejected before reaching the library.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("unknown option {0:?}")]
    UnknownOption(String),
}

/// Failures of the shell itself. Library errors never end up here.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to talk to the terminal")]
    Io(#[from] std::io::Error),
    #[error("input ended in the middle of a command")]
    EndOfInput,
}

/// The user-facing text for a failed command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ErrorMessage(String);

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<InputError> for ErrorMessage {
    fn from(e: InputError) -> Self {
        ErrorMessage(format!("invalid input: {e}"))
    }
}

impl From<Report<KernelError>> for ErrorMessage {
    fn from(e: Report<KernelError>) -> Self {
        tracing::debug!("{e:?}");
        let headline = match e.current_context() {
            KernelError::Validation => "invalid data",
            KernelError::AlreadyExists => "already exists",
            KernelError::NotFound => "does not exist",
            KernelError::Conflict(ConflictKind::OnLoan) => "cannot remove a book that is on loan",
            KernelError::Conflict(ConflictKind::HasActiveLoans) => {
                "cannot remove a user who still has borrowed books"
            }
            KernelError::AlreadyBorrowed => "the book is already borrowed",
            KernelError::NotBorrowed => "the book is not borrowed",
            KernelError::Internal => "internal error",
        };
        match detail(&e) {
            Some(detail) => ErrorMessage(format!("{headline} ({detail})")),
            None => ErrorMessage(headline.to_string()),
        }
    }
}

/// The most recent printable attachment, which names the offending entity.
fn detail(report: &Report<KernelError>) -> Option<String> {
    report.frames().find_map(|frame| match frame.kind() {
        FrameKind::Attachment(AttachmentKind::Printable(attachment)) => {
            Some(attachment.to_string())
        }
        _ => None,
    })
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use kernel::{ConflictKind, KernelError};

    use crate::error::{ErrorMessage, InputError};

    #[test]
    fn every_error_kind_has_its_own_message() {
        let kinds = [
            KernelError::Validation,
            KernelError::AlreadyExists,
            KernelError::NotFound,
            KernelError::Conflict(ConflictKind::OnLoan),
            KernelError::Conflict(ConflictKind::HasActiveLoans),
            KernelError::AlreadyBorrowed,
            KernelError::NotBorrowed,
            KernelError::Internal,
        ];
        let mut messages = kinds
            .into_iter()
            .map(|kind| ErrorMessage::from(Report::new(kind)).to_string())
            .collect::<Vec<_>>();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), kinds.len());
    }

    #[test]
    fn attachment_is_shown_as_detail() {
        let report = Report::new(KernelError::NotFound).attach_printable("book B404");
        assert_eq!(
            ErrorMessage::from(report).to_string(),
            "does not exist (book B404)"
        );

        let input = InputError::NotANumber {
            field: "year",
            value: "abc".to_string(),
        };
        assert_eq!(
            ErrorMessage::from(input).to_string(),
            "invalid input: year must be a whole number, got \"abc\""
        );
    }
}
