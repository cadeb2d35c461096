use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    AlreadyExists,
    NotFound,
    Conflict(ConflictKind),
    AlreadyBorrowed,
    NotBorrowed,
    Internal,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConflictKind {
    OnLoan,
    HasActiveLoans,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::AlreadyExists => write!(f, "Entity already exists"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Conflict(kind) => write!(f, "Conflict: {kind}"),
            KernelError::AlreadyBorrowed => write!(f, "Book is already borrowed"),
            KernelError::NotBorrowed => write!(f, "Book is not borrowed"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::OnLoan => write!(f, "book is on loan"),
            ConflictKind::HasActiveLoans => write!(f, "user has active loans"),
        }
    }
}

impl Context for KernelError {}
