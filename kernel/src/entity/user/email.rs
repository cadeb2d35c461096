use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(email: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let email = required(email, "email")?;
        if !email.contains('@') {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("email {email:?} must contain '@'")));
        }
        Ok(Self(email))
    }
}
