use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookYear(i32);

impl BookYear {
    pub fn new(year: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let year = year.into();
        if year < 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("year must not be negative, got {year}")));
        }
        Ok(Self(year))
    }
}
