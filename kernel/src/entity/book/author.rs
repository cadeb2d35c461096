use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required(author, "author").map(Self)
    }
}
