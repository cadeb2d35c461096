use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required(name, "name").map(Self)
    }
}
