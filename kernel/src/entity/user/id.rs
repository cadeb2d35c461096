use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required(id, "user id").map(Self)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
