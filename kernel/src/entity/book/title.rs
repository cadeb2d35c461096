use vodca::{AsRefln, Fromln};

use crate::entity::common::required;
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        required(title, "title").map(Self)
    }

    /// Case-insensitive substring match. An empty (or blank) query matches every title.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        self.0.to_lowercase().contains(&query)
    }
}
