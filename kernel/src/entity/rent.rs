mod rented_at;

pub use self::rented_at::*;
use destructure::Destructure;
use vodca::References;

use crate::entity::{BookId, UserId};

/// An active loan: `book_id` is held by `user_id` since `rented_at`.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rent {
    book_id: BookId,
    user_id: UserId,
    rented_at: RentedAt,
}

impl Rent {
    pub fn new(book_id: BookId, user_id: UserId, rented_at: RentedAt) -> Self {
        Self {
            book_id,
            user_id,
            rented_at,
        }
    }
}
