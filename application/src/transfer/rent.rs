use time::OffsetDateTime;

use kernel::prelude::entity::{DestructRent, Rent};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentDto {
    pub book_id: String,
    pub user_id: String,
    pub rented_at: OffsetDateTime,
}

impl From<Rent> for RentDto {
    fn from(value: Rent) -> Self {
        let DestructRent {
            book_id,
            user_id,
            rented_at,
        } = value.into_destruct();
        Self {
            book_id: book_id.into(),
            user_id: user_id.into(),
            rented_at: rented_at.into(),
        }
    }
}

pub struct GetRentFromUserIdDto {
    pub user_id: String,
}

pub struct CreateRentDto {
    pub book_id: String,
    pub user_id: String,
}

pub struct ReturnRentDto {
    pub book_id: String,
}
