use application::transfer::{CreateRentDto, ReturnRentDto};

use crate::controller::Intake;

#[derive(Debug)]
pub struct RentRequest {
    pub book_id: String,
    pub user_id: String,
}

#[derive(Debug)]
pub struct ReturnRequest {
    pub book_id: String,
}

pub struct RentTransformer;

impl Intake<RentRequest> for RentTransformer {
    type To = CreateRentDto;
    fn emit(&self, RentRequest { book_id, user_id }: RentRequest) -> Self::To {
        CreateRentDto { book_id, user_id }
    }
}

impl Intake<ReturnRequest> for RentTransformer {
    type To = ReturnRentDto;
    fn emit(&self, ReturnRequest { book_id }: ReturnRequest) -> Self::To {
        ReturnRentDto { book_id }
    }
}
