use application::transfer::RentDto;

use crate::controller::Exhaust;

pub struct RentPresenter;

impl Exhaust<RentDto> for RentPresenter {
    type To = String;
    fn emit(&self, input: RentDto) -> Self::To {
        format!("Book {} lent to user {}.", input.book_id, input.user_id)
    }
}

impl Exhaust<()> for RentPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Book returned.".to_string()
    }
}

impl Exhaust<Vec<RentDto>> for RentPresenter {
    type To = String;
    fn emit(&self, input: Vec<RentDto>) -> Self::To {
        if input.is_empty() {
            return "No books on loan.".to_string();
        }
        input
            .iter()
            .map(|rent| format!("{} (since {})", rent.book_id, rent.rented_at.date()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
