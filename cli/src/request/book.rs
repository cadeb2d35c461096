use application::transfer::{CreateBookDto, DeleteBookDto, SearchBookDto};

use crate::controller::{Intake, TryIntake};
use crate::error::InputError;

#[derive(Debug)]
pub struct CreateBookRequest {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    pub id: String,
}

#[derive(Debug)]
pub struct SearchBookRequest {
    pub title: String,
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = InputError;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        let year = input
            .year
            .trim()
            .parse::<i32>()
            .map_err(|_| InputError::NotANumber {
                field: "year",
                value: input.year.clone(),
            })?;
        Ok(CreateBookDto {
            id: input.id,
            title: input.title,
            author: input.author,
            year,
            genre: input.genre,
        })
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<SearchBookRequest> for BookTransformer {
    type To = SearchBookDto;
    fn emit(&self, input: SearchBookRequest) -> Self::To {
        SearchBookDto { title: input.title }
    }
}

#[cfg(test)]
mod test {
    use crate::controller::TryIntake;
    use crate::error::InputError;
    use crate::request::{BookTransformer, CreateBookRequest};

    fn request(year: &str) -> CreateBookRequest {
        CreateBookRequest {
            id: "B001".to_string(),
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            year: year.to_string(),
            genre: "Software".to_string(),
        }
    }

    #[test]
    fn year_is_parsed() {
        let dto = BookTransformer.emit(request(" 2008 ")).unwrap();
        assert_eq!(dto.year, 2008);
        assert_eq!(dto.id, "B001");
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let error = BookTransformer.emit(request("two thousand")).unwrap_err();
        assert!(matches!(
            error,
            InputError::NotANumber { field: "year", ref value } if value == "two thousand"
        ));
    }
}
