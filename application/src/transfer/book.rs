use kernel::prelude::entity::{Book, BookStatus, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub available: bool,
    pub borrowed_by: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            year,
            genre,
            status,
        } = value.into_destruct();
        let borrowed_by = match status {
            BookStatus::Available => None,
            BookStatus::OnLoan(user_id) => Some(user_id.into()),
        };
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            available: borrowed_by.is_none(),
            borrowed_by,
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct SearchBookDto {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

pub struct DeleteBookDto {
    pub id: String,
}
