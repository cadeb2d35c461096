use application::transfer::BookDto;

use crate::controller::Exhaust;

/// `[B001] Clean Code - Robert C. Martin (2008) | Genre: Software | Available`
pub fn book_line(book: &BookDto) -> String {
    let status = match &book.borrowed_by {
        None => "Available".to_string(),
        Some(user_id) => format!("On loan (User: {user_id})"),
    };
    format!(
        "[{}] {} - {} ({}) | Genre: {} | {}",
        book.id, book.title, book.author, book.year, book.genre, status
    )
}

pub struct BookPresenter;

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = String;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        if input.is_empty() {
            return "No books registered.".to_string();
        }
        let mut lines = vec!["--- BOOKS ---".to_string()];
        lines.extend(input.iter().map(book_line));
        lines.join("\n")
    }
}

impl Exhaust<BookDto> for BookPresenter {
    type To = String;
    fn emit(&self, input: BookDto) -> Self::To {
        format!("Book added: {}", book_line(&input))
    }
}

impl Exhaust<()> for BookPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "Book removed.".to_string()
    }
}

pub struct SearchPresenter;

impl Exhaust<Vec<BookDto>> for SearchPresenter {
    type To = String;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        if input.is_empty() {
            return "No books found.".to_string();
        }
        input.iter().map(book_line).collect::<Vec<_>>().join("\n")
    }
}
