use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle, BookYear};
use kernel::{ConflictKind, KernelError};

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, GetBookDto, SearchBookDto};

pub trait GetBookService<Connection>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id)?;

        let mut connection = self.database_connection().transact()?;

        let book = self.book_query().find_by_id(&mut connection, &id)?;

        Ok(book.map(BookDto::from))
    }

    fn list_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let books = self.book_query().find_all(&mut connection)?;
        tracing::debug!(count = books.len(), "listed books");

        Ok(books.into_iter().map(BookDto::from).collect())
    }

    fn find_books_by_title(
        &self,
        dto: SearchBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let books = self
            .book_query()
            .find_by_title(&mut connection, &dto.title)?;
        tracing::debug!(query = %dto.title, count = books.len(), "searched books by title");

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

pub trait CreateBookService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    fn add_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = Book::new(
            BookId::new(dto.id)?,
            BookTitle::new(dto.title)?,
            BookAuthor::new(dto.author)?,
            BookYear::new(dto.year)?,
            BookGenre::new(dto.genre),
        );

        let mut connection = self.database_connection().transact()?;

        if self
            .book_query()
            .find_by_id(&mut connection, book.id())?
            .is_some()
        {
            tracing::warn!(book_id = %book.id(), "rejected duplicate book");
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("book {}", book.id())));
        }
        self.book_modifier().create(&mut connection, &book)?;
        tracing::info!(book_id = %book.id(), "added book");

        Ok(BookDto::from(book))
    }
}

impl<Connection, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

pub trait DeleteBookService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    fn remove_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let id = BookId::new(dto.id)?;

        let mut connection = self.database_connection().transact()?;

        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("book {id}"))
            })?;
        if let Some(holder) = book.borrowed_by() {
            tracing::warn!(book_id = %id, user_id = %holder, "rejected removal of lent book");
            return Err(
                Report::new(KernelError::Conflict(ConflictKind::OnLoan)).attach_printable(
                    format!("book {id} is borrowed by user {holder}"),
                ),
            );
        }
        self.book_modifier().delete(&mut connection, &id)?;
        tracing::info!(book_id = %id, "removed book");

        Ok(())
    }
}

impl<Connection, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}
