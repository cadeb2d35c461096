use crate::entity::{Book, BookId};
use crate::KernelError;

pub trait BookQuery<Connection>: Sync + Send + 'static {
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError>;

    /// Books whose title contains `query` ignoring case, ordered by title then id.
    fn find_by_title(
        &self,
        con: &mut Connection,
        query: &str,
    ) -> error_stack::Result<Vec<Book>, KernelError>;

    /// Every book, ordered by id.
    fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery<Connection>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}
