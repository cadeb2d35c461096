use crate::entity::{BookId, Rent, UserId};
use crate::KernelError;

pub trait RentQuery<Connection>: Sync + Send + 'static {
    fn find_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Rent>, KernelError>;

    /// Active loans held by `user_id`, ordered by book id.
    fn find_by_user_id(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError>;
}

pub trait DependOnRentQuery<Connection>: Sync + Send + 'static {
    type RentQuery: RentQuery<Connection>;
    fn rent_query(&self) -> &Self::RentQuery;
}
