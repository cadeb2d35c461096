use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    BookQuery, DependOnBookQuery, DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery,
};
use kernel::interface::update::{
    BookModifier, DependOnBookModifier, DependOnRentModifier, RentModifier,
};
use kernel::prelude::entity::{BookId, Rent, RentedAt, UserId};
use kernel::KernelError;

use crate::transfer::{CreateRentDto, GetRentFromUserIdDto, RentDto, ReturnRentDto};

pub trait GetRentService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnRentQuery<Connection>
{
    fn rents_of_user(
        &self,
        dto: GetRentFromUserIdDto,
    ) -> error_stack::Result<Vec<RentDto>, KernelError> {
        let user_id = UserId::new(dto.user_id)?;

        let mut connection = self.database_connection().transact()?;

        if self
            .user_query()
            .find_by_id(&mut connection, &user_id)?
            .is_none()
        {
            return Err(
                Report::new(KernelError::NotFound).attach_printable(format!("user {user_id}"))
            );
        }
        let rents = self.rent_query().find_by_user_id(&mut connection, &user_id)?;

        Ok(rents.into_iter().map(RentDto::from).collect())
    }
}

impl<Connection, T> GetRentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnRentQuery<Connection>
{
}

pub trait RentService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnUserQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnRentModifier<Connection>
{
    fn borrow_book(&self, dto: CreateRentDto) -> error_stack::Result<RentDto, KernelError> {
        let book_id = BookId::new(dto.book_id)?;
        let user_id = UserId::new(dto.user_id)?;

        let mut connection = self.database_connection().transact()?;

        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("book {book_id}"))
            })?;
        if self
            .user_query()
            .find_by_id(&mut connection, &user_id)?
            .is_none()
        {
            return Err(
                Report::new(KernelError::NotFound).attach_printable(format!("user {user_id}"))
            );
        }

        book.borrow_to(user_id.clone())?;
        let rent = Rent::new(book_id, user_id, RentedAt::now());
        self.book_modifier().update(&mut connection, &book)?;
        self.rent_modifier().create(&mut connection, &rent)?;
        tracing::info!(book_id = %rent.book_id(), user_id = %rent.user_id(), "lent book");

        Ok(RentDto::from(rent))
    }
}

impl<Connection, T> RentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnUserQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentModifier<Connection>
{
}

pub trait ReturnService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnRentModifier<Connection>
{
    fn return_book(&self, dto: ReturnRentDto) -> error_stack::Result<(), KernelError> {
        let book_id = BookId::new(dto.book_id)?;

        let mut connection = self.database_connection().transact()?;

        let mut book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!("book {book_id}"))
            })?;

        let borrower = book.return_back()?;
        self.book_modifier().update(&mut connection, &book)?;
        self.rent_modifier().delete(&mut connection, &book_id)?;
        tracing::info!(book_id = %book_id, user_id = %borrower, "returned book");

        Ok(())
    }
}

impl<Connection, T> ReturnService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnRentModifier<Connection>
{
}
