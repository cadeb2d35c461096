use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnRentQuery, DependOnUserQuery, RentQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserEmail, UserId, UserName};
use kernel::{ConflictKind, KernelError};

use crate::transfer::{CreateUserDto, DeleteUserDto, GetUserDto, UserDto};

pub trait GetUserService<Connection>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let id = UserId::new(dto.id)?;

        let mut connection = self.database_connection().transact()?;

        let user = self.user_query().find_by_id(&mut connection, &id)?;

        Ok(user.map(UserDto::from))
    }

    fn list_users(&self) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact()?;

        let users = self.user_query().find_all(&mut connection)?;
        tracing::debug!(count = users.len(), "listed users");

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<Connection, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

pub trait CreateUserService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    fn add_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let user = User::new(
            UserId::new(dto.id)?,
            UserName::new(dto.name)?,
            UserEmail::new(dto.email)?,
        );

        let mut connection = self.database_connection().transact()?;

        if self
            .user_query()
            .find_by_id(&mut connection, user.id())?
            .is_some()
        {
            tracing::warn!(user_id = %user.id(), "rejected duplicate user");
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable(format!("user {}", user.id())));
        }
        self.user_modifier().create(&mut connection, &user)?;
        tracing::info!(user_id = %user.id(), "added user");

        Ok(UserDto::from(user))
    }
}

impl<Connection, T> CreateUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}

pub trait DeleteUserService<Connection>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
    + DependOnRentQuery<Connection>
{
    /// Users holding at least one book cannot be removed.
    fn remove_user(&self, dto: DeleteUserDto) -> error_stack::Result<(), KernelError> {
        let id = UserId::new(dto.id)?;

        let mut connection = self.database_connection().transact()?;

        if self
            .user_query()
            .find_by_id(&mut connection, &id)?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound).attach_printable(format!("user {id}")));
        }
        let rents = self.rent_query().find_by_user_id(&mut connection, &id)?;
        if !rents.is_empty() {
            tracing::warn!(
                user_id = %id,
                loans = rents.len(),
                "rejected removal of borrowing user"
            );
            return Err(
                Report::new(KernelError::Conflict(ConflictKind::HasActiveLoans))
                    .attach_printable(format!("user {id} holds {} book(s)", rents.len())),
            );
        }
        self.user_modifier().delete(&mut connection, &id)?;
        tracing::info!(user_id = %id, "removed user");

        Ok(())
    }
}

impl<Connection, T> DeleteUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
        + DependOnRentQuery<Connection>
{
}
