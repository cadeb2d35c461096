use crate::entity::{User, UserId};
use crate::KernelError;

pub trait UserQuery<Connection>: Sync + Send + 'static {
    fn find_by_id(
        &self,
        con: &mut Connection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError>;

    /// Every user, ordered by id.
    fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<User>, KernelError>;
}

pub trait DependOnUserQuery<Connection>: Sync + Send + 'static {
    type UserQuery: UserQuery<Connection>;
    fn user_query(&self) -> &Self::UserQuery;
}
