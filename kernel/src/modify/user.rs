use crate::entity::{User, UserId};
use crate::KernelError;

pub trait UserModifier<Connection>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, user: &User) -> error_stack::Result<(), KernelError>;
    fn delete(&self, con: &mut Connection, user_id: &UserId)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier<Connection>: 'static + Sync + Send {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
