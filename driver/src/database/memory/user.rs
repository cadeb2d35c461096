use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::MemoryStore;

pub struct MemoryUserRepository;

impl UserQuery<MemoryStore> for MemoryUserRepository {
    fn find_by_id(
        &self,
        con: &mut MemoryStore,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.users.get(id).cloned())
    }

    fn find_all(&self, con: &mut MemoryStore) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con.users.values().cloned().collect())
    }
}

impl UserModifier<MemoryStore> for MemoryUserRepository {
    fn create(&self, con: &mut MemoryStore, user: &User) -> error_stack::Result<(), KernelError> {
        con.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    fn delete(
        &self,
        con: &mut MemoryStore,
        user_id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        con.users.remove(user_id);
        Ok(())
    }
}
