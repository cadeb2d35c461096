use std::ops::DerefMut;

use crate::KernelError;

/// Hands out exclusive access to the underlying store for the duration of one operation.
///
/// Every lookup and mutation of a single service call goes through the same
/// `Transaction`, so cross-entity checks never observe a half-applied change.
pub trait DatabaseConnection<Connection>: 'static + Sync + Send {
    type Transaction<'a>: DerefMut<Target = Connection>
    where
        Self: 'a;
    fn transact(&self) -> error_stack::Result<Self::Transaction<'_>, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

impl<Connection, T> DependOnDatabaseConnection<Connection> for T
where
    T: DatabaseConnection<Connection>,
{
    type DatabaseConnection = T;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self
    }
}
