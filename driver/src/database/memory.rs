use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnBookQuery, DependOnRentQuery, DependOnUserQuery};
use kernel::interface::update::{
    DependOnBookModifier, DependOnRentModifier, DependOnUserModifier,
};
use kernel::prelude::entity::{Book, BookId, Rent, User, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

pub use self::{book::*, rent::*, user::*};

mod book;
mod rent;
mod user;

/// The owned collections of one library instance.
///
/// Keys always equal the id of the stored entity. `rents` and `rents_by_user`
/// index the same loans from both sides and are only touched together.
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: BTreeMap<BookId, Book>,
    users: BTreeMap<UserId, User>,
    rents: BTreeMap<BookId, Rent>,
    rents_by_user: BTreeMap<UserId, BTreeSet<BookId>>,
}

/// An in-process library database. Every instance is independent.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    store: Mutex<MemoryStore>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatabaseConnection<MemoryStore> for MemoryDatabase {
    type Transaction<'a> = MutexGuard<'a, MemoryStore>;

    fn transact(&self) -> error_stack::Result<Self::Transaction<'_>, KernelError> {
        self.store.lock().convert_error()
    }
}

impl DependOnBookQuery<MemoryStore> for MemoryDatabase {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier<MemoryStore> for MemoryDatabase {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}

impl DependOnUserQuery<MemoryStore> for MemoryDatabase {
    type UserQuery = MemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &MemoryUserRepository
    }
}

impl DependOnUserModifier<MemoryStore> for MemoryDatabase {
    type UserModifier = MemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &MemoryUserRepository
    }
}

impl DependOnRentQuery<MemoryStore> for MemoryDatabase {
    type RentQuery = MemoryRentRepository;
    fn rent_query(&self) -> &Self::RentQuery {
        &MemoryRentRepository
    }
}

impl DependOnRentModifier<MemoryStore> for MemoryDatabase {
    type RentModifier = MemoryRentRepository;
    fn rent_modifier(&self) -> &Self::RentModifier {
        &MemoryRentRepository
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle, BookYear};
    use kernel::KernelError;

    use crate::database::{MemoryBookRepository, MemoryDatabase};

    #[test]
    fn instances_do_not_share_state() -> error_stack::Result<(), KernelError> {
        let first = MemoryDatabase::new();
        let second = MemoryDatabase::new();

        let book = Book::new(
            BookId::new("B001")?,
            BookTitle::new("Clean Code")?,
            BookAuthor::new("Robert C. Martin")?,
            BookYear::new(2008)?,
            BookGenre::new("Software"),
        );
        let mut con = first.transact()?;
        MemoryBookRepository.create(&mut *con, &book)?;
        drop(con);

        let mut con = first.transact()?;
        assert_eq!(MemoryBookRepository.find_all(&mut *con)?, vec![book]);
        let mut con = second.transact()?;
        assert!(MemoryBookRepository.find_all(&mut *con)?.is_empty());
        Ok(())
    }
}
