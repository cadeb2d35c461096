use kernel::interface::query::RentQuery;
use kernel::interface::update::RentModifier;
use kernel::prelude::entity::{BookId, Rent, UserId};
use kernel::KernelError;

use crate::database::MemoryStore;

pub struct MemoryRentRepository;

impl RentQuery<MemoryStore> for MemoryRentRepository {
    fn find_by_book_id(
        &self,
        con: &mut MemoryStore,
        book_id: &BookId,
    ) -> error_stack::Result<Option<Rent>, KernelError> {
        Ok(con.rents.get(book_id).cloned())
    }

    fn find_by_user_id(
        &self,
        con: &mut MemoryStore,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rent>, KernelError> {
        let Some(book_ids) = con.rents_by_user.get(user_id) else {
            return Ok(Vec::new());
        };
        Ok(book_ids
            .iter()
            .filter_map(|book_id| con.rents.get(book_id))
            .cloned()
            .collect())
    }
}

impl RentModifier<MemoryStore> for MemoryRentRepository {
    fn create(&self, con: &mut MemoryStore, rent: &Rent) -> error_stack::Result<(), KernelError> {
        con.rents_by_user
            .entry(rent.user_id().clone())
            .or_default()
            .insert(rent.book_id().clone());
        if let Some(previous) = con.rents.insert(rent.book_id().clone(), rent.clone()) {
            if previous.user_id() != rent.user_id() {
                detach(con, previous.user_id(), previous.book_id());
            }
        }
        Ok(())
    }

    fn delete(
        &self,
        con: &mut MemoryStore,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(rent) = con.rents.remove(book_id) {
            detach(con, rent.user_id(), book_id);
        }
        Ok(())
    }
}

fn detach(con: &mut MemoryStore, user_id: &UserId, book_id: &BookId) {
    if let Some(book_ids) = con.rents_by_user.get_mut(user_id) {
        book_ids.remove(book_id);
        if book_ids.is_empty() {
            con.rents_by_user.remove(user_id);
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::RentQuery;
    use kernel::interface::update::RentModifier;
    use kernel::prelude::entity::{BookId, Rent, RentedAt, UserId};
    use kernel::KernelError;

    use crate::database::{MemoryRentRepository, MemoryStore};

    fn rent(book_id: &str, user_id: &str) -> error_stack::Result<Rent, KernelError> {
        Ok(Rent::new(
            BookId::new(book_id)?,
            UserId::new(user_id)?,
            RentedAt::now(),
        ))
    }

    #[test]
    fn rents_are_indexed_by_book_and_user() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        let user = UserId::new("U001")?;
        MemoryRentRepository.create(&mut con, &rent("B002", "U001")?)?;
        MemoryRentRepository.create(&mut con, &rent("B001", "U001")?)?;
        MemoryRentRepository.create(&mut con, &rent("B003", "U002")?)?;

        let held = MemoryRentRepository
            .find_by_user_id(&mut con, &user)?
            .into_iter()
            .map(|rent| String::from(rent.book_id().clone()))
            .collect::<Vec<_>>();
        assert_eq!(held, ["B001", "B002"]);

        let b3 = MemoryRentRepository.find_by_book_id(&mut con, &BookId::new("B003")?)?;
        assert_eq!(b3.map(|rent| rent.user_id().clone()), Some(UserId::new("U002")?));
        Ok(())
    }

    #[test]
    fn delete_clears_both_indexes() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        let book = BookId::new("B001")?;
        let user = UserId::new("U001")?;
        MemoryRentRepository.create(&mut con, &rent("B001", "U001")?)?;
        MemoryRentRepository.delete(&mut con, &book)?;

        assert!(MemoryRentRepository.find_by_book_id(&mut con, &book)?.is_none());
        assert!(MemoryRentRepository.find_by_user_id(&mut con, &user)?.is_empty());
        assert!(con.rents_by_user.is_empty());
        Ok(())
    }
}
