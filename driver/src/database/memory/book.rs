use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::MemoryStore;

pub struct MemoryBookRepository;

impl BookQuery<MemoryStore> for MemoryBookRepository {
    fn find_by_id(
        &self,
        con: &mut MemoryStore,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.books.get(id).cloned())
    }

    fn find_by_title(
        &self,
        con: &mut MemoryStore,
        query: &str,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let mut found = con
            .books
            .values()
            .filter(|book| book.title().matches(query))
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by(|a, b| a.title().cmp(b.title()).then_with(|| a.id().cmp(b.id())));
        Ok(found)
    }

    fn find_all(&self, con: &mut MemoryStore) -> error_stack::Result<Vec<Book>, KernelError> {
        Ok(con.books.values().cloned().collect())
    }
}

impl BookModifier<MemoryStore> for MemoryBookRepository {
    fn create(&self, con: &mut MemoryStore, book: &Book) -> error_stack::Result<(), KernelError> {
        con.books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    fn update(&self, con: &mut MemoryStore, book: &Book) -> error_stack::Result<(), KernelError> {
        con.books.insert(book.id().clone(), book.clone());
        Ok(())
    }

    fn delete(
        &self,
        con: &mut MemoryStore,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.books.remove(book_id);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle, BookYear};
    use kernel::KernelError;

    use crate::database::{MemoryBookRepository, MemoryStore};

    fn book(id: &str, title: &str) -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            BookId::new(id)?,
            BookTitle::new(title)?,
            BookAuthor::new("anonymous")?,
            BookYear::new(2000)?,
            BookGenre::new(""),
        ))
    }

    #[test]
    fn listing_is_ordered_by_id() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        for (id, title) in [("B003", "a"), ("B001", "c"), ("B002", "b")] {
            MemoryBookRepository.create(&mut con, &book(id, title)?)?;
        }
        let ids = MemoryBookRepository
            .find_all(&mut con)?
            .into_iter()
            .map(|book| String::from(book.id().clone()))
            .collect::<Vec<_>>();
        assert_eq!(ids, ["B001", "B002", "B003"]);
        Ok(())
    }

    #[test]
    fn title_search_is_ordered_by_title() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        MemoryBookRepository.create(&mut con, &book("B001", "The Go Programming Language")?)?;
        MemoryBookRepository.create(&mut con, &book("B002", "Clean Code")?)?;
        MemoryBookRepository.create(&mut con, &book("B003", "Clean Architecture")?)?;

        let titles = MemoryBookRepository
            .find_by_title(&mut con, "CLEAN")?
            .into_iter()
            .map(|book| String::from(book.title().clone()))
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Clean Architecture", "Clean Code"]);

        assert_eq!(MemoryBookRepository.find_by_title(&mut con, "")?.len(), 3);
        assert!(MemoryBookRepository.find_by_title(&mut con, "rust")?.is_empty());
        Ok(())
    }

    #[test]
    fn equal_titles_are_ordered_by_id() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        MemoryBookRepository.create(&mut con, &book("B002", "Clean Code")?)?;
        MemoryBookRepository.create(&mut con, &book("B001", "Clean Code")?)?;
        MemoryBookRepository.create(&mut con, &book("B000", "Refactoring")?)?;

        let ids = MemoryBookRepository
            .find_by_title(&mut con, "clean")?
            .into_iter()
            .map(|book| String::from(book.id().clone()))
            .collect::<Vec<_>>();
        assert_eq!(ids, ["B001", "B002"]);
        Ok(())
    }

    #[test]
    fn delete_removes_the_entry() -> error_stack::Result<(), KernelError> {
        let mut con = MemoryStore::default();
        let id = BookId::new("B001")?;
        MemoryBookRepository.create(&mut con, &book("B001", "Clean Code")?)?;
        MemoryBookRepository.delete(&mut con, &id)?;
        assert!(MemoryBookRepository.find_by_id(&mut con, &id)?.is_none());
        Ok(())
    }
}
