use crate::service::{
    CreateBookService, CreateUserService, DeleteBookService, DeleteUserService, GetBookService,
    GetRentService, GetUserService, RentService, ReturnService,
};

/// The complete operation surface of a library: every book, user and loan service at once.
///
/// Any database that provides the query and modifier dependencies gets this for free,
/// so callers such as the text shell only need a `LibraryManager` bound.
pub trait LibraryManager<Connection>:
    GetBookService<Connection>
    + CreateBookService<Connection>
    + DeleteBookService<Connection>
    + GetUserService<Connection>
    + CreateUserService<Connection>
    + DeleteUserService<Connection>
    + GetRentService<Connection>
    + RentService<Connection>
    + ReturnService<Connection>
{
}

impl<Connection, T> LibraryManager<Connection> for T where
    T: GetBookService<Connection>
        + CreateBookService<Connection>
        + DeleteBookService<Connection>
        + GetUserService<Connection>
        + CreateUserService<Connection>
        + DeleteUserService<Connection>
        + GetRentService<Connection>
        + RentService<Connection>
        + ReturnService<Connection>
{
}

#[cfg(test)]
mod test {
    use driver::database::{MemoryDatabase, MemoryStore};
    use kernel::{ConflictKind, KernelError};

    use crate::service::LibraryManager;
    use crate::transfer::{
        CreateBookDto, CreateRentDto, CreateUserDto, DeleteUserDto, GetBookDto, ReturnRentDto,
    };

    fn lend_and_release<C, M: LibraryManager<C>>(
        library: &M,
    ) -> error_stack::Result<(), KernelError> {
        library.add_user(CreateUserDto {
            id: "U001".to_string(),
            name: "Carlos".to_string(),
            email: "carlos@example.com".to_string(),
        })?;
        let book = library.add_book(CreateBookDto {
            id: "B001".to_string(),
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            year: 2008,
            genre: "Software".to_string(),
        })?;
        assert!(book.available);

        library.borrow_book(CreateRentDto {
            book_id: "B001".to_string(),
            user_id: "U001".to_string(),
        })?;
        let lent = library
            .get_book(GetBookDto {
                id: "B001".to_string(),
            })?
            .ok_or_else(|| error_stack::Report::new(KernelError::NotFound))?;
        assert!(!lent.available);
        assert_eq!(lent.borrowed_by.as_deref(), Some("U001"));

        let blocked = library
            .remove_user(DeleteUserDto {
                id: "U001".to_string(),
            })
            .unwrap_err();
        assert_eq!(
            blocked.current_context(),
            &KernelError::Conflict(ConflictKind::HasActiveLoans)
        );

        library.return_book(ReturnRentDto {
            book_id: "B001".to_string(),
        })?;
        library.remove_user(DeleteUserDto {
            id: "U001".to_string(),
        })?;
        assert!(library.list_users()?.is_empty());
        assert!(library.list_books()?[0].available);
        Ok(())
    }

    #[test]
    fn loan_scenario_through_the_manager() -> error_stack::Result<(), KernelError> {
        lend_and_release::<MemoryStore, _>(&MemoryDatabase::new())
    }
}
