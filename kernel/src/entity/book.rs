mod author;
mod genre;
mod id;
mod status;
mod title;
mod year;

pub use self::{author::*, genre::*, id::*, status::*, title::*, year::*};
use crate::entity::UserId;
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    year: BookYear,
    genre: BookGenre,
    status: BookStatus,
}

impl Book {
    /// A freshly registered book is always available.
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        year: BookYear,
        genre: BookGenre,
    ) -> Self {
        Self {
            id,
            title,
            author,
            year,
            genre,
            status: BookStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    pub fn borrowed_by(&self) -> Option<&UserId> {
        self.status.borrowed_by()
    }

    /// `Available -> OnLoan(user_id)`.
    pub fn borrow_to(&mut self, user_id: UserId) -> error_stack::Result<(), KernelError> {
        if let BookStatus::OnLoan(holder) = &self.status {
            return Err(Report::new(KernelError::AlreadyBorrowed)
                .attach_printable(format!("book {} is borrowed by user {holder}", self.id)));
        }
        self.substitute(|book| *book.status = BookStatus::OnLoan(user_id));
        Ok(())
    }

    /// `OnLoan(user_id) -> Available`, handing back the former borrower.
    pub fn return_back(&mut self) -> error_stack::Result<UserId, KernelError> {
        let BookStatus::OnLoan(borrower) = self.status.clone() else {
            return Err(Report::new(KernelError::NotBorrowed)
                .attach_printable(format!("book {} is not borrowed", self.id)));
        };
        self.substitute(|book| *book.status = BookStatus::Available);
        Ok(borrower)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Book, BookAuthor, BookGenre, BookId, BookTitle, BookYear, UserId};
    use crate::KernelError;

    fn clean_code() -> error_stack::Result<Book, KernelError> {
        Ok(Book::new(
            BookId::new(" B001 ")?,
            BookTitle::new("Clean Code")?,
            BookAuthor::new("Robert C. Martin")?,
            BookYear::new(2008)?,
            BookGenre::new("Software"),
        ))
    }

    #[test]
    fn new_book_is_available() -> error_stack::Result<(), KernelError> {
        let book = clean_code()?;
        assert_eq!(book.id(), &BookId::new("B001")?);
        assert!(book.is_available());
        assert!(book.borrowed_by().is_none());
        Ok(())
    }

    #[test]
    fn construction_rejects_blank_fields() {
        let id = BookId::new("   ").unwrap_err();
        assert_eq!(id.current_context(), &KernelError::Validation);
        let title = BookTitle::new("").unwrap_err();
        assert_eq!(title.current_context(), &KernelError::Validation);
        let author = BookAuthor::new("\t").unwrap_err();
        assert_eq!(author.current_context(), &KernelError::Validation);
        let year = BookYear::new(-1).unwrap_err();
        assert_eq!(year.current_context(), &KernelError::Validation);
        assert!(BookYear::new(0).is_ok());
        assert_eq!(BookGenre::new("  "), BookGenre::default());
    }

    #[test]
    fn borrow_and_return_cycle() -> error_stack::Result<(), KernelError> {
        let mut book = clean_code()?;
        let user = UserId::new("U001")?;

        book.borrow_to(user.clone())?;
        assert!(!book.is_available());
        assert_eq!(book.borrowed_by(), Some(&user));

        let second = book.borrow_to(UserId::new("U002")?).unwrap_err();
        assert_eq!(second.current_context(), &KernelError::AlreadyBorrowed);
        assert_eq!(book.borrowed_by(), Some(&user));

        assert_eq!(book.return_back()?, user);
        assert!(book.is_available());

        let again = book.return_back().unwrap_err();
        assert_eq!(again.current_context(), &KernelError::NotBorrowed);

        let next = UserId::new("U002")?;
        book.borrow_to(next.clone())?;
        assert_eq!(book.borrowed_by(), Some(&next));
        Ok(())
    }

    #[test]
    fn title_matching_ignores_case() -> error_stack::Result<(), KernelError> {
        let title = BookTitle::new("Clean Code")?;
        assert!(title.matches("clean"));
        assert!(title.matches(" CODE "));
        assert!(title.matches(""));
        assert!(!title.matches("go"));
        Ok(())
    }
}
