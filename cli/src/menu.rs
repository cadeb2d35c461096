use std::str::FromStr;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuOption {
    ListBooks,
    AddBook,
    RemoveBook,
    SearchBooks,
    ListUsers,
    AddUser,
    RemoveUser,
    BorrowBook,
    ReturnBook,
    ListLoans,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 11] = [
        MenuOption::ListBooks,
        MenuOption::AddBook,
        MenuOption::RemoveBook,
        MenuOption::SearchBooks,
        MenuOption::ListUsers,
        MenuOption::AddUser,
        MenuOption::RemoveUser,
        MenuOption::BorrowBook,
        MenuOption::ReturnBook,
        MenuOption::ListLoans,
        MenuOption::Exit,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuOption::ListBooks => "1",
            MenuOption::AddBook => "2",
            MenuOption::RemoveBook => "3",
            MenuOption::SearchBooks => "4",
            MenuOption::ListUsers => "5",
            MenuOption::AddUser => "6",
            MenuOption::RemoveUser => "7",
            MenuOption::BorrowBook => "8",
            MenuOption::ReturnBook => "9",
            MenuOption::ListLoans => "10",
            MenuOption::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::ListBooks => "List books",
            MenuOption::AddBook => "Add book",
            MenuOption::RemoveBook => "Remove book",
            MenuOption::SearchBooks => "Search books by title",
            MenuOption::ListUsers => "List users",
            MenuOption::AddUser => "Add user",
            MenuOption::RemoveUser => "Remove user",
            MenuOption::BorrowBook => "Borrow book",
            MenuOption::ReturnBook => "Return book",
            MenuOption::ListLoans => "List loans of a user",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MenuOption::ALL
            .into_iter()
            .find(|option| option.key() == key)
            .ok_or_else(|| InputError::UnknownOption(key.to_string()))
    }
}

#[cfg(test)]
mod test {
    use crate::error::InputError;
    use crate::menu::MenuOption;

    #[test]
    fn keys_are_parsed() {
        assert_eq!(" 10 ".parse::<MenuOption>().ok(), Some(MenuOption::ListLoans));
        assert_eq!("0".parse::<MenuOption>().ok(), Some(MenuOption::Exit));
        assert!(matches!(
            "11".parse::<MenuOption>(),
            Err(InputError::UnknownOption(ref key)) if key == "11"
        ));
    }
}
