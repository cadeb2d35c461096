use std::io::{BufRead, Write};

use application::service::{
    CreateBookService, CreateUserService, DeleteBookService, DeleteUserService, GetBookService,
    GetRentService, GetUserService, RentService, ReturnService,
};

use crate::controller::Controller;
use crate::error::{ErrorMessage, ShellError};
use crate::handler::AppModule;
use crate::menu::MenuOption;
use crate::request::{
    BookTransformer, CreateBookRequest, CreateUserRequest, DeleteBookRequest, DeleteUserRequest,
    GetRentsRequest, RentRequest, RentTransformer, ReturnRequest, SearchBookRequest,
    UserTransformer,
};
use crate::response::{BookPresenter, RentPresenter, SearchPresenter, UserPresenter};

/// Menu loop reading commands from `input` and writing results to `output`.
pub struct Shell<R, W> {
    app: AppModule,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(app: AppModule, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    /// Runs until the exit option is chosen or input ends at the menu prompt.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed at the menu prompt");
                return Ok(());
            };
            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(e) => {
                    writeln!(self.output, "Error: {}", ErrorMessage::from(e))?;
                    continue;
                }
            };
            match self.dispatch(option)? {
                Ok(text) => writeln!(self.output, "{text}")?,
                Err(message) => writeln!(self.output, "Error: {message}")?,
            }
            if option == MenuOption::Exit {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(
        &mut self,
        option: MenuOption,
    ) -> Result<Result<String, ErrorMessage>, ShellError> {
        let outcome = match option {
            MenuOption::ListBooks => {
                let library = self.app.library();
                Controller::new((), BookPresenter)
                    .bypass(|| library.list_books())
                    .map_err(ErrorMessage::from)
            }
            MenuOption::AddBook => {
                let request = CreateBookRequest {
                    id: self.prompt("ID")?,
                    title: self.prompt("Title")?,
                    author: self.prompt("Author")?,
                    year: self.prompt("Year")?,
                    genre: self.prompt("Genre")?,
                };
                let library = self.app.library();
                Controller::new(BookTransformer, BookPresenter)
                    .try_intake(request)
                    .map_err(ErrorMessage::from)
                    .and_then(|transformed| {
                        transformed
                            .handle(|dto| library.add_book(dto))
                            .map_err(ErrorMessage::from)
                    })
            }
            MenuOption::RemoveBook => {
                let request = DeleteBookRequest {
                    id: self.prompt("Book ID")?,
                };
                let library = self.app.library();
                Controller::new(BookTransformer, BookPresenter)
                    .intake(request)
                    .handle(|dto| library.remove_book(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::SearchBooks => {
                let request = SearchBookRequest {
                    title: self.prompt("Title contains")?,
                };
                let library = self.app.library();
                Controller::new(BookTransformer, SearchPresenter)
                    .intake(request)
                    .handle(|dto| library.find_books_by_title(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::ListUsers => {
                let library = self.app.library();
                Controller::new((), UserPresenter)
                    .bypass(|| library.list_users())
                    .map_err(ErrorMessage::from)
            }
            MenuOption::AddUser => {
                let request = CreateUserRequest {
                    id: self.prompt("ID")?,
                    name: self.prompt("Name")?,
                    email: self.prompt("Email")?,
                };
                let library = self.app.library();
                Controller::new(UserTransformer, UserPresenter)
                    .intake(request)
                    .handle(|dto| library.add_user(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::RemoveUser => {
                let request = DeleteUserRequest {
                    id: self.prompt("User ID")?,
                };
                let library = self.app.library();
                Controller::new(UserTransformer, UserPresenter)
                    .intake(request)
                    .handle(|dto| library.remove_user(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::BorrowBook => {
                let request = RentRequest {
                    book_id: self.prompt("Book ID")?,
                    user_id: self.prompt("User ID")?,
                };
                let library = self.app.library();
                Controller::new(RentTransformer, RentPresenter)
                    .intake(request)
                    .handle(|dto| library.borrow_book(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::ReturnBook => {
                let request = ReturnRequest {
                    book_id: self.prompt("Book ID")?,
                };
                let library = self.app.library();
                Controller::new(RentTransformer, RentPresenter)
                    .intake(request)
                    .handle(|dto| library.return_book(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::ListLoans => {
                let request = GetRentsRequest {
                    id: self.prompt("User ID")?,
                };
                let library = self.app.library();
                Controller::new(UserTransformer, RentPresenter)
                    .intake(request)
                    .handle(|dto| library.rents_of_user(dto))
                    .map_err(ErrorMessage::from)
            }
            MenuOption::Exit => Ok("Goodbye.".to_string()),
        };
        Ok(outcome)
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== LIBRARY ===")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{:>2}. {}", option.key(), option.label())?;
        }
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()?.ok_or(ShellError::EndOfInput)
    }

    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
