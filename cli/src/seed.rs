use application::service::LibraryManager;
use application::transfer::{CreateBookDto, CreateUserDto};
use kernel::KernelError;

pub fn seed_demo_data<C, M: LibraryManager<C>>(
    library: &M,
) -> error_stack::Result<(), KernelError> {
    for (id, name, email) in [
        ("U001", "Carlos", "carlos@example.com"),
        ("U002", "Ana", "ana@example.com"),
    ] {
        library.add_user(CreateUserDto {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        })?;
    }
    for (id, title, author, year, genre) in [
        ("B001", "Clean Code", "Robert C. Martin", 2008, "Software"),
        (
            "B002",
            "The Go Programming Language",
            "Alan A. A. Donovan",
            2015,
            "Programación",
        ),
    ] {
        library.add_book(CreateBookDto {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
        })?;
    }
    tracing::info!("seeded demo data");
    Ok(())
}
