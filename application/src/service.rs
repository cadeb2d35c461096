mod book;
mod library;
mod rent;
mod user;

pub use self::{book::*, library::*, rent::*, user::*};
