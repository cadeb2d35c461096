use kernel::prelude::entity::{DestructUser, User};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser { id, name, email } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

pub struct GetUserDto {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub struct DeleteUserDto {
    pub id: String,
}
