use application::transfer::{CreateUserDto, DeleteUserDto, GetRentFromUserIdDto};

use crate::controller::Intake;

#[derive(Debug)]
pub struct CreateUserRequest {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct DeleteUserRequest {
    pub id: String,
}

#[derive(Debug)]
pub struct GetRentsRequest {
    pub id: String,
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, CreateUserRequest { id, name, email }: CreateUserRequest) -> Self::To {
        CreateUserDto { id, name, email }
    }
}

impl Intake<DeleteUserRequest> for UserTransformer {
    type To = DeleteUserDto;
    fn emit(&self, input: DeleteUserRequest) -> Self::To {
        DeleteUserDto { id: input.id }
    }
}

impl Intake<GetRentsRequest> for UserTransformer {
    type To = GetRentFromUserIdDto;
    fn emit(&self, input: GetRentsRequest) -> Self::To {
        GetRentFromUserIdDto { user_id: input.id }
    }
}
