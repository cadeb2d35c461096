use application::transfer::UserDto;

use crate::controller::Exhaust;

pub fn user_line(user: &UserDto) -> String {
    format!("[{}] {} | {}", user.id, user.name, user.email)
}

pub struct UserPresenter;

impl Exhaust<Vec<UserDto>> for UserPresenter {
    type To = String;
    fn emit(&self, input: Vec<UserDto>) -> Self::To {
        if input.is_empty() {
            return "No users registered.".to_string();
        }
        let mut lines = vec!["--- USERS ---".to_string()];
        lines.extend(input.iter().map(user_line));
        lines.join("\n")
    }
}

impl Exhaust<UserDto> for UserPresenter {
    type To = String;
    fn emit(&self, input: UserDto) -> Self::To {
        format!("User added: {}", user_line(&input))
    }
}

impl Exhaust<()> for UserPresenter {
    type To = String;
    fn emit(&self, _: ()) -> Self::To {
        "User removed.".to_string()
    }
}
