mod email;
mod id;
mod name;

pub use self::{email::*, id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct User {
    id: UserId,
    name: UserName,
    email: UserEmail,
}

impl User {
    pub fn new(id: UserId, name: UserName, email: UserEmail) -> Self {
        Self { id, name, email }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{User, UserEmail, UserId, UserName};
    use crate::KernelError;

    #[test]
    fn fields_are_trimmed() -> error_stack::Result<(), KernelError> {
        let user = User::new(
            UserId::new(" U001\n")?,
            UserName::new(" Carlos ")?,
            UserEmail::new("carlos@example.com ")?,
        );
        assert_eq!(user.id(), &UserId::new("U001")?);
        assert_eq!(String::from(user.name().clone()), "Carlos");
        assert_eq!(String::from(user.email().clone()), "carlos@example.com");
        Ok(())
    }

    #[test]
    fn email_requires_at_sign() {
        let missing = UserEmail::new("carlos.example.com").unwrap_err();
        assert_eq!(missing.current_context(), &KernelError::Validation);
        let blank = UserEmail::new("  ").unwrap_err();
        assert_eq!(blank.current_context(), &KernelError::Validation);
    }

    #[test]
    fn blank_identity_or_name_is_rejected() {
        assert_eq!(
            UserId::new("").unwrap_err().current_context(),
            &KernelError::Validation
        );
        assert_eq!(
            UserName::new(" ").unwrap_err().current_context(),
            &KernelError::Validation
        );
    }
}
