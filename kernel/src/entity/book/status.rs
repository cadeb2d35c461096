use crate::entity::UserId;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum BookStatus {
    #[default]
    Available,
    OnLoan(UserId),
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    pub fn borrowed_by(&self) -> Option<&UserId> {
        match self {
            Self::Available => None,
            Self::OnLoan(user_id) => Some(user_id),
        }
    }
}
