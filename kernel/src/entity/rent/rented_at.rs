use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct RentedAt(OffsetDateTime);

impl RentedAt {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}
