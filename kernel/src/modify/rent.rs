use crate::entity::{BookId, Rent};
use crate::KernelError;

pub trait RentModifier<Connection>: 'static + Sync + Send {
    fn create(&self, con: &mut Connection, rent: &Rent) -> error_stack::Result<(), KernelError>;
    fn delete(&self, con: &mut Connection, book_id: &BookId)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentModifier<Connection>: 'static + Sync + Send {
    type RentModifier: RentModifier<Connection>;
    fn rent_modifier(&self) -> &Self::RentModifier;
}
