use std::sync::LockResult;

use error_stack::Report;

use kernel::KernelError;

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for LockResult<T> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            tracing::error!("library store is poisoned: {error}");
            Report::new(KernelError::Internal).attach_printable(error.to_string())
        })
    }
}
