use std::sync::Arc;

use crate::modules::entertainers::adapters::outbound::entertainer_store::EntertainerStore;
use crate::modules::entertainers::core::entertainer::{Entertainer, EntertainerId};
use crate::modules::entertainers::use_cases::errors::ApplicationError;

/// Returns the stored record only. Booking statistics are served by the list use case.
pub struct GetEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> GetEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: EntertainerId) -> Result<Entertainer, ApplicationError> {
        self.store
            .get(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))
    }
}
