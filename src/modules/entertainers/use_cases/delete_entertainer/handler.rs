use std::sync::Arc;

use crate::modules::entertainers::adapters::outbound::entertainer_store::EntertainerStore;
use crate::modules::entertainers::core::entertainer::EntertainerId;
use crate::modules::entertainers::use_cases::errors::ApplicationError;

/// Hard delete. Engagements that reference the entertainer are left in place.
pub struct DeleteEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: EntertainerId) -> Result<(), ApplicationError> {
        if !self.store.delete(id).await? {
            return Err(ApplicationError::NotFound(id));
        }
        tracing::info!(entertainer_id = id, "entertainer deleted");
        Ok(())
    }
}
