use std::sync::Arc;

use crate::modules::entertainers::adapters::outbound::entertainer_store::EntertainerStore;
use crate::modules::entertainers::core::entertainer::{EntertainerId, EntertainerInput};
use crate::modules::entertainers::use_cases::errors::ApplicationError;

pub struct UpdateEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates, then writes. A failed write is followed by an existence check:
    /// a vanished record is `NotFound`, anything else keeps the store error.
    pub async fn handle(
        &self,
        id: EntertainerId,
        input: EntertainerInput,
    ) -> Result<(), ApplicationError> {
        let update = input.into_update(id)?;

        match self.store.update(&update).await {
            Ok(()) => {
                tracing::info!(entertainer_id = id, "entertainer updated");
                Ok(())
            }
            Err(error) => match self.store.exists(id).await {
                Ok(false) => {
                    tracing::warn!(entertainer_id = id, "update target does not exist");
                    Err(ApplicationError::NotFound(id))
                }
                _ => Err(error.into()),
            },
        }
    }
}
