use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::modules::entertainers::adapters::outbound::entertainer_store::EntertainerStore;
use crate::modules::entertainers::core::entertainer::{Entertainer, EntertainerInput};
use crate::modules::entertainers::use_cases::errors::ApplicationError;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct CreateEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    store: Arc<TStore>,
    today: fn() -> NaiveDate,
}

impl<TStore> CreateEntertainerHandler<TStore>
where
    TStore: EntertainerStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            today: local_today,
        }
    }

    /// Replaces the clock used to stamp `date_entered`.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub async fn handle(&self, input: EntertainerInput) -> Result<Entertainer, ApplicationError> {
        let new = input.into_new_entertainer((self.today)())?;
        let stored = self.store.insert(new).await?;
        tracing::info!(entertainer_id = stored.id, "entertainer created");
        Ok(stored)
    }
}
