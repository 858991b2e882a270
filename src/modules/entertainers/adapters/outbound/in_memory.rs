// In memory implementation of the entertainer store and summary query ports.
//
// Purpose
// - Run handler tests and local development without a database.
//
// Responsibilities
// - Keep entertainers in id order, which is also insertion order.
// - Hand out ids from a counter that never goes back, so deleted ids are not reused.
// - Hold the engagement rows the booking subsystem would normally write.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::modules::entertainers::adapters::outbound::entertainer_store::{
    EntertainerStore, StoreError,
};
use crate::modules::entertainers::adapters::outbound::summary_queries::EntertainerSummaryQueries;
use crate::modules::entertainers::core::engagement::Engagement;
use crate::modules::entertainers::core::entertainer::{
    Entertainer, EntertainerId, EntertainerUpdate, NewEntertainer,
};
use crate::modules::entertainers::core::summary::{EntertainerSummary, summarize};

#[derive(Default)]
struct Tables {
    entertainers: BTreeMap<EntertainerId, Entertainer>,
    engagements: Vec<Engagement>,
    last_entertainer_id: EntertainerId,
    last_engagement_id: i32,
}

#[derive(Default)]
pub struct InMemoryEntertainerStore {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryEntertainerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entertainer store offline".into()));
        }
        Ok(())
    }

    /// Stores a booking for `entertainer_id`. The entertainer does not have to exist.
    pub async fn record_engagement(
        &self,
        entertainer_id: EntertainerId,
        start_date: NaiveDate,
    ) -> Result<Engagement, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        tables.last_engagement_id += 1;
        let engagement = Engagement {
            id: tables.last_engagement_id,
            entertainer_id,
            start_date,
        };
        tables.engagements.push(engagement.clone());
        Ok(engagement)
    }
}

#[async_trait]
impl EntertainerStore for InMemoryEntertainerStore {
    async fn get(&self, id: EntertainerId) -> Result<Option<Entertainer>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.entertainers.get(&id).cloned())
    }

    async fn exists(&self, id: EntertainerId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.entertainers.contains_key(&id))
    }

    async fn insert(&self, entertainer: NewEntertainer) -> Result<Entertainer, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        tables.last_entertainer_id += 1;
        let id = tables.last_entertainer_id;
        let stored = Entertainer::from_new(id, entertainer);
        tables.entertainers.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: &EntertainerUpdate) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let entertainer = tables
            .entertainers
            .get_mut(&update.id)
            .ok_or(StoreError::NoRowsAffected { id: update.id })?;
        entertainer.apply(update.clone());
        Ok(())
    }

    async fn delete(&self, id: EntertainerId) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.write().await.entertainers.remove(&id).is_some())
    }
}

#[async_trait]
impl EntertainerSummaryQueries for InMemoryEntertainerStore {
    async fn list_summaries(&self) -> Result<Vec<EntertainerSummary>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(summarize(
            tables.entertainers.values(),
            tables.engagements.iter(),
        ))
    }
}
