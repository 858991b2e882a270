use std::sync::Arc;

use crate::modules::entertainers::adapters::outbound::summary_queries::EntertainerSummaryQueries;
use crate::modules::entertainers::core::summary::EntertainerSummary;
use crate::modules::entertainers::use_cases::errors::ApplicationError;

pub struct ListEntertainersHandler<TQueries>
where
    TQueries: EntertainerSummaryQueries + ?Sized,
{
    queries: Arc<TQueries>,
}

impl<TQueries> ListEntertainersHandler<TQueries>
where
    TQueries: EntertainerSummaryQueries + ?Sized,
{
    pub fn new(queries: Arc<TQueries>) -> Self {
        Self { queries }
    }

    pub async fn handle(&self) -> Result<Vec<EntertainerSummary>, ApplicationError> {
        let summaries = self.queries.list_summaries().await?;
        tracing::debug!(count = summaries.len(), "listed entertainer summaries");
        Ok(summaries)
    }
}
