use async_trait::async_trait;

use crate::modules::entertainers::adapters::outbound::entertainer_store::StoreError;
use crate::modules::entertainers::core::summary::EntertainerSummary;

/// Booking statistics for every entertainer, in storage order.
#[async_trait]
pub trait EntertainerSummaryQueries: Send + Sync {
    async fn list_summaries(&self) -> Result<Vec<EntertainerSummary>, StoreError>;
}
