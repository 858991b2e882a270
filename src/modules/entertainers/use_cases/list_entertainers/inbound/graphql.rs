use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::entertainers::adapters::inbound::graphql_types::{
    GqlEntertainerSummary, to_gql_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListEntertainersQuery;

#[Object]
impl ListEntertainersQuery {
    async fn entertainers(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEntertainerSummary>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_handler.handle().await.map_err(to_gql_error)?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
