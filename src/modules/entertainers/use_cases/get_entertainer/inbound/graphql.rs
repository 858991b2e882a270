use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::entertainers::adapters::inbound::graphql_types::{
    GqlEntertainer, to_gql_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetEntertainerQuery;

#[Object]
impl GetEntertainerQuery {
    async fn entertainer(&self, context: &Context<'_>, id: i32) -> GqlResult<GqlEntertainer> {
        let state = context.data_unchecked::<AppState>();
        let entertainer = state.get_handler.handle(id).await.map_err(to_gql_error)?;
        Ok(entertainer.into())
    }
}
