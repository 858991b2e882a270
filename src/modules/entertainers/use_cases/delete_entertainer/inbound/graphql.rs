use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::entertainers::adapters::inbound::graphql_types::to_gql_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEntertainerMutation;

#[Object]
impl DeleteEntertainerMutation {
    async fn delete_entertainer(&self, context: &Context<'_>, id: i32) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(id)
            .await
            .map_err(to_gql_error)?;
        Ok(true)
    }
}
