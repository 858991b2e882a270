use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::entertainers::adapters::inbound::graphql_types::{
    GqlEntertainerInput, to_gql_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEntertainerMutation;

#[Object]
impl UpdateEntertainerMutation {
    async fn update_entertainer(
        &self,
        context: &Context<'_>,
        id: i32,
        input: GqlEntertainerInput,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .update_handler
            .handle(id, input.into())
            .await
            .map_err(to_gql_error)?;
        Ok(true)
    }
}
