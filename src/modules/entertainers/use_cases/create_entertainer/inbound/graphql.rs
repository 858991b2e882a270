use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::entertainers::adapters::inbound::graphql_types::{
    GqlEntertainer, GqlEntertainerInput, to_gql_error,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEntertainerMutation;

#[Object]
impl CreateEntertainerMutation {
    async fn create_entertainer(
        &self,
        context: &Context<'_>,
        input: GqlEntertainerInput,
    ) -> GqlResult<GqlEntertainer> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .create_handler
            .handle(input.into())
            .await
            .map_err(to_gql_error)?;
        Ok(created.into())
    }
}
