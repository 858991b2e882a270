use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::entertainers::use_cases::create_entertainer::inbound::graphql::CreateEntertainerMutation;
use crate::modules::entertainers::use_cases::delete_entertainer::inbound::graphql::DeleteEntertainerMutation;
use crate::modules::entertainers::use_cases::get_entertainer::inbound::graphql::GetEntertainerQuery;
use crate::modules::entertainers::use_cases::list_entertainers::inbound::graphql::ListEntertainersQuery;
use crate::modules::entertainers::use_cases::update_entertainer::inbound::graphql::UpdateEntertainerMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEntertainersQuery, GetEntertainerQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateEntertainerMutation,
    UpdateEntertainerMutation,
    DeleteEntertainerMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
