// Composition root for the entertainers bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store adapter (PostgreSQL when configured, in memory otherwise).
// - Wire the adapter into the use case handlers.
// - Expose the HTTP router, REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
