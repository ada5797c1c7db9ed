// Composition root for the hotels context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Expose the HTTP and GraphQL surfaces with their middleware.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
