//! Typed client for a project-tracking service's v5 REST API.
//!
//! Every operation on [`ProjectClient`] is a single request/response round
//! trip through a [`Connection`]: the client scopes the path to its project,
//! attaches query parameters and JSON bodies, and the connection executes the
//! request, extracts [`Pagination`] from the response headers, and decodes
//! the JSON payload.
mod client;
pub mod connection;
mod errors;
pub mod http;
mod pagination;
mod query;
pub mod types;
pub use self::client::{Client, ProjectClient};
pub use self::connection::{Connection, Method, Request, Response};
pub use self::errors::Error;
pub use self::http::{ClientConfig, HttpConnection};
pub use self::pagination::Pagination;
pub use self::query::{
    ActivityQuery, CommentsQuery, IterationScope, IterationsQuery, Query, QueryCommon,
    StoriesQuery, TasksQuery,
};
