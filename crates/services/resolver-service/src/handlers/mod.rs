pub mod graphql_handler;

pub use graphql_handler::graphql_routes;
