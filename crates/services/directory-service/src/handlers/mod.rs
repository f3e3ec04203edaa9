pub mod users_handler;

pub use users_handler::user_routes;
