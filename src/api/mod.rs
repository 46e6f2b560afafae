mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use error::ErrorBody;
pub use handlers::AppState;
pub use routes::create_router;
