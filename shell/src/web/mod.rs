mod health;
mod routes;

pub use health::health_handler;
pub use routes::all_routes;
