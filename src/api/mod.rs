pub mod biketype_handlers;
pub mod brand_handlers;
pub mod error;
pub mod handlers;
pub mod model_handlers;
pub mod routes;

pub use error::*;
pub use handlers::*;
pub use routes::*;
