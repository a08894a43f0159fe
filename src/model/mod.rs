pub mod biketype;
pub mod brand;
pub mod common;
pub mod model;

pub use biketype::{BikeType, NewBikeType};
pub use brand::{Brand, NewBrand};
pub use common::{generate_id, Id};
pub use model::{Model, NewModel};
