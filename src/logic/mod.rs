pub mod catalog_ops;
pub mod forms;
pub mod integrity;
pub mod resolve;
pub mod validate;

pub use catalog_ops::*;
pub use forms::*;
pub use integrity::*;
pub use resolve::*;
pub use validate::*;
