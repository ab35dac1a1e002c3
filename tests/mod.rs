pub mod context;
pub mod traits;
