pub mod fields;
pub mod predict;

pub use fields::list_fields;
pub use predict::predict;
