pub mod analysis;
pub mod payload;
