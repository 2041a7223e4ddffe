pub mod enrollment;
pub mod hotel;
