pub mod enrollments;
pub mod hotels;
