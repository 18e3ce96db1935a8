pub mod build;
pub mod gallery;
pub mod image;
pub mod travel_location;
