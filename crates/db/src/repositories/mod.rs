mod build_repo;
mod caption_repo;
mod gallery_repo;
mod image_repo;
mod travel_location_repo;

pub use build_repo::BuildRepo;
pub use caption_repo::CaptionRepo;
pub use gallery_repo::GalleryRepo;
pub use image_repo::ImageRepo;
pub use travel_location_repo::TravelLocationRepo;
