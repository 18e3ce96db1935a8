//! Meridian domain logic.
//!
//! This crate has zero internal dependencies so it can be used by the API,
//! the viewer runtime, and the uploader alike. It holds the globe math
//! (projection, marker visibility, camera recentering), the input
//! arbitration state machine, and the gallery/carousel data types shared
//! between server and client.

pub mod camera;
pub mod error;
pub mod gallery;
pub mod geo;
pub mod interaction;
pub mod markers;
pub mod types;
pub mod vec;
