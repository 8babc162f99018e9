//! # Hotel Common Library
//!
//! Shared code for the hotel merger workspace:
//! - Hotel record model (the common shape every supplier is translated into)
//! - Error types
//! - Configuration loading

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Amenities, DestinationId, HotelRecord, ImageEntry, Images, Location};
