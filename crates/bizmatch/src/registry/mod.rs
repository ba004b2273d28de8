//! Session registry of rated businesses and investor matches.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{seed_businesses, Business, BusinessId, Match};
pub use repository::{BusinessRepository, RepositoryError};
pub use router::business_router;
pub use service::{BusinessRatingService, RatedBusiness, RatingServiceError};
