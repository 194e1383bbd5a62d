//! Couriers, vacations, and ratings
//!
//! Availability is computed from vacation date ranges, never stored.

pub mod availability;
pub mod models;
pub mod repository;

pub use availability::covers_day;
pub use models::{Courier, CourierInfo, CourierRating, Manager, RatingSummary, Vacation};
pub use repository::{CourierRepository, ManagerRepository, RatingRepository, VacationRepository};
