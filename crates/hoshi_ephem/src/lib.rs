//! Ephemeris capability boundary.
//!
//! The chart builders never link a real astronomical library; they
//! consume positions through the [`EphemerisProvider`] trait defined
//! here. This crate owns the shared vocabulary of that boundary:
//!
//! - [`Body`]: the ten chart bodies with their stable provider ids.
//! - [`flags`]: the calculation-mode bits a request carries.
//! - [`HouseSystem`]: the house-system code passed to house queries.
//! - [`BodyPosition`] / [`HouseAngles`]: the raw provider records.
//! - [`StaticEphemeris`]: a canned provider for tests and offline use.
//!
//! A real provider (Swiss Ephemeris or similar) lives outside this
//! repository and implements the same trait.

pub mod body;
pub mod error;
pub mod provider;
pub mod static_eph;

pub use body::{Body, HouseSystem, ALL_BODIES};
pub use error::EphemerisError;
pub use provider::{flags, BodyPosition, EphemerisProvider, HouseAngles};
pub use static_eph::StaticEphemeris;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<Body>();
        assert_send_sync::<HouseSystem>();
        assert_send_sync::<BodyPosition>();
        assert_send_sync::<HouseAngles>();
        assert_send_sync::<EphemerisError>();
        assert_send_sync::<StaticEphemeris>();
    }
}
