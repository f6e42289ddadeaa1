//! Zodiac mapping primitives.
//!
//! This crate turns ecliptic longitudes into the discrete divisions the
//! chart builders report:
//!
//! - [`sign_from_longitude`]: tropical longitude to one of the twelve
//!   zodiac [`Sign`]s.
//! - [`rashi_from_longitude`] / [`rashi_from_tropical`]: sidereal
//!   longitude to one of the twelve [`Rashi`]s, with an optional
//!   ayanamsha step for tropical inputs.
//! - [`nakshatra_from_longitude`] / [`nakshatra_from_tropical`]: the
//!   same for the twenty-seven [`Nakshatra`]s.
//! - [`lahiri_ayanamsha`]: the tropical-to-sidereal offset itself.
//!
//! Tropical signs and sidereal rashis are deliberately distinct types.
//! Both are twelve 30 degree segments, but they index different
//! reference frames and mixing them up is the classic bug in this
//! domain.
//!
//! All mappers accept any finite longitude and normalize it to
//! [0, 360) before resolving, so callers never need to pre-wrap.

pub mod ayanamsha;
pub mod nakshatra;
pub mod rashi;
pub mod sign;
pub mod util;

pub use ayanamsha::{
    centuries_since_epoch, lahiri_ayanamsha, sidereal_from_tropical, GREGORIAN_CENTURY_DAYS,
    REFERENCE_EPOCH_JD,
};
pub use nakshatra::{
    nakshatra_from_longitude, nakshatra_from_tropical, Nakshatra, NakshatraInfo, ALL_NAKSHATRAS,
    NAKSHATRA_SPAN_DEG,
};
pub use rashi::{
    rashi_from_longitude, rashi_from_tropical, Rashi, RashiInfo, ALL_RASHIS, RASHI_SPAN_DEG,
};
pub use sign::{sign_from_longitude, Sign, SignInfo, ALL_SIGNS, SIGN_SPAN_DEG};
pub use util::normalize_360;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<Sign>();
        assert_send_sync::<SignInfo>();
        assert_send_sync::<Rashi>();
        assert_send_sync::<RashiInfo>();
        assert_send_sync::<Nakshatra>();
        assert_send_sync::<NakshatraInfo>();
    }
}
