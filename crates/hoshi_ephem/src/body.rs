//! Celestial body and house-system vocabulary.

use serde::{Deserialize, Serialize};

/// The ten bodies a chart reads, in provider-id order.
///
/// The discriminants are the stable ids a Swiss-style ephemeris uses
/// (Sun = 0 through Pluto = 9); [`Body::id`] exposes them for the
/// provider boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All bodies in provider-id order, indexable by id.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Stable provider id (0 = Sun … 9 = Pluto).
    pub const fn id(&self) -> u32 {
        *self as u32
    }

    /// English name of the body.
    pub const fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Body for a provider id, if it is one of the ten.
    pub const fn from_id(id: u32) -> Option<Body> {
        if id < 10 {
            Some(ALL_BODIES[id as usize])
        } else {
            None
        }
    }

    /// All ten bodies in provider-id order.
    pub const fn all() -> &'static [Body; 10] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// House system requested from the provider.
///
/// Only Placidus is consumed today; the enum leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum HouseSystem {
    Placidus,
}

impl HouseSystem {
    /// One-letter provider code for the system.
    pub const fn code(&self) -> char {
        match self {
            HouseSystem::Placidus => 'P',
        }
    }
}
