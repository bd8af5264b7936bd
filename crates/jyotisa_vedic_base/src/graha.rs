//! The nine grahas and their provider bodies.

use jyotisa_core::Body;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Provider body queried for this graha. Ketu is derived from Rahu.
    pub const fn body(self) -> Body {
        match self {
            Self::Surya => Body::Sun,
            Self::Chandra => Body::Moon,
            Self::Mangal => Body::Mars,
            Self::Buddh => Body::Mercury,
            Self::Guru => Body::Jupiter,
            Self::Shukra => Body::Venus,
            Self::Shani => Body::Saturn,
            Self::Rahu | Self::Ketu => Body::MeanNode,
        }
    }
}
