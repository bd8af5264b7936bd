//! Sidereal ascendant selection and whole-sign graha placements.

use chrono::{DateTime, Utc};
use jyotisa_core::{AyanamshaSystem, Body, EphemerisProvider, GeoLocation, HouseFrame};
use jyotisa_vedic_base::{
    ALL_GRAHAS, Graha, cross_check_ascendant, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, whole_sign_house,
};
use tracing::debug;

use crate::error::SearchError;
use crate::kundali_types::{AscendantConfig, AscendantResult, BirthChart, PlanetPlacement};

/// Sidereal ascendant from two independent methods, cross-checked.
///
/// The direct sidereal value is used while both agree within
/// `config.tolerance_deg`; otherwise tropical − ayanamsha is used.
pub fn ascendant_for<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    location: &GeoLocation,
    ayanamsha: AyanamshaSystem,
    config: &AscendantConfig,
) -> Result<AscendantResult, SearchError> {
    location.validate()?;
    config.validate()?;

    let direct = provider.ascendant(instant, location, ayanamsha, HouseFrame::Sidereal)?;
    let tropical = provider.ascendant(instant, location, ayanamsha, HouseFrame::Tropical)?;
    let ayanamsha_deg = provider.ayanamsha_value(instant, ayanamsha)?;

    let selection = cross_check_ascendant(direct, tropical, ayanamsha_deg, config.tolerance_deg);
    let info = rashi_from_longitude(selection.longitude_deg);
    debug!(
        longitude_deg = selection.longitude_deg,
        method = selection.method.name(),
        delta_deg = selection.delta_deg,
        "ascendant"
    );

    Ok(AscendantResult {
        longitude_deg: selection.longitude_deg,
        sign: info.rashi,
        sign_index: info.index,
        degree_in_sign: info.degree_in_sign,
        method: selection.method,
        delta_deg: selection.delta_deg,
        direct_sidereal_deg: selection.direct_sidereal_deg,
        tropical_minus_ayanamsha_deg: selection.tropical_minus_ayanamsha_deg,
        ayanamsha_deg,
    })
}

fn placement(
    graha: Graha,
    longitude_deg: f64,
    speed_deg_per_day: f64,
    ascendant_sign: u8,
) -> PlanetPlacement {
    let info = rashi_from_longitude(longitude_deg);
    PlanetPlacement {
        graha,
        longitude_deg: normalize_360(longitude_deg),
        speed_deg_per_day,
        sign: info.rashi,
        sign_index: info.index,
        degree_in_sign: info.degree_in_sign,
        house: whole_sign_house(info.index, ascendant_sign),
        // Nodes are conventionally always retrograde.
        retrograde: matches!(graha, Graha::Rahu | Graha::Ketu) || speed_deg_per_day < 0.0,
    }
}

/// Placements of all nine grahas, in [`ALL_GRAHAS`] order.
///
/// Ketu is never queried: it sits opposite Rahu with the same speed.
pub fn graha_placements<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ascendant_sign: u8,
    ayanamsha: AyanamshaSystem,
) -> Result<Vec<PlanetPlacement>, SearchError> {
    let rahu = provider.longitude_and_speed(instant, Graha::Rahu.body(), ayanamsha)?;
    let mut placements = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let (lon, speed) = match graha {
            Graha::Rahu => (rahu.longitude_deg, rahu.speed_deg_per_day),
            Graha::Ketu => (rahu.longitude_deg + 180.0, rahu.speed_deg_per_day),
            _ => {
                let s = provider.longitude_and_speed(instant, graha.body(), ayanamsha)?;
                (s.longitude_deg, s.speed_deg_per_day)
            }
        };
        placements.push(placement(graha, lon, speed, ascendant_sign));
    }
    Ok(placements)
}

/// Ascendant, graha placements and Moon nakshatra for one instant.
pub fn birth_chart<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    location: &GeoLocation,
    ayanamsha: AyanamshaSystem,
    config: &AscendantConfig,
) -> Result<BirthChart, SearchError> {
    let ascendant = ascendant_for(provider, instant, location, ayanamsha, config)?;
    let placements = graha_placements(provider, instant, ascendant.sign_index, ayanamsha)?;
    let moon_lon = provider.sidereal_longitude(instant, Body::Moon, ayanamsha)?;

    Ok(BirthChart {
        instant,
        location: *location,
        ayanamsha,
        ayanamsha_deg: ascendant.ayanamsha_deg,
        ascendant,
        moon_nakshatra: nakshatra_from_longitude(moon_lon),
        placements,
    })
}
