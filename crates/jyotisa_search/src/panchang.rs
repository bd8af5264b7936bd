//! Panchanga classification: Tithi, Nakshatra, Yoga, Karana, Vaar and the
//! sunrise-anchored day segments.
//!
//! Each element's index is taken at the reference instant; its end is the
//! first instant the underlying angle reaches the next sector boundary,
//! found with [`find_crossing`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use jyotisa_core::{AyanamshaSystem, Body, EphemerisProvider, GeoLocation, SunTimesProvider};
use jyotisa_vedic_base::{
    InauspiciousPeriod, Vaar, abhijit_muhurta, day_segments, inauspicious_segment, paksha_for,
    sector_end_reached, sector_index,
};
use tracing::debug;

use crate::error::SearchError;
use crate::panchang_types::{ElementKind, PanchangaElement, PanchangaInfo};
use crate::search_util::{CrossingConfig, find_crossing};

/// Sidereal (Sun, Moon) longitudes in degrees.
pub fn sun_moon_longitudes<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
) -> Result<(f64, f64), SearchError> {
    let sun = provider.sidereal_longitude(instant, Body::Sun, ayanamsha)?;
    let moon = provider.sidereal_longitude(instant, Body::Moon, ayanamsha)?;
    Ok((sun, moon))
}

/// The element of `kind` in force at `instant`, with its end time.
pub fn element_at<P: EphemerisProvider>(
    provider: &P,
    kind: ElementKind,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaElement, SearchError> {
    let sector = kind.sector_deg();
    let count = kind.count();
    let (sun, moon) = sun_moon_longitudes(provider, instant, ayanamsha)?;
    let index = sector_index(kind.quantity(sun, moon), sector, count);

    let end = find_crossing(
        instant,
        |t| {
            let (sun, moon) = sun_moon_longitudes(provider, t, ayanamsha)?;
            Ok(sector_end_reached(kind.quantity(sun, moon), index, sector, count))
        },
        config,
    )?;

    let name = kind.name_for(index);
    debug!(
        element = kind.name(),
        index,
        name,
        end = %end.instant,
        found = end.found,
        "panchanga element"
    );
    Ok(PanchangaElement {
        kind,
        index,
        name,
        end,
    })
}

/// Tithi at `instant`.
pub fn tithi_at<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaElement, SearchError> {
    element_at(provider, ElementKind::Tithi, instant, ayanamsha, config)
}

/// Nakshatra of the Moon at `instant`.
pub fn nakshatra_at<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaElement, SearchError> {
    element_at(provider, ElementKind::Nakshatra, instant, ayanamsha, config)
}

/// Yoga at `instant`.
pub fn yoga_at<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaElement, SearchError> {
    element_at(provider, ElementKind::Yoga, instant, ayanamsha, config)
}

/// Karana at `instant`.
pub fn karana_at<P: EphemerisProvider>(
    provider: &P,
    instant: DateTime<Utc>,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaElement, SearchError> {
    element_at(provider, ElementKind::Karana, instant, ayanamsha, config)
}

/// Compute the full panchanga for a civil date at a location.
///
/// All elements are evaluated at local sunrise. Vaar is the weekday of the
/// sunrise in `tz`.
pub fn panchanga_for_date<P, S>(
    provider: &P,
    sun: &S,
    date: NaiveDate,
    location: &GeoLocation,
    tz: Tz,
    ayanamsha: AyanamshaSystem,
    config: &CrossingConfig,
) -> Result<PanchangaInfo, SearchError>
where
    P: EphemerisProvider,
    S: SunTimesProvider,
{
    location.validate()?;
    config.validate()?;

    let times = sun.sun_times(date, location, tz)?;
    let vaar = Vaar::from_weekday(times.sunrise.weekday());
    let sunrise = times.sunrise.with_timezone(&Utc);
    let sunset = times.sunset.with_timezone(&Utc);

    let tithi = tithi_at(provider, sunrise, ayanamsha, config)?;
    let nakshatra = nakshatra_at(provider, sunrise, ayanamsha, config)?;
    let yoga = yoga_at(provider, sunrise, ayanamsha, config)?;
    let karana = karana_at(provider, sunrise, ayanamsha, config)?;

    let segments = day_segments(sunrise, sunset)?;
    let abhijit = abhijit_muhurta(sunrise, sunset)?;
    let ayanamsha_deg = provider.ayanamsha_value(sunrise, ayanamsha)?;

    debug!(%date, vaar = vaar.name(), %sunrise, %sunset, "panchanga");
    Ok(PanchangaInfo {
        date,
        location: *location,
        timezone: tz.name().to_string(),
        ayanamsha,
        ayanamsha_deg,
        sunrise,
        sunset,
        vaar,
        paksha: paksha_for(tithi.index),
        tithi,
        nakshatra,
        yoga,
        karana,
        day_segments: segments,
        rahukalam: inauspicious_segment(InauspiciousPeriod::Rahukalam, vaar, &segments),
        yamagandam: inauspicious_segment(InauspiciousPeriod::Yamagandam, vaar, &segments),
        gulika: inauspicious_segment(InauspiciousPeriod::Gulika, vaar, &segments),
        abhijit_muhurta: abhijit,
    })
}
