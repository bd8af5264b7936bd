//! Shared angular helpers for sector-based elements.

pub use jyotisa_core::{normalize_360, normalize_to_pm180};

/// 1-based sector index of an angular quantity: `floor(q / sector) + 1`,
/// clamped to `count`.
pub fn sector_index(quantity_deg: f64, sector_deg: f64, count: u8) -> u8 {
    let q = normalize_360(quantity_deg);
    let idx = (q / sector_deg).floor() as u8 + 1;
    idx.min(count)
}

/// Whether a quantity that started in sector `index` has reached the next
/// sector boundary.
///
/// For the last sector the boundary is 0°/360°, reached once the quantity
/// wraps into the first sector. Otherwise it is `index × sector`.
pub fn sector_end_reached(quantity_deg: f64, index: u8, sector_deg: f64, count: u8) -> bool {
    let q = normalize_360(quantity_deg);
    if index >= count {
        q < sector_deg
    } else {
        q >= f64::from(index) * sector_deg
    }
}
