//! Vimshottari dasha (planetary period) calculations.
//!
//! The Moon's nakshatra at birth selects the starting lord of a fixed nine
//! lord, 120-year cycle. Mahadashas begin with the unexpired balance of that
//! lord; antardashas and pratyantardashas split each parent proportionally.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use subperiod::{
    build_cyclic_sequence, days_to_duration, proportional_children, snap_last_child_end,
    years_to_duration,
};
pub use types::{
    DAYS_PER_YEAR, DEFAULT_HORIZON_YEARS, DashaHierarchy, DashaLevel, DashaPeriod, DashaSnapshot,
    MAX_DASHA_DEPTH,
};
pub use vimshottari::{
    MAX_HORIZON_YEARS, active_periods_at, vimshottari_children, vimshottari_hierarchy,
    vimshottari_mahadashas,
};
pub use vimshottari_data::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, nakshatra_lord, sequence_position,
    vimshottari_years,
};
