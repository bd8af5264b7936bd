//! Karana (half-tithi) table.
//!
//! Sixty slots per lunar month, 6° of elongation each. Slot 1 is Kimstughna,
//! slots 2-57 cycle the seven movable karanas eight times, and slots 58-60
//! are the fixed Shakuni, Chatushpada and Naga.

use serde::Serialize;

pub const KARANA_SPAN_DEG: f64 = 6.0;

pub const KARANA_COUNT: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// The seven movable (chara) karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Whether this is one of the four fixed (sthira) karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

/// Karana for a 1-based slot, clamped to 1..=60.
pub const fn karana_for_slot(slot: u8) -> Karana {
    match slot {
        0 | 1 => Karana::Kimstughna,
        2..=57 => MOVABLE_KARANAS[((slot - 2) % 7) as usize],
        58 => Karana::Shakuni,
        59 => Karana::Chatushpada,
        _ => Karana::Naga,
    }
}
