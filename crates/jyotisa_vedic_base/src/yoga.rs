//! Yoga names. Index is `floor(norm(Sun + Moon) / 13°20′) + 1`, 1..=27.

pub const YOGA_COUNT: u8 = 27;

pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Preeti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipat",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

pub fn yoga_name(index: u8) -> &'static str {
    YOGA_NAMES[usize::from(index.clamp(1, YOGA_COUNT) - 1)]
}
