use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Half-hour dinner slots offered by the booking form, 17:00 through 22:00.
pub const TIME_SLOTS: [&str; 11] = [
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    "22:00",
];

/// Party sizes offered by the booking form.
pub const PARTY_SIZES: RangeInclusive<u8> = 1..=10;

/// Occasion choices offered by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    Birthday,
    Anniversary,
    DateNight,
    BusinessMeal,
    SpecialCelebration,
    Other,
}

impl Occasion {
    /// Dropdown order.
    pub const ALL: [Occasion; 6] = [
        Occasion::Birthday,
        Occasion::Anniversary,
        Occasion::DateNight,
        Occasion::BusinessMeal,
        Occasion::SpecialCelebration,
        Occasion::Other,
    ];

    /// Label shown in the occasion dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::Anniversary => "Anniversary",
            Occasion::DateNight => "Date Night",
            Occasion::BusinessMeal => "Business Meal",
            Occasion::SpecialCelebration => "Special Celebration",
            Occasion::Other => "Other",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized occasion `{0}`")]
pub struct ParseOccasionError(pub String);

impl FromStr for Occasion {
    type Err = ParseOccasionError;

    /// Parses a dropdown label back into its variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occasion::ALL
            .into_iter()
            .find(|occasion| occasion.label() == s)
            .ok_or_else(|| ParseOccasionError(s.to_string()))
    }
}

/// Seating preference. Unlike the other choices this always holds a value;
/// a fresh form starts on `Standard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seating {
    #[default]
    Standard,
    Outside,
}

impl Seating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seating::Standard => "standard",
            Seating::Outside => "outside",
        }
    }
}

/// Form fields that can fail validation. Seating always holds a value and
/// the special request is free-form, so neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Time,
    PartySize,
    Occasion,
    Name,
    Email,
}

/// The reservation a guest is in the middle of filling out.
///
/// Lives in memory for the lifetime of one open booking modal and is
/// discarded afterwards, whether the submit succeeded or the guest bailed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// Booking date as `YYYY-MM-DD`; empty until chosen.
    pub date: String,
    /// One of [`TIME_SLOTS`]; empty until chosen.
    pub time: String,
    /// `None` until chosen; the form offers [`PARTY_SIZES`].
    pub party_size: Option<u8>,
    pub occasion: Option<Occasion>,
    pub seating: Seating,
    pub name: String,
    pub email: String,
    pub special_request: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slots_cover_dinner_service_in_order() {
        assert_eq!(TIME_SLOTS.len(), 11);
        assert_eq!(TIME_SLOTS.first(), Some(&"17:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"22:00"));
        let mut sorted = TIME_SLOTS;
        sorted.sort_unstable();
        assert_eq!(sorted, TIME_SLOTS);
    }

    #[test]
    fn party_sizes_run_one_through_ten() {
        assert_eq!(PARTY_SIZES.clone().count(), 10);
        assert_eq!(*PARTY_SIZES.start(), 1);
        assert_eq!(*PARTY_SIZES.end(), 10);
    }

    #[test]
    fn occasion_labels_round_trip_through_from_str() {
        for occasion in Occasion::ALL {
            assert_eq!(occasion.label().parse::<Occasion>(), Ok(occasion));
        }
    }

    #[test]
    fn unknown_occasion_label_is_rejected() {
        let err = "Graduation".parse::<Occasion>().unwrap_err();
        assert_eq!(err, ParseOccasionError("Graduation".to_string()));
    }

    #[test]
    fn fresh_draft_defaults_to_standard_seating() {
        let draft = ReservationDraft::default();
        assert_eq!(draft.seating, Seating::Standard);
        assert!(draft.date.is_empty());
        assert_eq!(draft.party_size, None);
        assert_eq!(draft.occasion, None);
    }

    // The radio inputs take their `value` attributes from this mapping.
    #[test]
    fn seating_options_map_to_their_form_values() {
        assert_eq!(Seating::Standard.as_str(), "standard");
        assert_eq!(Seating::Outside.as_str(), "outside");
    }
}
