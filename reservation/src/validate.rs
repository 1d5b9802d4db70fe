use std::collections::HashMap;

use crate::draft::{Field, ReservationDraft};

/// Validation messages keyed by form field.
///
/// Built wholesale by [`validate`] on each submit attempt. The form clears
/// single entries as the guest edits the offending field, without
/// re-checking the new value until the next submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: HashMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.by_field.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    /// Drops the entry for `field`, leaving every other entry in place.
    pub fn clear(&mut self, field: Field) {
        self.by_field.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.by_field.insert(field, message);
    }
}

/// Checks the whole draft and reports every failure at once.
///
/// Only presence (plus the email shape) is checked here. The fixed option
/// lists in the form are what keep times, party sizes and occasions in
/// range, and the date input's `min` bound is left to the browser.
pub fn validate(draft: &ReservationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.date.is_empty() {
        errors.insert(Field::Date, "Date is required");
    }
    if draft.time.is_empty() {
        errors.insert(Field::Time, "Time is required");
    }
    if draft.party_size.is_none() {
        errors.insert(Field::PartySize, "Number of dinners is required");
    }
    if draft.occasion.is_none() {
        errors.insert(Field::Occasion, "Occasion is required");
    }
    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !looks_like_email(email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    errors
}

/// Accepts any string containing `non-ws @ non-ws . non-ws` somewhere in it.
/// The usual lightweight signup-form check, not address parsing.
fn looks_like_email(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        // Walk the non-whitespace run after the `@` looking for an interior dot.
        let mut j = i + 1;
        while j < chars.len() && !chars[j].is_whitespace() {
            if chars[j] == '.' && j > i + 1 && j + 1 < chars.len() && !chars[j + 1].is_whitespace()
            {
                return true;
            }
            j += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{Occasion, Seating};

    fn complete_draft() -> ReservationDraft {
        ReservationDraft {
            date: "2025-09-10".to_string(),
            time: "19:30".to_string(),
            party_size: Some(4),
            occasion: Some(Occasion::Birthday),
            seating: Seating::Standard,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            special_request: String::new(),
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&ReservationDraft::default());

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(Field::Date), Some("Date is required"));
        assert_eq!(errors.get(Field::Time), Some("Time is required"));
        assert_eq!(
            errors.get(Field::PartySize),
            Some("Number of dinners is required")
        );
        assert_eq!(errors.get(Field::Occasion), Some("Occasion is required"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn seating_and_special_request_never_produce_errors() {
        let draft = ReservationDraft {
            seating: Seating::Outside,
            special_request: "Window table please".to_string(),
            ..ReservationDraft::default()
        };
        // Still exactly the six required-field entries.
        assert_eq!(validate(&draft).len(), 6);
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let draft = ReservationDraft {
            name: "   ".to_string(),
            ..complete_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn malformed_email_is_the_only_error_on_an_otherwise_complete_draft() {
        let draft = ReservationDraft {
            email: "not-an-email".to_string(),
            ..complete_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn email_shape_checks() {
        let ok = ["john.doe@example.com", "a@b.c", "a@b..c", "  padded@mail.org  "];
        for email in ok {
            let draft = ReservationDraft {
                email: email.to_string(),
                ..complete_draft()
            };
            assert!(validate(&draft).is_empty(), "expected {email:?} to pass");
        }

        let bad = [
            "john@site.",
            "john@site",
            "@example.com",
            "john@ example.com",
            "name@domain .com",
        ];
        for email in bad {
            let draft = ReservationDraft {
                email: email.to_string(),
                ..complete_draft()
            };
            assert_eq!(
                validate(&draft).get(Field::Email),
                Some("Please enter a valid email"),
                "expected {email:?} to fail"
            );
        }
    }

    #[test]
    fn clear_drops_only_the_named_field() {
        let mut errors = validate(&ReservationDraft::default());
        errors.clear(Field::Date);

        assert_eq!(errors.len(), 5);
        assert!(!errors.contains(Field::Date));
        assert!(errors.contains(Field::Time));
        assert!(errors.contains(Field::Email));

        // Clearing a field with no entry is a no-op.
        errors.clear(Field::Date);
        assert_eq!(errors.len(), 5);
    }
}
