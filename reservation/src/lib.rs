//! Domain logic for the Little Lemon table-reservation flow: the in-progress
//! booking draft, submit-time validation, and the modal lifecycle state.
//!
//! Everything here is plain data and pure functions, so the whole flow can be
//! exercised without a browser.

pub mod draft;
pub mod modal;
pub mod validate;

// Re-export commonly used types
pub use draft::{
    Field, Occasion, ParseOccasionError, ReservationDraft, Seating, PARTY_SIZES, TIME_SLOTS,
};
pub use modal::{ModalLifecycle, ModalState, SUCCESS_AUTO_CLOSE};
pub use validate::{validate, ValidationErrors};
