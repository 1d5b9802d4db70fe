pub mod about;
pub mod booking_form;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod reservation_modal;
pub mod reserve_cta;
pub mod specials;
pub mod testimonials;

// Re-export commonly used types
pub use booking_form::BookingForm;
pub use reservation_modal::ReservationModal;
