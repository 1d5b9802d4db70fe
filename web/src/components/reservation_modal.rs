use leptos::prelude::*;
use reservation::ModalState;
use thaw::*;

use crate::components::booking_form::BookingForm;

/// Overlay wrapper for the reservation flow. Renders nothing while closed;
/// while open it shows either the booking form or the post-submit
/// confirmation, depending on [`ModalState`].
///
/// The form subtree is mounted fresh on every `Closed -> OpenForm`
/// transition, which is what discards the previous draft.
#[component]
pub fn ReservationModal(
    #[prop(into)] state: Signal<ModalState>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    on_success: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        {move || match state.get() {
            ModalState::Closed => view! {}.into_any(),
            ModalState::OpenForm => view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <BookingForm on_close=on_close on_success=on_success/>
                    </div>
                </div>
            }
            .into_any(),
            ModalState::OpenSuccess => view! {
                <div class="modal-overlay">
                    <div class="modal-content">
                        <div class="modal-success-message">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| on_close()
                                class="modal-close-btn"
                            >
                                <i class="fas fa-times" aria-hidden="true"></i>
                            </Button>
                            <div class="modal-success-icon">
                                <i class="fas fa-check" aria-hidden="true"></i>
                            </div>
                            <h2>"Reservation Confirmed!"</h2>
                            <p>
                                "Your table has been successfully reserved. We'll send you a confirmation email shortly."
                            </p>
                        </div>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}
