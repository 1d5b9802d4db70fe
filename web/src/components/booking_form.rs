use leptos::prelude::*;
use reservation::{
    validate, Field, Occasion, ReservationDraft, Seating, ValidationErrors, PARTY_SIZES,
    TIME_SLOTS,
};
use thaw::*;

use crate::utils::date::today_ymd;

/// The reservation form shown inside the booking modal.
///
/// Owns its draft and validation state outright; nothing leaves except
/// through the two callbacks. `on_close` fires when the guest bails out,
/// `on_success` when a submit passes validation. Either way the draft is
/// discarded with the component.
#[component]
pub fn BookingForm(
    on_close: impl Fn() + 'static + Copy + Send + Sync,
    on_success: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let draft = RwSignal::new(ReservationDraft::default());
    let errors = RwSignal::new(ValidationErrors::default());

    // The earliest selectable date is pinned when the form is built.
    // Reopening the modal mounts a fresh form with a fresh bound.
    let min_date = today_ymd();

    let input_class = move |field: Field| {
        if errors.with(|e| e.contains(field)) {
            "form-input form-input--error"
        } else {
            "form-input"
        }
    };

    let field_error = move |field: Field| {
        errors
            .with(|e| e.get(field))
            .map(|message| view! { <p class="form-error">{message}</p> })
    };

    let time_options = TIME_SLOTS
        .iter()
        .copied()
        .map(|slot| {
            view! { <option value=slot>{slot}</option> }
        })
        .collect_view();

    let party_size_options = PARTY_SIZES
        .map(|n| {
            let label = if n == 1 {
                format!("{} person", n)
            } else {
                format!("{} people", n)
            };
            view! { <option value={n.to_string()}>{label}</option> }
        })
        .collect_view();

    let occasion_options = Occasion::ALL
        .into_iter()
        .map(|occasion| {
            view! { <option value={occasion.label()}>{occasion.label()}</option> }
        })
        .collect_view();

    view! {
        <div class="modal-header">
            <h2>"Book a Table"</h2>
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_close()
                class="modal-close-btn"
            >
                <i class="fas fa-times" aria-hidden="true"></i>
            </Button>
        </div>

        <form
            class="modal-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                let outcome = draft.with(|d| validate(d));
                if outcome.is_empty() {
                    on_success();
                } else {
                    errors.set(outcome);
                }
            }
        >
            <div class="form-group">
                <label>"Date"</label>
                <div class="form-input-icon">
                    <input
                        type="date"
                        min=min_date
                        value=move || draft.with(|d| d.date.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.date = event_target_value(&ev));
                            errors.update(|e| e.clear(Field::Date));
                        }
                        class=move || input_class(Field::Date)
                    />
                    <i class="fas fa-calendar form-icon" aria-hidden="true"></i>
                </div>
                {move || field_error(Field::Date)}
            </div>

            <div class="form-group">
                <label>"Time"</label>
                <div class="form-input-icon">
                    <select
                        on:change=move |ev| {
                            draft.update(|d| d.time = event_target_value(&ev));
                            errors.update(|e| e.clear(Field::Time));
                        }
                        class=move || input_class(Field::Time)
                    >
                        <option value="">"Choose the booking time"</option>
                        {time_options}
                    </select>
                    <i class="fas fa-chevron-down form-icon" aria-hidden="true"></i>
                </div>
                {move || field_error(Field::Time)}
            </div>

            <div class="form-group">
                <label>"Number of dinners"</label>
                <div class="form-input-icon">
                    <select
                        on:change=move |ev| {
                            draft.update(|d| d.party_size = event_target_value(&ev).parse().ok());
                            errors.update(|e| e.clear(Field::PartySize));
                        }
                        class=move || input_class(Field::PartySize)
                    >
                        <option value="">"Choose number of dinners"</option>
                        {party_size_options}
                    </select>
                    <i class="fas fa-chevron-down form-icon" aria-hidden="true"></i>
                </div>
                {move || field_error(Field::PartySize)}
            </div>

            <div class="form-group">
                <label>"Occasion"</label>
                <select
                    on:change=move |ev| {
                        draft.update(|d| d.occasion = event_target_value(&ev).parse().ok());
                        errors.update(|e| e.clear(Field::Occasion));
                    }
                    class=move || input_class(Field::Occasion)
                >
                    <option value="">"Choose the occasion"</option>
                    {occasion_options}
                </select>
                {move || field_error(Field::Occasion)}
            </div>

            <div class="form-group">
                <label>"Seating option"</label>
                <div class="form-radio-group">
                    <label>
                        <input
                            type="radio"
                            name="seating"
                            value={Seating::Standard.as_str()}
                            checked=move || draft.with(|d| d.seating == Seating::Standard)
                            on:change=move |_| draft.update(|d| d.seating = Seating::Standard)
                        />
                        <span>"Standard"</span>
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="seating"
                            value={Seating::Outside.as_str()}
                            checked=move || draft.with(|d| d.seating == Seating::Outside)
                            on:change=move |_| draft.update(|d| d.seating = Seating::Outside)
                        />
                        <span>"Outside"</span>
                    </label>
                </div>
            </div>

            <div class="form-group">
                <label>"Name"</label>
                <div class="form-input-icon">
                    <input
                        type="text"
                        placeholder="Enter your full name"
                        value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.name = event_target_value(&ev));
                            errors.update(|e| e.clear(Field::Name));
                        }
                        class=move || input_class(Field::Name)
                    />
                    <i class="fas fa-user form-icon" aria-hidden="true"></i>
                </div>
                {move || field_error(Field::Name)}
            </div>

            <div class="form-group">
                <label>"Email"</label>
                <div class="form-input-icon">
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.email = event_target_value(&ev));
                            errors.update(|e| e.clear(Field::Email));
                        }
                        class=move || input_class(Field::Email)
                    />
                    <i class="fas fa-envelope form-icon" aria-hidden="true"></i>
                </div>
                {move || field_error(Field::Email)}
            </div>

            <div class="form-group">
                <label>"Optional request"</label>
                <div class="form-input-icon">
                    <textarea
                        prop:value=move || draft.with(|d| d.special_request.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.special_request = event_target_value(&ev));
                        }
                        placeholder="Type in additional request here"
                        rows="4"
                        class="form-input"
                    ></textarea>
                    <i class="fas fa-comment-dots form-icon" aria-hidden="true"></i>
                </div>
            </div>

            <Button
                button_type=ButtonType::Submit
                appearance=ButtonAppearance::Primary
                class="form-submit"
            >
                "Make Your Reservation"
            </Button>
        </form>
    }
}
