use leptos::prelude::*;

/// Bottom call-to-action band; the second of the two ways into the booking
/// modal.
#[component]
pub fn ReserveCta(on_reserve: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    view! {
        <section class="cta" aria-labelledby="cta-heading">
            <div class="container">
                <h2 id="cta-heading">"Ready to experience the taste of the Mediterranean?"</h2>
                <p>
                    "Book your table today and enjoy an unforgettable dining experience at Little Lemon. We can't wait to serve you!"
                </p>
                <button class="btn" on:click=move |_| on_reserve()>
                    "Reserve Now"
                </button>
            </div>
        </section>
    }
}
