use leptos::prelude::*;

#[component]
pub fn Hero(on_reserve: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    view! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-text">
                        <h1 id="hero-heading">"Little Lemon"</h1>
                        <h2>"Chicago"</h2>
                        <p>
                            "We are a family-owned Mediterranean restaurant dedicated to traditional recipes with a modern twist. We take pride in using fresh ingredients to create vibrant and flavorful dishes for all to enjoy."
                        </p>
                        <button class="btn" on:click=move |_| on_reserve()>
                            "Reserve a Table"
                        </button>
                    </div>
                    <div class="hero-image" aria-hidden="true">
                        <img src="/images/restaurant_food.svg" alt="A spread of Mediterranean food on a table."/>
                    </div>
                </div>
            </div>
        </section>
    }
}
