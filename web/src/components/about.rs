use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="about" aria-labelledby="about-title">
            <div class="container">
                <div class="about-content">
                    <div class="about-text">
                        <h2 id="about-title">"Our Story"</h2>
                        <p>
                            "Little Lemon was founded in 2010 by brothers Mario and Adrian. Combining their expertise in culinary arts and hospitality, they created a unique dining experience that celebrates Mediterranean cuisine with a modern twist."
                        </p>
                        <p>
                            "Located in the heart of Chicago, our restaurant sources the freshest ingredients from local farmers markets to ensure every dish is bursting with flavor and nutrition."
                        </p>
                        <p>
                            "We take pride in our warm, family-friendly atmosphere where guests can enjoy authentic Mediterranean dishes that have been passed down through generations."
                        </p>
                    </div>
                    <div class="about-us__images" aria-hidden="true">
                        <img
                            class="about-us__image about-us__image--1"
                            src="/images/restaurant_interior.svg"
                            alt="The warm and inviting interior of the Little Lemon restaurant."
                        />
                        <img
                            class="about-us__image about-us__image--2"
                            src="/images/mario_adrian.svg"
                            alt="A photo of the two founding chefs, Mario and Adrian, standing side-by-side in their kitchen."
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
