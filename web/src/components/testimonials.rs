use leptos::prelude::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials" aria-labelledby="testimonials-title">
            <div class="container">
                <h2 class="section-title" id="testimonials-title">"Testimonials"</h2>
                <div class="testimonial-cards">
                    <article class="testimonial-card" aria-label="John Doe's testimonial">
                        <div class="rating" role="img" aria-label="5 out of 5 stars">
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                        </div>
                        <div class="testimonial-content">
                            <div class="avatar">
                                <img src="https://randomuser.me/api/portraits/men/32.jpg" alt="Portrait of John Doe."/>
                            </div>
                            <div class="testimonial-info">
                                <h4>"John Doe"</h4>
                                <p>"Regular Customer"</p>
                            </div>
                        </div>
                        <p>
                            "\"The Mediterranean food here is absolutely incredible! I've been coming here for years and the quality never disappoints.\""
                        </p>
                    </article>
                    <article class="testimonial-card" aria-label="Jane Smith's testimonial">
                        <div class="rating" role="img" aria-label="5 out of 5 stars">
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                        </div>
                        <div class="testimonial-content">
                            <div class="avatar">
                                <img src="https://randomuser.me/api/portraits/women/44.jpg" alt="Portrait of Jane Smith."/>
                            </div>
                            <div class="testimonial-info">
                                <h4>"Jane Smith"</h4>
                                <p>"Food Blogger"</p>
                            </div>
                        </div>
                        <p>
                            "\"I've tried Mediterranean restaurants all over the city, but Little Lemon stands out with its authentic flavors and cozy atmosphere.\""
                        </p>
                    </article>
                    <article class="testimonial-card" aria-label="Michael Johnson's testimonial">
                        <div class="rating" role="img" aria-label="4.5 out of 5 stars">
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star" aria-hidden="true"></i>
                            <i class="fas fa-star-half-alt" aria-hidden="true"></i>
                        </div>
                        <div class="testimonial-content">
                            <div class="avatar">
                                <img src="https://randomuser.me/api/portraits/men/62.jpg" alt="Portrait of Michael Johnson."/>
                            </div>
                            <div class="testimonial-info">
                                <h4>"Michael Johnson"</h4>
                                <p>"First-time Visitor"</p>
                            </div>
                        </div>
                        <p>
                            "\"The service was exceptional and the food was even better. I'll definitely be back with friends and family soon!\""
                        </p>
                    </article>
                </div>
            </div>
        </section>
    }
}
