use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer role="contentinfo">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-logo">
                        <img src="/images/small_logo.svg" alt="Little Lemon logo icon" aria-hidden="true"/>
                        <p>"Authentic Mediterranean cuisine with a modern twist in the heart of Chicago."</p>
                    </div>
                    <div class="footer-links">
                        <h4>"Navigation"</h4>
                        <ul>
                            <li><a href="#">"Home"</a></li>
                            <li><a href="#">"About"</a></li>
                            <li><a href="#">"Menu"</a></li>
                            <li><a href="#">"Reservations"</a></li>
                            <li><a href="#">"Order Online"</a></li>
                            <li><a href="#">"Login"</a></li>
                        </ul>
                    </div>
                    <div class="footer-links">
                        <h4>"Contact"</h4>
                        <address>
                            <ul>
                                <li>"123 Lemon Street, Chicago, IL 60601"</li>
                                <li><a href="tel:+13125557890">"(312) 555-7890"</a></li>
                                <li><a href="mailto:info@littlelemon.com">"info@littlelemon.com"</a></li>
                            </ul>
                        </address>
                    </div>
                    <div class="footer-links">
                        <h4>"Connect With Us"</h4>
                        <p>"Follow us on social media for updates, special offers, and more!"</p>
                        <div class="social-links">
                            <a href="#" aria-label="Follow us on Facebook">
                                <i class="fab fa-facebook-f" aria-hidden="true"></i>
                            </a>
                            <a href="#" aria-label="Follow us on Instagram">
                                <i class="fab fa-instagram" aria-hidden="true"></i>
                            </a>
                            <a href="#" aria-label="Follow us on Twitter">
                                <i class="fab fa-twitter" aria-hidden="true"></i>
                            </a>
                            <a href="#" aria-label="Follow us on TikTok">
                                <i class="fab fa-tiktok" aria-hidden="true"></i>
                            </a>
                        </div>
                    </div>
                </div>
                <div class="copyright">
                    <p>"© 2025 Little Lemon Mediterranean Restaurant. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
