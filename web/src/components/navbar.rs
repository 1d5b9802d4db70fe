use leptos::prelude::*;

/// Site header with the main navigation. The hamburger toggle and its menu
/// are independent of everything else on the page; opening the reservation
/// modal neither reads nor resets this state.
#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header role="banner">
            <div class="container">
                <nav aria-label="Main Navigation">
                    <div class="logo">
                        <a href="/" aria-label="Little Lemon home">
                            <img src="/images/littlelemon_logo.svg" alt="Little Lemon Restaurant Logo"/>
                        </a>
                    </div>
                    <ul
                        class=move || if menu_open.get() { "nav-links show" } else { "nav-links" }
                        id="navLinks"
                        role="menu"
                    >
                        <li role="none"><a href="#" role="menuitem">"Home"</a></li>
                        <li role="none"><a href="#" role="menuitem">"About"</a></li>
                        <li role="none"><a href="#" role="menuitem">"Menu"</a></li>
                        <li role="none"><a href="#" role="menuitem">"Reservations"</a></li>
                        <li role="none"><a href="#" role="menuitem">"Order Online"</a></li>
                        <li role="none"><a href="#" role="menuitem">"Login"</a></li>
                    </ul>
                    <button
                        class="mobile-menu"
                        id="mobileMenu"
                        aria-label="Open main menu"
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="navLinks"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <i
                            class=move || if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
                            aria-hidden="true"
                        ></i>
                    </button>
                </nav>
            </div>
        </header>
    }
}
