use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use reservation::{ModalLifecycle, SUCCESS_AUTO_CLOSE};

use crate::components::{
    about::About, footer::SiteFooter, hero::Hero, navbar::Navbar, reserve_cta::ReserveCta,
    specials::Specials, testimonials::Testimonials, ReservationModal,
};
use crate::utils::scroll::set_body_scroll_suspended;

/// Cancels the timer behind a handle a lifecycle transition handed back.
fn cancel_close(stale: Option<TimeoutHandle>) {
    if let Some(handle) = stale {
        handle.clear();
    }
}

/// The single page of the site. Owns the reservation modal's lifecycle:
/// which view it shows, the success auto-close timer, and the body scroll
/// lock that rides along with it.
#[component]
pub fn HomePage() -> impl IntoView {
    // The modal state and the pending auto-close move together; every
    // transition hands back the handle it invalidated, cancelled here. The
    // call-to-actions stay reachable from the keyboard while the
    // confirmation is up, so even reopening must cancel.
    let lifecycle = RwSignal::new(ModalLifecycle::<TimeoutHandle>::new());
    let modal_state = Memo::new(move |_| lifecycle.with(|l| l.state()));

    let open_modal = move || cancel_close(lifecycle.write().open_form());

    // Shared by the form's close control and the success view's.
    let close_modal = move || cancel_close(lifecycle.write().close());

    let handle_reserved = move || {
        cancel_close(lifecycle.write().confirm());
        if let Ok(handle) = set_timeout_with_handle(
            move || lifecycle.update(|l| l.auto_close_fired()),
            SUCCESS_AUTO_CLOSE,
        ) {
            lifecycle.write().auto_close_scheduled(handle);
        }
    };

    // Keep the page from scrolling underneath the overlay. Restored on
    // every close, and unconditionally if this view is torn down while the
    // modal is still up.
    Effect::new(move |_| {
        set_body_scroll_suspended(modal_state.get().is_open());
    });

    on_cleanup(move || {
        cancel_close(lifecycle.write().take_pending_close());
        set_body_scroll_suspended(false);
    });

    view! {
        <div class="app-container">
            <Navbar/>
            <main>
                <Hero on_reserve=open_modal/>
                <Specials/>
                <Testimonials/>
                <About/>
                <ReserveCta on_reserve=open_modal/>
            </main>
            <SiteFooter/>
            <ReservationModal state=modal_state on_close=close_modal on_success=handle_reserved/>
        </div>
    }
}
