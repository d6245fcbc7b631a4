//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{CheckoutPage, HomePage, SuccessPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Página não encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/success") view=SuccessPage />
                </Routes>
            </main>
        </Router>
    }
}
