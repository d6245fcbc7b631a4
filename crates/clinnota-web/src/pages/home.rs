//! Home Page

use leptos::prelude::*;

use crate::components::{Contact, Downloads, Features, Footer, Hero, Highlights, HowItWorks};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <Highlights />
            <Features />
            <HowItWorks />
            <Downloads />
            <Contact />
            <Footer />
        </div>
    }
}
