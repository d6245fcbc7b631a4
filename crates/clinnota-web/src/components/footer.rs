//! Page footer

use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <span>"© " {year} " ClinNota. Todos os direitos reservados."</span>
            <nav>
                <a href="#">"Política de Privacidade"</a>
                <span>"|"</span>
                <a href="#">"Termos de Uso"</a>
            </nav>
        </footer>
    }
}
