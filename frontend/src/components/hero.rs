//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Registrér dit covernummer"</h1>
            <p class="subtitle">
                "Har du udgivet en coverversion af et eksisterende værk? "
                "Registrér den her, så originalværkets rettighedshavere kan blive afregnet korrekt."
            </p>
        </div>
    }
}
