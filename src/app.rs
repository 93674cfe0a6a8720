use leptos::prelude::*;

use crate::pages::Board;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <h1 class="app-title">"Task Board"</h1>
            <Board />
        </main>
    }
}
