pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: sticky header above the routed page
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-layout__content">
                {children()}
            </main>
        </div>
    }
}
