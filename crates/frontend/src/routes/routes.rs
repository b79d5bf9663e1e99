use crate::layout::Shell;
use crate::pages::gallery::GalleryPage;
use crate::pages::management::ManagementPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"페이지를 찾을 수 없습니다"</p> }>
                    <Route path=path!("/") view=ManagementPage />
                    <Route path=path!("/components") view=GalleryPage />
                </Routes>
            </Shell>
        </Router>
    }
}
