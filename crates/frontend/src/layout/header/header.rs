use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__content">
                <div class="header__brand">
                    <div class="header__logo">"L"</div>
                    <div>
                        <h1 class="header__title">"Hanghae Company"</h1>
                        <p class="header__subtitle">"Design System Migration Project"</p>
                    </div>
                </div>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">
                        {icons::icon("posts")}
                        <span>"관리"</span>
                    </A>
                    <A href="/components" attr:class="header__link">
                        {icons::icon("grid")}
                        <span>"컴포넌트"</span>
                    </A>
                </nav>
                <div class="header__user">
                    <div class="header__user-info">
                        <div class="header__user-name">"Demo User"</div>
                        <div class="header__user-email">"demo@example.com"</div>
                    </div>
                    <div class="header__avatar">"DU"</div>
                </div>
            </div>
        </header>
    }
}
