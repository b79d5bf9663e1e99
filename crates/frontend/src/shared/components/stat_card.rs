use crate::shared::list_utils::format_thousands;
use contracts::shared::stats::{ColorToken, StatItem, Stats};
use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<u64>,
    color: ColorToken,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", color.modifier())>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" style=format!("color: {}", color.css_var())>
                    {move || format_thousands(value.get())}
                </div>
            </div>
        </div>
    }
}

/// "전체" tile followed by the four aggregate tiles
#[component]
pub fn StatsGrid(#[prop(into)] stats: Signal<Stats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <StatCard
                label="전체"
                value=Signal::derive(move || stats.with(|s| s.total))
                color=ColorToken::Primary
            />
            {move || {
                stats.with(|s| {
                    s.items()
                        .into_iter()
                        .cloned()
                        .map(|item: StatItem| {
                            view! { <StatCard label=item.label value=item.value color=item.color /> }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
