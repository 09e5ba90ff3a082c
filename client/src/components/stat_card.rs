//! Landing-page statistic cards.

use leptos::prelude::*;

use crate::components::count_up::CountUpValue;
use crate::util::stats::{HEADLINE_STATS, Stat};

/// One statistic: emoji, animated (or fixed) value, caption.
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let value = match stat.static_label() {
        Some(label) => view! { <span class="stat-card__value">{label}</span> }.into_any(),
        None => view! { <CountUpValue request=stat.request() class="stat-card__value"/> }.into_any(),
    };

    view! {
        <div class="stat-card">
            <span class="stat-card__emoji">{stat.emoji}</span>
            {value}
            <span class="stat-card__label">{stat.label}</span>
        </div>
    }
}

/// Row of all headline statistics.
#[component]
pub fn StatsStrip() -> impl IntoView {
    view! {
        <section class="stats-strip">
            {HEADLINE_STATS.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
        </section>
    }
}
