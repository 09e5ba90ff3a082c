//! Landing page: hero copy and animated headline statistics.

use leptos::prelude::*;
use mentor::templates::MENTOR_NAME;

use crate::components::stat_card::StatsStrip;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="hero">
                <span class="hero__badge">"AI-Powered Career Guidance"</span>
                <h1 class="hero__title">"From Confusion to Clarity ✨"</h1>
                <p class="hero__lede">
                    "An empathetic AI companion that understands your journey. "
                    "Get career guidance tailored to your personality, interests, and dreams."
                </p>
                <a class="btn btn--primary" href="/chat">{format!("Talk to {MENTOR_NAME}")}</a>
            </section>
            <StatsStrip/>
        </main>
    }
}
