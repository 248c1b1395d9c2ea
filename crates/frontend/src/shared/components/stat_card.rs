use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    #[prop(into)] value: String,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    /// Change versus the previous period, already signed
    #[prop(optional, into)]
    change: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value}
                    {change.map(|c| view! { <span class="stat-card__change stat-card__change--up">{c}</span> })}
                </div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
