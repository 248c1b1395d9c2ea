mod state;

use contracts::domain::a004_feed::aggregate::{store, Feed};
use contracts::domain::a004_feed::stats::FeedStats;
use contracts::shared::list_query::filter_records;
use leptos::prelude::*;
use thaw::*;

use super::details::AddFeedDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFooter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn FeedsList() -> impl IntoView {
    let state = create_state();
    let stats = FeedStats::current();
    let total = store().len();

    let filtered = Memo::new(move |_| {
        state.search_query.with(|q| {
            filter_records(store(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="a004_feed--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Feeds Management"
                subtitle="Manage home screen feeds and announcements".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Add New Feed"
                </Button>
            </PageHeader>

            <AddFeedDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Feeds" value=stats.total.to_string() icon_name="rss" />
                    <StatCard label="Published" value=stats.published.to_string() />
                    <StatCard label="Scheduled" value=stats.scheduled.to_string() />
                    <StatCard label="Drafts" value=stats.drafts.to_string() />
                </div>

                <SearchInput value=state.search_query placeholder="Search feeds..." />

                <div class="card-grid">
                    <For
                        each=move || filtered.get()
                        key=|f| f.id
                        children=move |feed| view! { <FeedCard feed=feed /> }
                    />
                </div>

                <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="feeds" />
            </div>
        </PageFrame>
    }
}

#[component]
fn FeedCard(feed: Feed) -> impl IntoView {
    let published = feed.published_label();

    view! {
        <div class="card feed-card">
            <div class="feed-card__image">
                <img src=feed.image.clone() alt=feed.title.clone() loading="lazy" />
            </div>
            <div class="feed-card__body">
                <div class="feed-card__title-row">
                    <h3>{feed.title.clone()}</h3>
                    <StatusBadge label=feed.status.label() />
                </div>
                <p class="feed-card__description">{feed.description.clone()}</p>
                <div class="feed-card__meta">
                    <div>{icon("calendar")}<span>{feed.date_time_label()}</span></div>
                    <div>{icon("map-pin")}<span>{feed.location.clone()}</span></div>
                </div>
                {published.map(|p| view! { <p class="feed-card__published">{p}</p> })}
                <div class="feed-card__actions">
                    <button class="button button--secondary button--small">{icon("edit")}" Edit"</button>
                    <button class="button button--danger button--small" title="Delete">{icon("trash")}</button>
                </div>
            </div>
        </div>
    }
}
