use contracts::dashboards::d400_overview::dto::{overview, ActivityEntry, PendingApproval};
use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Dashboard overview: headline figures, recent activity and what is
/// waiting for a decision. All figures are fixed.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let data = overview();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard Overview"
                subtitle="Monitor your platform's key metrics and activity".to_string()
            />

            <div class="page__content">
                <div class="stat-grid">
                    {data
                        .stats
                        .iter()
                        .map(|s| {
                            view! {
                                <StatCard
                                    label=s.title.clone()
                                    value=s.value.clone()
                                    change=s.change.clone()
                                    subtitle="from last month"
                                    icon_name=s.icon.clone()
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="dashboard-grid">
                    <div class="card">
                        <h3 class="card__title">"Recent Activity"</h3>
                        <div class="activity-list">
                            {data.recent_activity.iter().map(activity_row).collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Pending Approvals"</h3>
                        <div class="approval-list">
                            {data.pending_approvals.iter().map(approval_row).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

fn activity_row(entry: &ActivityEntry) -> impl IntoView {
    view! {
        <div class="activity-item">
            <div class="activity-item__dot"></div>
            <div class="activity-item__text">
                <div>{entry.action.clone()}</div>
                <div class="activity-item__subject">{entry.subject.clone()}</div>
            </div>
            <div class="activity-item__time">{icon("clock")}{entry.time.clone()}</div>
        </div>
    }
}

fn approval_row(item: &PendingApproval) -> impl IntoView {
    view! {
        <div class="approval-item">
            <div>
                <div>{item.label.clone()}</div>
                <div class="approval-item__note">{item.note.clone()}</div>
            </div>
            <span class="badge badge--primary">{item.count}</span>
        </div>
    }
}
