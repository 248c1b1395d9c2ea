mod state;

use contracts::domain::a005_announcement::aggregate::store;
use contracts::domain::a005_announcement::stats::AnnouncementStats;
use contracts::shared::list_query::filter_records;
use leptos::prelude::*;
use thaw::*;

use super::details::CreateAnnouncementDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFooter, SearchInput};
use crate::shared::number_format::format_count;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn AnnouncementsList() -> impl IntoView {
    let state = create_state();
    let stats = AnnouncementStats::current();
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
        <PageFrame page_id="a005_announcement--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Announcements Management"
                subtitle="Create and manage platform announcements".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Create Announcement"
                </Button>
            </PageHeader>

            <CreateAnnouncementDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Sent" value=stats.sent.to_string() icon_name="bell" />
                    <StatCard label="Scheduled" value=stats.scheduled.to_string() icon_name="send" />
                    <StatCard label="Drafts" value=stats.drafts.to_string() icon_name="edit" />
                    <StatCard label="Total Views" value=format_count(stats.total_views) icon_name="eye" />
                </div>

                <SearchInput value=state.search_query placeholder="Search announcements..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Priority"</TableHeaderCell>
                                <TableHeaderCell>"Target Audience"</TableHeaderCell>
                                <TableHeaderCell>"Created Date"</TableHeaderCell>
                                <TableHeaderCell>"Scheduled"</TableHeaderCell>
                                <TableHeaderCell>"Views"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|a| a.id
                                children=move |item| {
                                    let scheduled = item
                                        .scheduled_date
                                        .map(|d| d.to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{item.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge label=item.priority.label() /></TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{item.target_audience.label()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{item.created_date.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{scheduled}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {(item.views > 0).then(|| icon("eye"))}
                                                    {format_count(item.views as u64)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge label=item.status.label() /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__actions">
                                                        <button class="button button--secondary button--small" title="Edit">{icon("edit")}</button>
                                                        <button class="button button--danger button--small" title="Delete">{icon("trash")}</button>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="announcements" />
            </div>
        </PageFrame>
    }
}
