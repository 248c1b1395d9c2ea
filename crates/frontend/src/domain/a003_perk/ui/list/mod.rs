mod state;

use contracts::domain::a003_perk::aggregate::store;
use contracts::domain::a003_perk::stats::PerkStats;
use contracts::shared::list_query::filter_records;
use leptos::prelude::*;
use thaw::*;

use super::details::AddPerkDialog;
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
pub fn PerksList() -> impl IntoView {
    let state = create_state();
    let stats = PerkStats::current();
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
        <PageFrame page_id="a003_perk--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Perks Management"
                subtitle="Manage and create perks for businesses".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Add New Perk"
                </Button>
            </PageHeader>

            <AddPerkDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Perks" value=stats.total.to_string() icon_name="gift" />
                    <StatCard label="Active Perks" value=stats.active.to_string() />
                    <StatCard label="Pending Review" value=stats.pending.to_string() />
                    <StatCard label="Total Redemptions" value=format_count(stats.redemptions) icon_name="trending-up" />
                </div>

                <SearchInput
                    value=state.search_query
                    placeholder="Search perks by title, business, or category..."
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Perk Title"</TableHeaderCell>
                                <TableHeaderCell>"Business"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Valid Until"</TableHeaderCell>
                                <TableHeaderCell>"Redeemed"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|p| p.id
                                children=move |perk| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div>
                                                        <div style="font-weight: 500;">{perk.title.clone()}</div>
                                                        <div class="table__secondary">{perk.description.clone()}</div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{perk.business.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{perk.category.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{perk.valid_until.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{perk.redeemed}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge label=perk.status.label() /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__actions">
                                                        <button class="button button--secondary button--small" title="View">{icon("eye")}</button>
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

                <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="perks" />
            </div>
        </PageFrame>
    }
}
