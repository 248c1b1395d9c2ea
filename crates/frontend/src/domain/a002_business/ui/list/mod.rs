mod state;

use contracts::domain::a002_business::aggregate::{store, Business};
use contracts::domain::a002_business::stats::BusinessStats;
use contracts::shared::list_query::filter_records;
use contracts::shared::selection::Selection;
use leptos::prelude::*;
use thaw::*;

use super::details::AddBusinessDialog;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFooter, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn BusinessesList() -> impl IntoView {
    let state = create_state();
    let stats = BusinessStats::current();
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
        <PageFrame page_id="a002_business--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Businesses Management"
                subtitle="View and manage registered businesses".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Add New Business"
                </Button>
            </PageHeader>

            <AddBusinessDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Businesses" value=stats.total.to_string() icon_name="building" />
                    <StatCard label="Active" value=stats.active.to_string() />
                    <StatCard label="Pending" value=stats.pending.to_string() />
                    <StatCard label="Perks Offered" value=stats.total_perks.to_string() icon_name="gift" />
                </div>

                <SearchInput
                    value=state.search_query
                    placeholder="Search businesses by name, category, or location..."
                />

                <div class="split-view">
                    <div class="split-view__main table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Business Name"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Location"</TableHeaderCell>
                                    <TableHeaderCell>"Perks"</TableHeaderCell>
                                    <TableHeaderCell>"Rating"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || filtered.get()
                                    key=|b| b.id
                                    children=move |business| {
                                        let row = StoredValue::new(business.clone());
                                        let is_selected = move || {
                                            row.with_value(|b| state.selected.with(|s| s.is_selected(b)))
                                        };
                                        view! {
                                            <TableRow
                                                class:table__row--selected=is_selected
                                                on:click=move |_| row.with_value(|b| state.selected.update(|s| s.select(b)))
                                            >
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{business.name.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="badge badge--neutral">{business.category.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout truncate=true>{business.location.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{business.perks_count}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{icon("star")}" "{business.rating}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout><StatusBadge label=business.status.label() /></TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <button class="button button--secondary button--small">{icon("eye")}" View"</button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <div class="split-view__side">
                        <BusinessDetails selected=state.selected />
                    </div>
                </div>

                <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="businesses" />
            </div>
        </PageFrame>
    }
}

/// Detail panel of the selected business. Stays on the last pick even when
/// the search hides its row.
#[component]
fn BusinessDetails(selected: RwSignal<Selection<Business>>) -> impl IntoView {
    view! {
        <div class="detail-panel">
            <div class="detail-panel__header">
                <h3>"Business Details"</h3>
                <p class="detail-panel__subtitle">"Selected business information"</p>
            </div>
            {move || match selected.with(|s| s.get().cloned()) {
                Some(b) => view! {
                    <div class="detail-panel__body">
                        <h4>{b.name.clone()}</h4>
                        <span class="badge badge--neutral">{b.category.clone()}</span>

                        <div class="detail-panel__rows">
                            <DetailRow icon_name="map-pin" label="Location" value=b.location.clone() />
                            <DetailRow icon_name="phone" label="Phone" value=b.contact.clone() />
                            <DetailRow icon_name="mail" label="Email" value=b.email.clone() />
                            <DetailRow icon_name="star" label="Rating" value=format!("{} / 5.0", b.rating) />
                        </div>

                        <div class="detail-panel__totals">
                            <div class="detail-panel__total">
                                <span>"Active Perks"</span>
                                <strong>{b.perks_count}</strong>
                            </div>
                            <div class="detail-panel__total">
                                <span>"Join Date"</span>
                                <span>{b.join_date.to_string()}</span>
                            </div>
                        </div>

                        <div class="detail-panel__actions">
                            <button class="button button--primary">"View All Perks"</button>
                            <button class="button button--secondary">"Edit Business"</button>
                            <button class="button button--secondary">"Contact Business"</button>
                        </div>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="detail-panel__placeholder">
                        {icon("eye")}
                        <p>"Select a business to view details"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DetailRow(icon_name: &'static str, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            {icon(icon_name)}
            <div>
                <div class="detail-row__label">{label}</div>
                <div class="detail-row__value">{value}</div>
            </div>
        </div>
    }
}
