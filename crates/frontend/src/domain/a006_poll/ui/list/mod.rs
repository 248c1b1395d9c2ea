mod state;

use contracts::domain::a006_poll::aggregate::{store, Poll};
use contracts::domain::a006_poll::stats::PollStats;
use contracts::shared::list_query::filter_records;
use contracts::shared::selection::Selection;
use leptos::prelude::*;
use thaw::*;

use super::details::CreatePollDialog;
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
pub fn PollsList() -> impl IntoView {
    let state = create_state();
    let stats = PollStats::current();
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
        <PageFrame page_id="a006_poll--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Voting & Polls Management"
                subtitle="Create polls and view user responses".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Create Poll"
                </Button>
            </PageHeader>

            <CreatePollDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Polls" value=stats.total.to_string() icon_name="bar-chart" />
                    <StatCard label="Active Polls" value=stats.active.to_string() icon_name="eye" />
                    <StatCard label="Total Votes" value=format_count(stats.total_votes) icon_name="bar-chart" />
                    <StatCard label="Closed Polls" value=stats.closed.to_string() icon_name="bar-chart" />
                </div>

                <SearchInput value=state.search_query placeholder="Search polls..." />

                <div class="split-view">
                    <div class="split-view__main">
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Question"</TableHeaderCell>
                                        <TableHeaderCell>"Start Date"</TableHeaderCell>
                                        <TableHeaderCell>"End Date"</TableHeaderCell>
                                        <TableHeaderCell>"Votes"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || filtered.get()
                                        key=|p| p.id
                                        children=move |poll| {
                                            let row = StoredValue::new(poll.clone());
                                            let is_selected = move || {
                                                row.with_value(|p| state.selected.with(|s| s.is_selected(p)))
                                            };
                                            let description = (!poll.description.is_empty()).then(|| poll.description.clone());
                                            view! {
                                                <TableRow
                                                    class:table__row--selected=is_selected
                                                    on:click=move |_| row.with_value(|p| state.selected.update(|s| s.select(p)))
                                                >
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div>
                                                                <div style="font-weight: 500;">{poll.question.clone()}</div>
                                                                {description.map(|d| view! { <div class="table__secondary">{d}</div> })}
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell><TableCellLayout>{poll.start_date.to_string()}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{poll.end_date.to_string()}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{poll.total_votes}</TableCellLayout></TableCell>
                                                    <TableCell>
                                                        <TableCellLayout><StatusBadge label=poll.status.label() /></TableCellLayout>
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

                        <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="polls" />
                    </div>

                    <div class="split-view__side">
                        <PollResults selected=state.selected />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn PollResults(selected: RwSignal<Selection<Poll>>) -> impl IntoView {
    view! {
        <div class="detail-panel">
            {move || match selected.with(|s| s.get().cloned()) {
                Some(poll) => {
                    let description = (!poll.description.is_empty()).then(|| poll.description.clone());
                    let options = poll
                        .options
                        .iter()
                        .map(|option| {
                            let share = poll.option_share(option);
                            let caption = format!("{} ({})", option.votes, poll.option_share_label(option));
                            view! {
                                <div class="poll-option">
                                    <div class="poll-option__row">
                                        <span>{option.text.clone()}</span>
                                        <span class="poll-option__votes">{caption}</span>
                                    </div>
                                    <div class="progress">
                                        <div class="progress__bar" style=format!("width: {:.1}%;", share)></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="detail-panel__body">
                            <div class="detail-panel__header">
                                <h3>"Poll Results"</h3>
                                <StatusBadge label=poll.status.label() />
                            </div>
                            <p class="detail-panel__subtitle">{poll.question.clone()}</p>
                            {description.map(|d| view! { <p class="detail-panel__subtitle">{d}</p> })}

                            <div class="detail-panel__total">
                                <span>"Total Votes"</span>
                                <strong>{format_count(poll.total_votes as u64)}</strong>
                            </div>
                            <div class="poll-options">{options}</div>

                            <div class="detail-panel__totals">
                                <div class="detail-panel__total">
                                    <span>"Start Date"</span>
                                    <span>{poll.start_date.to_string()}</span>
                                </div>
                                <div class="detail-panel__total">
                                    <span>"End Date"</span>
                                    <span>{poll.end_date.to_string()}</span>
                                </div>
                                <div class="detail-panel__total">
                                    <span>"Created"</span>
                                    <span>{poll.created_date.to_string()}</span>
                                </div>
                            </div>

                            <div class="detail-panel__actions">
                                <button class="button button--primary">{icon("bar-chart")}" View Detailed Analytics"</button>
                                <button class="button button--secondary">{icon("edit")}" Edit Poll"</button>
                            </div>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <div class="detail-panel__placeholder">
                        {icon("bar-chart")}
                        <p>"Select a poll to view results"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
