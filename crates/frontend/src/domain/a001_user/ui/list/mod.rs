mod state;

use contracts::domain::a001_user::aggregate::{awaiting_store, registered_store, PendingUser};
use contracts::domain::a001_user::decision::{submit_decision, Decision};
use contracts::domain::a001_user::stats::UserStats;
use contracts::shared::list_query::filter_records;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFooter, SearchInput};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::submission::ConsoleSink;
use state::{create_state, UserTab};

#[component]
pub fn UsersList() -> impl IntoView {
    let state = create_state();
    let stats = UserStats::current();

    let tab_class = move |tab: UserTab| {
        if state.tab.get() == tab {
            "tabs__item tabs__item--active"
        } else {
            "tabs__item"
        }
    };

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Users Management"
                subtitle="Manage registered users and approval requests".to_string()
            />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Registered Users" value=stats.registered.to_string() icon_name="users" />
                    <StatCard label="Active" value=stats.active.to_string() />
                    <StatCard label="Awaiting Approval" value=stats.awaiting.to_string() />
                </div>

                <div class="tabs">
                    <button class=move || tab_class(UserTab::Registered) on:click=move |_| state.tab.set(UserTab::Registered)>
                        "Registered Users"
                    </button>
                    <button class=move || tab_class(UserTab::Awaiting) on:click=move |_| state.tab.set(UserTab::Awaiting)>
                        "Awaiting Approval"
                        <span class="badge badge--primary">{stats.awaiting}</span>
                    </button>
                </div>

                {move || match state.tab.get() {
                    UserTab::Registered => view! { <RegisteredUsers query=state.registered_query /> }.into_any(),
                    UserTab::Awaiting => view! { <AwaitingUsers query=state.awaiting_query /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn RegisteredUsers(query: RwSignal<String>) -> impl IntoView {
    let total = registered_store().len();
    let filtered = Memo::new(move |_| {
        query.with(|q| {
            filter_records(registered_store(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <SearchInput value=query placeholder="Search users by name, email, or phone..." />

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Phone"</TableHeaderCell>
                        <TableHeaderCell>"Join Date"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || filtered.get()
                        key=|u| u.id
                        children=move |user| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style="font-weight: 500;">{user.name.clone()}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{user.phone.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{user.join_date.to_string()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout><StatusBadge label=user.status.label() /></TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <div class="table__actions">
                                                <button class="button button--secondary button--small">{icon("eye")}" View"</button>
                                                <button class="button button--secondary button--small">{icon("mail")}" Contact"</button>
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

        <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="users" />
    }
}

#[component]
fn AwaitingUsers(query: RwSignal<String>) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());
    let total = awaiting_store().len();
    let filtered = Memo::new(move |_| {
        query.with(|q| {
            filter_records(awaiting_store(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let decide = move |user: &PendingUser, decision: Decision| {
        if let Err(e) = submit_decision(user, decision, &sink) {
            log::error!("decision for user {} not sent: {}", user.id, e);
        }
    };

    view! {
        <SearchInput value=query placeholder="Search pending users..." />

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Phone"</TableHeaderCell>
                        <TableHeaderCell>"Applied Date"</TableHeaderCell>
                        <TableHeaderCell>"Reason"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || filtered.get()
                        key=|u| u.id
                        children=move |user| {
                            let approve_user = user.clone();
                            let reject_user = user.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style="font-weight: 500;">{user.name.clone()}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{user.phone.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{user.applied_date.to_string()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout><StatusBadge label=user.reason.label() /></TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <div class="table__actions">
                                                <button
                                                    class="button button--primary button--small"
                                                    on:click=move |_| decide(&approve_user, Decision::Approve)
                                                >
                                                    {icon("check")}" Approve"
                                                </button>
                                                <button
                                                    class="button button--danger button--small"
                                                    on:click=move |_| decide(&reject_user, Decision::Reject)
                                                >
                                                    {icon("x")}" Reject"
                                                </button>
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

        <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="pending users" />
    }
}
