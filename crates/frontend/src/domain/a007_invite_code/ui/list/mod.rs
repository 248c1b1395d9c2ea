mod state;

use contracts::domain::a007_invite_code::aggregate::store;
use contracts::domain::a007_invite_code::stats::InviteCodeStats;
use contracts::shared::list_query::filter_records;
use leptos::prelude::*;
use thaw::*;

use super::details::GenerateInviteCodeDialog;
use crate::shared::clipboard::copy_with_feedback;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListFooter, SearchInput};
use crate::shared::number_format::format_count;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn InviteCodesList() -> impl IntoView {
    let state = create_state();
    let stats = InviteCodeStats::current();
    let total = store().len();
    let feedback_ms = use_config().ui.copy_feedback_ms;

    let filtered = Memo::new(move |_| {
        state.search_query.with(|q| {
            filter_records(store(), q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="a007_invite_code--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Invite Codes Management"
                subtitle="Generate and track invite code usage".to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| state.form.update(|f| f.open())
                >
                    {icon("plus")}
                    " Generate Invite Code"
                </Button>
            </PageHeader>

            <GenerateInviteCodeDialog form=state.form />

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total Codes" value=stats.total.to_string() />
                    <StatCard label="Active Codes" value=stats.active.to_string() />
                    <StatCard label="Total Uses" value=format_count(stats.total_uses) />
                    <StatCard label="Available Uses" value=format_count(stats.available_uses) />
                </div>

                <SearchInput value=state.search_query placeholder="Search invite codes..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Code"</TableHeaderCell>
                                <TableHeaderCell>"Created Date"</TableHeaderCell>
                                <TableHeaderCell>"Expiry Date"</TableHeaderCell>
                                <TableHeaderCell>"Usage Count"</TableHeaderCell>
                                <TableHeaderCell>"Max Uses"</TableHeaderCell>
                                <TableHeaderCell>"Created By"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|c| c.id
                                children=move |invite| {
                                    let code = StoredValue::new(invite.code.clone());
                                    let is_copied = move || {
                                        code.with_value(|c| state.copied.with(|copied| copied.as_deref() == Some(c.as_str())))
                                    };
                                    let bar_style = format!("width: {:.1}%;", invite.usage_share());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code class="invite-code">{invite.code.clone()}</code>
                                                    <button
                                                        class="button button--subtle button--small"
                                                        title="Copy code"
                                                        on:click=move |_| copy_with_feedback(code.get_value(), state.copied, feedback_ms)
                                                    >
                                                        {move || if is_copied() { icon("check") } else { icon("copy") }}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{invite.created_date.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{invite.expiry_date.to_string()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div>
                                                        <div>{invite.usage_count}</div>
                                                        <div class="progress progress--small">
                                                            <div class="progress__bar" style=bar_style></div>
                                                        </div>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{invite.max_uses}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{invite.created_by.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge label=invite.status.label() /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button class="button button--danger button--small" title="Delete">{icon("trash")}</button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <ListFooter shown=Signal::derive(move || filtered.with(|f| f.len())) total=total noun="invite codes" />
            </div>
        </PageFrame>
    }
}
