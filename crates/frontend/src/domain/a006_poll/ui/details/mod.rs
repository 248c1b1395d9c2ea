use contracts::domain::a006_poll::form::CreatePollDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

use crate::shared::components::draft_field::{DraftField, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

#[component]
pub fn CreatePollDialog(
    form: RwSignal<FormState<CreatePollDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    // Rows are rebuilt only when options are added or removed, so typing
    // keeps focus.
    let option_count = Memo::new(move |_| form.with(|f| f.draft.options.len()));

    let option_rows = move || {
        let count = option_count.get();
        let removable = form.with_untracked(|f| f.draft.can_remove_options());
        (0..count)
            .map(|index| {
                view! {
                    <div class="form__row">
                        <input
                            class="form__input"
                            type="text"
                            placeholder=format!("Option {}", index + 1)
                            prop:value=move || {
                                form.with(|f| f.draft.options.get(index).cloned().unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                form.update(|f| f.edit(|d| d.update_option(index, text)));
                            }
                        />
                        {removable.then(|| view! {
                            <button
                                type="button"
                                class="button button--danger button--small"
                                on:click=move |_| form.update(|f| f.edit(|d| d.remove_option(index)))
                            >
                                {icon("x")}
                            </button>
                        })}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <FormDialog
            title="Create New Poll"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(|| "Create Poll".to_string())
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
        >
            <p class="modal-description">"Create a poll to gather feedback from users"</p>

            <DraftField
                form=form
                label="Poll Question"
                required=true
                placeholder="e.g., What features do you want next?"
                read=|d: &CreatePollDraft| d.question.clone()
                write=|d: &mut CreatePollDraft, v: String| d.question = v
            />
            <DraftField
                form=form
                label="Description (Optional)"
                kind=FieldKind::TextArea
                placeholder="Add context or details about this poll..."
                read=|d: &CreatePollDraft| d.description.clone()
                write=|d: &mut CreatePollDraft, v: String| d.description = v
            />

            <div class="form__group">
                <label class="form__label">"Poll Options *"</label>
                {option_rows}
                <button
                    type="button"
                    class="button button--secondary button--small"
                    on:click=move |_| form.update(|f| f.edit(|d| d.add_option()))
                >
                    {icon("plus")}" Add Option"
                </button>
            </div>

            <div class="form__row">
                <DraftField
                    form=form
                    label="Start Date"
                    kind=FieldKind::Date
                    required=true
                    read=|d: &CreatePollDraft| d.start_date.clone()
                    write=|d: &mut CreatePollDraft, v: String| d.start_date = v
                />
                <DraftField
                    form=form
                    label="End Date"
                    kind=FieldKind::Date
                    required=true
                    read=|d: &CreatePollDraft| d.end_date.clone()
                    write=|d: &mut CreatePollDraft, v: String| d.end_date = v
                />
            </div>
        </FormDialog>
    }
}
