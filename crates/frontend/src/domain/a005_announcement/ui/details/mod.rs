use contracts::domain::a005_announcement::aggregate::{Audience, Priority};
use contracts::domain::a005_announcement::form::CreateAnnouncementDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;

use crate::shared::components::draft_field::{DraftField, DraftSelect, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

fn priority_options() -> Vec<(&'static str, &'static str)> {
    Priority::all().into_iter().map(|p| (p.label(), p.label())).collect()
}

fn audience_options() -> Vec<(&'static str, &'static str)> {
    Audience::all().into_iter().map(|a| (a.label(), a.label())).collect()
}

#[component]
pub fn CreateAnnouncementDialog(
    form: RwSignal<FormState<CreateAnnouncementDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    // "Save as Draft" keeps the draft and only closes the dialog
    let save_draft = Callback::new(move |_| {
        log::debug!("announcement kept as draft");
        form.update(|f| f.close());
    });

    view! {
        <FormDialog
            title="Create New Announcement"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(move || form.with(|f| f.draft.submit_label().to_string()))
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
            secondary=("Save as Draft", save_draft)
        >
            <p class="modal-description">"Send announcements to your users"</p>

            <DraftField
                form=form
                label="Announcement Title"
                required=true
                placeholder="e.g., Platform Update"
                read=|d: &CreateAnnouncementDraft| d.title.clone()
                write=|d: &mut CreateAnnouncementDraft, v: String| d.title = v
            />
            <DraftField
                form=form
                label="Message"
                kind=FieldKind::TextArea
                required=true
                placeholder="Write your announcement message..."
                read=|d: &CreateAnnouncementDraft| d.message.clone()
                write=|d: &mut CreateAnnouncementDraft, v: String| d.message = v
            />
            <div class="form__row">
                <DraftSelect
                    form=form
                    label="Priority"
                    options=priority_options()
                    read=|d: &CreateAnnouncementDraft| d.priority.label().to_string()
                    write=|d: &mut CreateAnnouncementDraft, v: String| {
                        if let Some(p) = Priority::from_label(&v) {
                            d.priority = p;
                        }
                    }
                />
                <DraftSelect
                    form=form
                    label="Target Audience"
                    options=audience_options()
                    read=|d: &CreateAnnouncementDraft| d.target_audience.label().to_string()
                    write=|d: &mut CreateAnnouncementDraft, v: String| {
                        if let Some(a) = Audience::from_label(&v) {
                            d.target_audience = a;
                        }
                    }
                />
            </div>
            <DraftField
                form=form
                label="Schedule Date (Optional)"
                kind=FieldKind::DateTime
                read=|d: &CreateAnnouncementDraft| d.scheduled_date.clone()
                write=|d: &mut CreateAnnouncementDraft, v: String| d.scheduled_date = v
            />
            <p class="form__hint">"Leave empty to send immediately"</p>

            <label class="form__switch">
                <div>
                    <div class="form__label">"Send Push Notification"</div>
                    <div class="form__hint">"Notify users via push notification"</div>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.draft.push_notification)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.edit(|d| d.push_notification = checked));
                    }
                />
            </label>
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_map_back() {
        for (value, _) in priority_options() {
            assert!(Priority::from_label(value).is_some());
        }
        for (value, _) in audience_options() {
            assert!(Audience::from_label(value).is_some());
        }
    }
}
