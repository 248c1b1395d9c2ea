use contracts::domain::a004_feed::form::AddFeedDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::shared::components::draft_field::{DraftField, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

/// Only the file name travels with the feed payload.
#[component]
pub fn AddFeedDialog(
    form: RwSignal<FormState<AddFeedDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    let on_image = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let name = input.files().and_then(|files| files.get(0)).map(|f| f.name());
        // cancelling the picker keeps the earlier image
        if name.is_some() {
            form.update(|f| f.edit(|d| d.image_name = name));
        }
    };

    view! {
        <FormDialog
            title="Create New Feed"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(|| "Publish Feed".to_string())
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
        >
            <p class="modal-description">"Add a new feed item for the home screen"</p>

            <div class="form__group">
                <label class="form__label">"Upload Image"</label>
                <div class="form__row">
                    <input type="file" accept="image/*" class="form__input" on:change=on_image />
                    {move || form.with(|f| f.draft.image_name.clone()).map(|name| view! {
                        <div class="image-preview" title=name>{icon("image")}</div>
                    })}
                </div>
            </div>

            <DraftField
                form=form
                label="Title"
                required=true
                placeholder="Feed title..."
                read=|d: &AddFeedDraft| d.title.clone()
                write=|d: &mut AddFeedDraft, v: String| d.title = v
            />
            <DraftField
                form=form
                label="Description"
                kind=FieldKind::TextArea
                required=true
                placeholder="Feed description..."
                read=|d: &AddFeedDraft| d.description.clone()
                write=|d: &mut AddFeedDraft, v: String| d.description = v
            />
            <div class="form__row">
                <DraftField
                    form=form
                    label="Date & Time"
                    kind=FieldKind::DateTime
                    read=|d: &AddFeedDraft| d.date_time.clone()
                    write=|d: &mut AddFeedDraft, v: String| d.date_time = v
                />
                <DraftField
                    form=form
                    label="Location"
                    placeholder="e.g., Riyadh, King Fahd District"
                    read=|d: &AddFeedDraft| d.location.clone()
                    write=|d: &mut AddFeedDraft, v: String| d.location = v
                />
            </div>
        </FormDialog>
    }
}
