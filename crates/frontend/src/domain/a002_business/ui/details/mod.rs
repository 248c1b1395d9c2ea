//! "Add New Business" dialog.

use contracts::domain::a002_business::form::{AddBusinessDraft, District, DocumentInfo};
use contracts::shared::form::FormState;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::shared::components::draft_field::{DraftField, DraftSelect, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

fn district_options() -> Vec<(&'static str, &'static str)> {
    District::all().into_iter().map(|d| (d.value(), d.label())).collect()
}

/// First file of the picker, if one was chosen.
fn picked_document(input: &HtmlInputElement) -> Option<DocumentInfo> {
    let file = input.files()?.get(0)?;
    Some(DocumentInfo {
        name: file.name(),
        size_bytes: file.size() as u64,
    })
}

#[component]
pub fn AddBusinessDialog(
    form: RwSignal<FormState<AddBusinessDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    let on_document = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let document = picked_document(&input);
        form.update(|f| f.edit(|d| d.document = document));
        // lets the same file be picked again after removing it
        input.set_value("");
    };

    let document = Memo::new(move |_| form.with(|f| f.draft.document.clone()));

    view! {
        <FormDialog
            title="Add New Business"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(|| "Add Business".to_string())
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
        >
            <p class="modal-description">"Enter business details to add a new business to the platform"</p>

            <DraftField
                form=form
                label="Business Name"
                required=true
                placeholder="Enter business name"
                read=|d: &AddBusinessDraft| d.name.clone()
                write=|d: &mut AddBusinessDraft, v: String| d.name = v
            />
            <DraftField
                form=form
                label="Email"
                kind=FieldKind::Email
                required=true
                placeholder="business@example.com"
                read=|d: &AddBusinessDraft| d.email.clone()
                write=|d: &mut AddBusinessDraft, v: String| d.email = v
            />
            <DraftField
                form=form
                label="Mobile Number"
                kind=FieldKind::Tel
                required=true
                placeholder="+966 XX XXX XXXX"
                read=|d: &AddBusinessDraft| d.mobile.clone()
                write=|d: &mut AddBusinessDraft, v: String| d.mobile = v
            />

            <div class="form__group">
                <label class="form__label">"Document Upload *"</label>
                {move || match document.get() {
                    None => view! {
                        <label class="file-drop">
                            {icon("upload")}
                            <span>"Click to upload document"</span>
                            <span class="file-drop__hint">"PDF, DOC, or DOCX (MAX. 10MB)"</span>
                            <input
                                type="file"
                                accept=".pdf,.doc,.docx"
                                class="hidden"
                                on:change=on_document
                            />
                        </label>
                    }.into_any(),
                    Some(doc) => view! {
                        <div class="file-chip">
                            {icon("upload")}
                            <div>
                                <div class="file-chip__name">{doc.name.clone()}</div>
                                <div class="file-chip__size">{doc.size_label()}</div>
                            </div>
                            <button
                                type="button"
                                class="button button--subtle"
                                on:click=move |_| form.update(|f| f.edit(|d| d.document = None))
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }.into_any(),
                }}
            </div>

            <DraftSelect
                form=form
                label="District"
                required=true
                placeholder="Select district"
                options=district_options()
                read=|d: &AddBusinessDraft| d.district.map(|x| x.value().to_string()).unwrap_or_default()
                write=|d: &mut AddBusinessDraft, v: String| d.district = District::from_value(&v)
            />
            <DraftField
                form=form
                label="Password"
                kind=FieldKind::Password
                required=true
                placeholder="Enter password"
                read=|d: &AddBusinessDraft| d.password.clone()
                write=|d: &mut AddBusinessDraft, v: String| d.password = v
            />
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_district_is_offered() {
        let options = district_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], ("king-fahd", "King Fahd District"));
    }
}
