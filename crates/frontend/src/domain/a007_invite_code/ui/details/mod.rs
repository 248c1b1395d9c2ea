use contracts::domain::a007_invite_code::form::GenerateInviteCodeDraft;
use contracts::shared::form::FormState;
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::shared::components::draft_field::{DraftField, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

/// Seeded from the browser's Math.random, there is no OS entropy in wasm.
fn browser_rng() -> StdRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    StdRng::seed_from_u64(seed)
}

#[component]
pub fn GenerateInviteCodeDialog(
    form: RwSignal<FormState<GenerateInviteCodeDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    let fill_random = move |_| {
        let mut rng = browser_rng();
        form.update(|f| f.edit(|d| d.fill_random_code(&mut rng)));
    };

    view! {
        <FormDialog
            title="Generate New Invite Code"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(|| "Generate Code".to_string())
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
        >
            <p class="modal-description">"Create a new invite code for user registration"</p>

            <div class="form__row form__row--end">
                <DraftField
                    form=form
                    label="Invite Code"
                    required=true
                    placeholder="e.g., SAUDI2025"
                    read=|d: &GenerateInviteCodeDraft| d.code.clone()
                    write=|d: &mut GenerateInviteCodeDraft, v: String| d.set_code(&v)
                />
                <button type="button" class="button button--secondary" on:click=fill_random>
                    {icon("shuffle")}" Generate"
                </button>
            </div>
            <p class="form__hint">"Use alphanumeric characters only (A-Z, 0-9)"</p>

            <DraftField
                form=form
                label="Maximum Uses"
                kind=FieldKind::Number
                required=true
                placeholder="100"
                read=|d: &GenerateInviteCodeDraft| d.max_uses.clone()
                write=|d: &mut GenerateInviteCodeDraft, v: String| d.max_uses = v
            />
            <DraftField
                form=form
                label="Expiry Date"
                kind=FieldKind::Date
                read=|d: &GenerateInviteCodeDraft| d.expiry_date.clone()
                write=|d: &mut GenerateInviteCodeDraft, v: String| d.expiry_date = v
            />
        </FormDialog>
    }
}
