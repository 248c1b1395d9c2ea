use contracts::domain::a002_business::aggregate::names as business_names;
use contracts::domain::a003_perk::form::{AddPerkDraft, PerkCategory};
use contracts::shared::form::FormState;
use leptos::prelude::*;

use crate::shared::components::draft_field::{DraftField, DraftSelect, FieldKind};
use crate::shared::components::form_dialog::FormDialog;
use crate::shared::notifications::use_notifications;
use crate::shared::submission::{submit_form, ConsoleSink};

/// Perks are created on behalf of one of the listed businesses.
fn business_options() -> Vec<(&'static str, &'static str)> {
    business_names().into_iter().map(|n| (n, n)).collect()
}

fn category_options() -> Vec<(&'static str, &'static str)> {
    PerkCategory::all().into_iter().map(|c| (c.value(), c.label())).collect()
}

#[component]
pub fn AddPerkDialog(
    form: RwSignal<FormState<AddPerkDraft>>,
) -> impl IntoView {
    let sink = ConsoleSink::new(use_notifications());

    view! {
        <FormDialog
            title="Add New Perk"
            open=Signal::derive(move || form.with(|f| f.open))
            error=Signal::derive(move || form.with(|f| f.error.clone()))
            submit_label=Signal::derive(|| "Create Perk".to_string())
            on_close=Callback::new(move |_| form.update(|f| f.close()))
            on_submit=Callback::new(move |_| submit_form(form, &sink))
        >
            <p class="modal-description">"Create a new perk on behalf of a business"</p>

            <DraftSelect
                form=form
                label="Select Business"
                required=true
                placeholder="Choose a business"
                options=business_options()
                read=|d: &AddPerkDraft| d.business.clone()
                write=|d: &mut AddPerkDraft, v: String| d.business = v
            />
            <DraftField
                form=form
                label="Perk Title"
                required=true
                placeholder="e.g., 25% Off All Items"
                read=|d: &AddPerkDraft| d.title.clone()
                write=|d: &mut AddPerkDraft, v: String| d.title = v
            />
            <DraftSelect
                form=form
                label="Category"
                required=true
                placeholder="Select category"
                options=category_options()
                read=|d: &AddPerkDraft| d.category.map(|c| c.value().to_string()).unwrap_or_default()
                write=|d: &mut AddPerkDraft, v: String| d.category = PerkCategory::from_value(&v)
            />
            <DraftField
                form=form
                label="Description"
                kind=FieldKind::TextArea
                placeholder="Describe the perk details..."
                read=|d: &AddPerkDraft| d.description.clone()
                write=|d: &mut AddPerkDraft, v: String| d.description = v
            />
            <DraftField
                form=form
                label="Valid Until"
                kind=FieldKind::Date
                read=|d: &AddPerkDraft| d.valid_until.clone()
                write=|d: &mut AddPerkDraft, v: String| d.valid_until = v
            />
        </FormDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_stores() {
        assert_eq!(business_options().len(), 6);
        assert!(category_options().contains(&("food", "Food & Drink")));
    }
}
