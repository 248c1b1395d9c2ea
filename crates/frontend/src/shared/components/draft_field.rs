//! Inputs bound straight to a field of a create-dialog draft.

use contracts::shared::form::{FormDraft, FormState};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Password,
    Date,
    DateTime,
    Number,
    TextArea,
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime-local",
            FieldKind::Number => "number",
        }
    }
}

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[component]
pub fn DraftField<D>(
    form: RwSignal<FormState<D>>,
    label: &'static str,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
    #[prop(optional)] kind: FieldKind,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    D: FormDraft + Send + Sync + 'static,
{
    let value = move || form.with(|f| read(&f.draft));
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| f.edit(|d| write(d, text)));
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label_text(label, required)}</label>
            {if kind == FieldKind::TextArea {
                view! {
                    <textarea
                        class="form__input"
                        rows="3"
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    />
                }.into_any()
            } else {
                view! {
                    <input
                        class="form__input"
                        type=kind.input_type()
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    />
                }.into_any()
            }}
        </div>
    }
}

/// Drop-down over a closed set of `(value, label)` options.
#[component]
pub fn DraftSelect<D>(
    form: RwSignal<FormState<D>>,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    read: fn(&D) -> String,
    write: fn(&mut D, String),
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    D: FormDraft + Send + Sync + 'static,
{
    view! {
        <div class="form__group">
            <label class="form__label">{label_text(label, required)}</label>
            <select
                class="form__input"
                prop:value=move || form.with(|f| read(&f.draft))
                on:change=move |ev| {
                    let picked = event_target_value(&ev);
                    form.update(|f| f.edit(|d| write(d, picked)));
                }
            >
                {(!placeholder.is_empty()).then(|| view! { <option value="">{placeholder}</option> })}
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_starred() {
        assert_eq!(label_text("Email", true), "Email *");
        assert_eq!(label_text("Location", false), "Location");
    }

    #[test]
    fn input_types() {
        assert_eq!(FieldKind::DateTime.input_type(), "datetime-local");
        assert_eq!(FieldKind::default().input_type(), "text");
    }
}
