use leptos::prelude::*;

use crate::shared::icons::icon;

/// Modal shell of the create dialogs. Closing keeps whatever was typed.
#[component]
pub fn FormDialog(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submit_label: Signal<String>,
    on_close: Callback<()>,
    on_submit: Callback<()>,
    /// Extra left-hand action, e.g. "Save as Draft".
    #[prop(optional)]
    secondary: Option<(&'static str, Callback<()>)>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">{title.get_value()}</h2>
                        <button class="button button--subtle" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>

                    <form
                        class="modal-body"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                        {children.with_value(|c| c())}

                        <div class="modal-footer">
                            {secondary.map(|(label, action)| view! {
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| action.run(())
                                >
                                    {label}
                                </button>
                            })}
                            <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button type="submit" class="button button--primary">
                                {move || submit_label.get()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
