use crate::projections::p910_case_support_360::ui::widget::CaseSupport360;
use leptos::prelude::*;
use thaw::*;

/// Application shell
///
/// Plays the host-environment role for the widget: owns the reactive case id
/// binding and passes it down. The id stays `None` until a case is opened;
/// the widget itself never mutates it.
#[component]
pub fn App() -> impl IntoView {
    let case_id = RwSignal::new(None::<String>);
    let (case_input, set_case_input) = signal(String::new());

    let open_case = move |_| {
        let value = case_input.get();
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            case_id.set(Some(trimmed.to_string()));
        }
    };

    view! {
        <div class="app">
            <div style="display: flex; align-items: center; gap: 12px; padding: 16px; border-bottom: 1px solid #dee2e6;">
                <h2 style="margin: 0;">"Case Support 360"</h2>
                <input
                    placeholder="Case ID"
                    style="padding: 6px 10px; border: 1px solid #ccc; border-radius: 4px;"
                    prop:value=move || case_input.get()
                    on:input=move |ev| set_case_input.set(event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Primary on_click=open_case>
                    "Открыть"
                </Button>
            </div>

            <div style="padding: 16px;">
                <CaseSupport360 case_id=case_id />
            </div>
        </div>
    }
}
