//! KPI card

use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: MaybeSignal<String>,
    #[prop(default = "📊")]
    icon: &'static str,
    /// Small caption under the value
    #[prop(optional, into)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <div class="stat-label">{label}</div>
                <div class="stat-value">{move || value.get()}</div>
                {hint.map(|hint| view! { <div class="stat-hint">{hint}</div> })}
            </div>
        </div>
    }
}
