//! Original-work panel shown on the last step.

use leptos::*;

use crate::wizard::LookupPhase;

#[component]
pub fn OriginalWorkPanel(
    #[prop(into)] phase: Signal<LookupPhase>,
    on_select_another: Callback<()>,
) -> impl IntoView {
    move || match phase.get() {
        LookupPhase::Idle => ().into_view(),
        LookupPhase::Loading => view! {
            <div class="panel panel-loading">"Henter oplysninger om originalværket..."</div>
        }
        .into_view(),
        LookupPhase::Failed(failure) => view! {
            <div class="panel panel-error">{failure.message()}</div>
        }
        .into_view(),
        LookupPhase::Ready(work) => view! {
            <div class="panel panel-ready">
                <p class="panel-title">{format!("Du har valgt værket “{}”", work.title)}</p>
                <div class="panel-details">
                    <DescriptionItem label="Titel" value=work.title.clone()/>
                    <DescriptionItem label="Værknummer" value=work.work_number.clone()/>
                    <DescriptionItem label="Komponister/forfattere" value=work.composers_line()/>
                    <DescriptionItem label="Arrangør" value=work.arranger.clone()/>
                    <DescriptionItem label="Tekstforfatter" value=work.lyricist.clone()/>
                    <button class="btn btn-outlined btn-sm" on:click=move |_| on_select_another.call(())>
                        "Er det ikke det rigtige værk? Søg igen."
                    </button>
                </div>
            </div>
        }
        .into_view(),
    }
}

/// Label over value.
#[component]
pub fn DescriptionItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="description-item">
            <p class="description-label">{label}</p>
            <p class="description-value">{value}</p>
        </div>
    }
}
