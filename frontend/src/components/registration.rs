//! Registration wizard page.
//!
//! Owns one [`RegistrationFlow`] in a signal for the lifetime of the page and
//! runs the async work it asks for. Leaving the page tears the flow down.

use futures::StreamExt;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use super::{Hero, InputField, OriginalWorkPanel, Stepper};
use crate::config::STEP_COUNT;
use crate::services::BackendClient;
use crate::wizard::{FlowCommand, RegistrationFlow, Step};

type Flow = RegistrationFlow<BackendClient, BackendClient>;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let client = BackendClient::default();
    let flow = create_rw_signal(Flow::new(client.clone(), client));
    let navigate = store_value(use_navigate());

    on_cleanup(move || {
        flow.try_update(|f| f.teardown());
    });

    let step = create_memo(move |_| flow.with(|f| f.step()));
    let fields = create_memo(move |_| flow.with(|f| f.visible_fields()));
    let phase = Signal::derive(move || flow.with(|f| f.lookup_phase().clone()));
    let banner = move || flow.with(|f| f.state().submission_error().map(str::to_string));
    let is_loading = move || flow.with(|f| f.state().is_loading());

    let on_next = move |_| {
        if let Some(command) = flow.try_update(|f| f.next()) {
            run_command(flow, command, navigate);
        }
    };
    let on_back = move |_| {
        flow.update(|f| {
            f.back();
        });
    };
    let select_another = Callback::new(move |_: ()| {
        flow.update(|f| {
            f.back();
        });
    });

    view! {
        <div class="container">
            <Hero/>

            <Stepper steps=STEP_COUNT current=Signal::derive(move || step.get().number())/>

            <section class="wizard-card">
                <div class="wizard-heading">
                    <h2>{move || step.get().title()}</h2>
                    <p class="wizard-description">{move || step.get().description()}</p>
                </div>

                <div class="wizard-body">
                    <Show when=move || step.get() == Step::OriginalWork>
                        <OriginalWorkPanel phase=phase on_select_another=select_another/>
                    </Show>

                    {move || {
                        fields
                            .get()
                            .iter()
                            .map(|&field| {
                                let value = Signal::derive(move || {
                                    flow.with(|f| f.state().form().get(field).to_string())
                                });
                                let error = Signal::derive(move || {
                                    flow.with(|f| f.state().field_error(field).map(str::to_string))
                                });
                                let on_input = Callback::new(move |value: String| {
                                    flow.update(|f| f.update_field(field, value))
                                });
                                view! { <InputField field=field value=value error=error on_input=on_input/> }
                            })
                            .collect_view()
                    }}
                </div>

                {move || banner().map(|message| view! { <p class="banner banner-error">{message}</p> })}

                <div class="wizard-actions">
                    <button
                        class="btn btn-text"
                        on:click=on_back
                        disabled=move || !flow.with(|f| f.can_go_back())
                    >
                        "Tilbage"
                    </button>
                    <button
                        class="btn btn-primary"
                        class:loading=is_loading
                        on:click=on_next
                        disabled=move || !flow.with(|f| f.can_advance())
                    >
                        {move || step.get().advance_label()}
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Run the async work requested by the flow and feed results back into it.
/// A disposed signal means the page is gone, so results are dropped.
fn run_command<N>(flow: RwSignal<Flow>, command: FlowCommand, navigate: StoredValue<N>)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    match command {
        FlowCommand::None => {}
        FlowCommand::RunLookup {
            mut subscription,
            task,
        } => {
            spawn_local(task);
            spawn_local(async move {
                let generation = subscription.generation();
                while let Some(status) = subscription.next().await {
                    if flow
                        .try_update(|f| f.on_lookup_status(generation, status))
                        .is_none()
                    {
                        subscription.cancel();
                        break;
                    }
                }
            });
        }
        FlowCommand::RunSubmission(task) => {
            spawn_local(async move {
                let result = task.await;
                if let Some(Some(navigation)) = flow.try_update(|f| f.on_submission_result(result)) {
                    let path = navigation.path();
                    log::info!("➡️  Navigating to {}", path);
                    navigate.try_with_value(|go| go(&path, NavigateOptions::default()));
                }
            });
        }
    }
}
