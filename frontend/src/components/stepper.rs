//! Step progress indicator.

use leptos::*;

/// Visual state of one circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMark {
    Completed,
    Active,
    Pending,
}

impl StepMark {
    pub fn of(index: usize, current: usize) -> Self {
        if index < current {
            StepMark::Completed
        } else if index == current {
            StepMark::Active
        } else {
            StepMark::Pending
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            StepMark::Completed => "completed",
            StepMark::Active => "active",
            StepMark::Pending => "pending",
        }
    }
}

#[component]
pub fn Stepper(steps: usize, #[prop(into)] current: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stepper">
            {(1..=steps)
                .map(|index| {
                    let mark = move || StepMark::of(index, current.get());
                    view! {
                        <div class=move || format!("step-circle {}", mark().class())>
                            {move || {
                                if mark() == StepMark::Completed {
                                    "✓".to_string()
                                } else {
                                    index.to_string()
                                }
                            }}
                        </div>
                        {(index < steps)
                            .then(|| {
                                view! {
                                    <div class="step-line">
                                        <span class:completed=move || mark() == StepMark::Completed></span>
                                    </div>
                                }
                            })}
                    }
                })
                .collect_view()}
        </div>
    }
}
