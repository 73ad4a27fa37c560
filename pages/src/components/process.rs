use leptos::prelude::*;

use crate::content::PROCESS_STEPS;

/// Numbered "how it works" steps, numbered from 1 in table order.
#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="process">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"How it works"</p>
                    <h2 class="section-title">"From profile to closed round in four steps"</h2>
                </div>
                <ol class="process-steps">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| {
                            view! {
                                <li class="process-step reveal">
                                    <span class="step-number">{idx + 1}</span>
                                    <h3 class="step-title">{step.title}</h3>
                                    <p class="step-body">{step.body}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}
