//! Task Input Form Component
//!
//! Text field plus "Add Task" button. Click and Enter both submit.

use leptos::prelude::*;

use crate::context::use_task_controller;
use crate::signals::InputSignal;

/// Enter submits, except when it commits an IME composition
fn is_submit_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

#[component]
pub fn TaskInputForm(input: InputSignal) -> impl IntoView {
    let controller = use_task_controller();
    let on_enter = controller.clone();

    view! {
        <div class="input-row">
            <input
                id="task-input"
                type="text"
                placeholder="Enter a new task"
                prop:value=move || input.signal().get()
                on:input=move |ev| input.signal().set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if is_submit_key(&ev.key(), ev.is_composing()) {
                        if let Err(err) = on_enter.submit_input() {
                            log::debug!("Submission rejected: {}", err);
                        }
                    }
                }
            />
            <button
                id="add-task-btn"
                on:click=move |_| {
                    if let Err(err) = controller.submit_input() {
                        log::debug!("Submission rejected: {}", err);
                    }
                }
            >
                "Add Task"
            </button>
        </div>
    }
}
