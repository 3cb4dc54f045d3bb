//! Task List Component
//!
//! One `<li>` per rendered entry, each with its own remove button.

use leptos::prelude::*;

use crate::context::use_task_controller;
use crate::signals::TaskListView;

#[component]
pub fn TaskListItems(list: TaskListView) -> impl IntoView {
    let controller = use_task_controller();

    view! {
        <ul id="task-list">
            <For
                each=move || list.entries().get()
                key=|entry| entry.handle
                children=move |entry| {
                    let controller = controller.clone();
                    let handle = entry.handle;
                    view! {
                        <li>
                            <span class="task-text">{entry.task.text}</span>
                            <button
                                class="remove-btn"
                                on:click=move |_| {
                                    controller.remove(handle);
                                }
                            >
                                "Remove"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
