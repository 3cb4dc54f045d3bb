//! Task List Frontend App

use leptos::prelude::*;

use crate::browser::{AlertNotifier, BrowserStorage};
use crate::components::{TaskInputForm, TaskListItems};
use crate::config::AppConfig;
use crate::controller::TaskListController;
use crate::signals::{InputSignal, TaskListView};
use crate::storage::TaskStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let input = InputSignal::new();
    let list = TaskListView::new();

    let controller = TaskListController::new(
        input,
        list,
        TaskStore::new(BrowserStorage, config.storage_key),
        AlertNotifier,
    );

    // Restore persisted tasks before first render
    controller.load_all();

    provide_context(controller);

    view! {
        <div class="container">
            <h1>"To-Do List"</h1>

            <TaskInputForm input=input />

            <TaskListItems list=list />

            <p class="task-count">{move || format!("{} tasks", list.len())}</p>
        </div>
    }
}
