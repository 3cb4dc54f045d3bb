//! Application Context
//!
//! The controller is built once in `App` and shared via Leptos context.

use leptos::prelude::*;

use crate::browser::{AlertNotifier, BrowserStorage};
use crate::controller::TaskListController;
use crate::signals::{InputSignal, TaskListView};

/// Controller wired to the signal-backed view and browser APIs
pub type WebTaskListController =
    TaskListController<InputSignal, TaskListView, BrowserStorage, AlertNotifier>;

/// Get the controller from context
pub fn use_task_controller() -> WebTaskListController {
    use_context::<WebTaskListController>().expect("TaskListController should be provided")
}
