//! UI Components

mod task_input_form;
mod task_list_items;

pub use task_input_form::TaskInputForm;
pub use task_list_items::TaskListItems;
