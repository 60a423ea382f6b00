mod filter_bar;
mod filter_button;
mod task_form;
mod todo_item;

pub use filter_bar::FilterBar;
pub use filter_button::FilterButton;
pub use task_form::TaskForm;
pub use todo_item::TodoItem;
