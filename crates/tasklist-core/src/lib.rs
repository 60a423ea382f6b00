pub mod config;
pub mod filter;
pub mod ids;
pub mod store;
pub mod task;
pub mod view;

pub use config::AppConfig;
pub use filter::{
  TaskFilter,
  visible_tasks,
  visible_tasks_by_name
};
pub use ids::{
  IdGenerator,
  RandomIds,
  SequentialIds
};
pub use store::TaskList;
pub use task::{
  Task,
  default_seed
};
pub use view::{
  Cycle,
  FilterOption,
  PostRenderEffect,
  TaskIntent,
  TaskSession,
  ViewState,
  accept_task_name,
  heading_text
};
