use tracing::{
  debug,
  info
};

use crate::filter::{
  TaskFilter,
  visible_tasks
};
use crate::ids::{
  IdGenerator,
  RandomIds
};
use crate::store::TaskList;
use crate::task::Task;

/// A user action forwarded by a
/// front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
  ToggleCompleted(String),
  Delete(String),
  Edit { id: String, name: String },
  Add(String),
  SetFilter(TaskFilter)
}

/// Outcome of installing one intent.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Cycle {
  pub changed: bool
}

impl Cycle {
  pub fn unchanged() -> Self {
    Self { changed: false }
  }
}

/// Work a front-end runs once the view
/// for the current state is on screen.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PostRenderEffect {
  FocusHeading
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct FilterOption {
  pub filter:  TaskFilter,
  pub pressed: bool
}

/// Everything a front-end needs to draw
/// one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
  pub visible:   Vec<Task>,
  pub heading:   String,
  pub filters:   Vec<FilterOption>,
  pub total:     usize,
  pub active:    usize,
  pub completed: usize
}

pub fn heading_text(
  visible_count: usize
) -> String {
  let noun = if visible_count == 1 {
    "task"
  } else {
    "tasks"
  };
  format!("{visible_count} {noun} remaining")
}

/// Input boundary for new task names:
/// rejects empty and whitespace-only
/// input, passes anything else through
/// untouched.
pub fn accept_task_name(
  raw: &str
) -> Option<&str> {
  if raw.trim().is_empty() {
    None
  } else {
    Some(raw)
  }
}

pub fn filter_options(
  current: TaskFilter
) -> Vec<FilterOption> {
  TaskFilter::ALL
    .into_iter()
    .map(|filter| FilterOption {
      filter,
      pressed: filter == current
    })
    .collect()
}

/// Owned state of one running session:
/// the task snapshot, the selected
/// filter, and the visible count seen at
/// the end of the previous render.
///
/// Each event is a two-phase cycle:
/// `dispatch` installs the new state, the
/// front-end renders `view()`, then
/// `after_render` yields the effects that
/// depend on old-vs-new comparison.
pub struct TaskSession {
  tasks:            TaskList,
  filter:           TaskFilter,
  ids:              Box<dyn IdGenerator>,
  previous_visible: Option<usize>
}

impl std::fmt::Debug for TaskSession {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.debug_struct("TaskSession")
      .field("tasks", &self.tasks)
      .field("filter", &self.filter)
      .field(
        "previous_visible",
        &self.previous_visible
      )
      .finish_non_exhaustive()
  }
}

impl TaskSession {
  pub fn new(tasks: TaskList) -> Self {
    Self::with_ids(
      tasks,
      RandomIds::default()
    )
  }

  pub fn with_ids(
    tasks: TaskList,
    ids: impl IdGenerator + 'static
  ) -> Self {
    info!(
      tasks = tasks.len(),
      "task session started"
    );
    Self {
      tasks,
      filter: TaskFilter::default(),
      ids: Box::new(ids),
      previous_visible: None
    }
  }

  pub fn with_filter(
    mut self,
    filter: TaskFilter
  ) -> Self {
    self.filter = filter;
    self
  }

  pub fn tasks(&self) -> &TaskList {
    &self.tasks
  }

  pub fn filter(&self) -> TaskFilter {
    self.filter
  }

  pub fn visible(&self) -> Vec<Task> {
    visible_tasks(
      self.tasks.as_slice(),
      self.filter
    )
  }

  pub fn heading(&self) -> String {
    heading_text(self.visible().len())
  }

  pub fn view(&self) -> ViewState {
    let visible = self.visible();
    ViewState {
      heading: heading_text(visible.len()),
      visible,
      filters: filter_options(self.filter),
      total: self.tasks.len(),
      active: self.tasks.active_count(),
      completed: self.tasks.completed_count()
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn dispatch(
    &mut self,
    intent: TaskIntent
  ) -> Cycle {
    let next = match intent {
      | TaskIntent::ToggleCompleted(id) => {
        self.tasks.toggle_completed(&id)
      }
      | TaskIntent::Delete(id) => {
        self.tasks.delete(&id)
      }
      | TaskIntent::Edit { id, name } => {
        self.tasks.edit(&id, name)
      }
      | TaskIntent::Add(name) => {
        if accept_task_name(&name).is_none()
        {
          debug!("rejected blank task name on add");
          return Cycle::unchanged();
        }
        self.tasks.add(name, &mut *self.ids)
      }
      | TaskIntent::SetFilter(filter) => {
        let changed = filter != self.filter;
        self.filter = filter;
        debug!(%filter, "filter selected");
        return Cycle { changed };
      }
    };

    let changed = next != self.tasks;
    self.tasks = next;
    Cycle { changed }
  }

  pub fn toggle_task_completed(
    &mut self,
    id: &str
  ) -> Cycle {
    self.dispatch(
      TaskIntent::ToggleCompleted(
        id.to_string()
      )
    )
  }

  pub fn delete_task(
    &mut self,
    id: &str
  ) -> Cycle {
    self.dispatch(TaskIntent::Delete(
      id.to_string()
    ))
  }

  pub fn edit_task(
    &mut self,
    id: &str,
    new_name: &str
  ) -> Cycle {
    self.dispatch(TaskIntent::Edit {
      id:   id.to_string(),
      name: new_name.to_string()
    })
  }

  pub fn add_task(
    &mut self,
    name: &str
  ) -> Cycle {
    self.dispatch(TaskIntent::Add(
      name.to_string()
    ))
  }

  pub fn set_filter(
    &mut self,
    filter: TaskFilter
  ) -> Cycle {
    self.dispatch(TaskIntent::SetFilter(
      filter
    ))
  }

  /// Second phase of a cycle. Compares
  /// the visible count against the one
  /// recorded after the previous render,
  /// then records the current one.
  pub fn after_render(
    &mut self
  ) -> Vec<PostRenderEffect> {
    let current = self.visible().len();
    let previous = self
      .previous_visible
      .replace(current);

    match previous {
      | Some(previous)
        if current < previous =>
      {
        debug!(
          previous,
          current,
          "visible count dropped; focusing heading"
        );
        vec![PostRenderEffect::FocusHeading]
      }
      | _ => Vec::new()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{
    PostRenderEffect,
    TaskSession,
    accept_task_name,
    heading_text
  };
  use crate::filter::TaskFilter;
  use crate::ids::SequentialIds;
  use crate::store::TaskList;
  use crate::task::default_seed;

  fn session() -> TaskSession {
    let mut session = TaskSession::with_ids(
      TaskList::from_seed(default_seed())
        .unwrap(),
      SequentialIds::default()
    );
    assert!(session.after_render().is_empty());
    session
  }

  #[test]
  fn heading_pluralizes_on_anything_but_one()
   {
    assert_eq!(heading_text(0), "0 tasks remaining");
    assert_eq!(heading_text(1), "1 task remaining");
    assert_eq!(heading_text(2), "2 tasks remaining");
  }

  #[test]
  fn blank_names_are_rejected_at_the_boundary()
   {
    assert_eq!(accept_task_name("   "), None);
    assert_eq!(accept_task_name(""), None);
    assert_eq!(
      accept_task_name("  Eat "),
      Some("  Eat ")
    );
  }

  #[test]
  fn blank_add_changes_nothing() {
    let mut session = session();
    let before = session.tasks().clone();
    assert!(!session.add_task(" \t").changed);
    assert_eq!(session.tasks(), &before);
  }

  #[test]
  fn edit_forwards_any_name_to_the_store()
   {
    let mut session = session();
    assert!(session.edit_task("todo-1", "").changed);
    assert_eq!(
      session.tasks().get("todo-1").unwrap().name,
      ""
    );
    session.edit_task("todo-2", "  Nap  ");
    assert_eq!(
      session.tasks().get("todo-2").unwrap().name,
      "  Nap  "
    );
  }

  #[test]
  fn add_keeps_the_name_as_given() {
    let mut session = session();
    assert!(session.add_task("  Eat  ").changed);
    assert_eq!(
      session.tasks().get("todo-3").unwrap().name,
      "  Eat  "
    );
  }

  #[test]
  fn unknown_id_reports_unchanged() {
    let mut session = session();
    assert!(!session.delete_task("todo-99").changed);
    assert!(
      !session
        .toggle_task_completed("todo-99")
        .changed
    );
  }

  #[test]
  fn heading_follows_filtered_count() {
    let mut session = session();
    assert_eq!(session.heading(), "3 tasks remaining");
    session.set_filter(TaskFilter::Completed);
    assert_eq!(session.heading(), "1 task remaining");
  }

  #[test]
  fn exactly_one_filter_option_is_pressed()
   {
    let mut session = session();
    session.set_filter(TaskFilter::Active);
    let view = session.view();
    let pressed: Vec<TaskFilter> = view
      .filters
      .iter()
      .filter(|option| option.pressed)
      .map(|option| option.filter)
      .collect();
    assert_eq!(pressed, [TaskFilter::Active]);
    assert_eq!(view.filters.len(), 3);
    assert_eq!(view.total, 3);
    assert_eq!(view.active, 2);
    assert_eq!(view.completed, 1);
  }

  #[test]
  fn first_render_never_focuses() {
    let mut session = TaskSession::new(
      TaskList::from_seed(default_seed())
        .unwrap()
    );
    assert!(session.after_render().is_empty());
  }

  #[test]
  fn focus_fires_once_per_drop() {
    let mut session = session();
    session.delete_task("todo-2");
    assert_eq!(
      session.after_render(),
      [PostRenderEffect::FocusHeading]
    );
    // A render with no further change
    // compares against the new count.
    assert!(session.after_render().is_empty());
  }

  #[test]
  fn growth_and_equal_counts_do_not_focus()
   {
    let mut session = session();
    session.add_task("Eat");
    assert!(session.after_render().is_empty());
    session.edit_task("todo-3", "Eat lunch");
    assert!(session.after_render().is_empty());
  }

  #[test]
  fn narrowing_the_filter_counts_as_a_drop()
   {
    let mut session = session();
    session.set_filter(TaskFilter::Completed);
    assert_eq!(
      session.after_render(),
      [PostRenderEffect::FocusHeading]
    );
  }

  #[test]
  fn comparison_uses_count_from_last_render()
   {
    let mut session = session();
    // Two updates land before a render:
    // 3 -> 4 -> 3 compares 3 against 3.
    session.add_task("Eat");
    session.delete_task("todo-3");
    assert!(session.after_render().is_empty());
  }
}
