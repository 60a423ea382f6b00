use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  trace,
  warn
};

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
pub enum TaskFilter {
  #[default]
  All,
  Active,
  Completed
}

impl TaskFilter {
  /// Display order of the filter
  /// buttons.
  pub const ALL: [TaskFilter; 3] = [
    TaskFilter::All,
    TaskFilter::Active,
    TaskFilter::Completed
  ];

  pub fn name(self) -> &'static str {
    match self {
      | TaskFilter::All => "All",
      | TaskFilter::Active => "Active",
      | TaskFilter::Completed => {
        "Completed"
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | TaskFilter::All => true,
      | TaskFilter::Active => {
        task.is_active()
      }
      | TaskFilter::Completed => {
        task.completed
      }
    }
  }

  /// Case-insensitive variant of
  /// `FromStr`, for typed input.
  pub fn parse_loose(
    raw: &str
  ) -> anyhow::Result<Self> {
    let wanted = raw.trim();
    Self::ALL
      .into_iter()
      .find(|filter| {
        filter
          .name()
          .eq_ignore_ascii_case(wanted)
      })
      .ok_or_else(|| unknown_filter(raw))
  }

  /// Clamps names outside the closed set
  /// to `All`.
  pub fn from_name_or_default(
    raw: &str
  ) -> Self {
    match raw.parse::<Self>() {
      | Ok(filter) => filter,
      | Err(error) => {
        warn!(%error, "falling back to All filter");
        Self::All
      }
    }
  }
}

impl fmt::Display for TaskFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for TaskFilter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|filter| filter.name() == s)
      .ok_or_else(|| unknown_filter(s))
  }
}

fn unknown_filter(
  raw: &str
) -> anyhow::Error {
  anyhow!(
    "unknown filter {raw:?}; expected \
     one of All, Active, Completed"
  )
}

/// Tasks passing `filter`, in their
/// original relative order.
pub fn visible_tasks(
  tasks: &[Task],
  filter: TaskFilter
) -> Vec<Task> {
  let visible: Vec<Task> = tasks
    .iter()
    .filter(|task| filter.matches(task))
    .cloned()
    .collect();
  trace!(
    %filter,
    total = tasks.len(),
    visible = visible.len(),
    "filtered tasks"
  );
  visible
}

pub fn visible_tasks_by_name(
  tasks: &[Task],
  filter_name: &str
) -> anyhow::Result<Vec<Task>> {
  let filter =
    filter_name.parse::<TaskFilter>()?;
  Ok(visible_tasks(tasks, filter))
}

#[cfg(test)]
mod tests {
  use super::{
    TaskFilter,
    visible_tasks,
    visible_tasks_by_name
  };
  use crate::task::{
    Task,
    default_seed
  };

  fn names(tasks: &[Task]) -> Vec<&str> {
    tasks
      .iter()
      .map(|task| task.name.as_str())
      .collect()
  }

  fn mixed() -> Vec<Task> {
    vec![
      Task::new("a", "one").completed(true),
      Task::new("b", "two"),
      Task::new("c", "three").completed(true),
      Task::new("d", "four"),
      Task::new("e", "five"),
    ]
  }

  #[test]
  fn active_keeps_open_tasks_in_order() {
    let seed = default_seed();
    let visible =
      visible_tasks(&seed, TaskFilter::Active);
    assert_eq!(names(&visible), ["Sleep", "Study"]);
  }

  #[test]
  fn active_and_completed_partition_all()
   {
    let tasks = mixed();
    let all =
      visible_tasks(&tasks, TaskFilter::All);
    let active =
      visible_tasks(&tasks, TaskFilter::Active);
    let completed = visible_tasks(
      &tasks,
      TaskFilter::Completed
    );

    assert_eq!(all, tasks);
    assert!(active.iter().all(|t| !t.completed));
    assert!(completed.iter().all(|t| t.completed));
    assert_eq!(names(&active), ["two", "four", "five"]);
    assert_eq!(names(&completed), ["one", "three"]);
    assert_eq!(
      active.len() + completed.len(),
      all.len()
    );
    for task in &all {
      assert!(
        active.contains(task)
          != completed.contains(task)
      );
    }
  }

  #[test]
  fn names_parse_exactly_and_in_display_order()
   {
    let parsed: Vec<TaskFilter> = ["All", "Active", "Completed"]
      .iter()
      .map(|name| name.parse().unwrap())
      .collect();
    assert_eq!(parsed, TaskFilter::ALL);
    assert!("active".parse::<TaskFilter>().is_err());
    assert!("Done".parse::<TaskFilter>().is_err());
  }

  #[test]
  fn loose_parse_ignores_case_and_padding()
   {
    assert_eq!(
      TaskFilter::parse_loose(" completed ")
        .unwrap(),
      TaskFilter::Completed
    );
    assert!(
      TaskFilter::parse_loose("later")
        .is_err()
    );
  }

  #[test]
  fn unknown_name_is_rejected_or_clamped()
   {
    let err = visible_tasks_by_name(
      &mixed(),
      "Someday"
    )
    .unwrap_err();
    assert!(err.to_string().contains("Someday"));
    assert_eq!(
      TaskFilter::from_name_or_default(
        "Someday"
      ),
      TaskFilter::All
    );
  }

  #[test]
  fn lookup_by_name_matches_enum() {
    let tasks = mixed();
    assert_eq!(
      visible_tasks_by_name(&tasks, "Completed")
        .unwrap(),
      visible_tasks(&tasks, TaskFilter::Completed)
    );
  }
}
