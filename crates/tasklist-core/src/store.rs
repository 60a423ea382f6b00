use std::collections::HashSet;

use anyhow::bail;
use tracing::debug;

use crate::ids::IdGenerator;
use crate::task::Task;

/// Ordered snapshot of every task in a
/// session.
///
/// Operations never mutate the receiver;
/// each returns the next snapshot and the
/// caller decides whether to install it.
/// Unknown ids are not an error: the
/// returned snapshot is equal to the
/// receiver.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskList {
  tasks: Vec<Task>
}

impl TaskList {
  pub fn new() -> Self {
    Self::default()
  }

  #[tracing::instrument(skip(seed), fields(count = seed.len()))]
  pub fn from_seed(
    seed: Vec<Task>
  ) -> anyhow::Result<Self> {
    let mut seen = HashSet::new();
    for task in &seed {
      if !seen.insert(task.id.as_str()) {
        bail!(
          "duplicate task id in seed: {}",
          task.id
        );
      }
    }
    Ok(Self { tasks: seed })
  }

  pub fn add(
    &self,
    name: impl Into<String>,
    ids: &mut (impl IdGenerator + ?Sized)
  ) -> Self {
    let mut id = ids.next_id();
    while self.contains(&id) {
      debug!(%id, "generated id already taken; drawing again");
      id = ids.next_id();
    }

    let mut tasks = self.tasks.clone();
    tasks.push(Task::new(id, name));
    debug!(
      id = %tasks[tasks.len() - 1].id,
      len = tasks.len(),
      "added task"
    );
    Self { tasks }
  }

  pub fn toggle_completed(
    &self,
    id: &str
  ) -> Self {
    self.update(id, "toggled task", |task| {
      task.completed = !task.completed;
    })
  }

  pub fn edit(
    &self,
    id: &str,
    new_name: impl Into<String>
  ) -> Self {
    let new_name = new_name.into();
    self.update(id, "renamed task", move |task| {
      task.name = new_name;
    })
  }

  pub fn delete(
    &self,
    id: &str
  ) -> Self {
    if !self.contains(id) {
      debug!(%id, "delete: no matching task");
      return self.clone();
    }

    let tasks: Vec<Task> = self
      .tasks
      .iter()
      .filter(|task| task.id != id)
      .cloned()
      .collect();
    debug!(%id, len = tasks.len(), "deleted task");
    Self { tasks }
  }

  fn update(
    &self,
    id: &str,
    event: &'static str,
    apply: impl FnOnce(&mut Task)
  ) -> Self {
    let Some(pos) = self.position(id)
    else {
      debug!(%id, "{event}: no matching task");
      return self.clone();
    };

    let mut tasks = self.tasks.clone();
    apply(&mut tasks[pos]);
    debug!(
      %id,
      completed = tasks[pos].completed,
      "{event}"
    );
    Self { tasks }
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Task> {
    self.tasks.iter()
  }

  pub fn as_slice(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(
    &self,
    id: &str
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn contains(
    &self,
    id: &str
  ) -> bool {
    self.get(id).is_some()
  }

  pub fn position(
    &self,
    id: &str
  ) -> Option<usize> {
    self
      .tasks
      .iter()
      .position(|task| task.id == id)
  }

  pub fn completed_count(&self) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.completed)
      .count()
  }

  pub fn active_count(&self) -> usize {
    self.len() - self.completed_count()
  }
}
