use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        String,
  pub name:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  pub fn new(
    id: impl Into<String>,
    name: impl Into<String>
  ) -> Self {
    Self {
      id:        id.into(),
      name:      name.into(),
      completed: false
    }
  }

  pub fn completed(
    mut self,
    completed: bool
  ) -> Self {
    self.completed = completed;
    self
  }

  pub fn is_active(&self) -> bool {
    !self.completed
  }
}

/// The list every fresh session starts
/// from when no configuration overrides
/// it.
pub fn default_seed() -> Vec<Task> {
  vec![
    Task::new("todo-0", "Code")
      .completed(true),
    Task::new("todo-1", "Sleep"),
    Task::new("todo-2", "Study"),
  ]
}

#[cfg(test)]
mod tests {
  use super::{
    Task,
    default_seed
  };

  #[test]
  fn new_tasks_start_active() {
    let task = Task::new("todo-9", "Eat");
    assert!(!task.completed);
    assert!(task.is_active());
  }

  #[test]
  fn seed_record_without_completed_defaults_to_false()
   {
    let task: Task = serde_json::from_str(
      r#"{"id":"todo-7","name":"Walk"}"#
    )
    .unwrap();
    assert_eq!(
      task,
      Task::new("todo-7", "Walk")
    );
  }

  #[test]
  fn default_seed_matches_reference_list()
   {
    let seed = default_seed();
    let names: Vec<&str> = seed
      .iter()
      .map(|task| task.name.as_str())
      .collect();
    assert_eq!(
      names,
      ["Code", "Sleep", "Study"]
    );
    assert!(seed[0].completed);
    assert!(!seed[1].completed);
    assert!(!seed[2].completed);
  }
}
