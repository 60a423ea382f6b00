use uuid::Uuid;

pub const DEFAULT_ID_PREFIX: &str =
  "todo-";

/// Source of opaque task identifiers.
///
/// Implementations should not repeat
/// themselves; the store still re-draws
/// when a generated id is already taken.
pub trait IdGenerator {
  fn next_id(&mut self) -> String;
}

/// Prefixed random ids (`todo-<uuid>`),
/// used by the front-ends.
#[derive(Debug, Clone)]
pub struct RandomIds {
  prefix: String
}

impl RandomIds {
  pub fn new(
    prefix: impl Into<String>
  ) -> Self {
    Self {
      prefix: prefix.into()
    }
  }
}

impl Default for RandomIds {
  fn default() -> Self {
    Self::new(DEFAULT_ID_PREFIX)
  }
}

impl IdGenerator for RandomIds {
  fn next_id(&mut self) -> String {
    format!(
      "{}{}",
      self.prefix,
      Uuid::new_v4().simple()
    )
  }
}

/// Counter-backed ids (`todo-0`,
/// `todo-1`, ...). Deterministic, so tests
/// and scripted sessions can refer to new
/// tasks by id.
#[derive(Debug, Clone)]
pub struct SequentialIds {
  prefix: String,
  next:   u64
}

impl SequentialIds {
  pub fn new(
    prefix: impl Into<String>
  ) -> Self {
    Self {
      prefix: prefix.into(),
      next:   0
    }
  }

  pub fn starting_at(
    mut self,
    next: u64
  ) -> Self {
    self.next = next;
    self
  }
}

impl Default for SequentialIds {
  fn default() -> Self {
    Self::new(DEFAULT_ID_PREFIX)
  }
}

impl IdGenerator for SequentialIds {
  fn next_id(&mut self) -> String {
    let id =
      format!("{}{}", self.prefix, self.next);
    self.next = self.next.wrapping_add(1);
    id
  }
}
