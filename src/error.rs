use crate::data::JobId;
use thiserror::Error;

/// Why an instance cannot be handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
  #[error("need at least 2 jobs and 2 machines, got {number_jobs} jobs and {number_machines} machines")]
  Dimensions {
    number_jobs: usize,
    number_machines: usize,
  },

  #[error("job {job} has {found} processing times, expected {expected}")]
  RowLength {
    job: JobId,
    expected: usize,
    found: usize,
  },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
  #[error("invalid instance: {0}")]
  InvalidInstance(Violation),

  #[error("expected {expected} jobs, got {found}")]
  EmptyOrMismatchedInput { expected: usize, found: usize },
}
