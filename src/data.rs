use crate::error::{InstanceError, Violation};
use num_traits::{Bounded, CheckedAdd, Zero};
use std::fmt::{Debug, Display};
use std::ops::Add;

pub type JobId = usize;

/// Anything a processing time can be measured in: the engine only needs
/// addition, comparison, a zero and an upper bound.
pub trait ProcessingTime:
  Copy + PartialOrd + Add<Output = Self> + Zero + Bounded + Debug + Display
{
}

impl<T> ProcessingTime for T where
  T: Copy + PartialOrd + Add<Output = T> + Zero + Bounded + Debug + Display
{
}

/// Maximum of two values under `PartialOrd`.
#[inline]
pub fn later<T: ProcessingTime>(a: T, b: T) -> T {
  if a > b {
    return a;
  }
  return b;
}

/// Addition that reports when the result no longer fits. Every completion
/// time the engine computes is bounded by the sum of all processing times, so
/// a loader that checks that sum rules out overflow inside the solve.
pub trait CheckedTotal: Sized {
  fn checked_total(self, other: Self) -> Option<Self>;
}

macro_rules! checked_total_int {
  ($($t:ty),*) => {
    $(impl CheckedTotal for $t {
      fn checked_total(self, other: Self) -> Option<Self> {
        return CheckedAdd::checked_add(&self, &other);
      }
    })*
  };
}

macro_rules! checked_total_float {
  ($($t:ty),*) => {
    $(impl CheckedTotal for $t {
      fn checked_total(self, other: Self) -> Option<Self> {
        let total = self + other;
        if total.is_finite() {
          return Some(total);
        }
        return None;
      }
    })*
  };
}

checked_total_int!(u16, u32, u64, usize);
checked_total_float!(f32, f64);

#[derive(Debug, Clone, PartialEq)]
pub struct Job<T> {
  pub id: JobId,
  pub processing_times: Vec<T>,
  pub total_processing_time: T,
}

impl<T> Job<T> {
  pub fn n_machines(&self) -> usize {
    return self.processing_times.len();
  }
}

impl<T: ProcessingTime> Job<T> {
  pub fn new(id: JobId, processing_times: Vec<T>) -> Self {
    let total_processing_time = processing_times
      .iter()
      .fold(T::zero(), |total, &time| total + time);

    Self {
      id: id,
      processing_times: processing_times,
      total_processing_time: total_processing_time,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Instance<T> {
  pub number_jobs: usize,
  pub number_machines: usize,

  pub jobs: Vec<Job<T>>,
}

impl<T: ProcessingTime> Instance<T> {
  pub fn new(number_jobs: usize, number_machines: usize, jobs: Vec<Job<T>>) -> Self {
    Self {
      number_jobs: number_jobs,
      number_machines: number_machines,
      jobs: jobs,
    }
  }

  /// Builds an instance from a table of processing times, one row per job.
  pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
    let number_jobs = rows.len();
    let number_machines = rows.first().map(|row| row.len()).unwrap_or(0);
    let jobs = rows
      .into_iter()
      .enumerate()
      .map(|(id, times)| Job::new(id, times))
      .collect();

    return Self::new(number_jobs, number_machines, jobs);
  }

  pub fn shape(&self) -> (usize, usize) {
    return (self.number_jobs, self.number_machines);
  }

  pub fn validate(&self) -> Result<(), InstanceError> {
    return validate_jobs(&self.jobs, self.number_jobs, self.number_machines);
  }
}

/// Rejects anything the matrices cannot be built for. Nothing is computed
/// before these checks pass.
pub fn validate_jobs<T>(
  jobs: &[Job<T>],
  number_jobs: usize,
  number_machines: usize,
) -> Result<(), InstanceError> {
  if number_jobs <= 1 || number_machines <= 1 {
    return Err(InstanceError::InvalidInstance(Violation::Dimensions {
      number_jobs: number_jobs,
      number_machines: number_machines,
    }));
  }

  if jobs.len() != number_jobs {
    return Err(InstanceError::EmptyOrMismatchedInput {
      expected: number_jobs,
      found: jobs.len(),
    });
  }

  if let Some(job) = jobs
    .iter()
    .find(|job| job.n_machines() != number_machines)
  {
    return Err(InstanceError::InvalidInstance(Violation::RowLength {
      job: job.id,
      expected: number_machines,
      found: job.processing_times.len(),
    }));
  }

  Ok(())
}

#[derive(Debug, Clone)]
pub struct Solution<T> {
  pub jobs: Vec<Job<T>>,
  pub number_jobs: usize,
  pub number_machines: usize,
  // Only meaningful once every job has been inserted
  pub makespan: T,
}

impl<T: ProcessingTime> Solution<T> {
  pub fn new(number_jobs: usize, number_machines: usize) -> Self {
    Self {
      jobs: Vec::with_capacity(number_jobs),
      number_jobs: number_jobs,
      number_machines: number_machines,
      makespan: T::zero(),
    }
  }

  pub fn job_ids(&self) -> Vec<JobId> {
    return self.jobs.iter().map(|job| job.id).collect();
  }

  pub fn is_complete(&self) -> bool {
    return self.jobs.len() == self.number_jobs;
  }
}
