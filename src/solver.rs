pub mod insertion;
pub mod matrix;
pub mod neh;

pub use self::neh::solve;

use crate::data::{later, Instance, Job, JobId, ProcessingTime, Solution};
use itertools::Itertools;
use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use std::collections::HashSet;
use std::error::Error;

pub fn calculate_makespan<T: ProcessingTime>(solution: &Solution<T>) -> T {
  return calculate_makespan_of_sequence(&solution.jobs, solution.number_machines);
}

/// Plain completion-time recurrence over a full sequence. Independent of the
/// insertion matrices, so it doubles as a check on them.
pub fn calculate_makespan_of_sequence<T: ProcessingTime>(
  jobs: &[Job<T>],
  number_machines: usize,
) -> T {
  if jobs.is_empty() || number_machines == 0 {
    return T::zero();
  }

  let mut completion = Array2::<T>::from_elem((jobs.len(), number_machines), T::zero());
  for (i, job) in jobs.iter().enumerate() {
    for j in 0..number_machines {
      let above = if i == 0 {
        T::zero()
      } else {
        completion[[i - 1, j]]
      };
      let left = if j == 0 {
        T::zero()
      } else {
        completion[[i, j - 1]]
      };

      completion[[i, j]] = job.processing_times[j] + later(above, left);
    }
  }

  return completion[[jobs.len() - 1, number_machines - 1]];
}

pub fn verify_solution<T: ProcessingTime>(
  inst: &Instance<T>,
  solution: &Solution<T>,
) -> Result<(), Box<dyn Error>> {
  // Check:
  // 1. Every input job appears exactly once
  // 2. Nothing else appears
  // 3. The recorded makespan matches a full recomputation

  if !solution.is_complete() || solution.number_jobs != inst.number_jobs {
    Err(format!(
      "Sequence has {} jobs, expected {}",
      solution.jobs.len(),
      inst.number_jobs
    ))?;
  }

  let expected: HashSet<JobId> = inst.jobs.iter().map(|job| job.id).collect();
  let mut seen = HashSet::new();
  for job in &solution.jobs {
    if !expected.contains(&job.id) {
      Err(format!("Unknown job {} in sequence", job.id))?;
    }
    if !seen.insert(job.id) {
      Err(format!("Job {} appears more than once", job.id))?;
    }
  }

  let makespan = calculate_makespan(solution);
  if makespan != solution.makespan {
    Err(format!(
      "Recorded makespan {} does not match recomputed {}",
      solution.makespan, makespan
    ))?;
  }

  Ok(())
}

/// Runs `verify_solution`. Unless `exact`, a failure is only logged: float
/// sums can round differently in the two makespan computations.
pub fn check_solution<T: ProcessingTime>(
  inst: &Instance<T>,
  solution: &Solution<T>,
  exact: bool,
) -> Result<(), Box<dyn Error>> {
  if let Err(err) = verify_solution(inst, solution) {
    if exact {
      return Err(err);
    }
    log::warn!("{}", err);
  }

  Ok(())
}

pub fn format_sequence<T>(solution: &Solution<T>) -> String {
  return solution.jobs.iter().map(|job| job.id + 1).join(" ");
}

pub fn print_solution<T>(solution: &Solution<T>) {
  println!("{}", format_sequence(solution));
}

/// Processing times are drawn uniformly from `1..=max_time` (a `max_time` of 0
/// is treated as 1) and widened to `u64`, so totals cannot overflow.
pub fn generate_random_instance<R: rand::Rng>(
  number_jobs: usize,
  number_machines: usize,
  max_time: u32,
  rng: &mut R,
) -> Instance<u64> {
  let times = Uniform::new_inclusive(1, max_time.max(1));
  let rows: Vec<Vec<u64>> = (0..number_jobs)
    .map(|_| {
      (0..number_machines)
        .map(|_| u64::from(times.sample(&mut *rng)))
        .collect()
    })
    .collect();

  return Instance::from_rows(rows);
}
