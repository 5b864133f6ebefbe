use crate::data::{validate_jobs, Job, ProcessingTime, Solution};
use crate::error::InstanceError;
use crate::solver::insertion::try_shift_improve;
use crate::solver::matrix::CompletionMatrices;
use log::debug;
use std::cmp::Ordering;

// Nawaz, Enscore, Ham, A heuristic algorithm for the m-machine, n-job flow-shop sequencing problem
pub fn solve<T: ProcessingTime>(
  mut jobs: Vec<Job<T>>,
  number_jobs: usize,
  number_machines: usize,
) -> Result<Solution<T>, InstanceError> {
  validate_jobs(&jobs, number_jobs, number_machines)?;

  let mut matrices = CompletionMatrices::new(number_jobs, number_machines);
  let mut solution = Solution::new(number_jobs, number_machines);

  sort_by_total_descending(&mut jobs);
  for job in jobs {
    solution.jobs.push(job);
    let index = solution.jobs.len() - 1;
    if index > 0 {
      try_shift_improve(&mut solution, index, &mut matrices);
    }
  }

  debug!(
    "neh: {} jobs x {} machines, makespan {}",
    number_jobs, number_machines, solution.makespan
  );

  return Ok(solution);
}

/// Largest total first. The sort is stable, so jobs with equal totals keep
/// their input order.
pub fn sort_by_total_descending<T: ProcessingTime>(jobs: &mut [Job<T>]) {
  jobs.sort_by(|a, b| {
    b.total_processing_time
      .partial_cmp(&a.total_processing_time)
      .unwrap_or(Ordering::Equal)
  });
}
