use crate::data::{ProcessingTime, Solution};
use crate::solver::matrix::CompletionMatrices;
use log;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insertion<T> {
  pub position: usize,
  pub makespan: T,
}

/// Scans positions `0..=index` for the job sitting at `index`. Only a strictly
/// smaller makespan replaces the incumbent, so ties go to the lowest position.
pub fn find_best_insertion<T: ProcessingTime>(
  matrices: &CompletionMatrices<T>,
  index: usize,
) -> Insertion<T> {
  let mut best = Insertion {
    position: index,
    makespan: T::max_value(),
  };

  for position in 0..index + 1 {
    let makespan = matrices.insertion_makespan(position);
    if makespan < best.makespan {
      best = Insertion {
        position: position,
        makespan: makespan,
      };
    }
  }

  return best;
}

/// Moves the job most recently appended at `index` to its best position among
/// the jobs before it. Records the makespan on the solution once the last job
/// has been placed.
pub fn try_shift_improve<T: ProcessingTime>(
  solution: &mut Solution<T>,
  index: usize,
  matrices: &mut CompletionMatrices<T>,
) -> usize {
  matrices.populate(&solution.jobs, index);
  let best = find_best_insertion(matrices, index);

  log::trace!(
    "step {}: job {} -> position {} ({})",
    index,
    solution.jobs[index].id,
    best.position,
    best.makespan
  );

  if best.position != index {
    solution.jobs[best.position..index + 1].rotate_right(1);
  }

  if index == solution.number_jobs - 1 {
    solution.makespan = best.makespan;
  }

  return best.position;
}
