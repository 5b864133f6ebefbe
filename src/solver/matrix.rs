use crate::data::{later, Job, ProcessingTime};
use ndarray::Array2;

// see Taillard, Some efficient heuristic methods for the flow shop sequencing problem
//
// All three tables are sized once per solve and rewritten at every insertion
// step. Rows past the current step are scratch.
#[derive(Debug, Clone)]
pub struct CompletionMatrices<T> {
  // Completion times of the prefix, front to back
  pub e: Array2<T>,
  // Completion times of the new job when placed before prefix row i
  pub f: Array2<T>,
  // Tails of the prefix, back to front
  pub q: Array2<T>,
}

impl<T: ProcessingTime> CompletionMatrices<T> {
  pub fn new(number_jobs: usize, number_machines: usize) -> Self {
    let shape = (number_jobs, number_machines);
    Self {
      e: Array2::from_elem(shape, T::zero()),
      f: Array2::from_elem(shape, T::zero()),
      q: Array2::from_elem(shape, T::zero()),
    }
  }

  pub fn width(&self) -> usize {
    return self.e.dim().1;
  }

  /// Recomputes all three tables for the job sitting at `index`, with
  /// `jobs[..index]` as the prefix it gets inserted into.
  pub fn populate(&mut self, jobs: &[Job<T>], index: usize) {
    self.populate_e(jobs, index);
    self.populate_f(jobs, index);
    self.populate_q(jobs, index);
  }

  pub fn populate_e(&mut self, jobs: &[Job<T>], index: usize) {
    let width = self.width();
    let e = &mut self.e;
    let first = &jobs[0].processing_times;

    e[[0, 0]] = first[0];
    for j in 1..width {
      e[[0, j]] = first[j] + e[[0, j - 1]];
    }

    for i in 1..index + 1 {
      let times = &jobs[i].processing_times;
      e[[i, 0]] = times[0] + e[[i - 1, 0]];
      for j in 1..width {
        e[[i, j]] = times[j] + later(e[[i - 1, j]], e[[i, j - 1]]);
      }
    }
  }

  /// Expects `e` to be populated up to row `index - 1`.
  pub fn populate_f(&mut self, jobs: &[Job<T>], index: usize) {
    let width = self.width();
    let e = &self.e;
    let f = &mut self.f;
    let new_job = &jobs[index].processing_times;

    f[[0, 0]] = new_job[0];
    for j in 1..width {
      f[[0, j]] = new_job[j] + f[[0, j - 1]];
    }

    for i in 1..index + 1 {
      f[[i, 0]] = new_job[0] + e[[i - 1, 0]];
      for j in 1..width {
        f[[i, j]] = new_job[j] + later(e[[i - 1, j]], f[[i, j - 1]]);
      }
    }
  }

  pub fn populate_q(&mut self, jobs: &[Job<T>], index: usize) {
    let width = self.width();
    let last = width - 1;
    let q = &mut self.q;

    q.row_mut(index).fill(T::zero());

    for i in (0..index).rev() {
      let times = &jobs[i].processing_times;
      q[[i, last]] = times[last] + q[[i + 1, last]];
      for j in (0..last).rev() {
        q[[i, j]] = times[j] + later(q[[i + 1, j]], q[[i, j + 1]]);
      }
    }
  }

  /// Makespan of the sequence obtained by moving the job at `index` to
  /// `position`, leaving the rest of the prefix in order.
  pub fn insertion_makespan(&self, position: usize) -> T {
    let mut max_sum = T::zero();
    for j in 0..self.width() {
      max_sum = later(self.f[[position, j]] + self.q[[position, j]], max_sum);
    }

    return max_sum;
  }
}
