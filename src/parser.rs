use crate::data::{CheckedTotal, Instance, Job, ProcessingTime};
use std::error::Error;
use std::str::FromStr;

// Layout: a header line, "<jobs> <machines>", another header line, then one
// tab-separated row of processing times per job. The sum of all processing
// times has to fit in `T`.
pub fn parse_instance<T>(instance: &str) -> Result<Instance<T>, Box<dyn Error>>
where
  T: ProcessingTime + CheckedTotal + FromStr,
  <T as FromStr>::Err: Error + 'static,
{
  let lines: Vec<&str> = instance.lines().collect();

  let dimensions = lines.get(1).ok_or("Dimensions missing")?;
  let dimension_items: Vec<&str> = dimensions.split_whitespace().collect();
  let number_jobs: usize = dimension_items.get(0).ok_or("n_jobs missing")?.parse()?;
  let number_machines: usize = dimension_items
    .get(1)
    .ok_or("n_machines missing")?
    .parse()?;

  // The header is untrusted, nothing is sized from it
  let mut jobs = Vec::new();
  let mut grand_total = T::zero();
  for id in 0..number_jobs {
    let line = lines
      .get(id + 3)
      .ok_or_else(|| format!("Row for job {} missing", id + 1))?;

    let mut times = Vec::new();
    for item in line.split_whitespace() {
      let time: T = item.parse()?;
      // Also catches NaN
      if !(time >= T::zero()) {
        Err(format!("Invalid processing time {} for job {}", item, id + 1))?;
      }
      grand_total = grand_total
        .checked_total(time)
        .ok_or_else(|| format!("Processing times overflow at job {}", id + 1))?;
      times.push(time);
    }

    if times.len() != number_machines {
      Err(format!(
        "Job {} has {} processing times, expected {}",
        id + 1,
        times.len(),
        number_machines
      ))?;
    }

    jobs.push(Job::new(id, times));
  }

  Ok(Instance::new(number_jobs, number_machines, jobs))
}

/// One instance name per line, blank lines skipped.
pub fn parse_instance_list(list: &str) -> Vec<String> {
  return list
    .lines()
    .map(|line| line.trim())
    .filter(|line| !line.is_empty())
    .map(|line| line.to_string())
    .collect();
}
