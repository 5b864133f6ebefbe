use std::time::Duration;

/// Wall-clock durations of repeated solves of one instance.
#[derive(Debug, Clone, Default)]
pub struct RunTimes {
  runs: u32,
  total: Duration,
  min: Option<Duration>,
  max: Option<Duration>,
}

impl RunTimes {
  pub fn new() -> Self {
    return Self::default();
  }

  pub fn record(&mut self, elapsed: Duration) {
    self.runs += 1;
    self.total += elapsed;
    self.min = Some(self.min.map_or(elapsed, |min| min.min(elapsed)));
    self.max = Some(self.max.map_or(elapsed, |max| max.max(elapsed)));
  }

  pub fn runs(&self) -> u32 {
    return self.runs;
  }

  pub fn min(&self) -> Duration {
    return self.min.unwrap_or_default();
  }

  pub fn max(&self) -> Duration {
    return self.max.unwrap_or_default();
  }

  pub fn average(&self) -> Duration {
    if self.runs == 0 {
      return Duration::default();
    }
    return self.total / self.runs;
  }
}
