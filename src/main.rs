#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use neh::data::{Instance, ProcessingTime};
use neh::parser::{parse_instance, parse_instance_list};
use neh::solver::{
  calculate_makespan, check_solution, generate_random_instance, print_solution, solve,
};
use neh::timing::RunTimes;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Instant;

struct Config {
  runs: u32,
  print_sequence: bool,
  // Float sums may round differently between the two makespan computations
  float: bool,
}

fn main() {
  env_logger::init();

  let matches = App::new("neh")
    .version("1.0")
    .about("NEH heuristic with Taillard's acceleration for the permutation flow shop problem")
    .arg(
      Arg::with_name("instance")
        .long("instance")
        .help("Instance file name")
        .takes_value(true)
        .multiple(true)
        .required_unless_one(&["instances", "random"]),
    )
    .arg(
      Arg::with_name("instances")
        .long("instances")
        .help("File listing one instance name per line")
        .takes_value(true)
        .conflicts_with("instance"),
    )
    .arg(
      Arg::with_name("data-dir")
        .long("data-dir")
        .help("Directory holding <name>.txt for every listed instance")
        .takes_value(true)
        .default_value("."),
    )
    .arg(
      Arg::with_name("random")
        .long("random")
        .help("Solve a random instance of the given size, e.g. 20x5")
        .takes_value(true)
        .conflicts_with_all(&["instance", "instances"]),
    )
    .arg(
      Arg::with_name("seed")
        .long("seed")
        .help("Seed for rng")
        .takes_value(true)
        .default_value("0"),
    )
    .arg(
      Arg::with_name("max-time")
        .long("max-time")
        .help("Largest processing time of a random instance")
        .takes_value(true)
        .default_value("99"),
    )
    .arg(
      Arg::with_name("runs")
        .long("runs")
        .help("Number of timed solves per instance")
        .takes_value(true)
        .default_value("1"),
    )
    .arg(
      Arg::with_name("float")
        .long("float")
        .help("Read processing times as floating point numbers")
        .conflicts_with("random"),
    )
    .arg(
      Arg::with_name("print-sequence")
        .long("print-sequence")
        .help("Print the job sequence (1-based) after each instance"),
    )
    .get_matches();

  if let Err(err) = run(&matches) {
    error!("{}", err);
    std::process::exit(1);
  }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let runs: u32 = matches
    .value_of("runs")
    .ok_or("Missing runs")?
    .parse()?;
  if runs == 0 {
    Err("runs must be at least 1")?;
  }
  let config = Config {
    runs: runs,
    print_sequence: matches.is_present("print-sequence"),
    float: matches.is_present("float"),
  };

  if let Some(size) = matches.value_of("random") {
    let (number_jobs, number_machines) = parse_size(size)?;
    let seed: u64 = matches.value_of("seed").ok_or("Missing seed")?.parse()?;
    let max_time: u32 = matches
      .value_of("max-time")
      .ok_or("Missing max time")?
      .parse()?;
    if max_time == 0 {
      Err("max-time must be at least 1")?;
    }

    let mut rng = rand_chacha::ChaChaRng::seed_from_u64(seed);
    let instance = generate_random_instance(number_jobs, number_machines, max_time, &mut rng);
    return report(&format!("random {} (seed {})", size, seed), &instance, &config);
  }

  let files: Vec<String> = if let Some(list) = matches.value_of("instances") {
    let dir = matches.value_of("data-dir").unwrap_or(".");
    let names = parse_instance_list(&fs::read_to_string(list)?);
    names
      .iter()
      .map(|name| {
        Path::new(dir)
          .join(format!("{}.txt", name))
          .to_string_lossy()
          .into_owned()
      })
      .collect()
  } else {
    matches
      .values_of("instance")
      .ok_or("Missing instance file")?
      .map(|file| file.to_string())
      .collect()
  };

  for file in &files {
    info!("Loading {}", file);
    let contents = fs::read_to_string(file)?;
    if config.float {
      report(file, &parse_instance::<f64>(&contents)?, &config)?;
    } else {
      report(file, &parse_instance::<u64>(&contents)?, &config)?;
    }
  }

  Ok(())
}

fn parse_size(size: &str) -> Result<(usize, usize), Box<dyn Error>> {
  let mut parts = size.split('x');
  let number_jobs = parts.next().ok_or("Missing job count")?.trim().parse()?;
  let number_machines = parts.next().ok_or("Missing machine count")?.trim().parse()?;
  if parts.next().is_some() {
    Err(format!("Invalid size {}, expected <jobs>x<machines>", size))?;
  }

  Ok((number_jobs, number_machines))
}

fn report<T: ProcessingTime>(
  name: &str,
  instance: &Instance<T>,
  config: &Config,
) -> Result<(), Box<dyn Error>> {
  let mut times = RunTimes::new();
  let mut last = None;

  for _ in 0..config.runs {
    let jobs = instance.jobs.clone();
    let start = Instant::now();
    let solution = solve(jobs, instance.number_jobs, instance.number_machines)?;
    times.record(start.elapsed());
    last = Some(solution);
  }

  let solution = last.ok_or("No run completed")?;
  let makespan = calculate_makespan(&solution);
  check_solution(instance, &solution, !config.float)
    .map_err(|err| format!("Verification failed for {}: {}", name, err))?;

  println!("Instance name: {}", name);
  println!("\tNEH makespan: {}", makespan);
  println!("\tNEH makespan with Taillard's acceleration: {}", solution.makespan);
  println!("\truns: {}", times.runs());
  println!("\telapsed avg: {}us", times.average().as_micros());
  println!("\telapsed min: {}us", times.min().as_micros());
  println!("\telapsed max: {}us", times.max().as_micros());
  if config.print_sequence {
    print_solution(&solution);
  }

  Ok(())
}
