use neh::data::{Instance, Job, Solution};
use neh::error::InstanceError;
use neh::parser::parse_instance;
use neh::solver::insertion::try_shift_improve;
use neh::solver::matrix::CompletionMatrices;
use neh::solver::neh::sort_by_total_descending;
use neh::solver::{
  calculate_makespan, calculate_makespan_of_sequence, generate_random_instance, solve,
  verify_solution,
};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn random_instances(count: usize) -> Vec<Instance<u64>> {
  let mut rng = ChaChaRng::seed_from_u64(42);
  let mut instances = Vec::new();
  for k in 0..count {
    let number_jobs = 2 + k % 13;
    let number_machines = 2 + k % 7;
    instances.push(generate_random_instance(number_jobs, number_machines, 20, &mut rng));
  }

  return instances;
}

#[test]
fn worked_example() {
  let text = "jobs machines\n3 2\ntimes\n5\t3\n9\t2\n4\t6\n";
  let instance: Instance<u32> = parse_instance(text).unwrap();
  let solution = solve(instance.jobs.clone(), 3, 2).unwrap();

  assert_eq!(solution.job_ids(), vec![0, 2, 1]);
  assert_eq!(solution.makespan, 20);
  assert_eq!(calculate_makespan(&solution), 20);
}

#[test]
fn output_is_a_permutation() {
  for instance in random_instances(60) {
    let (number_jobs, number_machines) = instance.shape();
    let solution = solve(instance.jobs.clone(), number_jobs, number_machines).unwrap();

    let mut ids = solution.job_ids();
    ids.sort();
    assert_eq!(ids, (0..number_jobs).collect::<Vec<_>>());
    assert_eq!(solution.number_jobs, instance.number_jobs);
  }
}

#[test]
fn accelerated_makespan_matches_recomputation() {
  for instance in random_instances(60) {
    let (number_jobs, number_machines) = instance.shape();
    let solution = solve(instance.jobs.clone(), number_jobs, number_machines).unwrap();

    assert_eq!(calculate_makespan(&solution), solution.makespan);
    assert!(verify_solution(&instance, &solution).is_ok());
  }
}

#[test]
fn repeated_solves_are_identical() {
  for instance in random_instances(20) {
    let (number_jobs, number_machines) = instance.shape();
    let first = solve(instance.jobs.clone(), number_jobs, number_machines).unwrap();
    let second = solve(instance.jobs.clone(), number_jobs, number_machines).unwrap();

    assert_eq!(first.job_ids(), second.job_ids());
    assert_eq!(first.makespan, second.makespan);
  }
}

#[test]
fn every_step_takes_the_lowest_best_position() {
  // Replays the construction, checking each step against a brute-force scan
  for instance in random_instances(40) {
    let (number_jobs, number_machines) = instance.shape();
    let mut jobs = instance.jobs.clone();
    sort_by_total_descending(&mut jobs);

    let mut matrices = CompletionMatrices::new(number_jobs, number_machines);
    let mut solution: Solution<u64> = Solution::new(number_jobs, number_machines);
    solution.jobs.push(jobs[0].clone());

    for index in 1..number_jobs {
      let prefix: Vec<Job<u64>> = solution.jobs.clone();
      let candidate = jobs[index].clone();
      let makespans: Vec<u64> = (0..index + 1)
        .map(|position| {
          let mut sequence = prefix.clone();
          sequence.insert(position, candidate.clone());
          calculate_makespan_of_sequence(&sequence, number_machines)
        })
        .collect();
      let best = *makespans.iter().min().unwrap();
      let expected = makespans.iter().position(|&m| m == best).unwrap();

      solution.jobs.push(candidate);
      let position = try_shift_improve(&mut solution, index, &mut matrices);
      assert_eq!(position, expected);
      assert_eq!(solution.jobs[position].id, jobs[index].id);
    }

    assert_eq!(solution.makespan, calculate_makespan(&solution));
  }
}

#[test]
fn equal_totals_keep_input_order() {
  // Identical jobs tie at every position, so each new job goes to the front
  let instance = Instance::from_rows(vec![vec![2u32, 3]; 4]);
  let solution = solve(instance.jobs, 4, 2).unwrap();

  assert_eq!(solution.job_ids(), vec![3, 2, 1, 0]);
  assert_eq!(solution.makespan, 14);
}

#[test]
fn invalid_inputs_are_rejected() {
  let instance = Instance::from_rows(vec![vec![1u32, 2], vec![3, 4], vec![5, 6]]);

  assert!(matches!(
    solve(instance.jobs.clone(), 1, 2),
    Err(InstanceError::InvalidInstance(_))
  ));
  assert!(matches!(
    solve(instance.jobs.clone(), 2, 2),
    Err(InstanceError::EmptyOrMismatchedInput { .. })
  ));
  assert!(matches!(
    solve(Vec::<Job<u32>>::new(), 3, 2),
    Err(InstanceError::EmptyOrMismatchedInput { .. })
  ));

  let mut ragged = instance.jobs.clone();
  ragged[2] = Job::new(2, vec![5, 6, 7]);
  assert!(matches!(
    solve(ragged, 3, 2),
    Err(InstanceError::InvalidInstance(_))
  ));
}

#[test]
fn large_processing_times_stay_exact() {
  let half = u64::from(u32::max_value() / 2);
  let text = format!("h\n3 2\nh\n{}\t1\n{}\t1\n5\t5\n", half, half);

  assert!(parse_instance::<u32>(&text).is_err());

  let instance: Instance<u64> = parse_instance(&text).unwrap();
  let solution = solve(instance.jobs.clone(), 3, 2).unwrap();
  assert_eq!(solution.makespan, calculate_makespan(&solution));
  assert!(solution.makespan > u64::from(u32::max_value()));
}
