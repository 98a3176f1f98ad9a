#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{error::Error, path::PathBuf, time::Duration};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use mrsort_sat::{
    generator,
    learner::{Learner, Solution},
    solver::ExternalSolver,
    structures::dataset::{Dataset, Mark},
};

mod args;
mod config;
mod misc;

use args::{Cli, Command};

/// Exit code of a solve with an optimum.
const EXIT_OPTIMUM: i32 = 0;
/// Exit code of a solve without an optimum.
const EXIT_NO_OPTIMUM: i32 = 20;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn Error>> {
    match cli.command {
        Command::Generate {
            students,
            subjects,
            classes,
            seed,
            max_mark,
            output,
        } => generate(students, subjects, classes, seed, max_mark, output),

        Command::Encode {
            dataset,
            output,
            model,
        } => {
            let config = config::config_from_args(&model, None)?;
            let dataset = misc::load_dataset(&dataset)?;
            let encoded = Learner::from_config(config)?.prepare(&dataset)?;

            misc::with_output(output.as_deref(), |mut sink| {
                encoded.instance.write(&mut sink)
            })?;
            Ok(EXIT_OPTIMUM)
        }

        Command::Learn {
            dataset,
            solver,
            solver_args,
            timeout,
            json,
            model,
        } => {
            let time_limit = Duration::try_from_secs_f64(timeout)?;
            let config = config::config_from_args(&model, Some(time_limit))?;
            let dataset = misc::load_dataset(&dataset)?;

            let learner = Learner::from_config(config)?;
            let encoded = learner.prepare(&dataset)?;
            println!(
                "c {} variables and {} clauses",
                encoded.instance.variable_count(),
                encoded.instance.clause_count()
            );

            let solver = ExternalSolver::new(solver).with_args(solver_args);
            let solution = learner.solve_encoded(&encoded, &solver)?;

            match json {
                true => println!("{}", serde_json::to_string_pretty(&solution)?),
                false => report(&solution, &dataset),
            }

            match solution.optimal {
                true => Ok(EXIT_OPTIMUM),
                false => Ok(EXIT_NO_OPTIMUM),
            }
        }
    }
}

fn generate(
    students: usize,
    subjects: usize,
    classes: usize,
    seed: Option<u64>,
    max_mark: Mark,
    output: Option<PathBuf>,
) -> Result<i32, Box<dyn Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generated = generator::generate(&mut rng, students, subjects, classes, max_mark)?;
    let json = serde_json::to_string_pretty(&generated)?;

    misc::with_output(output.as_deref(), |sink| writeln!(sink, "{json}"))?;
    Ok(EXIT_OPTIMUM)
}

fn report(solution: &Solution, dataset: &Dataset) {
    match &solution.model {
        None => println!("s NO OPTIMUM ({})", solution.status),
        Some(model) => {
            println!("s {}", solution.status);
            if let Some(objective) = solution.objective {
                println!("o {objective}");
            }
            for (subject, frontiers) in model.frontiers.iter().enumerate() {
                let frontiers = frontiers
                    .iter()
                    .map(|frontier| match frontier {
                        Some(mark) => mark.to_string(),
                        None => "-".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("c subject {subject} frontiers: {frontiers}");
            }
            let sufficient = model
                .sufficient
                .iter()
                .map(|coalition| coalition.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("c sufficient coalitions: {sufficient}");
            println!(
                "c training accuracy: {:.2}%",
                model.accuracy(dataset) * 100.0
            );
        }
    }
}
