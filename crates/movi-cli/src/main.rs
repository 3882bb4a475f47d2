use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use movi_env::{five_state_mdp, two_state_mdp, Direction, EnvWrapper, Environment, InMemoryMdp};
use movi_solvers::{BrtdpSolver, ChviSolver, ExplorationSettings};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Brtdp,
    Chvi,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Objective {
    Maximize,
    Minimize,
}

impl From<Objective> for Direction {
    fn from(o: Objective) -> Self {
        match o {
            Objective::Maximize => Direction::Maximize,
            Objective::Minimize => Direction::Minimize,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fixture {
    FiveState,
    TwoState,
}

/// Computes Pareto-optimal value bounds for a multi-objective MDP.
#[derive(Parser, Debug)]
#[command(name = "movi", version, about)]
struct Cli {
    #[arg(long, value_enum, default_value_t = Algorithm::Brtdp)]
    algorithm: Algorithm,

    /// A built-in fixture MDP; mutually exclusive with `--transitions`.
    #[arg(long, value_enum, conflicts_with = "transitions")]
    fixture: Option<Fixture>,

    /// Whitespace-triplet transition file (source action successor probability).
    #[arg(long, requires = "rewards")]
    transitions: Option<PathBuf>,

    /// One reward file per objective (source action successor reward_value).
    #[arg(long = "reward", num_args = 1..)]
    rewards: Vec<PathBuf>,

    #[arg(long, default_value_t = 0)]
    initial_state: usize,

    #[arg(long, default_value_t = 1e-6)]
    precision: f64,

    /// Discount factor, broadcast to every objective unless `--discounts` is given.
    #[arg(long, default_value_t = 0.95)]
    discount: f64,

    /// Per-objective discount factors; overrides `--discount` when present.
    #[arg(long, value_delimiter = ',')]
    discounts: Option<Vec<f64>>,

    /// Per-objective optimization direction; defaults to `maximize` for every objective.
    #[arg(long, value_enum, value_delimiter = ',')]
    directions: Option<Vec<Objective>>,

    #[arg(long, default_value_t = 100_000)]
    max_episodes: u64,

    #[arg(long, default_value_t = 10_000)]
    max_sweeps: u64,

    #[arg(long, default_value_t = 1_000)]
    max_depth: u64,

    /// Seed for the solver's PRNG; 0 reseeds from entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn load_environment(cli: &Cli) -> Box<dyn Environment> {
    if let Some(fixture) = cli.fixture {
        return match fixture {
            Fixture::FiveState => Box::new(five_state_mdp()),
            Fixture::TwoState => Box::new(two_state_mdp()),
        };
    }
    let transitions = cli.transitions.as_ref().expect("clap enforces --transitions without --fixture");
    let mdp: InMemoryMdp =
        movi_parser::parse_explicit_mdp(transitions, &cli.rewards, cli.initial_state).unwrap_or_else(|e| {
            eprintln!("failed to parse MDP: {e}");
            std::process::exit(1);
        });
    Box::new(mdp)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let env = load_environment(&cli);
    let dim = env.objective_dim();
    let discount = cli.discounts.clone().unwrap_or_else(|| vec![cli.discount; dim]);
    let directions: Vec<Direction> = cli
        .directions
        .clone()
        .map(|ds| ds.into_iter().map(Direction::from).collect())
        .unwrap_or_else(|| vec![Direction::Maximize; dim]);

    let settings = ExplorationSettings {
        precision: cli.precision,
        discount,
        directions: directions.clone(),
        action_heuristic: movi_solvers::ActionSelectionHeuristic::default(),
        state_heuristic: movi_solvers::StateSelectionHeuristic::default(),
        max_episodes: cli.max_episodes,
        max_sweeps: cli.max_sweeps,
        max_depth: cli.max_depth,
        min_depth: 10,
        seed: cli.seed,
        trace: false,
    };

    let wrapper = EnvWrapper::new(env, directions, settings.discount.clone());
    let result = match cli.algorithm {
        Algorithm::Brtdp => BrtdpSolver::new(wrapper, settings, cli.initial_state).solve(),
        Algorithm::Chvi => ChviSolver::new(wrapper, settings, cli.initial_state).solve(),
    };

    info!(
        "converged={} iterations={} elapsed={:.3}s",
        result.converged,
        result.iterations,
        result.elapsed.as_secs_f64()
    );
    for vertex in result.bound.lower().vertices() {
        println!("{}", vertex.iter().map(f64::to_string).collect::<Vec<_>>().join(" "));
    }
    if !result.converged {
        std::process::exit(1);
    }
}
