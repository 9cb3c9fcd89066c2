use clap::Parser;
use hydro_testbench::setup::presets::preset_names;
use hydro_testbench::{Orientation, ProblemConfig};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

#[derive(Debug, Parser)]
#[clap(version, about = "Generate piecewise-constant initial conditions for hydro test problems")]
struct Opts {
    /// Problem preset, optionally with parameters (e.g. rmhd-cylindrical-a:pre=10)
    #[clap(default_value = "sr-shock-tube-1")]
    preset: String,

    /// Comma-separated number of cells on each spatial axis
    #[clap(short = 's', long, default_value = "64")]
    shape: String,

    #[clap(short = 'q', long, default_value = "8")]
    num_fields: usize,

    #[clap(short = 'g', long, default_value = "1.4")]
    gamma: f64,

    /// Split axis for planar problems (x or y)
    #[clap(short = 'o', long, default_value = "x")]
    orientation: Orientation,

    /// Override a region field, e.g. --set left.velocity=0,0.9,0
    #[clap(long = "set")]
    assignments: Vec<String>,

    #[clap(long, default_value = "info")]
    log_level: LevelFilter,

    /// List the known presets and exit
    #[clap(long)]
    list: bool,
}

fn parse_shape(shape: &str) -> Result<Vec<usize>, String> {
    shape
        .split(',')
        .map(|n| n.trim().parse().map_err(|_| format!("bad grid shape '{}'", shape)))
        .collect()
}

fn run(opts: &Opts) -> Result<(), Box<dyn std::error::Error>> {
    if opts.list {
        for name in preset_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let shape = parse_shape(&opts.shape)?;
    let mut config = ProblemConfig::new(&opts.preset);
    config.adiabatic_gamma = opts.gamma;
    config.orientation = opts.orientation;

    for assignment in &opts.assignments {
        config.assign(assignment)?;
    }

    let problem = config.build()?;
    let start = std::time::Instant::now();
    let grid = problem.initial_model(&shape, opts.num_fields)?;
    info!("{}: grid of shape {:?} in {:.3}s", problem.name(), grid.shape(), start.elapsed().as_secs_f64());

    let regions = problem.classify(&shape)?;

    for (n, (name, state)) in problem.region_names().iter().zip(problem.states()).enumerate() {
        let count = regions.iter().filter(|&&r| r == n).count();
        println!("{:.<12} {:<10} {:?}", name, count, state.as_array());
    }
    println!("adiabatic gamma ... {}", problem.adiabatic_gamma());
    Ok(())
}

fn main() {
    let opts = Opts::parse();

    SimpleLogger::new().with_level(opts.log_level).init().unwrap();

    if let Err(e) = run(&opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}
