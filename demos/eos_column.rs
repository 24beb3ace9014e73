use clap::Parser;
use log::LevelFilter;
use neutral_nemo::eos::factory::make_eos_pair;
use neutral_nemo::eos::Simplified;
use neutral_nemo::error::Error;
use rayon::prelude::*;
use simple_logger::SimpleLogger;




#[derive(Debug, Parser)]
#[clap(version = "0.1", about = "Tabulate density and its partials down a synthetic water column")]
struct Opts {
    /// Equation of state: simplified, teos10 or eos80
    #[clap(short, long, default_value = "teos10")]
    eos: String,

    #[clap(short, long, default_value = "35.0")]
    salinity: f64,

    /// Surface temperature; the column cools linearly to 2 degC at the bottom
    #[clap(short, long, default_value = "20.0")]
    temperature: f64,

    #[clap(short, long, default_value = "5000.0")]
    depth: f64,

    #[clap(short, long, default_value = "11")]
    num_levels: usize,

    /// Number of evaluations for the throughput measurement
    #[clap(short = 'w', long, default_value = "1000000")]
    work: usize,
}




fn main() -> Result<(), Error> {
    let opts = Opts::parse();
    SimpleLogger::new().with_level(LevelFilter::Info).init().map_err(|e| Error::configuration(e.to_string()))?;

    let pair = make_eos_pair(&opts.eos, Some(Simplified::default()))?;
    let n = opts.num_levels.max(2);

    println!("{:>10} {:>14} {:>14} {:>14}", "z", "rho", "drho/dS", "drho/dT");

    for k in 0..n {
        let f = k as f64 / (n - 1) as f64;
        let z = f * opts.depth;
        let t = opts.temperature + f * (2.0 - opts.temperature);
        let (beta, alpha) = pair.eos_s_t(opts.salinity, t, z)?;
        println!("{:>10.1} {:>14.6} {:>14.8} {:>14.8}", z, pair.eos(opts.salinity, t, z), beta, alpha);
    }

    let (eos, _) = pair.into_fns();
    let start = std::time::Instant::now();
    let total: f64 = (0..opts.work)
        .into_par_iter()
        .map(|k| eos(opts.salinity, opts.temperature, (k % 5000) as f64))
        .sum();
    let duration = start.elapsed().as_secs_f64();

    println!();
    println!("{}", pair.variant());
    println!("mean density .......... {}", total / opts.work as f64);
    println!("ns / evaluation ....... {}", duration / opts.work as f64 * 1e9);
    Ok(())
}
