use std::path::PathBuf;
use clap::Parser;
use log::{info, LevelFilter};
use neutral_nemo::config::Config;
use neutral_nemo::error::Error;
use neutral_nemo::grid::HGridData;
use neutral_nemo::loader::{load_hgriddata, Dataset};
use simple_logger::SimpleLogger;




#[derive(Debug, Parser)]
#[clap(version = "0.1", about = "Build the water-column graph of a NEMO mesh")]
struct Opts {
    /// Mesh files holding e1u, e2u, e1v and e2v (.cbor or .msgpack)
    #[clap(required = true)]
    mesh: Vec<PathBuf>,

    /// Configuration file; defaults to a zonally periodic rectilinear grid
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Grid type, overriding the configuration: rectilinear or tripolar
    #[clap(short, long)]
    grid_type: Option<String>,

    #[clap(short, long, default_value = "grid.cbor")]
    output: PathBuf,

    #[clap(short, long)]
    verbose: bool,
}




fn main() -> Result<(), Error> {
    let opts = Opts::parse();
    let level = if opts.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::new().with_level(level).init().map_err(|e| Error::configuration(e.to_string()))?;

    let mut config = match &opts.config {
        Some(path) => Config::open(path)?,
        None => Config::default(),
    };
    if let Some(grid_type) = &opts.grid_type {
        config.grid = grid_type.parse()?;
    }

    let dataset = Dataset::open_many(&opts.mesh)?;
    let hgrid = HGridData::from_fields(load_hgriddata(dataset, &config.hgrid))?;

    let start = std::time::Instant::now();
    let graph = config.grid.build(&hgrid)?;
    info!("built {} edges in {:.3}s", graph.len(), start.elapsed().as_secs_f64());

    let file = std::fs::File::create(&opts.output)?;
    let mut buffer = std::io::BufWriter::new(file);
    ciborium::ser::into_writer(&graph, &mut buffer).map_err(|e| Error::Decode(e.to_string()))?;

    info!("wrote {}", opts.output.display());
    Ok(())
}
