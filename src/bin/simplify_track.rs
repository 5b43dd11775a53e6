extern crate clap;

use clap::Parser;
use error_stack::{Report, ResultExt};
use log::info;
use rayon::ThreadPoolBuilder;

use trailthin::errors::TrackError;
use trailthin::track::{simplify_tracks, write_geojson, Track};

#[derive(Parser)]
struct Opts {
    /// Path(s) to track csv files with `lat` and `lon` columns
    #[clap(required = true)]
    inputs: Vec<String>,

    /// Simplification tolerance in degrees
    #[clap(short, long, default_value = "0.0001")]
    epsilon: f64,

    /// Output GeoJSON path
    #[clap(short, long, default_value = "simplified.geojson")]
    output: String,

    /// Number of CPU threads
    #[clap(short, long, default_value = "4")]
    ncpu: usize,

    /// Print a per-track summary as json
    #[clap(long, default_value = "false")]
    summary: bool,
}

fn main() -> Result<(), Report<TrackError>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts: Opts = Opts::parse();

    if let Err(e) = ThreadPoolBuilder::new().num_threads(opts.ncpu).build_global() {
        log::warn!("could not size thread pool: {}", e);
    }

    let tracks = opts
        .inputs
        .iter()
        .map(Track::from_csv_path)
        .collect::<Result<Vec<_>, _>>()?;

    let simplified = simplify_tracks(&tracks, opts.epsilon);

    for (before, after) in tracks.iter().zip(&simplified) {
        let summary = before.summarize(after);
        info!(
            "{}: {} -> {} points, {:.1} m -> {:.1} m",
            summary.name,
            summary.points_before,
            summary.points_after,
            summary.length_before_m,
            summary.length_after_m
        );

        if opts.summary {
            let json = serde_json::to_string_pretty(&summary)
                .change_context(TrackError::Json)?;
            println!("{}", json);
        }
    }

    write_geojson(&simplified, &opts.output)
}
