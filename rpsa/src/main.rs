use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rectpack::io::svg::floorplan_to_svg;
use rpsa::config::SAConfig;
use rpsa::io;
use rpsa::io::cli::Cli;
use rpsa::io::output::SAOutput;
use rpsa::opt::Solver;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SAConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed SAConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        ))?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = rectpack::io::import(&ext_instance)?;
    info!(
        "[MAIN] Imported instance with {} rectangles (total area: {:.3})",
        instance.n(),
        instance.total_area()
    );

    let solution = Solver::new(config)
        .with_limits(args.width_limit, args.height_limit)
        .solve(&instance)?;

    info!("[MAIN] {solution}");

    {
        let output = SAOutput {
            instance: ext_instance,
            solution: rectpack::io::export_solution(&solution, &instance),
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = floorplan_to_svg(&solution.floorplan, config.svg_draw_options, input_file_stem);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
