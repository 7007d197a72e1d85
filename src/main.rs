use structopt::StructOpt;
use dotscene::core::dotscene::Options;
use dotscene::sceneparser::trunk::Trunk;
use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{Result, Context};
use fern::colors::{ColoredLevelConfig, Color};
use log::info;

#[derive(StructOpt, Debug)]
#[structopt(name = "dotscene")]
struct Args {
    /// set LOG verbosity
    #[structopt(short, long)]
    verbose: bool,

    /// Specify the file log messages are written to.
    /// Default: dotscene.log in the working directory.
    #[structopt(short, long, parse(from_os_str))]
    logfile: Option<PathBuf>,

    /// Print all logging messages to stderr
    #[structopt(short = "e", long)]
    logtostderr: bool,

    /// Print a reformatted version of the input file(s)
    /// to standard output.
    #[structopt(short, long)]
    cat: bool,

    #[structopt(parse(from_os_str), required = true)]
    /// Path(s) to scene description files
    input: Vec<PathBuf>
}

fn setup_logging(verbose: bool, logfile: &Path, stderr: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow);
    let clevel = colors.info(Color::Green);

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let file_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                record.level(),
                message
            ))
        })
        .chain(fern::log_file(logfile)
            .with_context(|| format!("Failed to open log file \"{}\"", logfile.display()))?);

    let mut base_config = fern::Dispatch::new()
        .level(level)
        .chain(file_config);

    if stderr {
        let stderr_config = fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{level}] {message}",
                    level = clevel.color(record.level()),
                    message = message,
                ));
            })
            .chain(std::io::stderr());

        base_config = base_config.chain(stderr_config);
    }

    base_config.apply()?;

    Ok(())
}

fn process(path: &Path, opts: &Options) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file \"{}\"", path.display()))?;

    let trunk = Trunk::parse_str(&contents)
        .with_context(|| format!("Failed to parse scene file \"{}\"", path.display()))?;

    info!(
        "{}: {} entries ({} camera, {} ambient lights, {} point lights, {} directional lights, {} objects)",
        path.display(), trunk.len(),
        if trunk.camera.is_some() { 1 } else { 0 },
        trunk.ambient_lights.len(), trunk.point_lights.len(),
        trunk.directional_lights.len(), trunk.objects.len());

    if opts.cat {
        println!("{}", trunk);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::from_args();

    let mut opts = Options::new();
    opts.cat = args.cat;
    opts.verbose = args.verbose;
    if let Some(f) = args.logfile {
        opts.log_file = f;
    }

    setup_logging(opts.verbose, &opts.log_file, args.logtostderr)?;

    for path in args.input.iter() {
        process(path, &opts)?;
    }

    Ok(())
}
