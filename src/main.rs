use anyhow::{bail, Context};
use sheepgen::config::ConfigManager;
use sheepgen::engines::generation::ConsoleProgressCallback;
use sheepgen::report;
use sheepgen::SearchRunner;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "usage: sheepgen <grid-file> [config-file] [--json]";

#[derive(Debug, PartialEq)]
struct CliArgs {
    grid_path: PathBuf,
    config_path: Option<PathBuf>,
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<CliArgs> {
    let mut json = false;
    let mut positional = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("unknown option '{}'\n{}", flag, USAGE),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    if positional.is_empty() || positional.len() > 2 {
        bail!(USAGE);
    }
    let mut positional = positional.into_iter();
    let grid_path = positional.next().context(USAGE)?;

    Ok(CliArgs {
        grid_path,
        config_path: positional.next(),
        json,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = parse_args(env::args().skip(1))?;

    let manager = ConfigManager::new();
    manager
        .load_layered(args.config_path.as_deref())
        .context("Invalid configuration")?;

    let runner = SearchRunner::new(manager.get())?;

    let text = std::fs::read_to_string(&args.grid_path)
        .with_context(|| format!("Failed to read grid from {}", args.grid_path.display()))?;
    let grid = runner.parse_grid(&text).context("Invalid grid")?;

    let outcome = runner.run(grid, ConsoleProgressCallback::default())?;

    if args.json {
        println!("{}", report::render_json(&outcome)?);
    } else {
        print!("{}", report::render_text(&outcome));
    }
    Ok(())
}
