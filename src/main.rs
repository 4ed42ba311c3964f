use anyhow::{bail, Context};
use gcodesketch::{init_logging, sketch_text, Config, BUILD_DATE, VERSION};
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: gcodesketch [--config <file.toml|file.json>] <project-file>";

struct Args {
    config: Option<PathBuf>,
    project: PathBuf,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config = None;
    let mut project = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().context("--config needs a file path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("gcodesketch {} (built {})\n{}", VERSION, BUILD_DATE, USAGE);
                std::process::exit(0);
            }
            _ if project.is_none() => project = Some(PathBuf::from(arg)),
            _ => bail!("Unexpected argument {:?}\n{}", arg, USAGE),
        }
    }
    let project = project.context(USAGE)?;
    Ok(Args { config, project })
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(Config::default()),
        },
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;

    let text = std::fs::read_to_string(&args.project)
        .with_context(|| format!("Failed to read {}", args.project.display()))?;
    let name = args
        .project
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let interpreter = sketch_text(&name, &text, &config)
        .with_context(|| format!("Failed to sketch {}", args.project.display()))?;

    let snapshot = serde_json::to_string_pretty(&interpreter.snapshot())?;
    println!("{}", snapshot);
    Ok(())
}
