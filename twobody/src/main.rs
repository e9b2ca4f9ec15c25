use twobody::{spawn_run, FrameWriter, Scenario, ScenarioConfig};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Run a two-body scenario and stream its frames as JSON lines
#[derive(Parser, Debug)]
#[command(name = "twobody", version, about)]
struct Args {
    /// Scenario YAML; looked up under the crate's scenarios/ dir if not found as given
    #[arg(short, long, default_value = "earth_moon.yaml")]
    file_name: PathBuf,

    /// Write frames here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u64>,

    /// Logging verbosity: trace, debug, info, warn or error
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

fn resolve_scenario_path(file_name: &Path) -> PathBuf {
    if file_name.exists() {
        return file_name.to_path_buf();
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr so stdout stays a clean frame stream
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install logger")?;

    let config_path = resolve_scenario_path(&args.file_name);
    let mut scenario_cfg = ScenarioConfig::load(&config_path)?;
    if let Some(steps) = args.steps {
        scenario_cfg.parameters.steps = steps;
    }
    info!(scenario = %config_path.display(), "loaded scenario");

    let scenario = Scenario::build_scenario(&scenario_cfg)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut writer = FrameWriter::new(out);

    let (frames, handle) = spawn_run(scenario);
    for frame in frames {
        writer.write(&frame)?;
    }
    let written = writer.written();
    writer.finish()?;

    let summary = handle
        .join()
        .map_err(|_| anyhow!("simulation thread panicked"))??;

    info!(
        frames = written,
        steps = summary.steps,
        min_separation = summary.min_separation,
        max_separation = summary.max_separation,
        energy_drift = summary.relative_energy_drift,
        momentum_drift = summary.momentum_drift,
        "done"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_is_parsed() {
        let args = Args::try_parse_from(["twobody", "-l", "debug"]).unwrap();
        assert_eq!(args.log_level, Level::DEBUG);

        let args = Args::try_parse_from(["twobody"]).unwrap();
        assert_eq!(args.log_level, Level::INFO);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(Args::try_parse_from(["twobody", "--log-level", "loud"]).is_err());
    }
}
