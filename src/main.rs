use clap::Parser;
use movie_form::config::{AppConfig, OutputFormat, Overrides};
use movie_form::runtime::{App, Runtime};
use movie_form::terminal::Terminal;
use movie_form::{MovieRecord, Result, logging, output};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;

#[derive(Debug, Parser)]
#[command(name = "movie-form", version, about = "Add movie records from an interactive terminal form")]
struct Cli {
    /// YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How added records are printed when the form closes.
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// Exit after the first successful submission.
    #[arg(long)]
    once: bool,

    /// Draw below the prompt instead of on the alternate screen.
    #[arg(long)]
    inline: bool,

    /// Print the initial element tree as JSON and exit.
    #[arg(long)]
    snapshot: bool,

    /// Directory for log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(Overrides {
        output: cli.output,
        once: cli.once,
        inline: cli.inline,
    });

    if cli.snapshot {
        println!("{}", config.snapshot()?);
        return Ok(());
    }

    logging::init(cli.log_dir)?;
    tracing::info!(config = ?cli.config, ?config, "configuration resolved");

    let (tx, rx) = mpsc::channel::<MovieRecord>();
    let form = config.build_form(move |record| {
        // The receiver outlives the runtime, so this cannot fail while the form is open.
        let _ = tx.send(record);
    });
    let app = App::new(form).exit_after_submit(config.exit_after_submit);
    let terminal = Terminal::new()?.with_mode(config.render_mode);

    let mut runtime = Runtime::new(app, terminal);
    let added = runtime.run()?;
    drop(runtime);

    let records: Vec<MovieRecord> = rx.try_iter().collect();
    tracing::info!(added, collected = records.len(), "session finished");
    output::write_records(config.output, &records, &mut io::stdout().lock())
}
