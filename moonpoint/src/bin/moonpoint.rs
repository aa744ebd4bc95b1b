use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use moonpoint::clock::SystemClock;
use moonpoint::commands::{self, CommandOutput};
use moonpoint::heading::{HeadingSample, ManualHeading};
use moonpoint::location::LocationUpdate;
use moonpoint::session::Session;
use moonpoint_ephemeris::EphemerisOptions;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "moonpoint")]
#[command(about = "Point at the Moon from a location and a compass heading")]
#[command(version)]
struct Cli {
    /// Initial latitude in degrees, north positive
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Initial longitude in degrees, east positive
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Initial sensor heading in degrees from north
    #[arg(long)]
    heading: Option<f64>,
    /// Start with a manual heading override (0-359)
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=359))]
    simulate: Option<u16>,
    /// Report geometric altitude without atmospheric refraction
    #[arg(long)]
    no_refraction: bool,
    /// Report geocentric altitude without parallax
    #[arg(long)]
    no_parallax: bool,
    /// Run commands from a file before the prompt
    #[arg(long)]
    script: Option<PathBuf>,
    /// Exit after the initial inputs and script instead of starting the prompt
    #[arg(long)]
    batch: bool,
    /// Log level (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".moonpoint_history")
}

struct MoonpointHelper {
    commands: Vec<String>,
    failures: Vec<String>,
}

impl MoonpointHelper {
    fn new() -> Self {
        Self {
            commands: [
                "LOCATE", "HEADING", "SIMULATE", "REFRESH", "SHOW", "HELP", "QUIT",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            failures: ["DENIED", "UNAVAILABLE", "TIMEOUT"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    fn keyword_pairs(candidates: &[String], prefix: &str) -> Vec<Pair> {
        candidates
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect()
    }
}

impl Completer for MoonpointHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = up_to.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let partial = if up_to.ends_with(' ') {
            String::new()
        } else {
            words.last().map_or("", |s| *s).to_uppercase()
        };

        if words.is_empty() || (words.len() == 1 && !up_to.ends_with(' ')) {
            return Ok((start, Self::keyword_pairs(&self.commands, &partial)));
        }

        let cmd = words[0].to_uppercase();
        let arg_index = if up_to.ends_with(' ') {
            words.len()
        } else {
            words.len() - 1
        };
        let matches = match (cmd.as_str(), arg_index) {
            ("SIMULATE", 1) => Self::keyword_pairs(&["OFF".to_string()], &partial),
            ("LOCATE", 1) => Self::keyword_pairs(&["FAIL".to_string()], &partial),
            ("LOCATE", 2) if words[1].eq_ignore_ascii_case("FAIL") => {
                Self::keyword_pairs(&self.failures, &partial)
            }
            ("HELP", 1) => Self::keyword_pairs(&self.commands, &partial),
            _ => return Ok((pos, vec![])),
        };
        Ok((start, matches))
    }
}

impl Hinter for MoonpointHelper {
    type Hint = String;
}
impl Highlighter for MoonpointHelper {}
impl Validator for MoonpointHelper {}
impl Helper for MoonpointHelper {}

fn init_logging(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn apply_initial_inputs(session: &mut Session, cli: &Cli) -> anyhow::Result<()> {
    if let Some(degrees) = cli.heading {
        if let Some(t) = session.sensor_heading(HeadingSample::new(degrees)?)? {
            println!("{}", commands::format_transition(&t));
        }
    }
    if let Some(degrees) = cli.simulate {
        if let Some(t) = session.simulate(ManualHeading::new(degrees)?)? {
            println!("{}", commands::format_transition(&t));
        }
    }
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        let t = session.locate(LocationUpdate::fix(lat, lon)?)?;
        println!("{}", commands::format_transition(&t));
    }
    if let Some(path) = &cli.script {
        let outputs = commands::run_script(session, path)
            .with_context(|| format!("running script {}", path.display()))?;
        outputs.into_iter().for_each(print_output);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let options = EphemerisOptions {
        refraction: !cli.no_refraction,
        parallax: !cli.no_parallax,
        ..Default::default()
    };
    let mut session = Session::with_options(SystemClock, options);
    apply_initial_inputs(&mut session, &cli)?;

    if cli.batch {
        return Ok(());
    }

    println!("moonpoint v{}", env!("CARGO_PKG_VERSION"));
    println!("Type HELP for commands, Ctrl-D to exit\n");

    let mut rl = Editor::with_config(rustyline::Config::builder().auto_add_history(true).build())
        .context("failed to initialize editor")?;
    rl.set_helper(Some(MoonpointHelper::new()));

    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        match rl.readline("moon> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("QUIT") {
                    println!("Bye!");
                    break;
                }
                match commands::dispatch(&mut session, line) {
                    Ok(output) => print_output(output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
    Ok(())
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].chars().count();
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.chars().count()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:<width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:<width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}
