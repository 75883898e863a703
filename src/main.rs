use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use degrees::console::Console;
use degrees::data_loading::load_directory;
use degrees::person_resolver::person_id_for_name;
use degrees::report::{degrees_line, render_path};
use degrees::{shortest_path, GraphIndex, Strategy};

#[derive(Parser, Debug)]
#[command(name = "degrees")]
#[command(version, about = "How many shared movies separate two actors")]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(env = "DEGREES_DATA", default_value = "large")]
    directory: PathBuf,

    /// Search order; asked for interactively when omitted
    #[arg(long, value_name = "DFS|BFS")]
    strategy: Option<Strategy>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DEGREES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn resolve<R: BufRead, W: Write>(index: &GraphIndex, console: &mut Console<R, W>, label: &str) -> Result<String> {
    let name = console.prompt(label).context("reading name")?;
    Ok(person_id_for_name(index, &name, console)?)
}

fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    console.println("Loading data...")?;
    let (index, _) = load_directory(&cli.directory)
        .with_context(|| format!("loading dataset from {}", cli.directory.display()))?;
    console.println("Data loaded.")?;

    let source = resolve(&index, &mut console, "Source Name: ")?;
    let target = resolve(&index, &mut console, "Target Name: ")?;

    let strategy = match cli.strategy {
        Some(strategy) => strategy,
        None => console.prompt("Choose search strategy (DFS/BFS): ").context("reading strategy")?.parse()?,
    };

    let report = shortest_path(&index, &source, &target, strategy);
    console.println(&format!("Number of nodes explored: {}", report.nodes_explored))?;

    match report.path {
        None => console.println("Not connected.")?,
        Some(path) => {
            console.println(&degrees_line(&path))?;
            for line in render_path(&index, &source, &path) {
                console.println(&line)?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse(); // extra positional arguments exit with a usage error here
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
