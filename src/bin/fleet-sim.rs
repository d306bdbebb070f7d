use evtol_sim::config::{self, Command, FormatArg};
use evtol_sim::engine;
use evtol_sim::error::Result;
use evtol_sim::output::{self, Formatter, HumanFormatter, JsonFormatter, SummaryFormatter};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = config::parse_args()?;
    match cli.command {
        Command::Run(args) => {
            let config = config::build_config(&args.config)?;
            let result = engine::run_simulation(&config)?;
            let formatter = formatter_for(&args.format);
            print!("{}", formatter.write(&result));
        }
        Command::ShowConfig(args) => {
            let config = config::build_config(&args)?;
            print!("{}", output::render_config(&config));
        }
        Command::ListTypes(args) => {
            let config = config::build_config(&args)?;
            print!("{}", output::render_catalog(&config.catalog));
        }
    }
    Ok(())
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
