mod error;
mod highlighter;
mod prompt;
mod report;

use clap::Parser;
use miette::Result;
use trapezoid::{CompiledFunction, Interval, StudyOptions, compile, parse_numeric, render_error};

use error::CliError;
use prompt::Prompter;
use report::{Report, TextOptions};

/// Trapezoid - numerical integration with the composite trapezoidal rule
#[derive(Parser, Debug)]
#[command(name = "trapezoid")]
#[command(about = "Approximate a definite integral with the trapezoidal rule", long_about = None)]
struct Args {
    /// Lower bound (numeric text, e.g. "0" or "2*pi/5")
    #[arg(short = 'a', long = "lower", allow_hyphen_values = true)]
    lower: Option<String>,

    /// Upper bound
    #[arg(short = 'b', long = "upper", allow_hyphen_values = true)]
    upper: Option<String>,

    /// Number of subintervals
    #[arg(short = 'n', long = "partitions")]
    partitions: Option<String>,

    /// Known exact value of the integral (enables error analysis)
    #[arg(short = 'e', long = "exact", allow_hyphen_values = true)]
    exact: Option<String>,

    /// Skip the per-sample breakdown table
    #[arg(long)]
    no_table: bool,

    /// Print results as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Print the parsed expression tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Integrand over `x` (if not provided, prompts or reads from stdin)
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

/// Fully resolved inputs of one run.
struct Inputs {
    function: CompiledFunction,
    interval: Interval,
    n: usize,
    exact: Option<f64>,
}

fn parse_partitions(text: &str) -> Result<usize, CliError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidPartitions {
            text: text.to_string(),
        })
}

/// An invalid exact value is reported and then ignored.
fn parse_exact(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    match parse_numeric(text) {
        Ok(exact) => Some(exact),
        Err(err) => {
            render_error(&err.into_warning());
            eprintln!("Exact value is not valid, ignoring it.");
            None
        }
    }
}

fn gather_inputs(args: &Args, prompter: &mut Prompter) -> Result<Inputs, CliError> {
    // Only prompt for what the command line left out.
    let needs_prompt = args.expression.is_none()
        || args.lower.is_none()
        || args.upper.is_none()
        || args.partitions.is_none();
    if needs_prompt {
        prompter.print_banner();
    }

    let source = match &args.expression {
        Some(expr) => expr.clone(),
        None => {
            prompter.section(1, "ENTER FUNCTION");
            prompter.ask_required("f(x) = ", "function")?
        }
    };
    let function = compile(source.trim())?;

    if args.lower.is_none() || args.upper.is_none() {
        prompter.section(2, "ENTER INTEGRATION BOUNDS");
    }
    let lower = match &args.lower {
        Some(text) => text.clone(),
        None => prompter.ask_required("Lower bound (a): ", "lower bound")?,
    };
    let upper = match &args.upper {
        Some(text) => text.clone(),
        None => prompter.ask_required("Upper bound (b): ", "upper bound")?,
    };
    let interval = Interval::new(parse_numeric(&lower)?, parse_numeric(&upper)?)?;

    let n = match &args.partitions {
        Some(text) => parse_partitions(text)?,
        None => {
            prompter.section(3, "ENTER NUMBER OF SUBINTERVALS");
            parse_partitions(&prompter.ask_required("Subintervals (n): ", "partition count")?)?
        }
    };

    let exact = match &args.exact {
        Some(text) => parse_exact(text),
        // The exact value is optional, so it is only asked for alongside
        // the other questions.
        None if needs_prompt => {
            prompter.section(4, "EXACT VALUE (OPTIONAL)");
            prompter
                .ask("Exact value (press Enter to skip): ")?
                .and_then(|text| parse_exact(&text))
        }
        None => None,
    };

    Ok(Inputs {
        function,
        interval,
        n,
        exact,
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut prompter = Prompter::detect();
    let inputs = gather_inputs(args, &mut prompter)?;

    tracing::debug!(
        function = %inputs.function,
        interval = %inputs.interval,
        n = inputs.n,
        "Inputs resolved"
    );

    if args.debug_parse {
        println!("=== Parsed Expression ===");
        println!("{}", inputs.function.expr());
        println!("{:#?}", inputs.function.expr());
        println!();
    }

    let report = Report::build(
        &inputs.function,
        inputs.interval,
        inputs.n,
        inputs.exact,
        &StudyOptions::default(),
    )?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        let options = TextOptions {
            table: !args.no_table,
            color: atty::is(atty::Stream::Stdout),
        };
        print!("{}", report.to_text(&options));
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => Ok(()),
        Err(CliError::Trapezoid(err)) => {
            render_error(&err);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::try_parse_from([
            "trapezoid", "-a", "-pi", "-b", "2*pi/5", "-n", "8", "-e", "1", "--no-table",
            "--json", "sin(x)",
        ])
        .unwrap();
        assert_eq!(args.lower.as_deref(), Some("-pi"));
        assert_eq!(args.upper.as_deref(), Some("2*pi/5"));
        assert_eq!(args.partitions.as_deref(), Some("8"));
        assert_eq!(args.exact.as_deref(), Some("1"));
        assert!(args.no_table);
        assert!(args.json);
        assert!(!args.debug_parse);
        assert_eq!(args.expression.as_deref(), Some("sin(x)"));
    }

    #[test]
    fn test_parse_partitions() {
        assert_eq!(parse_partitions(" 16 ").unwrap(), 16);
        assert!(matches!(
            parse_partitions("ten"),
            Err(CliError::InvalidPartitions { .. })
        ));
        assert!(parse_partitions("-3").is_err());
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(parse_exact(""), None);
        assert_eq!(parse_exact("1/3"), Some(1.0 / 3.0));
        assert_eq!(parse_exact("sqrt(2)"), None);
    }
}
