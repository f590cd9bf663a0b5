use clap::{Parser, Subcommand};
use tracing::{debug, error, trace};

/// Arithmetic and number-theory helpers with a demonstration transcript
#[derive(Parser)]
#[command(name = "numera")]
#[command(about = "Arithmetic and number-theory helper demo", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full demonstration transcript (default command)
    Demo,
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Subtract the second integer from the first
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Multiply two integers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Integer division, truncating toward zero
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Check whether a number is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Compute the factorial of a non-negative number
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("numera started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => numera::demo::run(),
        Commands::Add { a, b } => {
            println!("{a} + {b} = {}", numera::math::add(a, b));
            Ok(())
        }
        Commands::Subtract { a, b } => {
            println!("{a} - {b} = {}", numera::math::subtract(a, b));
            Ok(())
        }
        Commands::Multiply { a, b } => {
            println!("{a} * {b} = {}", numera::math::multiply(a, b));
            Ok(())
        }
        Commands::Divide { a, b } => run_divide(a, b),
        Commands::Prime { n } => {
            let verdict = if numera::math::is_prime(n) {
                "prime"
            } else {
                "not prime"
            };
            println!("{n} is {verdict}");
            Ok(())
        }
        Commands::Factorial { n } => run_factorial(n),
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_divide(a: i32, b: i32) -> anyhow::Result<()> {
    let quotient = numera::math::divide(a, b)?;
    println!("{a} / {b} = {quotient}");
    Ok(())
}

fn run_factorial(n: i32) -> anyhow::Result<()> {
    let result = numera::math::factorial(n)?;
    println!("{n}! = {result}");
    Ok(())
}
