use clap::Parser;
use ipv4_subnet_calc::config::{self, OutputFormat, Settings};
use ipv4_subnet_calc::output::{self, JsonDocument, JsonSplit};
use ipv4_subnet_calc::{CalcError, NetworkReport, SplitKind, SplitOutcome, SubnetCalculator};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// IPv4 subnet calculator: network details for a CIDR and optional subnet splitting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network in CIDR notation, e.g. 10.0.0.0/24
    cidr: Option<String>,

    /// Split the network by subnet count, host count or target mask
    #[arg(short, long, value_enum, requires = "value")]
    split: Option<SplitKind>,

    /// Number of subnets, hosts per subnet, or target prefix length
    #[arg(short = 'n', long)]
    value: Option<String>,

    /// Output format (overrides SUBNET_CALC_OUTPUT)
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Maximum number of subnets to print (overrides SUBNET_CALC_SPLIT_LIMIT)
    #[arg(short, long)]
    limit: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    init_logging(&Settings::log_config_from_env())?;
    log::info!("#Start main()");
    let settings = Settings::from_env();

    let format = args.output.unwrap_or(settings.output);
    let limit = args.limit.unwrap_or(settings.split_limit);

    let (report, split) = match run(&args, limit) {
        Ok(result) => result,
        Err(e) => {
            match format {
                OutputFormat::Json => println!("{}", output::render_error_json(&e)),
                _ => output::print_error(&e),
            }
            std::process::exit(1);
        }
    };

    print_results(&report, split.as_ref(), format)
}

fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn run(args: &Args, limit: usize) -> Result<(NetworkReport, Option<SplitOutcome>), CalcError> {
    let mut calc = SubnetCalculator::new();
    let cidr = args.cidr.as_deref().unwrap_or(config::DEFAULT_CIDR);
    let report = *calc.calculate(cidr)?.ok_or_else(|| CalcError::Syntax {
        input: cidr.to_string(),
    })?;

    let split = match args.split {
        Some(kind) => Some(calc.split_request(kind, args.value.as_deref(), limit)?),
        None => None,
    };
    Ok((report, split))
}

fn print_results(
    report: &NetworkReport,
    split: Option<&SplitOutcome>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            output::print_report(report);
            if let Some(outcome) = split {
                println!();
                output::print_subnets(&outcome.subnets, outcome.total);
            }
        }
        OutputFormat::Csv => {
            print!("{}", output::render_report_csv(report));
            if let Some(outcome) = split {
                print!("{}", output::render_subnets_csv(&outcome.subnets));
            }
        }
        OutputFormat::Json => {
            let doc = JsonDocument {
                network: report,
                split: split.map(|o| JsonSplit::new(o.strategy, o.total, &o.subnets)),
            };
            println!("{}", output::render_json(&doc)?);
        }
    }
    Ok(())
}
