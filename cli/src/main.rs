use clap::Parser;
use nested_prng_cli::{init_tracing, render_text, run_sampling, CliArgs, CliResult, SampleRanges};

fn main() -> CliResult<()> {
    init_tracing()?;

    let args = CliArgs::parse();
    let config = args.resolve_config()?;
    tracing::debug!(?config, iterations = args.iterations, "resolved generator config");

    let report = run_sampling(&config, args.iterations, &SampleRanges::default())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
