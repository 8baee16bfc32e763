mod cli;

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use classgen_model::ClassDescription;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("classgen: error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input_text = read_input(&cli.input)?;
    let class_desc: ClassDescription = serde_json::from_str(&input_text)?;

    tracing::debug!(class = %class_desc.class_name, "parsed class description");

    let profile = cli.profile();
    let (source, skipped) = classgen::generate(&class_desc, &profile)?;

    if cli.explain_skips {
        for skip in &skipped {
            eprintln!("classgen: skipped {}: {:?}", skip.name, skip.reason);
        }
    }
    tracing::info!(
        class = %class_desc.class_name,
        skipped = skipped.len(),
        "generated binding"
    );

    write_output(&cli.output, &source)
}

fn read_input(path: &std::path::Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(path)
}

fn write_output(path: &std::path::Path, source: &str) -> Result<(), Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(source.as_bytes())?;
        return Ok(());
    }
    fs::write(path, source)?;
    Ok(())
}
