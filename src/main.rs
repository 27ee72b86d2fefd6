use clap::Parser;
use scop_rdf::runner::run_cli;
use scop_rdf::utils::logger;
use scop_rdf::{CliConfig, LocalStorage};
use std::io::BufWriter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let stdout = std::io::stdout();
    let code = run_cli(&cli, LocalStorage::default(), BufWriter::new(stdout.lock()));
    ExitCode::from(code as u8)
}
