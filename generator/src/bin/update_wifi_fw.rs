//! Regenerates the module manifest for nRF70 Series Wi-Fi firmware.

use clap::Parser;
use module_manifest::catalog::wifi_fw;
use module_manifest::cli::{ManifestCli, exit_code_for_run_result, run, write_stderr_line};
use module_manifest::logging::init_logging;

fn main() {
    let cli = ManifestCli::parse();
    let mut stderr = std::io::stderr();
    let logging_ready = match init_logging(cli.debug) {
        Ok(()) => true,
        Err(err) => {
            write_stderr_line(&mut stderr, err);
            false
        }
    };
    let exit_code =
        exit_code_for_run_result(run(&cli, &wifi_fw::catalog()), logging_ready, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
