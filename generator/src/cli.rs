//! CLI argument definitions shared by the generator binaries.
//!
//! Both binaries accept the same flags and differ only in the catalog they
//! render, so parsing, validation, and exit-code mapping live here.

use crate::artefact::error::ArtefactError;
use crate::artefact::revision::Revision;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::manifest::record::DEFAULT_BASE_URL;
use crate::pipeline::{GenerateConfig, generate};
use clap::Parser;
use log::error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Default template path, relative to the working directory.
pub const DEFAULT_TEMPLATE: &str = "utils/module.yml.j2";

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "zephyr/module.yml";

/// Generate a module.yml file for the Zephyr project.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
#[command(long_about = concat!(
    "Generate a module.yml file for the Zephyr project.\n\n",
    "Each artefact of the catalog is downloaded at the given commit, its ",
    "SHA-256 digest is computed, and the records are rendered through a ",
    "Handlebars template. The output file is replaced only when every ",
    "artefact was retrieved successfully.",
))]
pub struct ManifestCli {
    /// Path to the Handlebars template file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Path to the output YAML file.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Commit of the upstream repository to fetch artefacts from.
    #[arg(short, long, value_name = "REV")]
    pub commit: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub debug: bool,

    /// Raw-content root of the upstream repository.
    #[arg(
        long,
        value_name = "URL",
        env = "MODULE_MANIFEST_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Network timeout per artefact, in seconds.
    #[arg(
        long,
        value_name = "SECS",
        env = "MODULE_MANIFEST_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}

impl ManifestCli {
    /// Validate the arguments into a [`GenerateConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ArtefactError::InvalidRevision`] for an unusable `--commit`.
    pub fn to_config(&self) -> std::result::Result<GenerateConfig, ArtefactError> {
        Ok(GenerateConfig {
            template: self.template.clone(),
            output: self.output.clone(),
            revision: Revision::try_from(self.commit.as_str())?,
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
        })
    }
}

/// Validate `cli` and generate the manifest for `catalog`.
///
/// # Errors
///
/// Returns any validation, retrieval, template, or output error.
pub fn run(cli: &ManifestCli, catalog: &Catalog) -> Result<()> {
    let config = cli.to_config()?;
    generate(catalog, &config)?;
    Ok(())
}

/// Report a failed run and map it to a process exit code.
///
/// The error goes through the logger when one is installed and straight to
/// `stderr` otherwise, so a fatal error is never dropped.
#[must_use]
pub fn exit_code_for_run_result(
    result: Result<()>,
    logging_ready: bool,
    stderr: &mut dyn Write,
) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) if logging_ready => {
            error!("{err}");
            1
        }
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

/// Write a line to stderr, ignoring write failures.
pub fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort output; nothing else to report to.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifestError;
    use rstest::rstest;

    fn parse(args: &[&str]) -> ManifestCli {
        let argv = std::iter::once("update-blobs").chain(args.iter().copied());
        ManifestCli::try_parse_from(argv).expect("arguments parse")
    }

    fn without_env<T>(f: impl FnOnce() -> T) -> T {
        temp_env::with_vars_unset(
            ["MODULE_MANIFEST_BASE_URL", "MODULE_MANIFEST_TIMEOUT"],
            f,
        )
    }

    #[test]
    fn defaults_match_repository_layout() {
        let cli = without_env(|| parse(&["--commit", "deadbeef"]));
        assert_eq!(cli.template, PathBuf::from("utils/module.yml.j2"));
        assert_eq!(cli.output, PathBuf::from("zephyr/module.yml"));
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout, 30);
        assert!(!cli.debug);
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli = parse(&["-t", "t.hbs", "-o", "out.yml", "-c", "abc1234", "-d"]);
        assert_eq!(cli.template, PathBuf::from("t.hbs"));
        assert_eq!(cli.output, PathBuf::from("out.yml"));
        assert_eq!(cli.commit, "abc1234");
        assert!(cli.debug);
    }

    #[test]
    fn commit_is_required() {
        let result = ManifestCli::try_parse_from(["update-blobs"]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result =
            ManifestCli::try_parse_from(["update-blobs", "-c", "deadbeef", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn environment_overrides_base_url_and_timeout() {
        let cli = temp_env::with_vars(
            [
                ("MODULE_MANIFEST_BASE_URL", Some("https://mirror.test/raw")),
                ("MODULE_MANIFEST_TIMEOUT", Some("5")),
            ],
            || parse(&["-c", "deadbeef"]),
        );
        assert_eq!(cli.base_url, "https://mirror.test/raw");
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn to_config_carries_validated_revision() {
        let cli = without_env(|| parse(&["-c", "deadbeef", "--timeout", "7"]));
        let config = cli.to_config().expect("valid config");
        assert_eq!(config.revision.as_str(), "deadbeef");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[rstest]
    #[case::whitespace("dead beef")]
    #[case::empty("")]
    fn to_config_rejects_bad_revision(#[case] commit: &str) {
        let cli = parse(&["-c", commit]);
        let err = cli.to_config().expect_err("invalid revision");
        assert!(matches!(err, ArtefactError::InvalidRevision { .. }));
    }

    fn empty_revision_error() -> ManifestError {
        ManifestError::InvalidRevision(ArtefactError::InvalidRevision {
            value: String::new(),
            reason: "revision must not be empty".to_owned(),
        })
    }

    #[rstest]
    #[case::logger(true)]
    #[case::bare_stderr(false)]
    fn exit_code_is_zero_on_success(#[case] logging_ready: bool) {
        let mut stderr = Vec::new();
        assert_eq!(exit_code_for_run_result(Ok(()), logging_ready, &mut stderr), 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_is_one_on_failure() {
        let mut stderr = Vec::new();
        assert_eq!(
            exit_code_for_run_result(Err(empty_revision_error()), true, &mut stderr),
            1
        );
        assert!(stderr.is_empty(), "logged errors are not duplicated on stderr");
    }

    #[test]
    fn failure_without_logger_is_written_to_stderr() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(empty_revision_error()), false, &mut stderr);
        assert_eq!(exit_code, 1);
        let message = String::from_utf8(stderr).expect("utf-8 output");
        assert!(message.contains("invalid revision"), "{message}");
        assert!(message.ends_with('\n'));
    }

    #[test]
    fn write_stderr_line_appends_newline() {
        let mut buffer = Vec::new();
        write_stderr_line(&mut buffer, "hello");
        assert_eq!(buffer, b"hello\n");
    }
}
