//! coolc-drv - Lexer Driver
//!
//! Reads one Cool source (a file or standard input), pulls every token out
//! of the lexer, prints them, and reports diagnostics. The `coolc-lex`
//! binary is a thin clap front end over [`run`].

pub mod config;
pub mod error;
pub mod output;

use std::io::{Read, Write};
use std::path::PathBuf;

use coolc_lex::{Lexer, Token};
use coolc_util::{Diagnostic, Handler};
use tracing::debug;

use config::OutputFormat;
use error::{DriverError, Result};
use output::Stats;

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Maps the optional positional argument; `-` means standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        }
    }

    /// Name used in the listing header and in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "stdin".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole source as bytes.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().read_to_end(&mut buf)?;
                Ok(buf)
            },
            Input::File(path) => std::fs::read(path).map_err(|source| DriverError::Input {
                path: path.clone(),
                source,
            }),
        }
    }
}

/// Settings for one run, after merging config and flags.
#[derive(Debug, Clone)]
pub struct Options {
    /// Source to scan.
    pub input: Input,
    /// Token output format.
    pub format: OutputFormat,
    /// Print a summary to the diagnostic stream.
    pub stats: bool,
    /// Color diagnostics.
    pub color: bool,
}

/// Exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// No lexical errors.
    Clean,
    /// At least one lexical error was reported.
    LexErrors,
}

impl RunStatus {
    /// Process exit code.
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::LexErrors => 1,
        }
    }
}

/// Exit code for startup failures.
pub const EXIT_FAILURE: u8 = 2;

/// Tokens and diagnostics of one complete scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutcome {
    /// Every token, in source order.
    pub tokens: Vec<Token>,
    /// Every diagnostic, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutcome {
    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.level.is_error()).count()
    }
}

/// Scans `source` to the end with a fresh lexer.
pub fn lex_source(source: &[u8]) -> LexOutcome {
    let mut handler = Handler::new();
    let tokens = Lexer::from_bytes(source, &mut handler).collect();
    LexOutcome {
        tokens,
        diagnostics: handler.take(),
    }
}

/// Runs the driver: read, scan, print tokens to `out` and diagnostics
/// (plus stats) to `err`.
pub fn run<O: Write, E: Write>(options: &Options, out: &mut O, err: &mut E) -> Result<RunStatus> {
    let name = options.input.name();
    let source = options.input.read()?;
    debug!(input = %name, bytes = source.len(), "lexing");

    let outcome = lex_source(&source);
    debug!(
        tokens = outcome.tokens.len(),
        errors = outcome.error_count(),
        "scan finished"
    );

    match options.format {
        OutputFormat::Text => output::write_text(out, &name, &outcome.tokens)?,
        OutputFormat::Json => output::write_json(out, &outcome.tokens)?,
    }
    out.flush()?;

    for diagnostic in &outcome.diagnostics {
        writeln!(err, "{}", diagnostic.render(&name, options.color))?;
    }

    if options.stats {
        Stats::collect(&outcome.tokens, outcome.error_count()).write(err)?;
    }

    Ok(if outcome.error_count() > 0 {
        RunStatus::LexErrors
    } else {
        RunStatus::Clean
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coolc_lex::TokenKind;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn options_for(path: PathBuf, format: OutputFormat) -> Options {
        Options {
            input: Input::File(path),
            format,
            stats: false,
            color: false,
        }
    }

    #[test]
    fn test_input_from_arg() {
        assert_eq!(Input::from_arg(None), Input::Stdin);
        assert_eq!(Input::from_arg(Some(PathBuf::from("-"))), Input::Stdin);
        assert_eq!(
            Input::from_arg(Some(PathBuf::from("a.cl"))),
            Input::File(PathBuf::from("a.cl"))
        );
        assert_eq!(Input::Stdin.name(), "stdin");
    }

    #[test]
    fn test_lex_source() {
        let outcome = lex_source(b"x <- 1 @");
        assert_eq!(outcome.tokens.len(), 4);
        assert_eq!(outcome.tokens[3].kind, TokenKind::Unknown);
        assert_eq!(outcome.error_count(), 1);
    }

    #[test]
    fn test_run_clean_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "class Main {{}};").unwrap();
        let options = options_for(file.path().to_path_buf(), OutputFormat::Text);

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run(&options, &mut out, &mut err).unwrap();

        assert_eq!(status, RunStatus::Clean);
        assert_eq!(status.code(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#name \""));
        assert!(text.contains("#1 CLASS\n#1 TYPEID Main\n#1 '{'\n#1 '}'\n#1 ';'\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_reports_lex_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "x\n\"abc\ny").unwrap();
        let options = options_for(file.path().to_path_buf(), OutputFormat::Text);

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run(&options, &mut out, &mut err).unwrap();

        assert_eq!(status, RunStatus::LexErrors);
        assert_eq!(status.code(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("#1 OBJECTID x\n#3 OBJECTID y\n"));
        let diags = String::from_utf8(err).unwrap();
        assert!(diags.contains("error[E0102]: "));
        assert!(diags.contains(":2: unterminated string constant"));
    }

    #[test]
    fn test_run_json_with_stats() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a b").unwrap();
        let mut options = options_for(file.path().to_path_buf(), OutputFormat::Json);
        options.stats = true;

        let (mut out, mut err) = (Vec::new(), Vec::new());
        run(&options, &mut out, &mut err).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        let stats = String::from_utf8(err).unwrap();
        assert!(stats.contains("tokens: 2"));
        assert!(stats.contains("errors: 0"));
    }

    #[test]
    fn test_run_missing_file() {
        let options = options_for(PathBuf::from("/nonexistent/file.cl"), OutputFormat::Text);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let result = run(&options, &mut out, &mut err);
        assert!(matches!(result, Err(DriverError::Input { .. })));
    }
}
