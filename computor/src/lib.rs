//! The computor app. For an overview of the solving pipeline, see
//! [libcomputor's documentation](libcomputor).

#![deny(missing_docs)]

mod diagnostics;
use diagnostics::{emit_computor_diagnostics, sanitize_source_for_diagnostics};

use libcomputor::diagnostics::Diagnostic;
use libcomputor::{parse_equation, solve, Emit, EmitConfig, EmitFormat, Palette};

/// Options to run computor with.
pub struct Opts {
    /// Equation to solve.
    pub equation: String,
    /// How the result of solving should be emitted.
    pub emit_format: String,
    /// Configuration options for computor emit.
    pub emit_config: Vec<String>,
    /// When true, computor will stop after reducing the equation.
    pub parse_only: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// Maximum level of tracing output written to stderr, or `off`.
    pub log_level: String,
    /// When true, computor emit will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let app = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("equation")
                .help("Equation to solve, like \"5 + 4 * X + X^2 = X^2\"")
                .required(true)
                .default_value_if("explain", None, ""),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("-o")
                .long("--output-form")
                .next_line_help(true)
                .help(
                    "Computor emit format. Possible values:\n\
                    \tpretty:  Reduced form, degree, and solutions.\n\
                    \tverbose: Reduced form followed by a step-by-step explanation.\n\
                    \tjson:    A JSON object describing the solved equation.\n\
                    \tdebug:   Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("pretty")
                .takes_value(true)
                .possible_values(&["pretty", "verbose", "json", "debug"]),
        )
        .arg(
            clap::Arg::with_name("emit-config")
                .long("--emit-config")
                .next_line_help(true)
                .help(
                    "Emit configuration options. Possible values:\n\
                    \tfrac: Emit rational solutions as irreducible fractions.\n\
                    ",
                )
                .hide_possible_values(true)
                .takes_value(true)
                .possible_values(&["frac"])
                .multiple(true),
        )
        .arg(
            clap::Arg::with_name("parse-only")
                .long("--parse-only")
                .help("Stop after reducing the equation and emit the reduced form"),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("--explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("log")
                .long("--log")
                .value_name("level")
                .help("Write tracing output at or above this level to stderr.")
                .default_value("off")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"]),
        );
    let matches = parser(app)?;

    Ok(Opts {
        equation: matches.value_of("equation").unwrap_or_default().into(),
        emit_format: matches.value_of("output-form").unwrap_or("pretty").into(),
        emit_config: matches
            .values_of("emit-config")
            .map(|opts| opts.map(str::to_owned).collect())
            .unwrap_or_default(),
        parse_only: matches.is_present("parse-only"),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        log_level: matches.value_of("log").unwrap_or("off").into(),
        color,
    })
}

/// Output of a computor execution.
#[derive(Default)]
pub struct ComputorResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [ComputorResult](self::ComputorResult).
struct ComputorResultBuilder {
    /// Equation source sanitized for diagnostic emission.
    sanitized_equation: String,
    emit_config: EmitConfig,
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl ComputorResultBuilder {
    fn new(equation: &str, emit_config: impl Into<EmitConfig>, color: bool) -> Self {
        let palette = if color {
            Palette::ansi()
        } else {
            Palette::default()
        };
        Self {
            sanitized_equation: sanitize_source_for_diagnostics(equation),
            emit_config: emit_config.into().with_palette(palette),
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, obj: &dyn Emit, form: EmitFormat) {
        self.stdout.push_str(&obj.emit(form, self.emit_config));
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr.push_str(&emit_computor_diagnostics(
            &self.sanitized_equation,
            diagnostics,
            self.color,
        ));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn finish(self, code: i32) -> ComputorResult {
        ComputorResult {
            code,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn ok(self) -> ComputorResult {
        self.finish(0)
    }

    fn failed(self) -> ComputorResult {
        self.finish(1)
    }
}

/// Runs computor end-to-end.
pub fn run_computor(opts: Opts) -> ComputorResult {
    let mut result = ComputorResultBuilder::new(&opts.equation, opts.emit_config, opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = Diagnostic::all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.stdout.push_str(explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    let emit_format = match opts.emit_format.parse::<EmitFormat>() {
        Ok(form) => form,
        Err(msg) => {
            result.stderr.push_str(&msg);
            return result.failed();
        }
    };

    let polynomial = match parse_equation(&opts.equation) {
        Ok(polynomial) => polynomial,
        Err(err) => {
            result.err(&[err.to_diagnostic()]);
            return result.failed();
        }
    };

    if opts.parse_only {
        result.emit(&polynomial, emit_format);
    } else {
        result.emit(&solve(&polynomial), emit_format);
    }

    result.ok()
}
