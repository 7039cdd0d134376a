use computor::{get_opts, run_computor, ComputorResult};
use libtest_mimic::Outcome;

pub type ComputorOutput = (
    /*stdout*/ String,
    /*stderr*/ String,
    /*exit code*/ String,
);

/// Runs computor in-process with the given command line arguments and equation.
pub fn run_computor_with(args: &str, input: &str) -> Result<ComputorOutput, Outcome> {
    let argv = std::iter::once("computor")
        .chain(args.split_whitespace())
        .chain(vec!["--", input]);

    let opts = match get_opts(|app| app.get_matches_from_safe(argv), false) {
        Ok(opts) => opts,
        Err(e) => return Err(fail!("Invalid arguments `{}`: {}", args.trim(), e.message)),
    };

    let ComputorResult {
        code,
        stdout,
        stderr,
        ..
    } = run_computor(opts);

    Ok((stdout, stderr, format!("{}\n", code)))
}
