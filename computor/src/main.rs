use computor::{get_opts, run_computor, ComputorResult};
use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a stderr tracing subscriber, unless logging is `off`.
fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = match level {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => return Ok(()),
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stdout.supports_color() && ch_stderr.supports_color();

    let opts = get_opts(|app| app.get_matches_safe(), use_color).unwrap_or_else(|e| e.exit());
    init_logging(&opts.log_level)?;

    let ComputorResult {
        code,
        stdout,
        stderr,
        page,
    } = run_computor(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page)?;
    }

    std::process::exit(code)
}

/// Prints to stdout, through `$PAGER` when `page` is set.
fn print_stdout(
    stdout: &str,
    ch_stdout: &mut BufferedStandardStream,
    page: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fallback_to_println = !page;

    if page {
        let pager_name = env::var_os("PAGER")
            .unwrap_or_else(|| OsString::from(if cfg!(windows) { "more.com" } else { "less" }));

        match Command::new(pager_name).stdin(Stdio::piped()).spawn() {
            Ok(mut pager) => {
                if let Some(pipe) = pager.stdin.as_mut() {
                    if pipe.write_all(stdout.as_bytes()).is_err() {
                        fallback_to_println = true;
                    }
                }
                if pager.wait().is_err() {
                    fallback_to_println = true;
                }
            }
            Err(_) => fallback_to_println = true,
        }
    }

    if fallback_to_println {
        writeln!(ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    match out {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
        Err(..) => {
            eprint!("\nnote: you found an internal computor error!\n");
            eprint!("\nnote: please file a bug report with the equation that caused it\n");
            std::process::exit(2);
        }
    }
}
