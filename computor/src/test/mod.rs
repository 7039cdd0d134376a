use libtest_mimic::{run_tests, Arguments, Outcome, Test};
use std::error::Error;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
mod common;
mod exec;

use computor_emit_test::ComputorEmitTest;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Arguments::from_args();
    let test_files = collect_test_files()?;
    let tests = test_files.into_iter().map(TestCase::new).collect();
    run_tests(&args, tests, TestCase::drive_test).exit();
}

/// Collects all `.computor` system test files, starting from computor/src/test and visiting all
/// nested directories.
fn collect_test_files() -> Result<Vec<Test<PathBuf>>, Box<dyn Error>> {
    let root_test_path = Path::new("src/test");
    let mut dirs_to_visit = vec![root_test_path.to_path_buf()];
    let mut tests = Vec::with_capacity(32);
    while let Some(dir) = dirs_to_visit.pop() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                dirs_to_visit.push(path);
                continue;
            }
            if path.extension() == Some(OsStr::new("computor")) {
                let name = path.strip_prefix(root_test_path)?.display().to_string();

                tests.push(Test {
                    name,
                    kind: "system".to_owned(),
                    is_ignored: false,
                    is_bench: false,
                    data: path,
                });
            }
        }
    }
    tests.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(tests)
}

#[derive(Clone)]
enum TestCase {
    ComputorEmit(ComputorEmitTest, PathBuf),
    /// The test file itself is malformed; holds the failure message.
    FailedTestConstruction(String),
}

impl TestCase {
    /// Creates a test case from a computor system test file.
    fn new(test_file: Test<PathBuf>) -> Test<Self> {
        let data = match fs::read_to_string(&test_file.data) {
            Ok(content) => match ComputorEmitTest::new(&test_file.name, content) {
                Ok(test) => TestCase::ComputorEmit(test, test_file.data.clone()),
                Err(msg) => TestCase::FailedTestConstruction(msg),
            },
            Err(e) => TestCase::FailedTestConstruction(format!(
                "Failed to read {}: {}",
                real_path!(test_file.data.display()),
                e
            )),
        };

        Test {
            name: test_file.name,
            kind: test_file.kind,
            is_ignored: test_file.is_ignored,
            is_bench: test_file.is_bench,
            data,
        }
    }

    /// Executes a computor system test.
    fn drive_test(test: &Test<Self>) -> Outcome {
        match &test.data {
            TestCase::FailedTestConstruction(msg) => fail!(msg.clone()),
            TestCase::ComputorEmit(tc, path) => tc.clone().drive_test(&test.name, path),
        }
    }
}

/// Returns the command to bless a test file.
fn get_bless_cmd(test_name: &str) -> String {
    format!(
        "BLESS=1 cargo test -p computor --test system_tests -- \"{}\"",
        test_name
    )
}
