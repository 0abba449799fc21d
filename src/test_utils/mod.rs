use biodivine_lib_param_bn::BooleanNetwork;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// A small network with three variables:
///
/// ```text
/// a' = b
/// b' = a & !b
/// c' = true
/// ```
pub const TEST_NETWORK_AEON: &str = r"
    a -? b
    b -? a
    b -? b
    $a: b
    $b: a & !b
    $c: true
";

/// The CNET encoding of [`TEST_NETWORK_AEON`].
pub const TEST_NETWORK_CNET: &str = ".v 3
# 1 = a
# 2 = b
# 3 = c

.n 1 1 2
1 1

.n 2 2 1 2
10 1

.n 3 0
1
";

pub fn create_test_network() -> BooleanNetwork {
    BooleanNetwork::try_from(TEST_NETWORK_AEON).unwrap()
}

/// A shell script that imitates the `bns` executable.
///
/// Every invocation appends its arguments (one line per call) to `arguments.txt` and copies
/// the model file (last argument) to `model.cnet` in the same temporary directory, then runs
/// the given script body.
#[cfg(unix)]
pub struct FakeSolver {
    directory: TempDir,
}

#[cfg(unix)]
impl FakeSolver {
    /// Create a solver that prints `output` regardless of its arguments.
    pub fn printing(output: &str) -> FakeSolver {
        let escaped = output.replace('\'', r"'\''");
        FakeSolver::with_script(&format!("printf '%s' '{escaped}'"))
    }

    /// Create a solver running `body` as a `sh` script.
    pub fn with_script(body: &str) -> FakeSolver {
        use std::os::unix::fs::PermissionsExt;

        let directory = tempfile::tempdir().unwrap();
        let script = format!(
            "#!/bin/sh\n\
             DIR='{}'\n\
             echo \"$@\" >> \"$DIR/arguments.txt\"\n\
             for last; do :; done\n\
             cp \"$last\" \"$DIR/model.cnet\" 2>/dev/null\n\
             {body}\n",
            directory.path().display()
        );
        let path = directory.path().join("bns");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        FakeSolver { directory }
    }

    pub fn executable(&self) -> PathBuf {
        self.directory.path().join("bns")
    }

    /// Arguments of all invocations so far.
    pub fn invocations(&self) -> Vec<String> {
        let path = self.directory.path().join("arguments.txt");
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(|it| it.to_string())
            .collect()
    }

    /// Content of the model file passed to the last invocation.
    pub fn last_model(&self) -> String {
        std::fs::read_to_string(self.directory.path().join("model.cnet")).unwrap()
    }
}

/// Write `content` into a file called `name` in `directory`.
pub fn write_file(directory: &Path, name: &str, content: &str) -> PathBuf {
    let path = directory.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
