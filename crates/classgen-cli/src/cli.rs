//! Argument parsing for the `classgen` driver (spec §6: "the driver takes
//! an input parse-tree file and an output file path; emits zero on
//! success").

use std::path::PathBuf;

use clap::Parser;
use classgen::TargetProfile;

/// Translate a parsed C++ class description into scripting-runtime
/// binding source.
#[derive(Parser, Debug)]
#[command(name = "classgen", version, about)]
pub struct Cli {
    /// Path to the input `ClassDescription` JSON (as produced by the
    /// external C++ parser); `-` reads from stdin.
    pub input: PathBuf,

    /// Path to write the generated C source to; `-` writes to stdout.
    pub output: PathBuf,

    /// Target a host with native `long long`, a 64-bit `vtkIdType`,
    /// matching unsigned-int/long width, and a unicode-capable runtime,
    /// and drop `is_legacy` methods entirely. Absent this flag, the
    /// conservative baseline profile is used (spec §6, ambient toggles).
    #[arg(long)]
    pub modern_target: bool,

    /// Print one line per skipped method (name and reason) to stderr.
    #[arg(long)]
    pub explain_skips: bool,

    /// Increase log verbosity; repeat for more (e.g. `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn profile(&self) -> TargetProfile {
        if self.modern_target { TargetProfile::modern() } else { TargetProfile::baseline() }
    }
}
