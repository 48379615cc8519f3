use vergen::EmitBuilder;
use std::process::Command;

fn main() {
    // Check if we're in a git repository
    let is_git_available = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    let result = if is_git_available {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(true)
            .emit()
    } else {
        // /api/version and app_info read VERGEN_GIT_SHA unconditionally
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        EmitBuilder::builder()
            .build_timestamp()
            .emit()
    };

    result.expect("Unable to generate build metadata");
}
