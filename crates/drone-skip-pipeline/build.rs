use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    let version = env!("CARGO_PKG_VERSION");
    let stamped = match commit_hash() {
        Some(hash) => format!("{version}+{hash}"),
        None => version.to_owned(),
    };

    println!("cargo:rustc-env=DRONE_SKIP_PIPELINE_VERSION={stamped}");
}

// Source tarballs and vendored builds have no repository to ask.
fn commit_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())?;

    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}
