fn main() {
    // 1. An explicit TEOMANAGER_BUILD_VERSION wins (packagers set this)
    println!("cargo:rerun-if-env-changed=TEOMANAGER_BUILD_VERSION");
    if let Ok(v) = std::env::var("TEOMANAGER_BUILD_VERSION") {
        if !v.is_empty() {
            println!("cargo:rustc-env=TEOMANAGER_BUILD_VERSION={v}");
            return;
        }
    }

    // 2. VERSION file written by release tooling
    println!("cargo:rerun-if-changed=VERSION");
    if let Ok(v) = std::fs::read_to_string("VERSION") {
        let v = v.trim();
        let v = v.strip_prefix('v').unwrap_or(v);
        if !v.is_empty() {
            println!("cargo:rustc-env=TEOMANAGER_BUILD_VERSION={v}");
            return;
        }
    }

    // 3. git describe for development checkouts
    if let Ok(output) = std::process::Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
    {
        if output.status.success() {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let version = version.strip_prefix('v').unwrap_or(&version);
            println!("cargo:rustc-env=TEOMANAGER_BUILD_VERSION={version}");
            println!("cargo:rerun-if-changed=.git/HEAD");
            println!("cargo:rerun-if-changed=.git/refs/tags");
            return;
        }
    }

    // 4. Crate version
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    println!("cargo:rustc-env=TEOMANAGER_BUILD_VERSION={version}");
}
