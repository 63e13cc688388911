use std::time::{SystemTime, UNIX_EPOCH};

// Stamp every build with seconds + nanoseconds since the epoch. The build
// script reruns whenever a file in the package changes, so each rebuild
// publishes a fresh marker.
fn main() {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    println!(
        "cargo:rustc-env=FRESHEN_BUILD_TIMESTAMP={}{:09}",
        since_epoch.as_secs(),
        since_epoch.subsec_nanos()
    );
}
