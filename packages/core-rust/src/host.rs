//! Environment introspection: hostname and logical CPU count.
//!
//! Both lookups are total functions of the process environment at call
//! time: a missing or empty `HOSTNAME` falls back to a fixed literal
//! rather than failing the request.

use std::env;

const HOSTNAME_ENV: &str = "HOSTNAME";
const HOSTNAME_FALLBACK: &str = "localhost";

/// Returns the host identifier from the `HOSTNAME` environment variable.
///
/// Kubernetes pods export `HOSTNAME` as the pod name, which is what an
/// autoscaling observer wants to see in the payload. Unset or empty
/// values resolve to `"localhost"`.
#[must_use]
pub fn hostname() -> String {
    env::var(HOSTNAME_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| HOSTNAME_FALLBACK.to_string())
}

/// Returns the number of logical processors visible to the runtime.
#[must_use]
pub fn cpu_count() -> usize {
    num_cpus::get()
}
