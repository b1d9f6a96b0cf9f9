//! Loadsim Server — synthetic HTTP load target for autoscaling and load-test infrastructure.

pub mod network;
pub mod simulator;

pub use network::{NetworkConfig, ServerModule};
pub use simulator::Simulator;

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
