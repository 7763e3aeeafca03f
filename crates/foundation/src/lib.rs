pub mod math;

// Foundation crate: small, well-tested geodesy primitives only.
