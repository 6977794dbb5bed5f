pub mod chain_verifier;
pub mod client;
pub mod placeholder_verifier;
