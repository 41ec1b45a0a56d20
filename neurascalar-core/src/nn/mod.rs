// src/nn/mod.rs
// Neural-network building blocks composed from scalar `Value`s.

pub mod activation;
pub mod init;
pub mod layers;
pub mod mlp;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use init::Init;
pub use layers::{Layer, Neuron};
pub use mlp::{Mlp, MlpConfig};
pub use module::Module;
