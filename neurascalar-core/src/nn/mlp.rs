use crate::error::NeuraScalarError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::Layer;
use crate::nn::module::{check_input_width, Module};
use crate::value::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape and initialization of an [`Mlp`].
///
/// `layer_sizes` lists the output width of each layer, the last entry being the network's
/// output width. Hidden layers use `hidden_activation`, the last layer `output_activation`.
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub in_features: usize,
    pub layer_sizes: Vec<usize>,
    pub init: Init,
    /// Seed for the parameter RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
}

impl MlpConfig {
    pub fn new(in_features: usize, layer_sizes: impl Into<Vec<usize>>) -> Self {
        MlpConfig {
            in_features,
            layer_sizes: layer_sizes.into(),
            init: Init::default(),
            seed: None,
            hidden_activation: Activation::Tanh,
            output_activation: Activation::Tanh,
        }
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    /// # Errors
    /// [`NeuraScalarError::InvalidConfiguration`] for zero input features, no layers, a
    /// zero-width layer or an invalid init scheme.
    pub fn validate(&self) -> Result<(), NeuraScalarError> {
        if self.in_features == 0 {
            return Err(NeuraScalarError::InvalidConfiguration(
                "in_features must be at least 1".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(NeuraScalarError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&size| size == 0) {
            return Err(NeuraScalarError::InvalidConfiguration(format!(
                "layer {} has zero outputs",
                i
            )));
        }
        self.init.validate()
    }
}

/// A stack of fully connected [`Layer`]s applied in sequence.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network from `config`, drawing parameters from a `StdRng`.
    pub fn new(config: &MlpConfig) -> Result<Self, NeuraScalarError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Mlp::with_rng(config, &mut rng)
    }

    /// Builds a network from `config` with a caller-supplied RNG. `config.seed` is ignored.
    pub fn with_rng<R: Rng + ?Sized>(config: &MlpConfig, rng: &mut R) -> Result<Self, NeuraScalarError> {
        config.validate()?;
        let depth = config.layer_sizes.len();
        let mut layers = Vec::with_capacity(depth);
        let mut nin = config.in_features;
        for (i, &nout) in config.layer_sizes.iter().enumerate() {
            let activation = if i + 1 == depth {
                config.output_activation
            } else {
                config.hidden_activation
            };
            layers.push(Layer::new(nin, nout, activation, &config.init, rng)?);
            nin = nout;
        }
        let mlp = Mlp { layers };
        mlp.label_parameters("")?;
        log::debug!(
            "Built MLP {} -> {:?} with {} parameters",
            config.in_features,
            config.layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Chains existing layers. Each layer's input width must match the previous output width.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NeuraScalarError> {
        if layers.is_empty() {
            return Err(NeuraScalarError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            if pair[1].nin() != pair[0].nout() {
                return Err(NeuraScalarError::DimensionMismatch {
                    expected: pair[0].nout(),
                    actual: pair[1].nin(),
                });
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::nin)
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::nout)
    }

    /// Forward pass on plain numbers, each wrapped in a fresh leaf.
    pub fn forward_f64(&self, input: &[f64]) -> Result<Vec<Value>, NeuraScalarError> {
        let input: Vec<Value> = input.iter().map(|&x| Value::new(x)).collect();
        self.forward(&input)
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuraScalarError> {
        check_input_width(self.in_features(), input)?;
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
