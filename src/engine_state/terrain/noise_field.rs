//! # Noise Field
//!
//! A coherent 2D noise function used to derive column heights. The field draws from a
//! [`SeededRandom`] exactly once, to seed the permutation table of the underlying
//! `noise` function, and is immutable afterwards. Sampling is a pure function and the
//! field is `Send + Sync`, so any number of readers may sample it concurrently.

use log::debug;
use noise::{NoiseFn, Perlin, Simplex};
use serde::{Deserialize, Serialize};

use super::random::SeededRandom;

/// Which coherent noise function backs a [`NoiseField`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// 2D simplex noise.
    #[default]
    Simplex,
    /// 2D gradient (Perlin) noise.
    Perlin,
}

#[derive(Clone, Debug)]
enum NoiseSource {
    Simplex(Simplex),
    Perlin(Perlin),
}

/// A seeded, deterministic, continuous 2D noise function with output in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseField {
    kind: NoiseKind,
    source: NoiseSource,
}

impl NoiseField {
    /// Builds a field of the given kind.
    ///
    /// # Arguments
    /// * `kind` - The noise function to use
    /// * `random` - The seeded stream; exactly one value is drawn from it
    ///
    /// # Returns
    /// An immutable field ready for sampling.
    pub fn new(kind: NoiseKind, random: &mut SeededRandom) -> Self {
        let seed = random.next_u32();
        debug!(
            "Seeding {:?} noise with {} drawn from seed {}",
            kind,
            seed,
            random.seed()
        );
        let source = match kind {
            NoiseKind::Simplex => NoiseSource::Simplex(Simplex::new(seed)),
            NoiseKind::Perlin => NoiseSource::Perlin(Perlin::new(seed)),
        };
        NoiseField { kind, source }
    }

    /// The function backing this field.
    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Samples the field at `(u, v)`.
    ///
    /// # Arguments
    /// * `u` - First noise-space coordinate
    /// * `v` - Second noise-space coordinate
    ///
    /// # Returns
    /// A value in `[-1, 1]`.
    ///
    /// The raw `noise` output is already close to `[-1, 1]`; it is clamped so callers can
    /// rely on the bound exactly.
    pub fn sample(&self, u: f64, v: f64) -> f64 {
        let raw = match &self.source {
            NoiseSource::Simplex(simplex) => simplex.get([u, v]),
            NoiseSource::Perlin(perlin) => perlin.get([u, v]),
        };
        raw.clamp(-1.0, 1.0)
    }
}
