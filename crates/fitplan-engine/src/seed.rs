use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a reproducible plan search.
///
/// A 128-bit seed for the generator every random decision of a search run is
/// drawn from. Running the search twice with the same seed, profile and
/// catalog produces the same schedule and score.
///
/// Seeds are written as 32 hexadecimal characters (big-endian), both in JSON
/// and on the command line.
///
/// # Example
///
/// ```
/// use fitplan_engine::PlanSeed;
/// use rand::Rng as _;
///
/// let seed: PlanSeed = rand::rng().random();
/// let parsed: PlanSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanSeed([u8; 16]);

impl PlanSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a seed from an integer, handy for tests and fixed runs.
    #[must_use]
    pub const fn from_u128(num: u128) -> Self {
        Self(num.to_be_bytes())
    }

    /// Creates the generator this seed stands for.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid hex: {text}")]
    InvalidDigit { text: String },
}

impl FromStr for PlanSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidDigit { text: s.to_owned() });
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| ParseSeedError::InvalidDigit { text: s.to_owned() })?;
        Ok(Self::from_u128(num))
    }
}

impl fmt::Display for PlanSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for PlanSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlanSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `PlanSeed` values with `rng.random()`.
impl Distribution<PlanSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PlanSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        PlanSeed(seed)
    }
}
