use std::env::vars;

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::{Record, generate};

/// Rows generated per page mount when `TABULA_ROWS` is not set.
pub const DEFAULT_ROWS: usize = 500;

/// Demo configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of top-level rows generated on each page mount.
    pub rows: usize,
    /// Fixed RNG seed, so every mount produces the same rows.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    tabula_rows: Option<usize>,
    tabula_seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: None,
        }
    }
}

impl DemoConfig {
    pub fn new(rows: usize, seed: Option<u64>) -> Self {
        Self { rows, seed }
    }

    /// Reads `TABULA_ROWS` and `TABULA_SEED`.
    pub fn init() -> anyhow::Result<Self> {
        Self::from_vars(vars())
    }

    /// Builds the configuration from any set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .filter(|(k, _)| k.starts_with("TABULA_"))
            .collect();

        let raw: RawConfig =
            serde_env::from_iter(pairs).context("Failed to read TABULA_* variables")?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            tabula_rows,
            tabula_seed,
        } = raw;

        let rows = tabula_rows.unwrap_or_else(|| {
            log::info!("TABULA_ROWS not set, defaulting to {DEFAULT_ROWS}");
            DEFAULT_ROWS
        });
        if let Some(seed) = tabula_seed {
            log::info!("Using fixed seed {seed}");
        }

        Self {
            rows,
            seed: tabula_seed,
        }
    }

    /// Generates a fresh dataset for a page mount.
    pub fn generate_rows(&self) -> Vec<Record> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate(self.rows, &mut rng)
    }
}
