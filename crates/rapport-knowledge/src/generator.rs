//! Random assignment of pool statements to population nodes.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rapport_core::config::PopulationConfig;
use rapport_core::errors::KnowledgeError;
use rapport_core::Population;
use tracing::debug;

/// Draws a fresh shuffle of the pool for every node and keeps the first `k`
/// statements, `k` uniform in `[min_statements, max_statements)`.
#[derive(Debug, Clone)]
pub struct PopulationGenerator {
    config: PopulationConfig,
}

impl PopulationGenerator {
    pub fn new(config: PopulationConfig) -> Result<Self, KnowledgeError> {
        if config.min_statements > config.max_statements {
            return Err(KnowledgeError::InvalidLimits {
                min: config.min_statements,
                max: config.max_statements,
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Generate using the configured seed, or OS entropy when unset.
    pub fn generate(&self, pool: &[String]) -> Population {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(pool, &mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, pool: &[String], rng: &mut R) -> Population {
        let assignments = (0..self.config.node_count)
            .map(|_| {
                let mut shuffled: Vec<&String> = pool.iter().collect();
                shuffled.shuffle(rng);
                let take = self.draw_count(rng).min(shuffled.len());
                shuffled.into_iter().take(take).cloned().collect()
            })
            .collect();

        let population = Population::new(assignments);
        debug!(
            nodes = population.len(),
            pool = pool.len(),
            "population generated"
        );
        population
    }

    fn draw_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let (min, max) = (self.config.min_statements, self.config.max_statements);
        if min < max {
            rng.gen_range(min..max)
        } else {
            min
        }
    }
}
