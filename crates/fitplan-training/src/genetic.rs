//! Genetic algorithm over weekly schedules.
//!
//! # Algorithm Overview
//!
//! Each generation:
//!
//! 1. **Evaluate Fitness** - Score every schedule in the population
//! 2. **Truncation Selection** - Stable-sort by fitness (best first) and keep the
//!    first `population_size / 2` schedules as survivors
//! 3. **Refill** - Draw two survivors uniformly with replacement (a survivor can
//!    be paired with itself), cross them over, mutate the child with
//!    probability `mutation_rate`, append; repeat until the population is full
//!
//! Survivors are carried over unchanged and stay in front of the children.
//! Only freshly bred children are ever mutated.
//!
//! # Key Components
//!
//! - [`Population`] - Schedules evaluated and selected together
//! - [`PopulationEvolver`] - Breeds the next generation from survivors
//! - [`GeneticAlgorithm`] - Runs the whole generational loop
//!
//! # Result Selection
//!
//! With [`ResultPolicy::LastSurvivor`] (the default) the result is the first
//! schedule of the population after the final refill, re-scored once. That is
//! the best survivor *entering* the last generation. Children bred during the
//! last generation are never scored and can't be returned, even if one of
//! them is better.
//!
//! [`ResultPolicy::BestEver`] instead returns the best schedule scored at any
//! point of the run, including the final generation's children. Ties keep the
//! schedule found first.

use std::cmp::Reverse;

use fitplan_engine::{Catalog, GoalProfile, Schedule};
use fitplan_evaluator::schedule_evaluator::{GoalEvaluator, ScheduleEvaluator};
use rand::Rng;

use crate::{
    operators::{self, InitializeError},
    stats::FitnessStats,
};

/// A population of candidate schedules.
///
/// The population owns its schedules and provides the per-generation steps
/// of the search: fitness evaluation, truncation selection and statistics.
/// Each schedule carries its own fitness, so selection works on whatever the
/// most recent evaluation stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    schedules: Vec<Schedule>,
}

impl Population {
    /// Creates a population of `count` random schedules.
    ///
    /// Every schedule gets `weekly_days` days, each drawn with
    /// [`operators::random_day`]. All schedules start unevaluated (fitness 0).
    ///
    /// # Arguments
    ///
    /// * `catalog` - Exercises to draw days from
    /// * `weekly_days` - Number of days per schedule (at least 1)
    /// * `count` - Number of schedules in the population
    /// * `rng` - Random number generator
    ///
    /// # Errors
    ///
    /// Returns [`InitializeError`] if `weekly_days` is 0 or a drawn day length
    /// exceeds the catalog size.
    pub fn random<R>(
        catalog: &Catalog,
        weekly_days: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<Self, InitializeError>
    where
        R: Rng + ?Sized,
    {
        let schedules = (0..count)
            .map(|_| operators::random_schedule(catalog, weekly_days, rng))
            .collect::<Result<_, _>>()?;
        Ok(Self { schedules })
    }

    #[must_use]
    pub fn from_schedules(schedules: Vec<Schedule>) -> Self {
        Self { schedules }
    }

    #[must_use]
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Scores every schedule, overwriting its previous fitness.
    ///
    /// Schedules are evaluated one after another in population order. The
    /// order of the population is left unchanged; call
    /// [`Self::select_survivors`] to sort it.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - Fitness function to score schedules with
    pub fn evaluate_fitness<E>(&mut self, evaluator: &E)
    where
        E: ScheduleEvaluator + ?Sized,
    {
        for schedule in &mut self.schedules {
            evaluator.score(schedule);
        }
    }

    /// Keeps the better half of the population.
    ///
    /// Schedules are sorted by their stored fitness, best first. The sort is
    /// stable: schedules with equal fitness keep their relative order. The
    /// first `len / 2` schedules are kept, the rest are dropped.
    pub fn select_survivors(&mut self) {
        self.schedules.sort_by_key(|s| Reverse(s.fitness()));
        self.schedules.truncate(self.schedules.len() / 2);
    }

    /// Returns the first schedule with the highest stored fitness.
    #[must_use]
    pub fn fittest(&self) -> Option<&Schedule> {
        self.schedules
            .iter()
            .reduce(|best, s| if s.fitness() > best.fitness() { s } else { best })
    }

    #[must_use]
    pub fn fitness_stats(&self) -> Option<FitnessStats> {
        FitnessStats::new(self.schedules.iter().map(Schedule::fitness))
    }
}

/// Breeds a new generation from survivors.
///
/// Parents are drawn uniformly with replacement, so any survivor (including
/// the same one twice) can be paired. Each child comes from
/// [`operators::crossover`] and is mutated with probability `mutation_rate`.
///
/// # Example
///
/// ```
/// use fitplan_engine::{Catalog, PlanSeed};
/// use fitplan_training::genetic::{Population, PopulationEvolver};
///
/// let catalog = Catalog::reference();
/// let mut rng = PlanSeed::from_u128(1).rng();
/// let mut population = Population::random(&catalog, 3, 20, &mut rng).unwrap();
/// population.select_survivors();
///
/// let evolver = PopulationEvolver {
///     catalog: &catalog,
///     population_size: 20,
///     mutation_rate: 0.2,
/// };
/// let next = evolver.evolve(population.schedules(), &mut rng);
/// assert_eq!(next.len(), 20);
/// ```
#[derive(Debug)]
pub struct PopulationEvolver<'a> {
    /// Catalog that mutation draws replacement exercises from
    pub catalog: &'a Catalog,
    /// Size of the population after refilling
    pub population_size: usize,
    /// Probability of mutating a freshly bred child (decided once per child)
    pub mutation_rate: f64,
}

impl PopulationEvolver<'_> {
    /// Creates the next generation.
    ///
    /// 1. Copies `survivors` unchanged, in their given order
    /// 2. Appends children (crossover of two random survivors, then mutation
    ///    with probability `mutation_rate`) until the population holds
    ///    `population_size` schedules
    ///
    /// Survivors are never mutated. If there are already at least
    /// `population_size` survivors, no child is bred.
    ///
    /// # Arguments
    ///
    /// * `survivors` - Parents for the next generation (must be sorted by fitness descending)
    /// * `rng` - Random number generator
    ///
    /// # Returns
    ///
    /// New population with survivors first and unevaluated children after them
    ///
    /// # Panics
    ///
    /// Panics if `survivors` is empty or not sorted by fitness descending.
    pub fn evolve<R>(&self, survivors: &[Schedule], rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        assert!(!survivors.is_empty());
        assert!(survivors.is_sorted_by(|a, b| a.fitness() >= b.fitness()));

        let mut next = survivors.to_vec();

        while next.len() < self.population_size {
            let p1 = &survivors[rng.random_range(0..survivors.len())];
            let p2 = &survivors[rng.random_range(0..survivors.len())];

            let mut child = operators::crossover(p1, p2);
            if rng.random_bool(self.mutation_rate) {
                if let Some(mutation) = operators::mutate(&mut child, self.catalog, rng) {
                    log::trace!("child #{} mutated: {mutation:?}", next.len());
                }
            }

            next.push(child);
        }

        Population::from_schedules(next)
    }
}

/// Which schedule a run returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    /// Best survivor entering the last generation, re-scored.
    #[default]
    LastSurvivor,
    /// Best schedule scored at any point of the run.
    BestEver,
}

/// Parameters of a search run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticAlgorithmParams {
    /// Number of schedules per generation (at least 2)
    pub population_size: usize,
    /// Number of evaluate, select and refill cycles
    pub generations: usize,
    /// Probability of mutating a freshly bred child, within `[0, 1]`
    pub mutation_rate: f64,
    pub result_policy: ResultPolicy,
}

impl Default for GeneticAlgorithmParams {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 50,
            mutation_rate: 0.2,
            result_policy: ResultPolicy::LastSurvivor,
        }
    }
}

impl GeneticAlgorithmParams {
    pub fn validate(&self) -> Result<(), TrainingError> {
        if self.population_size < 2 {
            return Err(TrainingError::PopulationTooSmall {
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TrainingError::InvalidMutationRate {
                mutation_rate: self.mutation_rate,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TrainingError {
    #[display("population size must be at least 2, got {population_size}")]
    PopulationTooSmall { population_size: usize },
    #[display("mutation rate must be within [0, 1], got {mutation_rate}")]
    InvalidMutationRate { mutation_rate: f64 },
    #[display("failed to create initial population: {_0}")]
    Initialize(InitializeError),
}

impl From<InitializeError> for TrainingError {
    fn from(err: InitializeError) -> Self {
        Self::Initialize(err)
    }
}

/// Fitness summary of one generation, taken right after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    pub generation: usize,
    pub fitness: FitnessStats,
}

/// Result of a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutcome {
    /// Returned schedule, with its fitness freshly computed.
    pub best: Schedule,
    /// One entry per generation, in order.
    pub history: Vec<GenerationStats>,
}

/// Generational controller for plan search.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<'a> {
    catalog: &'a Catalog,
    profile: GoalProfile,
    params: GeneticAlgorithmParams,
}

impl<'a> GeneticAlgorithm<'a> {
    /// Creates a controller for one search.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Exercises that schedules are built from
    /// * `profile` - Goal to optimize for and number of days per week
    /// * `params` - Population size, generation count, mutation rate and result policy
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError`] if `params` fails [`GeneticAlgorithmParams::validate`].
    pub fn new(
        catalog: &'a Catalog,
        profile: GoalProfile,
        params: GeneticAlgorithmParams,
    ) -> Result<Self, TrainingError> {
        params.validate()?;
        Ok(Self {
            catalog,
            profile,
            params,
        })
    }

    #[must_use]
    pub fn params(&self) -> &GeneticAlgorithmParams {
        &self.params
    }

    /// Runs the search.
    ///
    /// Seeds a random population, then for each generation evaluates it,
    /// keeps the better half and refills it with [`PopulationEvolver`]. The
    /// returned schedule depends on [`GeneticAlgorithmParams::result_policy`]
    /// (see the [module documentation](self)).
    ///
    /// The run is a pure function of the catalog, the profile, the parameters
    /// and the generator stream: the same seed always yields the same outcome.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator every random decision is drawn from
    ///
    /// # Errors
    ///
    /// Returns [`TrainingError::Initialize`] if the initial population can't be
    /// drawn from the catalog.
    pub fn run<R>(&self, rng: &mut R) -> Result<TrainingOutcome, TrainingError>
    where
        R: Rng + ?Sized,
    {
        let GeneticAlgorithmParams {
            population_size,
            generations,
            mutation_rate,
            result_policy,
        } = self.params;
        let evaluator = GoalEvaluator::new(self.profile.goal());
        let evolver = PopulationEvolver {
            catalog: self.catalog,
            population_size,
            mutation_rate,
        };

        let mut population = Population::random(
            self.catalog,
            self.profile.weekly_days(),
            population_size,
            rng,
        )?;
        let mut history = Vec::new();
        let mut best_ever: Option<Schedule> = None;

        for generation in 0..generations {
            population.evaluate_fitness(&evaluator);
            if let Some(fitness) = population.fitness_stats() {
                log::debug!(
                    "generation #{generation}: max {} / mean {:.2} / min {}",
                    fitness.max,
                    fitness.mean,
                    fitness.min
                );
                history.push(GenerationStats {
                    generation,
                    fitness,
                });
            }

            population.select_survivors();
            if let Some(leader) = population.schedules().first() {
                keep_better(&mut best_ever, leader);
            }

            population = evolver.evolve(population.schedules(), rng);
        }

        let best = match result_policy {
            ResultPolicy::LastSurvivor => {
                let mut best = population
                    .schedules()
                    .first()
                    .cloned()
                    .expect("population should never be empty");
                evaluator.score(&mut best);
                best
            }
            ResultPolicy::BestEver => {
                population.evaluate_fitness(&evaluator);
                if let Some(fittest) = population.fittest() {
                    keep_better(&mut best_ever, fittest);
                }
                best_ever.expect("population should never be empty")
            }
        };
        log::debug!("search finished with fitness {}", best.fitness());

        Ok(TrainingOutcome { best, history })
    }
}

fn keep_better(best: &mut Option<Schedule>, candidate: &Schedule) {
    if best
        .as_ref()
        .is_none_or(|b| candidate.fitness() > b.fitness())
    {
        *best = Some(candidate.clone());
    }
}
