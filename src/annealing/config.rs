//! Annealing configuration.

/// Configuration for the simulated-annealing schedule.
///
/// # Defaults
///
/// ```
/// use lattice_search::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default();
/// assert_eq!(config.initial_temperature, 1.0);
/// assert_eq!(config.min_temperature, 1e-4);
/// assert_eq!(config.cooling_factor, 0.9);
/// assert_eq!(config.steps_per_temperature, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use lattice_search::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_steps_per_temperature(500)
///     .with_cooling_factor(0.95);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Starting temperature of the schedule.
    pub initial_temperature: f64,

    /// Floor temperature; the schedule stops once the temperature drops
    /// below it.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied after each block of
    /// proposals.
    pub cooling_factor: f64,

    /// Number of move proposals at each temperature level.
    pub steps_per_temperature: usize,

    /// Lower clamp on the current cost inside the acceptance exponent
    /// `exp(delta / current_cost / temperature)`.
    ///
    /// The exponent divides by the current cost, which is undefined for
    /// zero or negative costs. The cost is clamped to this floor before
    /// dividing, which degrades near-zero-cost acceptance toward
    /// always-reject instead of overflowing.
    pub cost_floor: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 1e-4,
            cooling_factor: 0.9,
            steps_per_temperature: 100,
            cost_floor: 1e-9,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, factor: f64) -> Self {
        self.cooling_factor = factor;
        self
    }

    pub fn with_steps_per_temperature(mut self, n: usize) -> Self {
        self.steps_per_temperature = n;
        self
    }

    pub fn with_cost_floor(mut self, floor: f64) -> Self {
        self.cost_floor = floor;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        if self.steps_per_temperature == 0 {
            return Err("steps_per_temperature must be at least 1".into());
        }
        if self.cost_floor <= 0.0 {
            return Err("cost_floor must be positive".into());
        }
        Ok(())
    }
}
