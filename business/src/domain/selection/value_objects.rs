use std::num::{IntErrorKind, NonZeroUsize};

use super::errors::MealCountError;

/// Number of dishes requested for a run, between 1 and `MealCount::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealCount(NonZeroUsize);

impl MealCount {
    /// A year of daily meals.
    pub const MAX: usize = 366;

    pub fn new(count: usize) -> Result<Self, MealCountError> {
        if count > Self::MAX {
            return Err(MealCountError::TooLarge);
        }
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(MealCountError::NotPositive)
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl std::fmt::Display for MealCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MealCount {
    type Err = MealCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow => MealCountError::TooLarge,
            IntErrorKind::NegOverflow => MealCountError::NotPositive,
            _ => MealCountError::NotANumber,
        })?;
        if value <= 0 {
            return Err(MealCountError::NotPositive);
        }
        let count = usize::try_from(value).map_err(|_| MealCountError::TooLarge)?;
        Self::new(count)
    }
}

/// How the dishes of a run are picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Skips last run's dishes and spreads picks over categories and methods.
    #[default]
    Intelligent,
    /// Uniform sample of the whole catalog.
    Random,
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStrategy::Intelligent => write!(f, "intelligent"),
            SelectionStrategy::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intelligent" => Ok(SelectionStrategy::Intelligent),
            "random" => Ok(SelectionStrategy::Random),
            _ => Err(format!("Invalid selection strategy: {}", s)),
        }
    }
}
