//! Command line arguments.

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fpkit-demo")]
#[command(about = "Prints one example per fpkit capability")]
pub struct Cli {
    /// Run only the named demonstrations (repeatable). Runs all when omitted.
    #[arg(long = "only", value_enum)]
    pub only: Vec<Demo>,

    /// List the available demonstrations and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// The demonstrations to run, in their canonical order.
    pub fn selection(&self) -> Vec<Demo> {
        Demo::value_variants()
            .iter()
            .copied()
            .filter(|demo| self.only.is_empty() || self.only.contains(demo))
            .collect()
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Demo {
    /// `map` over a successful outcome
    Functor,
    /// `ap` with a wrapped function
    Applicative,
    /// `flat_map` on success and on failure
    Monad,
    /// String concatenation monoid
    StringMonoid,
    /// Left fold over a list
    Foldable,
    /// `traverse` with an outcome effect
    Traversable,
    /// Updating a field through a lens
    Lens,
}

impl Demo {
    pub fn name(self) -> String {
        self.to_possible_value()
            .map_or_else(|| format!("{self:?}"), |value| value.get_name().to_string())
    }
}
