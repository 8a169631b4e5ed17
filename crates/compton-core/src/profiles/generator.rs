use super::hydrogenic::HydrogenicGenerator;
use super::model::{HalfProfileSet, ProfileSource};
use super::tabulated::{TabulatedGenerator, table_path};
use crate::domain::{AtomicNumber, ComputeResult};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const TABLE_DIR_ENV: &str = "COMPTON_PROFILE_TABLE_DIR";

/// Produces the half profiles of one element.
pub trait ComptonProfileGenerator: Send + Sync {
    fn atomic_number(&self) -> AtomicNumber;

    fn source(&self) -> ProfileSource;

    fn generate_half_profiles(&self) -> ComputeResult<HalfProfileSet>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding `zNNN.json` tables. Elements without a table here
    /// use [`default_generator`].
    pub table_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn with_table_dir(table_dir: impl Into<PathBuf>) -> Self {
        Self {
            table_dir: Some(table_dir.into()),
        }
    }

    pub fn from_env() -> Self {
        let table_dir = std::env::var_os(TABLE_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { table_dir }
    }
}

/// The compiled-in table when the element has one, the hydrogenic model otherwise.
pub fn default_generator(atomic_number: AtomicNumber) -> Box<dyn ComptonProfileGenerator> {
    match TabulatedGenerator::bundled(atomic_number) {
        Some(Ok(generator)) => Box::new(generator),
        Some(Err(error)) => {
            warn!(
                z = atomic_number.get(),
                error = %error,
                "bundled profile table rejected, falling back to hydrogenic model"
            );
            Box::new(HydrogenicGenerator::new(atomic_number))
        }
        None => Box::new(HydrogenicGenerator::new(atomic_number)),
    }
}

pub fn default_generator_with_config(
    atomic_number: AtomicNumber,
    config: &GeneratorConfig,
) -> ComputeResult<Box<dyn ComptonProfileGenerator>> {
    let Some(table_dir) = config.table_dir.as_deref() else {
        return Ok(default_generator(atomic_number));
    };

    let path = table_path(table_dir, atomic_number);
    if path.is_file() {
        debug!(z = atomic_number.get(), path = %path.display(), "using tabulated profiles");
        return Ok(Box::new(TabulatedGenerator::load(&path, atomic_number)?));
    }

    warn!(
        z = atomic_number.get(),
        path = %path.display(),
        "no profile table found, using default generator"
    );
    Ok(default_generator(atomic_number))
}
