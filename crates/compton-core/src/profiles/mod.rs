pub mod generator;
pub mod grid;
pub mod helpers;
pub mod hydrogenic;
pub mod layout;
mod layout_data;
pub mod model;
pub mod occupation;
pub mod tabulated;

pub use generator::{
    default_generator, default_generator_with_config, ComptonProfileGenerator, GeneratorConfig,
    TABLE_DIR_ENV,
};
pub use grid::{UNION_GRID_SIZE, UNION_MOMENTUM_GRID};
pub use helpers::{
    convert_to_mec_units, full_profile_from_half, FullProfile, FullProfileOptions, MomentumUnits,
};
pub use hydrogenic::HydrogenicGenerator;
pub use layout::{layout_for, shell_count, ComptonProfileSubshellConverter, ComptonShell, Coupling};
pub use model::{HalfProfile, HalfProfileSet, ProfileSource};
pub use occupation::{OccupationNumberEvaluator, OccupationNumberRow};
pub use tabulated::{list_table_files, ProfileTable, ProfileTableEntry, TabulatedGenerator};
