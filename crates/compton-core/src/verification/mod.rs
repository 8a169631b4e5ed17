pub mod checks;
pub mod reference;
pub mod runner;

pub use checks::{verify_element, ElementVerification, InvariantCheck, InvariantViolation};
pub use reference::{
    bundled_reference, load_reference, ElementReference, HalfProfileReference, ShellReference,
    DEFAULT_REFERENCE_PATH,
};
pub use runner::{
    render_human_summary, run_verification, write_report, VerificationConfig, VerificationReport,
};
