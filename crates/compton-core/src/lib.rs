pub mod common;
pub mod domain;
pub mod numerics;
pub mod profiles;
pub mod serialization;
pub mod verification;
