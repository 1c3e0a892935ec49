pub mod certification;

pub use certification::{Certification, CertificationInput, CertificationPatch};
