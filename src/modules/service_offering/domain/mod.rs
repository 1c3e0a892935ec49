pub mod package;
pub mod service_offering;

pub use package::{check_packages, Package, PackageName};
pub use service_offering::{ServiceFilter, ServiceInput, ServiceOffering, ServicePatch};
