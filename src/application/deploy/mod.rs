//! Deploy use case - the provisioning pipeline

mod options;
mod plan;
mod result;
mod use_case;


pub use options::DeployOptions;
pub use plan::{DeployPlan, PlannedStep};
pub use result::DeployReport;
pub use use_case::DeployUseCase;
