// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Platform Identification Library
//!
//! This library describes the platform a cluster runs on (plain Kubernetes or
//! OpenShift), derives version components from the reported version strings,
//! and approximates the OpenShift release when only the Kubernetes version
//! could be observed.

pub mod platform;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use platform::{ParsePlatformNameError, PlatformInfo, PlatformName};
pub use version::{
    OCP_VERSION_BY_K8S_MINOR, approximate_ocp_version, build_component, major_component,
    minor_component,
};
