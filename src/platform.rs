// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Platform identification for Kubernetes and OpenShift clusters
//!
//! [`PlatformInfo`] holds what a discovery routine could learn about the
//! cluster it is talking to. Every field may be empty, which means the value
//! could not be determined. The accessors derive version components from the
//! stored strings and never fail.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::version::{approximate_ocp_version, build_component, major_component, minor_component};

/// Identity of the platform a cluster runs on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformName {
    #[default]
    #[serde(alias = "")]
    Unknown,
    Kubernetes,
    OpenShift,
}

impl PlatformName {
    /// Display label used in diagnostics and serialized documents
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Kubernetes => "Kubernetes",
            Self::OpenShift => "OpenShift",
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a platform name is not recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlatformNameError {
    input: String,
}

impl ParsePlatformNameError {
    /// The rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParsePlatformNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown platform name: {:?} (expected 'Kubernetes' or 'OpenShift')",
            self.input
        )
    }
}

impl Error for ParsePlatformNameError {}

impl FromStr for PlatformName {
    type Err = ParsePlatformNameError;

    /// Parse a platform name case-insensitively
    ///
    /// An empty string and "unknown" both yield [`PlatformName::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unknown" => Ok(Self::Unknown),
            "kubernetes" => Ok(Self::Kubernetes),
            "openshift" => Ok(Self::OpenShift),
            _ => Err(ParsePlatformNameError {
                input: s.to_string(),
            }),
        }
    }
}

/// What is known about the platform of a cluster
///
/// Construct with struct literal syntax; unset fields are empty strings.
///
/// # Examples
/// ```
/// use platform_info::{PlatformInfo, PlatformName};
///
/// let mut info = PlatformInfo {
///     name: PlatformName::OpenShift,
///     k8s_version: "1.11+".to_string(),
///     ..Default::default()
/// };
/// info.approximate_openshift_version();
/// assert_eq!(info.ocp_version, "3.11");
/// assert_eq!(info.ocp_major_version(), "3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformInfo {
    /// Platform identity
    pub name: PlatformName,
    /// OpenShift version, e.g. "3.11.69" or "4.1.0-rc.1"
    pub ocp_version: String,
    /// Kubernetes version as reported by the API server, e.g. "1.11+"
    pub k8s_version: String,
    /// Operating system description
    pub os: String,
}

impl PlatformInfo {
    /// Create a `PlatformInfo` from discovered values, leaving the OpenShift version unset
    #[must_use]
    pub fn new(name: PlatformName, k8s_version: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            name,
            ocp_version: String::new(),
            k8s_version: k8s_version.into(),
            os: os.into(),
        }
    }

    #[must_use]
    pub fn is_openshift(&self) -> bool {
        self.name == PlatformName::OpenShift
    }

    #[must_use]
    pub fn is_kubernetes(&self) -> bool {
        self.name == PlatformName::Kubernetes
    }

    /// OpenShift major version, or "" if the OpenShift version is unset
    #[must_use]
    pub fn ocp_major_version(&self) -> &str {
        major_component(&self.ocp_version)
    }

    /// OpenShift minor version, or "" if there is no second component
    #[must_use]
    pub fn ocp_minor_version(&self) -> &str {
        minor_component(&self.ocp_version)
    }

    /// Everything after the OpenShift minor version
    ///
    /// "1.2.3.4.5.6" yields "3.4.5.6" and "4.1.0-rc.1" yields "0-rc.1".
    #[must_use]
    pub fn ocp_build_version(&self) -> &str {
        build_component(&self.ocp_version)
    }

    /// Kubernetes major version, or "" if the Kubernetes version is unset
    #[must_use]
    pub fn k8s_major_version(&self) -> &str {
        major_component(&self.k8s_version)
    }

    /// Kubernetes minor version with any trailing `+` kept, e.g. "13+"
    #[must_use]
    pub fn k8s_minor_version(&self) -> &str {
        minor_component(&self.k8s_version)
    }

    /// Fill in an approximate OpenShift version from the Kubernetes minor version
    ///
    /// Only applies to OpenShift platforms whose OpenShift version is still
    /// empty and whose Kubernetes minor version is listed in
    /// [`OCP_VERSION_BY_K8S_MINOR`](crate::version::OCP_VERSION_BY_K8S_MINOR).
    /// In every other case the value is left untouched, so repeated calls
    /// have no further effect.
    pub fn approximate_openshift_version(&mut self) {
        if !self.is_openshift() || !self.ocp_version.is_empty() {
            return;
        }

        match approximate_ocp_version(self.k8s_minor_version()) {
            Some(ocp_version) => {
                debug!(
                    k8s_version = %self.k8s_version,
                    ocp_version,
                    "approximated OpenShift version from Kubernetes version"
                );
                self.ocp_version = ocp_version.to_string();
            }
            None => {
                trace!(
                    k8s_version = %self.k8s_version,
                    "no OpenShift version known for Kubernetes version"
                );
            }
        }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlatformInfo [Name: {}, OCPVersion: {}, K8SVersion: {}, OS: {}]",
            self.name, self.ocp_version, self.k8s_version, self.os
        )
    }
}
