// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version string helpers for Kubernetes and OpenShift versions
//!
//! These helpers split dotted version strings into their components without
//! interpreting them numerically. An empty string is returned whenever a
//! component is not present, so callers treat `""` as "unknown".

/// Approximate OpenShift release for each known Kubernetes minor version
///
/// Keys are matched exactly, including the trailing `+` that Kubernetes
/// reports on OpenShift clusters. There is no range or numeric matching.
pub const OCP_VERSION_BY_K8S_MINOR: &[(&str, &str)] =
    &[("10+", "3.10"), ("11+", "3.11"), ("13+", "4.1")];

/// Return the first `.`-separated component of a version string
///
/// # Examples
/// ```
/// use platform_info::version::major_component;
/// assert_eq!(major_component("4.1.0-rc.1"), "4");
/// assert_eq!(major_component("4"), "4");
/// assert_eq!(major_component(""), "");
/// ```
#[must_use]
pub fn major_component(version: &str) -> &str {
    version.split('.').next().unwrap_or_default()
}

/// Return the second `.`-separated component of a version string
///
/// Any suffix on the component (such as the Kubernetes `+` marker) is kept.
///
/// # Examples
/// ```
/// use platform_info::version::minor_component;
/// assert_eq!(minor_component("1.13+"), "13+");
/// assert_eq!(minor_component("3"), "");
/// ```
#[must_use]
pub fn minor_component(version: &str) -> &str {
    version.split('.').nth(1).unwrap_or_default()
}

/// Return everything after the second `.` of a version string
///
/// The remainder is returned verbatim, further dots and pre-release
/// suffixes included.
///
/// # Examples
/// ```
/// use platform_info::version::build_component;
/// assert_eq!(build_component("3.11.69"), "69");
/// assert_eq!(build_component("4.1.0-rc.1"), "0-rc.1");
/// assert_eq!(build_component("1.2.3.4.5.6"), "3.4.5.6");
/// assert_eq!(build_component("4.1"), "");
/// ```
#[must_use]
pub fn build_component(version: &str) -> &str {
    version.splitn(3, '.').nth(2).unwrap_or_default()
}

/// Look up the approximate OpenShift version for a Kubernetes minor version
///
/// # Arguments
/// * `k8s_minor` - Kubernetes minor version as reported, e.g. "11+"
///
/// # Returns
/// `Some(version)` for an exact match in [`OCP_VERSION_BY_K8S_MINOR`],
/// `None` otherwise
///
/// # Examples
/// ```
/// use platform_info::version::approximate_ocp_version;
/// assert_eq!(approximate_ocp_version("13+"), Some("4.1"));
/// assert_eq!(approximate_ocp_version("13"), None);
/// ```
#[must_use]
pub fn approximate_ocp_version(k8s_minor: &str) -> Option<&'static str> {
    OCP_VERSION_BY_K8S_MINOR
        .iter()
        .find(|(minor, _)| *minor == k8s_minor)
        .map(|(_, ocp)| *ocp)
}
