//! Enablement policies.
//!
//! A policy decides, once per drag start, whether the gesture may be tracked.
//! Evaluation is a pure function of the policy, a viewport/device snapshot,
//! and a region containment probe supplied by the caller.

use super::device::{DeviceProfile, Viewport};
use serde::{Deserialize, Serialize};

/// Which drags the tracker accepts. Exactly one policy is active.
///
/// # Example
///
/// ```rust
/// use swipedown::core::{Admission, DeviceProfile, EnablementPolicy, Viewport};
///
/// let policy = EnablementPolicy::ViewportBreakpoint { width: 800.0 };
/// let phone = DeviceProfile::new(5, "Android");
///
/// let narrow = policy.admit(Viewport::new(799.0, 900.0), &phone, |_| true);
/// let wide = policy.admit(Viewport::new(800.0, 900.0), &phone, |_| true);
///
/// assert_eq!(narrow, Admission::Enabled);
/// assert_eq!(wide, Admission::Disabled);
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnablementPolicy {
    /// Every single-touch drag is tracked.
    #[default]
    Unrestricted,

    /// Disabled on devices that look like a desktop or hybrid.
    DeviceHeuristic,

    /// Only drags starting inside the named region are tracked. Drags
    /// starting elsewhere are ignored without touching any state.
    StartRegion { region: String },

    /// Disabled while the viewport is at least `width` wide.
    ViewportBreakpoint { width: f64 },
}

/// Result of evaluating a policy for one drag start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Enabled,
    /// The gesture is disabled; move and end are ignored until the next start.
    Disabled,
    /// The start landed outside the bounded region; nothing is recorded.
    OutsideRegion,
}

impl EnablementPolicy {
    /// Decide whether a drag may start.
    ///
    /// `inside_region` is only called for [`EnablementPolicy::StartRegion`],
    /// and the region check runs before anything else.
    pub fn admit<F>(&self, viewport: Viewport, device: &DeviceProfile, inside_region: F) -> Admission
    where
        F: FnOnce(&str) -> bool,
    {
        match self {
            Self::Unrestricted => Admission::Enabled,
            Self::StartRegion { region } => {
                if inside_region(region) {
                    Admission::Enabled
                } else {
                    Admission::OutsideRegion
                }
            }
            Self::DeviceHeuristic => {
                if device.looks_like_desktop(viewport) {
                    Admission::Disabled
                } else {
                    Admission::Enabled
                }
            }
            Self::ViewportBreakpoint { width } => {
                if viewport.width >= *width {
                    Admission::Disabled
                } else {
                    Admission::Enabled
                }
            }
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::DeviceHeuristic => "device_heuristic",
            Self::StartRegion { .. } => "start_region",
            Self::ViewportBreakpoint { .. } => "viewport_breakpoint",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> DeviceProfile {
        DeviceProfile::new(5, "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)")
    }

    fn mouse_only() -> DeviceProfile {
        DeviceProfile::new(0, "Mozilla/5.0 (X11; Linux x86_64)")
    }

    #[test]
    fn unrestricted_always_enables() {
        let policy = EnablementPolicy::Unrestricted;
        assert_eq!(
            policy.admit(Viewport::new(4000.0, 2000.0), &mouse_only(), |_| false),
            Admission::Enabled
        );
    }

    #[test]
    fn device_heuristic_disables_without_touch() {
        let policy = EnablementPolicy::DeviceHeuristic;
        assert_eq!(
            policy.admit(Viewport::new(375.0, 812.0), &mouse_only(), |_| true),
            Admission::Disabled
        );
        assert_eq!(
            policy.admit(Viewport::new(375.0, 812.0), &phone(), |_| true),
            Admission::Enabled
        );
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let policy = EnablementPolicy::ViewportBreakpoint { width: 800.0 };
        assert_eq!(
            policy.admit(Viewport::new(800.0, 600.0), &phone(), |_| true),
            Admission::Disabled
        );
        assert_eq!(
            policy.admit(Viewport::new(799.0, 600.0), &phone(), |_| true),
            Admission::Enabled
        );
    }

    #[test]
    fn start_region_consults_probe_with_region_name() {
        let policy = EnablementPolicy::StartRegion {
            region: "handle".to_string(),
        };
        let mut asked = None;
        let admission = policy.admit(Viewport::default(), &phone(), |region| {
            asked = Some(region.to_string());
            false
        });

        assert_eq!(admission, Admission::OutsideRegion);
        assert_eq!(asked.as_deref(), Some("handle"));
        assert_eq!(
            policy.admit(Viewport::default(), &phone(), |_| true),
            Admission::Enabled
        );
    }

    #[test]
    fn non_region_policies_never_probe() {
        for policy in [
            EnablementPolicy::Unrestricted,
            EnablementPolicy::DeviceHeuristic,
            EnablementPolicy::ViewportBreakpoint { width: 100.0 },
        ] {
            let mut probed = false;
            let _ = policy.admit(Viewport::new(50.0, 50.0), &phone(), |_| {
                probed = true;
                true
            });
            assert!(!probed, "{} probed the region", policy.name());
        }
    }

    #[test]
    fn policy_deserializes_from_tagged_json() {
        let policy: EnablementPolicy =
            serde_json::from_str(r#"{"kind":"viewport_breakpoint","width":768}"#).unwrap();
        assert_eq!(policy, EnablementPolicy::ViewportBreakpoint { width: 768.0 });

        let policy: EnablementPolicy = serde_json::from_str(r#"{"kind":"device_heuristic"}"#).unwrap();
        assert_eq!(policy, EnablementPolicy::DeviceHeuristic);
    }
}
