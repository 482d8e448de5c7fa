//! Snapshots of the host display and input hardware.

/// Viewport width above which a desktop-class platform counts as desktop.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// User-agent fragments that identify desktop-class operating systems.
pub const DESKTOP_PLATFORM_MARKERS: [&str; 2] = ["Windows", "Macintosh"];

/// Visible viewport size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// What the host reports about its input hardware.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    /// Maximum simultaneous touch contacts; zero means no touch input.
    pub max_touch_points: u32,
    pub user_agent: String,
}

impl DeviceProfile {
    pub fn new(max_touch_points: u32, user_agent: impl Into<String>) -> Self {
        Self {
            max_touch_points,
            user_agent: user_agent.into(),
        }
    }

    pub fn has_touch(&self) -> bool {
        self.max_touch_points > 0
    }

    /// The user agent names a desktop-class operating system.
    pub fn is_desktop_platform(&self) -> bool {
        DESKTOP_PLATFORM_MARKERS
            .iter()
            .any(|marker| self.user_agent.contains(marker))
    }

    /// No touch at all, or a desktop OS on a wide viewport.
    ///
    /// Tablets reporting a desktop user agent still count as touch devices
    /// while their viewport stays at or under [`DESKTOP_MIN_WIDTH`].
    pub fn looks_like_desktop(&self, viewport: Viewport) -> bool {
        !self.has_touch() || (self.is_desktop_platform() && viewport.width > DESKTOP_MIN_WIDTH)
    }
}
