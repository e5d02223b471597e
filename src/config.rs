pub const BRAND_NAME: &str = "headed home";

/// Vertical offset in pixels past which the navbar picks up its shadow.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Tilt applied to the hero image when the pointer sits at a viewport edge.
/// Pointer positions outside the viewport scale past this linearly.
pub const MAX_TILT_DEG: f64 = 10.0;

/// Remote hero asset. If the host is unreachable the browser's broken-image
/// fallback applies; nothing here handles that.
pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1503342217505-b0a15ec3261c?auto=format&fit=crop&w=800&q=80";
