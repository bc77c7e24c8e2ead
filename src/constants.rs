pub const RENDER_WIDTH: i32 = 1920;           // Width of printed pages
pub const RENDER_HEIGHT: i32 = 1080;          // Height of printed pages
pub const FPS: u32 = 60;                      // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Horizontal distance a swipe/drag must exceed (pixels)

pub const FADE_IN_DELAY: f32 = 0.1;           // Black screen before the deck starts fading in (seconds)
pub const FADE_IN_DURATION: f32 = 0.5;        // Duration of the startup fade-in (seconds)

pub const CONTROL_BAR_HEIGHT: f32 = 72.0;     // Bottom strip holding buttons and indicators
pub const PANEL_MARGIN: f32 = 24.0;           // Gap between the window edge and the slide panel
pub const BUTTON_WIDTH: f32 = 96.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const INDICATOR_RADIUS: f32 = 7.0;
pub const INDICATOR_SPACING: f32 = 28.0;      // Center-to-center distance between indicator dots
pub const COUNTER_FONT_SIZE: i32 = 24;
