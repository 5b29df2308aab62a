pub mod frame;
pub mod surface;

pub use frame::{Frame, TextLine};
pub use surface::DisplaySurface;

use crate::core::Rgb;

/// Sink for winner announcements on the local display
///
/// Calls are fire-and-forget; nothing is returned to the engine.
pub trait WinnerDisplay {
    /// Fill the background with `color` and draw `name` centered
    fn render_winner(&self, color: Rgb, name: &str);

    /// Draw the static waiting banner shown at startup
    fn render_startup_banner(&self);
}
