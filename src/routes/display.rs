use askama::Template;
use axum::{extract::State, response::IntoResponse, Json};

use crate::{display::Frame, state::AppState};

/// Template for the display page
#[derive(Template)]
#[template(path = "display.html")]
pub struct DisplayTemplate {
    pub frame: Frame,
}

/// Show the display surface, for a browser or streaming source
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Rendered display page with the current frame; the page follows
/// /ws/display for updates
pub async fn show_display(State(state): State<AppState>) -> impl IntoResponse {
    DisplayTemplate {
        frame: state.display.frame(),
    }
}

/// Current display frame as JSON
pub async fn get_frame(State(state): State<AppState>) -> Json<Frame> {
    Json(state.display.frame())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rgb;

    #[test]
    fn test_template_renders_frame() {
        let template = DisplayTemplate {
            frame: Frame::winner(Rgb::new(255, 136, 0), "Alice"),
        };

        let html = template.render().unwrap();

        assert!(html.contains("#ff8800"));
        assert!(html.contains("Alice"));
    }

    #[test]
    fn test_template_escapes_names() {
        let template = DisplayTemplate {
            frame: Frame::winner(Rgb::WHITE, "<script>"),
        };

        let html = template.render().unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
