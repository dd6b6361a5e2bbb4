//! Application state: single-owner, main-thread only.
//!
//! Holds the slider model plus everything the terminal needs to map
//! cells onto the model's layout units.

use std::path::PathBuf;

use ratatui::layout::Rect;

use elastic_core::{ElasticSlider, SliderConfig, TrackBounds};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Modal drawn over the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Where the last frame placed the interactive pieces, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderLayout {
    /// Whole widget, icons included. Hover is tracked against this.
    pub root: Rect,
    /// Unstretched track. Pointer samples are classified against this.
    pub track: Rect,
}

pub struct AppState {
    pub slider: ElasticSlider,
    pub running: bool,
    pub overlay: Overlay,
    pub show_inspector: bool,
    pub status_message: Option<(String, StatusLevel)>,
    /// Horizontal size of one terminal cell in layout units.
    pub cell_width: f64,
    pub layout: Option<SliderLayout>,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(config: SliderConfig, cell_width: f64, state_path: PathBuf) -> Self {
        Self {
            slider: ElasticSlider::new(config),
            running: true,
            overlay: Overlay::None,
            show_inspector: false,
            status_message: None,
            cell_width,
            layout: None,
            state_path,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Horizontal position of the centre of `column` in layout units.
    pub fn column_to_x(&self, column: u16) -> f64 {
        (f64::from(column) + 0.5) * self.cell_width
    }

    /// Convert a layout-unit offset to whole cells (rounded toward zero).
    pub fn x_to_cells(&self, x: f64) -> i32 {
        if self.cell_width <= 0.0 {
            return 0;
        }
        (x / self.cell_width).trunc() as i32
    }

    /// Push the freshly rendered layout into the model.
    ///
    /// A zero-width track means nothing is on screen, which the model
    /// treats as unmounted.
    pub fn sync_layout(&mut self, layout: Option<SliderLayout>) {
        self.layout = layout;
        match layout {
            Some(l) if l.track.width > 0 => {
                let left = f64::from(l.track.x) * self.cell_width;
                let right = f64::from(l.track.x + l.track.width) * self.cell_width;
                self.slider.mount(TrackBounds::new(left, right));
            }
            _ => self.slider.unmount(),
        }
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(SliderConfig::default(), 8.0, PathBuf::from("state.json"))
    }

    #[test]
    fn new_app_is_running_without_layout() {
        let app = app();
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.layout.is_none());
        assert!(app.slider.track().is_none());
    }

    #[test]
    fn column_maps_to_cell_centre() {
        let app = app();
        assert_eq!(app.column_to_x(0), 4.0);
        assert_eq!(app.column_to_x(10), 84.0);
    }

    #[test]
    fn x_to_cells_truncates() {
        let app = app();
        assert_eq!(app.x_to_cells(23.1), 2);
        assert_eq!(app.x_to_cells(-23.1), -2);
        assert_eq!(app.x_to_cells(7.9), 0);
    }

    #[test]
    fn sync_layout_mounts_track_in_layout_units() {
        let mut app = app();
        app.sync_layout(Some(SliderLayout {
            root: Rect::new(0, 0, 40, 1),
            track: Rect::new(5, 0, 25, 1),
        }));
        let bounds = app.slider.track().expect("mounted");
        assert_eq!(bounds.left, 40.0);
        assert_eq!(bounds.right, 240.0);
    }

    #[test]
    fn empty_track_unmounts() {
        let mut app = app();
        app.sync_layout(Some(SliderLayout {
            root: Rect::new(0, 0, 4, 1),
            track: Rect::new(2, 0, 0, 1),
        }));
        assert!(app.slider.track().is_none());
        app.sync_layout(None);
        assert!(app.layout.is_none());
    }

    #[test]
    fn status_levels() {
        let mut app = app();
        app.set_warning("careful");
        assert_eq!(
            app.status_message,
            Some(("careful".to_string(), StatusLevel::Warning))
        );
        app.set_status("fine");
        assert_eq!(app.status_message.as_ref().map(|s| s.1), Some(StatusLevel::Info));
    }

    #[test]
    fn help_toggles() {
        let mut app = app();
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::Help);
        app.toggle_help();
        assert_eq!(app.overlay, Overlay::None);
    }
}
