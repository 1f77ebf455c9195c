//! Viewer configuration.

use crate::app::Theme;
use crate::query::Query;
use std::path::PathBuf;

/// Startup configuration for the viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Directory the template export writes into.
    pub export_dir: PathBuf,
    /// Initial theme.
    pub theme: Theme,
    /// Filters applied on startup.
    pub initial_query: Query,
    /// Show the details panel on startup.
    pub show_details: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            theme: Theme::GruvboxDark,
            initial_query: Query::default(),
            show_details: true,
        }
    }
}

/// Layout sizes for the browser screen.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the left column as a percentage of the screen.
    pub sidebar_percent: u16,
    /// Height of the filter panel, including borders.
    pub filter_panel_height: u16,
    /// Lines scrolled per details scroll step.
    pub details_scroll_step: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_percent: 40,
            filter_panel_height: 13,
            details_scroll_step: 5,
        }
    }
}
