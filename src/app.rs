//! Application state and logic.

use std::path::PathBuf;

use crate::catalog::{Catalog, ChemicalRecord};
use crate::config::{LayoutConfig, ViewerConfig};
use crate::navigation::{HazardSelectState, ResultsState, SearchState};
use crate::presentation::RecordView;
use crate::query::{HazardTag, Query};
use crate::{template, util};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The loaded catalog.
    pub catalog: Catalog,
    /// Where the catalog came from.
    pub source_name: String,
    /// Search text input.
    pub search: SearchState,
    /// Hazard class selector.
    pub hazards: HazardSelectState,
    /// Filtered results and cursor.
    pub results: ResultsState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Show the details panel.
    pub show_details: bool,
    /// Directory for template export.
    pub export_dir: PathBuf,
    /// Layout sizes.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance over an already loaded catalog.
    pub fn new(catalog: Catalog, source_name: impl Into<String>, config: ViewerConfig) -> Self {
        let Query {
            search_term,
            hazard_tags,
        } = config.initial_query;

        let selected = hazard_tags.iter().filter_map(|t| HazardTag::parse(t));

        let mut app = Self {
            catalog,
            source_name: source_name.into(),
            search: SearchState::with_term(search_term),
            hazards: HazardSelectState::with_selected(selected),
            results: ResultsState::new(),
            status: String::new(),
            theme: config.theme,
            show_details: config.show_details,
            export_dir: config.export_dir,
            layout: LayoutConfig::default(),
        };
        app.refresh_results();
        app.status = format!(
            "{} records from {}",
            app.catalog.len(),
            app.source_name
        );
        app
    }

    /// Query built from the current inputs.
    pub fn query(&self) -> Query {
        Query {
            search_term: self.search.effective_term().to_string(),
            hazard_tags: self.hazards.selected_labels(),
        }
    }

    /// Re-run the filter against the catalog.
    pub fn refresh_results(&mut self) {
        let query = self.query();
        let indices = self
            .catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record))
            .map(|(idx, _)| idx)
            .collect();
        self.results.set_results(indices);
        tracing::debug!("Filter {:?} matched {} records", query, self.results.len());
    }

    /// Check whether the current filters matched nothing.
    pub fn no_results(&self) -> bool {
        self.results.is_empty()
    }

    /// Get a record by catalog index.
    pub fn record(&self, index: usize) -> Option<&ChemicalRecord> {
        self.catalog.records().get(index)
    }

    /// Get the record under the cursor.
    pub fn current_record(&self) -> Option<&ChemicalRecord> {
        self.results.current_index().and_then(|idx| self.record(idx))
    }

    /// View model of the record under the cursor.
    pub fn current_view(&self) -> Option<RecordView<'_>> {
        self.current_record().map(RecordView::new)
    }

    /// Type a character into the search box.
    pub fn search_input(&mut self, c: char) {
        self.search.input(c);
        self.refresh_results();
    }

    /// Delete a character from the search box.
    pub fn search_backspace(&mut self) {
        self.search.backspace();
        self.refresh_results();
    }

    /// Commit the search box.
    pub fn search_submit(&mut self) {
        self.search.submit();
        self.refresh_results();
        self.status = self.match_summary();
    }

    /// Abandon the search edit.
    pub fn search_cancel(&mut self) {
        self.search.cancel();
        self.refresh_results();
    }

    /// Toggle the hazard tag under the selector cursor.
    pub fn toggle_hazard(&mut self) {
        let (tag, selected) = self.hazards.toggle_current();
        self.refresh_results();
        self.status = format!(
            "{} {} | {}",
            if selected { "Added" } else { "Removed" },
            tag.label(),
            self.match_summary()
        );
    }

    /// Clear search text and hazard selection.
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.hazards.clear();
        self.refresh_results();
        self.status = "Filters cleared".to_string();
    }

    /// Short description of the current result count.
    pub fn match_summary(&self) -> String {
        if self.no_results() {
            "No matching chemicals".to_string()
        } else {
            format!("{}/{} chemicals", self.results.len(), self.catalog.len())
        }
    }

    /// Toggle details panel.
    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
        self.status = if self.show_details {
            "Details: ON".to_string()
        } else {
            "Details: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Scroll details down.
    pub fn scroll_details_down(&mut self) {
        self.results.scroll_details_down(self.layout.details_scroll_step);
    }

    /// Scroll details up.
    pub fn scroll_details_up(&mut self) {
        self.results.scroll_details_up(self.layout.details_scroll_step);
    }

    /// Write the blank template into the export directory.
    pub fn export_template(&mut self) {
        match template::export_template(&self.catalog, &self.export_dir) {
            Ok(path) => {
                self.status = format!(
                    "Template saved: {} ({})",
                    path.display(),
                    template::TEMPLATE_MIME
                );
            },
            Err(e) => {
                self.status = format!("Export failed: {}", e);
                tracing::error!("Template export failed: {}", e);
            },
        }
    }

    /// Copy the selected record to the clipboard.
    pub fn copy_current(&mut self) {
        let Some(view) = self.current_view() else {
            self.status = "No chemical selected".to_string();
            return;
        };
        let name = view.record().name.clone();
        match util::copy_record_info(&view) {
            Ok(()) => self.status = format!("Copied {}!", name),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}
