//! User interface rendering.

mod browser;
mod details;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use details::format_record_details;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    browser::draw_browser(f, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuiltinSource, CatalogSource};
    use crate::config::ViewerConfig;
    use crate::query::Query;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app_with(query: Query) -> App {
        let catalog = BuiltinSource.load_catalog().unwrap();
        let config = ViewerConfig {
            initial_query: query,
            ..ViewerConfig::default()
        };
        App::new(catalog, "built-in catalog", config)
    }

    #[test]
    fn renders_results_and_filters() {
        let mut app = app_with(Query::default());
        let screen = render(&mut app);
        assert!(screen.contains("Filters"));
        assert!(screen.contains("Chemicals (3/3)"));
        assert!(screen.contains("Korosif (Corrosive)"));
        assert!(screen.contains("Details: danger"));
        assert!(screen.contains("Hazard classes (0 selected):"));
    }

    #[test]
    fn renders_header_with_title_and_note() {
        let mut app = app_with(Query::default());
        let screen = render(&mut app);
        let mut rows = screen.lines();
        let title = rows.next().unwrap_or_default();
        assert!(title.contains("Chemical Safety Data Sheet (SDS)"), "{title}");
        assert!(title.contains("For chemical safety education only."), "{title}");
        let intro = rows.next().unwrap_or_default();
        assert!(intro.contains("Globally Harmonized System (GHS)"), "{intro}");
    }

    #[test]
    fn filter_panel_counts_selected_hazards() {
        let mut app = app_with(Query::new("", ["Korosif", "Beracun"]));
        let screen = render(&mut app);
        assert!(screen.contains("Hazard classes (2 selected):"));
        assert!(screen.contains("[x] Korosif"));
    }

    #[test]
    fn renders_no_results_notice() {
        let mut app = app_with(Query::new("xyz123", Vec::<String>::new()));
        let screen = render(&mut app);
        assert!(screen.contains("No chemicals match the current filters."));
        assert!(screen.contains("Chemicals (0/3)"));
    }
}
