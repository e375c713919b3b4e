//! UI-Panels: Menü, Formular, Plot, Ergebnisse, Status-Bar.
//!
//! Panels mutieren den AppState nicht direkt — sie liefern `AppIntent`s,
//! die der Controller verarbeitet.

pub mod form_panel;
pub mod menu;
pub mod plot_panel;
pub mod results_panel;
pub mod status;

pub use form_panel::render_form_panel;
pub use menu::render_menu;
pub use plot_panel::render_plot_panel;
pub use results_panel::render_results_panel;
pub use status::render_status_bar;
