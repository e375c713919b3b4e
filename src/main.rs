//! AreaCheck Client.
//!
//! Desktop-Client für den Punkt-im-Trefferbereich-Prüfdienst: Formular,
//! animierter Plot und Ergebnis-Tabelle über egui + eframe.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use eframe::egui;

use area_check_client::api::{spawn_evaluation, OracleClient, OracleError, OracleEvent};
use area_check_client::core::animation::FADE_TICK_PERIOD;
use area_check_client::{ui, AppController, AppIntent, AppState, ClientOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "AreaCheck Client v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 760.0])
                .with_title("AreaCheck Client"),
            ..Default::default()
        };

        eframe::run_native(
            "AreaCheck Client",
            options,
            Box::new(|_cc| Ok(Box::new(AreaCheckApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct AreaCheckApp {
    state: AppState,
    controller: AppController,
    /// `None` wenn der HTTP-Client nicht gebaut werden konnte
    oracle: Option<OracleClient>,
    oracle_tx: Sender<OracleEvent>,
    oracle_rx: Receiver<OracleEvent>,
}

impl AreaCheckApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ClientOptions::config_path();
        let client_options = ClientOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = client_options;
        state.results.load_history();

        let oracle = match OracleClient::new(
            state.options.endpoint.clone(),
            std::time::Duration::from_secs(state.options.request_timeout_secs),
        ) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("HTTP-Client konnte nicht gebaut werden: {:#}", e);
                None
            }
        };

        let (oracle_tx, oracle_rx) = std::sync::mpsc::channel();

        Self {
            state,
            controller: AppController::new(),
            oracle,
            oracle_tx,
            oracle_rx,
        }
    }
}

impl eframe::App for AreaCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.collect_ui_events(ctx);
        let has_meaningful_events = !events.is_empty();

        self.drain_oracle_events(&mut events);
        self.process_events(events);
        self.dispatch_pending_request();

        self.controller.advance(&mut self.state, Instant::now());

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl AreaCheckApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_form_panel(ctx, &self.state));
        events.extend(ui::render_results_panel(ctx, &self.state));
        // Central-Panel zuletzt, damit es den Restplatz erhält
        events.extend(ui::render_plot_panel(ctx, &self.state));

        events
    }

    /// Holt abgeschlossene Hintergrund-Auswertungen vom Worker-Kanal ab.
    fn drain_oracle_events(&mut self, events: &mut Vec<AppIntent>) {
        while let Ok((request, outcome)) = self.oracle_rx.try_recv() {
            events.push(AppIntent::OracleCompleted { request, outcome });
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Übergibt eine freigegebene Anfrage an den Worker-Thread.
    fn dispatch_pending_request(&mut self) {
        let Some(request) = self.state.submission.outbox.take() else {
            return;
        };

        match &self.oracle {
            Some(client) => {
                spawn_evaluation(client.clone(), request, self.oracle_tx.clone());
            }
            None => {
                // Ohne Client sofort als Transportfehler abschließen
                let outcome = Err(OracleError::Transport(
                    "HTTP-Client nicht verfügbar".to_string(),
                ));
                let intent = AppIntent::OracleCompleted { request, outcome };
                self.process_events(vec![intent]);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        // Solange Fades laufen oder Schritte/Antworten ausstehen, im
        // Tick-Raster weiterzeichnen; sonst nur bei Eingaben
        if !self.state.animations.is_empty() || self.state.submission.is_busy() {
            ctx.request_repaint_after(FADE_TICK_PERIOD);
        } else if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
