use crate::config::{LayoutConfig, Row};
use crate::error::TurtleError;
use crate::input::{Flow, UiEvent, route_events};
use crate::panels::{self, ControlTab};
use crate::renderer::Renderer;
use crate::session::Session;

pub struct TurtleApp {
    session: Session,
    renderer: Renderer,
    config: LayoutConfig,
    control_tab: ControlTab,
}

impl TurtleApp {
    /// Called once before the first frame.
    pub fn new(config: LayoutConfig) -> Result<Self, TurtleError> {
        let mut session = Session::new(&config)?;
        session.console.print("Turtle SimpleGUI initialized.");
        log::info!("Session started with {} rows", config.rows.len());

        Ok(Self {
            session,
            renderer: Renderer::new(),
            config,
            control_tab: ControlTab::default(),
        })
    }

    /// Lay out the configured rows, collecting the events their widgets raise
    fn show_rows(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
        for row in &self.config.rows {
            match row {
                Row::Banner => panels::text_row(ui, &self.config.banner, true),
                Row::Toolbar => panels::toolbar_panel(ui, &mut self.session.widgets, events),
                Row::Header => panels::text_row(ui, &self.config.header, false),
                Row::Canvas => panels::canvas_panel(ui, &self.renderer, &self.session.screen),
                Row::Footer => panels::text_row(ui, &self.config.footer, false),
                Row::Controls => panels::controls_panel(
                    ui,
                    &mut self.control_tab,
                    &mut self.session,
                    &self.config.widgets,
                    events,
                ),
                Row::Cmdline => panels::cmdline_panel(ui, &mut self.session, events),
                Row::Console => panels::console_panel(ui, &self.session.console),
                Row::Status => panels::text_row(ui, self.session.status(), false),
            }
            ui.add_space(4.0);
        }
    }
}

impl eframe::App for TurtleApp {
    /// Called each time the UI needs repainting: draw the rows, then route what they raised.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(UiEvent::Quit);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_rows(ui, &mut events));
        });

        let had_events = !events.is_empty();
        if route_events(events, &mut self.session) == Flow::Quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if had_events {
            // the canvas was painted before these events changed the drawing
            ctx.request_repaint();
        }
    }
}
