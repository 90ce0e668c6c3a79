use eframe::egui;

use crate::renderer::Renderer;
use crate::screen::Screen;

/// Allocates the drawing surface at the screen's canvas size and paints it
pub fn canvas_panel(ui: &mut egui::Ui, renderer: &Renderer, screen: &Screen) {
    ui.vertical_centered(|ui| {
        let (response, painter) = ui.allocate_painter(screen.canvas_size(), egui::Sense::hover());
        renderer.render(&painter, response.rect, screen);
    });
}
