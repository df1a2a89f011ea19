use egui::Context;

/// An application hosted by the platform event loop.
pub trait UiApp {
    /// Window title; read once when the window is created.
    fn title(&self) -> String;

    /// Build this frame's UI.
    fn ui(&mut self, ctx: &Context);
}
