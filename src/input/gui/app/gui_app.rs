use egui::Context;
use egui_winit::State as EguiWinitState;
use log::warn;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::controllers::interactive::{InputEvent, InteractionController};
use crate::core::data::point::Point;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: InteractionController,
    cursor: Option<Point>,
    /// Button presses collected while the panel is laid out.
    pending_events: Vec<InputEvent>,
    last_error_message: Option<String>,
    pub scale_factor: f64,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        mut presenter: T,
        controller: InteractionController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        presenter.show_frame(&controller.overlay_frame());

        Self {
            presenter,
            controller,
            cursor: None,
            pending_events: Vec::new(),
            last_error_message: None,
            scale_factor,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
    }

    /// Runs one controller event and refreshes the framebuffer if it asks
    /// for it. Returns true when the window needs a redraw.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        match self.controller.handle(event) {
            Ok(redraw) => {
                if redraw.needs_repaint() {
                    self.presenter.show_frame(&self.controller.overlay_frame());
                    self.last_error_message = None;
                }

                redraw.needs_repaint()
            }
            Err(err) => {
                warn!("{:?} failed: {}", event, err);
                self.last_error_message = Some(err.to_string());
                true
            }
        }
    }

    /// Positions outside the field are dropped.
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> bool {
        self.cursor = self.presenter.field_position((x as f32, y as f32));

        match self.cursor {
            Some(position) => self.dispatch(InputEvent::PointerDrag(position)),
            None => false,
        }
    }

    pub fn pointer_pressed(&mut self) -> bool {
        match self.cursor {
            Some(position) => self.dispatch(InputEvent::PointerPress(position)),
            None => false,
        }
    }

    pub fn pointer_released(&mut self) -> bool {
        self.dispatch(InputEvent::PointerRelease)
    }

    /// `+`/`-` change the budget, `i`/`o` or PageUp/PageDown zoom.
    pub fn key_pressed(&mut self, key: &Key) -> bool {
        let event = match key {
            Key::Named(NamedKey::PageUp) => InputEvent::ZoomIn,
            Key::Named(NamedKey::PageDown) => InputEvent::ZoomOut,
            Key::Character(text) => match text.as_str() {
                "+" | "=" => InputEvent::IncreaseIterations,
                "-" => InputEvent::DecreaseIterations,
                "i" => InputEvent::ZoomIn,
                "o" => InputEvent::ZoomOut,
                _ => return false,
            },
            _ => return false,
        };

        self.dispatch(event)
    }

    /// Applies the buttons clicked during the last [`Self::update_ui`].
    pub fn apply_pending_ui_events(&mut self) -> bool {
        let events = std::mem::take(&mut self.pending_events);

        events
            .into_iter()
            .fold(false, |repaint, event| self.dispatch(event) || repaint)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let controller = &self.controller;
        let pending_events = &mut self.pending_events;
        let last_error_message = &self.last_error_message;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Explorer")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 200.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    ui.label(controller.marker_z_label());
                    ui.label(controller.marker_c_label());

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(format!("Iterations: {}", controller.max_iterations()));
                        if ui.button("-").clicked() {
                            pending_events.push(InputEvent::DecreaseIterations);
                        }
                        if ui.button("+").clicked() {
                            pending_events.push(InputEvent::IncreaseIterations);
                        }
                    });
                    ui.horizontal(|ui| {
                        ui.label(format!("Zoom: {}", controller.view().zoom()));
                        if ui.button("Zoom out").clicked() {
                            pending_events.push(InputEvent::ZoomOut);
                        }
                        if ui.button("Zoom in").clicked() {
                            pending_events.push(InputEvent::ZoomIn);
                        }
                    });

                    ui.separator();
                    ui.label(format!(
                        "Last render: {} ms",
                        controller.last_render_duration().as_millis()
                    ));
                    if let Some(message) = last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }

    /// Returns `(consumed, repaint)` as reported by egui.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
