use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::Config;
use crate::input::{InputController, InputEvent, InputHandler};
use crate::panels::{self, Picker};
use crate::renderer::Renderer;
use crate::session::DrawingSession;
use crate::style::StyleUpdate;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The drawing application: one canvas, its session and the picker dialogs.
pub struct DoodlerApp {
    session: DrawingSession,
    controller: InputController,
    input_handler: InputHandler,
    renderer: Renderer,
    /// Which picker dialog is open, if any
    open_picker: Option<Picker>,
    /// Set while the press that dismissed a picker is still held
    dismissing_press: bool,
    title: String,
}

impl Default for DoodlerApp {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DoodlerApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            session: DrawingSession::with_style(config.default_style.to_style()),
            controller: InputController::new(),
            input_handler: InputHandler::new(config.gestures),
            renderer: Renderer::default(),
            open_picker: None,
            dismissing_press: false,
            title: config.window.title.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn open_picker(&self) -> Option<Picker> {
        self.open_picker
    }

    pub fn show_picker(&mut self, picker: Picker) {
        self.open_picker = Some(picker);
    }

    pub fn close_picker(&mut self) {
        self.open_picker = None;
    }

    /// Apply a picker selection and close the picker
    pub fn select_style(&mut self, update: StyleUpdate) {
        self.session.set_style(update);
        self.close_picker();
    }

    pub fn undo(&mut self) {
        self.session.undo();
    }

    pub fn redo(&mut self) {
        self.session.redo();
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Feed canvas events through the drag state machine into the session
    pub fn handle_events(&mut self, events: Vec<InputEvent>) {
        self.controller.handle_events(events, &mut self.session);
    }

    /// Feed this frame's pointer input over `canvas` into the session.
    ///
    /// While a picker is open the canvas does not draw; a press on it dismisses the picker.
    pub fn process_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        let (pressed, down) =
            ctx.input(|input| (input.pointer.primary_pressed(), input.pointer.primary_down()));
        if self.open_picker.is_some() {
            if pressed && canvas.contains_pointer() {
                log::debug!("Canvas pressed outside the picker; closing it");
                self.close_picker();
                self.dismissing_press = true;
            }
            return;
        }
        if self.dismissing_press {
            // The press that dismissed the picker never draws
            self.dismissing_press = down;
            return;
        }
        let events = self.input_handler.process_input(ctx, canvas);
        self.handle_events(events);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Check the shift variant first; plain Cmd+Z would also match it
        let (undo, redo) = ctx.input_mut(|input| {
            let redo = input.consume_shortcut(&REDO_SHORTCUT)
                || input.consume_shortcut(&REDO_SHORTCUT_ALT);
            let undo = input.consume_shortcut(&UNDO_SHORTCUT);
            (undo, redo)
        });
        if redo {
            self.redo();
        }
        if undo {
            self.undo();
        }
    }
}

impl eframe::App for DoodlerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::top_bar(self, ctx);
        panels::picker_window(self, ctx);
        panels::central_panel(self, ctx);
        panels::history_controls(self, ctx);
    }
}
