use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use arboard::Clipboard;
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{CursorIcon, Window, WindowId};

use quill::commands::{Cmd, PasteTarget};
use quill::keymap::{load_default_keymap, Keymap};
use quill::messages::{AppMsg, DocumentMsg, EditorMsg, FileMsg, Msg, SearchMsg, UiMsg};
use quill::model::AppModel;
use quill::update::update;

use crate::view::geometry::{hit_test, pixel_to_cursor, HitTarget};
use crate::view::Renderer;

use super::dialogs;
use super::input::handle_key;

pub struct App {
    model: AppModel,
    keymap: Keymap,
    /// Handed to the renderer once the window exists
    font: Option<Font>,
    /// Opened once the window exists
    startup_file: Option<PathBuf>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    clipboard: Option<Clipboard>,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
    hover_target: Option<HitTarget>,
    /// Left button held after a press in the text area
    selecting: bool,
    window_title: String,
    needs_redraw: bool,
    should_exit: bool,
    fatal_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel, font: Font, startup_file: Option<PathBuf>) -> Self {
        Self {
            model,
            keymap: load_default_keymap(),
            font: Some(font),
            startup_file,
            renderer: None,
            window: None,
            context: None,
            clipboard: None,
            modifiers: ModifiersState::empty(),
            mouse_position: None,
            hover_target: None,
            selecting: false,
            window_title: String::new(),
            needs_redraw: false,
            should_exit: false,
            fatal_error: None,
        }
    }

    /// Error that stopped the event loop before the window came up
    pub fn finish(self) -> Result<()> {
        match self.fatal_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let font = self
            .font
            .take()
            .ok_or_else(|| anyhow!("Renderer already initialized"))?;

        let window_attributes = Window::default_attributes()
            .with_title(self.model.title())
            .with_inner_size(LogicalSize::new(
                self.model.config.window_width,
                self.model.config.window_height,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            font,
            self.model.config.font_size,
        )?;

        let size = window.inner_size();
        self.model
            .set_char_metrics(renderer.line_height(), renderer.char_width());
        self.model.resize(size.width, size.height);

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);

        if let Some(path) = self.startup_file.take() {
            self.dispatch(Msg::App(AppMsg::OpenPath(path)));
        }
        self.sync_window();
        Ok(())
    }

    /// Run a message through update and carry out the resulting commands
    fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Carry out commands in order. Dialog answers and clipboard contents
    /// are fed back through update; the commands they produce are queued.
    fn process_cmd(&mut self, cmd: Cmd) {
        let mut queue = VecDeque::from([cmd]);
        while let Some(cmd) = queue.pop_front() {
            if let Cmd::Batch(cmds) = cmd {
                for cmd in cmds.into_iter().rev() {
                    queue.push_front(cmd);
                }
                continue;
            }
            if let Some(msg) = self.perform(cmd) {
                if let Some(next) = update(&mut self.model, msg) {
                    queue.push_back(next);
                }
            }
        }
        self.sync_window();
    }

    fn perform(&mut self, cmd: Cmd) -> Option<Msg> {
        match cmd {
            Cmd::None | Cmd::Batch(_) => None,
            Cmd::Redraw => {
                self.needs_redraw = true;
                None
            }

            // =====================================================================
            // Dialogs (using rfd, blocking)
            // =====================================================================
            Cmd::ShowOpenFileDialog => Some(Msg::App(AppMsg::OpenDialogResult(
                dialogs::pick_open_file(),
            ))),
            Cmd::ShowSaveFileDialog { suggested_name } => Some(Msg::App(
                AppMsg::SaveAsDialogResult(dialogs::pick_save_file(&suggested_name)),
            )),
            Cmd::PromptUnsavedChanges { action } => Some(Msg::App(AppMsg::UnsavedChangesAnswer {
                action,
                choice: dialogs::ask_unsaved_changes(action),
            })),
            Cmd::ConfirmEncodingChange { encoding } => {
                Some(Msg::App(AppMsg::EncodingChangeAnswer {
                    encoding,
                    confirmed: dialogs::confirm_encoding_change(),
                }))
            }
            Cmd::ShowMessage { level, title, body } => {
                dialogs::show_message(level, &title, &body);
                self.needs_redraw = true;
                None
            }

            // =====================================================================
            // Clipboard (using arboard)
            // =====================================================================
            Cmd::CopyToClipboard(text) => {
                let result = self.clipboard().and_then(|c| c.set_text(text));
                result.err().map(|e| operation_failed("copy to clipboard", e, false))
            }
            Cmd::ReadClipboard { target } => match self.clipboard().and_then(|c| c.get_text()) {
                Ok(text) => Some(match target {
                    PasteTarget::Document => Msg::Document(DocumentMsg::PasteText(text)),
                    PasteTarget::SearchBar => Msg::Search(SearchMsg::InsertText(text)),
                }),
                Err(arboard::Error::ContentNotAvailable) => {
                    tracing::debug!("Clipboard holds no text");
                    None
                }
                Err(e) => Some(operation_failed("paste", e, false)),
            },

            Cmd::OpenUrl(url) => {
                tracing::info!("Opening {}", url);
                open::that(&url)
                    .err()
                    .map(|e| operation_failed("open user manual", e, true))
            }

            Cmd::Quit => {
                self.should_exit = true;
                None
            }
        }
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, arboard::Error> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()?,
        };
        Ok(self.clipboard.insert(clipboard))
    }

    /// Push title changes to the window and request a redraw if needed
    fn sync_window(&mut self) {
        let Some(window) = &self.window else { return };

        let title = self.model.title();
        if title != self.window_title {
            window.set_title(&title);
            self.window_title = title;
        }
        if std::mem::take(&mut self.needs_redraw) {
            window.request_redraw();
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model, &self.keymap, self.mouse_position)?;
        }
        Ok(())
    }

    fn update_cursor_icon(&self, target: HitTarget) {
        let Some(window) = &self.window else { return };
        let icon = match target {
            HitTarget::TextArea | HitTarget::SearchField => CursorIcon::Text,
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.dispatch(Msg::File(FileMsg::Exit)),
            WindowEvent::Resized(size) => {
                self.dispatch(Msg::App(AppMsg::Resize(size.width, size.height)))
            }
            WindowEvent::ModifiersChanged(mods) => self.modifiers = mods.state(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(cmd) = handle_key(&mut self.model, &self.keymap, event, self.modifiers)
                    {
                        self.process_cmd(cmd);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                self.handle_mouse_move(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
                self.hover_target = None;
                self.needs_redraw = true;
                self.sync_window();
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.mouse_position {
                    self.handle_left_press(x, y);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.selecting = false,
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => (-y * 3.0) as i32,
                    MouseScrollDelta::PixelDelta(pos) => {
                        (-pos.y / self.model.line_height as f64) as i32
                    }
                };
                if lines != 0 {
                    self.dispatch(Msg::Editor(EditorMsg::Scroll(lines)));
                }
            }
            _ => {}
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if self.selecting {
            // Dragging past the text area edges scrolls
            if y < self.model.text_area_top() as f64 {
                update(&mut self.model, Msg::Editor(EditorMsg::Scroll(-1)));
            } else if y >= self.model.text_area_bottom() as f64 {
                update(&mut self.model, Msg::Editor(EditorMsg::Scroll(1)));
            }
            let (line, column) = pixel_to_cursor(x, y, &self.model);
            self.dispatch(Msg::Editor(EditorMsg::ExtendSelectionToPosition {
                line,
                column,
            }));
            return;
        }

        let target = hit_test(&self.model, &self.keymap, x, y);
        if self.hover_target == Some(target) {
            return;
        }
        self.hover_target = Some(target);
        self.update_cursor_icon(target);

        match target {
            // Sliding across the bar switches the open menu
            HitTarget::MenuTitle(index)
                if self.model.ui.open_menu.is_some_and(|open| open != index) =>
            {
                self.dispatch(Msg::Ui(UiMsg::OpenMenu(index)));
            }
            HitTarget::MenuTitle(_) | HitTarget::MenuItem { .. } | HitTarget::Dropdown => {
                self.needs_redraw = true;
                self.sync_window();
            }
            _ if self.model.ui.open_menu.is_some() => {
                // Clear the hover highlight of the last item
                self.needs_redraw = true;
                self.sync_window();
            }
            _ => {}
        }
    }

    fn handle_left_press(&mut self, x: f64, y: f64) {
        let target = hit_test(&self.model, &self.keymap, x, y);
        let menu_open = self.model.ui.open_menu.is_some();

        let msg = match target {
            HitTarget::MenuItem { menu, item } => Msg::Ui(UiMsg::ActivateMenuItem { menu, item }),
            HitTarget::Dropdown => return,
            HitTarget::MenuTitle(index) => Msg::Ui(UiMsg::OpenMenu(index)),
            // A click anywhere else only dismisses the open menu
            _ if menu_open => Msg::Ui(UiMsg::CloseMenu),
            HitTarget::MenuBar | HitTarget::StatusBar | HitTarget::SearchBar => return,
            HitTarget::SearchField => Msg::Search(SearchMsg::Open),
            HitTarget::SearchCaseToggle => Msg::Search(SearchMsg::ToggleCaseSensitive),
            HitTarget::TextArea => {
                self.selecting = true;
                let (line, column) = pixel_to_cursor(x, y, &self.model);
                if self.modifiers.shift_key() {
                    Msg::Editor(EditorMsg::ExtendSelectionToPosition { line, column })
                } else {
                    Msg::Editor(EditorMsg::SetCursorPosition { line, column })
                }
            }
        };
        self.dispatch(msg);
    }
}

fn operation_failed(operation: &str, error: impl std::fmt::Display, visible: bool) -> Msg {
    Msg::App(AppMsg::OperationFailed {
        operation: operation.to_string(),
        error: error.to_string(),
        visible,
    })
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to start: {:#}", e);
            self.fatal_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().is_some_and(|w| w.id() == window_id) {
            self.handle_event(&event);
        }
        if self.should_exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
