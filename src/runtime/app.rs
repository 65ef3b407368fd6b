use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use wage_timer::clock;
use wage_timer::commands::Cmd;
use wage_timer::messages::{AppMsg, Msg, TimerMsg};
use wage_timer::model::{AppModel, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use wage_timer::update::update;
use wage_timer::view::Renderer;

use super::input::{handle_ime, handle_key};

/// How often the loop wakes up to poll for events while idle
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Owns the model and every platform resource.
///
/// Window, surface, and font all live in `Option`s here and are released
/// together in [`ApplicationHandler::exiting`], whichever phase the quit came
/// from.
pub struct App {
    model: AppModel,
    /// Handed to the renderer once the window exists
    font: Option<Font>,
    font_size: f32,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Cleared once the wage is confirmed and IME input is switched off
    text_capture: bool,
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(model: AppModel, font: Font, font_size: f32) -> Self {
        Self {
            model,
            font: Some(font),
            font_size,
            renderer: None,
            window: None,
            context: None,
            text_capture: true,
            init_error: None,
        }
    }

    /// Error that stopped the event loop during startup, if any
    pub fn into_result(self) -> Result<()> {
        match self.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| anyhow!("Failed to create window: {}", e))?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;

        let font = self
            .font
            .take()
            .ok_or_else(|| anyhow!("Font already consumed by an earlier renderer"))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, font, self.font_size)?;

        let size = window.inner_size();
        self.model.resize(size.width, size.height);
        tracing::info!(
            width = size.width,
            height = size.height,
            scale = renderer.scale_factor(),
            "window created"
        );

        window.set_ime_allowed(self.text_capture);
        window.request_redraw();
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::CloseRequested => update(&mut self.model, Msg::App(AppMsg::Quit)),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Resize error: {}", e);
                    }
                }
                update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(size.width, size.height)),
                )
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.set_scale_factor(*scale_factor) {
                        tracing::error!("Scale factor change failed: {}", e);
                    }
                }
                Some(Cmd::Redraw)
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                handle_key(&mut self.model, &event.logical_key, event.text.as_deref())
            }
            WindowEvent::Ime(ime) => handle_ime(&mut self.model, ime),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            _ => None,
        }
    }

    /// Stop collecting text once the prompt is gone
    fn sync_text_capture(&mut self) {
        if self.text_capture && self.model.is_timing() {
            self.text_capture = false;
            if let Some(window) = &self.window {
                window.set_ime_allowed(false);
            }
            tracing::debug!("text capture stopped");
        }
    }

    fn render(&mut self) -> Result<()> {
        let Some(renderer) = &mut self.renderer else {
            return Ok(());
        };

        // Recomputed on every frame, never stored
        let clock = self.model.is_timing().then(clock::local_now);
        renderer.render(&self.model, clock.as_deref())
    }

    fn process_cmd(&self, cmd: Cmd, event_loop: &ActiveEventLoop) {
        match cmd {
            Cmd::Redraw => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Cmd::Quit => event_loop.exit(),
        }
    }

    /// Drop every platform resource. Safe to call more than once.
    fn release_resources(&mut self) {
        // Surface before context before window
        self.renderer = None;
        self.context = None;
        self.window = None;
        self.font = None;
        tracing::info!("resources released");
    }

    fn next_wake(&self, now: Instant) -> Instant {
        let poll = now + POLL_INTERVAL;
        match self.model.running_state() {
            Some(state) => state
                .ticker
                .time_until_due(now)
                .map_or(poll, |due| poll.min(now + due)),
            None => poll,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Initialization failed: {:#}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            self.sync_text_capture();
            self.process_cmd(cmd, event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.model.running {
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if let Some(cmd) = update(&mut self.model, Msg::Timer(TimerMsg::Poll(now))) {
            self.process_cmd(cmd, event_loop);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_wake(now)));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release_resources();
    }
}
