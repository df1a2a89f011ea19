use app_api::UiApp;
use gfx::{Renderer, RendererError};
use std::fmt;
use std::sync::Arc;
use std::{thread, time::Duration};
use winit::{
    application::ApplicationHandler,
    error::{EventLoopError, OsError},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16); // ~60Hz

#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(OsError),
    Renderer(RendererError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(e) => write!(f, "event loop: {e}"),
            PlatformError::Window(e) => write!(f, "window creation: {e}"),
            PlatformError::Renderer(e) => write!(f, "renderer: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::EventLoop(e) => Some(e),
            PlatformError::Window(e) => Some(e),
            PlatformError::Renderer(e) => Some(e),
        }
    }
}

impl From<EventLoopError> for PlatformError {
    fn from(e: EventLoopError) -> Self {
        PlatformError::EventLoop(e)
    }
}

enum UserEvent {
    Tick,
}

/// Open a window and drive `app` until the window closes.
pub fn run<A: UiApp>(app: A) -> Result<(), PlatformError> {
    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let proxy = event_loop.create_proxy();

    let mut host = PlatformApp {
        app,
        window: None,
        renderer: None,
        proxy: Some(proxy),
        ticker_started: false,
        error: None,
    };
    event_loop.run_app(&mut host)?;

    match host.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct PlatformApp<A> {
    app: A,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    error: Option<PlatformError>,
}

impl<A: UiApp> PlatformApp<A> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        log::error!(target: "platform", "{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn start_ticker(&mut self) {
        if self.ticker_started {
            return;
        }
        self.ticker_started = true;

        if let Some(proxy) = self.proxy.take() {
            thread::spawn(move || {
                while proxy.send_event(UserEvent::Tick).is_ok() {
                    thread::sleep(FRAME_INTERVAL);
                }
            });
        }
    }
}

impl<A: UiApp> ApplicationHandler<UserEvent> for PlatformApp<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attributes = Window::default_attributes().with_title(self.app.title());
            let window = match event_loop.create_window(attributes) {
                Ok(w) => Arc::new(w),
                Err(e) => return self.fail(event_loop, PlatformError::Window(e)),
            };
            self.window = Some(window);
        }

        if self.renderer.is_none()
            && let Some(window) = self.window.as_ref()
        {
            match Renderer::new(Arc::clone(window)) {
                Ok(renderer) => self.renderer = Some(renderer),
                Err(e) => return self.fail(event_loop, PlatformError::Renderer(e)),
            }
        }

        self.start_ticker();
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) {
            renderer.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(renderer)) =
                    (self.window.as_ref(), self.renderer.as_mut())
                {
                    let app = &mut self.app;
                    renderer.render(window, |ctx| app.ui(ctx));
                }
            }
            _ => {}
        }
    }
}
