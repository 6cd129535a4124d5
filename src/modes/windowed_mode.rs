use std::num::NonZeroU32;

use anyhow::{anyhow, Context as _};
use fps_clock::FpsClock;
use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use super::{run_tick, Flow, RenderTarget};
use crate::data::Settings;
use crate::game::{grid::Direction, Command, Game};
use crate::graphics::Canvas;

type WindowSurface = Surface<&'static Window, &'static Window>;

/// Maps a keyboard event to a game command. Unknown keys and key
/// repeats give `None`.
pub fn key_command(key: Key<&str>, state: ElementState, repeat: bool) -> Option<Command> {
    let direction = match key {
        Key::Named(NamedKey::ArrowUp) => Some(Direction::Up),
        Key::Named(NamedKey::ArrowDown) => Some(Direction::Down),
        Key::Named(NamedKey::ArrowLeft) => Some(Direction::Left),
        Key::Named(NamedKey::ArrowRight) => Some(Direction::Right),
        _ => None,
    };

    match (state, direction) {
        (ElementState::Pressed, _) if repeat => None,
        (ElementState::Pressed, Some(d)) => Some(Command::Turn(d)),
        (ElementState::Pressed, None) if key == Key::Named(NamedKey::Escape) => {
            Some(Command::Close)
        }
        (ElementState::Released, Some(_)) => Some(Command::ReleaseTurn),
        _ => None,
    }
}

struct SurfaceTarget {
    window: &'static Window,
    surface: WindowSurface,
    scale: usize,
}

impl SurfaceTarget {
    fn resize(&mut self, size: PhysicalSize<u32>) -> anyhow::Result<()> {
        // Zero while minimized.
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("Failed to resize surface buffer: {e}"))
    }
}

impl RenderTarget for SurfaceTarget {
    fn present(&mut self, canvas: &Canvas) -> anyhow::Result<()> {
        let width = self.window.inner_size().width as usize;

        if width == 0 {
            return Ok(());
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get the surface buffer: {e}"))?;

        canvas.scale_to(self.scale, &mut buffer, width);

        self.window.pre_present_notify();

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffers to the window: {e}"))
    }
}

struct WindowState {
    settings: Settings,
    game: Game,
    canvas: Canvas,
    commands: Vec<Command>,
    clock: FpsClock,
    target: Option<SurfaceTarget>,

    /// Fatal window or surface error, handed back once the event loop
    /// returns.
    error: Option<anyhow::Error>,
}

impl WindowState {
    fn new(settings: Settings) -> Self {
        let game = Game::new(settings.policy, settings.seed);
        let canvas = Canvas::new(
            crate::game::grid::SCREEN_WIDTH as usize,
            crate::game::grid::SCREEN_HEIGHT as usize,
        );
        let clock = FpsClock::new(settings.fps);

        Self {
            settings,
            game,
            canvas,
            commands: Vec::new(),
            clock,
            target: None,
            error: None,
        }
    }

    fn create_target(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<SurfaceTarget> {
        let (w, h) = self.settings.window_size();
        let win_size = PhysicalSize::<u32>::new(w, h);

        let window_attributes = Window::default_attributes()
            .with_title("Snake")
            .with_inner_size(win_size)
            .with_resizable(false);

        // The surface borrows the window for as long as the program
        // runs, so it is leaked into a static reference. resumed()
        // only creates it once.
        let window: &'static Window = Box::leak(Box::new(
            event_loop
                .create_window(window_attributes)
                .map_err(|e| anyhow!("Failed to create the window: {e}"))?,
        ));

        // Some window managers ignore the resizable hint.
        window.set_min_inner_size(Some(win_size));
        window.set_max_inner_size(Some(win_size));

        let context =
            Context::new(window).map_err(|e| anyhow!("Failed to create a softbuffer context: {e}"))?;
        let surface = Surface::new(&context, window)
            .map_err(|e| anyhow!("Failed to create a softbuffer surface: {e}"))?;

        let mut target = SurfaceTarget {
            window,
            surface,
            scale: self.settings.scale as usize,
        };

        target
            .resize(window.inner_size())
            .context("Failed to size the surface")?;

        Ok(target)
    }

    /// Keeps the first fatal error. The caller stops the event loop.
    fn fail(&mut self, e: anyhow::Error) {
        self.error.get_or_insert(e);
    }

    fn finish(mut self) -> anyhow::Result<()> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.target.is_some() {
            log::debug!("Resumed again, keeping the existing window");
            return;
        }

        match self.create_target(event_loop) {
            Ok(target) => {
                self.settings.print_startup_info();
                self.target = Some(target);
            }

            Err(e) => {
                self.fail(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.commands.push(Command::Close),

            WindowEvent::Resized(size) => {
                let Some(target) = self.target.as_mut() else {
                    return;
                };

                if let Err(e) = target.resize(size) {
                    self.fail(e.context("Lost the window surface"));
                    event_loop.exit();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(cmd) = key_command(event.logical_key.as_ref(), event.state, event.repeat) {
                    self.commands.push(cmd);
                }
            }

            // Exposed or restored: show the last frame again without
            // advancing the game.
            WindowEvent::RedrawRequested => {
                if let Some(target) = self.target.as_mut() {
                    if let Err(e) = target.present(&self.canvas) {
                        log::error!("{e:#}");
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(target) = self.target.as_mut() else {
            return;
        };

        let flow = run_tick(
            &mut self.game,
            &mut self.commands,
            &mut self.canvas,
            target,
            &mut self.clock,
        );

        if flow == Flow::Exit {
            event_loop.exit();
        }
    }
}

/// Opens the window and runs the game until it is closed.
pub fn winit_main(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().map_err(|e| anyhow!("Failed to create the event loop: {e}"))?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut state = WindowState::new(settings);

    event_loop
        .run_app(&mut state)
        .map_err(|e| anyhow!("Event loop failed: {e}"))?;

    state.finish()
}
