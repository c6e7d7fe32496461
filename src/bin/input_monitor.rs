//! Opens a window and logs every routed input event

use std::time::Instant;

use color_eyre::Result;
use tracing::{error, info, trace, warn};
use tracing_subscriber::EnvFilter;
use ui_input_router::input::{
    AbstractButton, ControllerState, Direction, KeyCode, PointerButton, Transition,
};
use ui_input_router::{InputCollector, InputRouter, RouterConfig, UiRoot};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Root that reports edges at info level and continuous state at trace level
#[derive(Debug, Default)]
struct LoggingRoot;

impl UiRoot for LoggingRoot {
    fn on_key(&mut self, transition: Transition, key: KeyCode) {
        log_transition("key", transition, &key);
    }

    fn on_pointer_button(
        &mut self,
        transition: Transition,
        button: PointerButton,
        pos: [f32; 2],
    ) {
        if transition == Transition::Held {
            trace!(?button, ?pos, "pointer held");
        } else {
            info!(?transition, ?button, ?pos, "pointer button");
        }
    }

    fn on_scroll(&mut self, delta: f32, pos: [f32; 2]) {
        info!(delta, ?pos, "scroll");
    }

    fn on_pointer_position(&mut self, pos: [f32; 2]) {
        trace!(?pos, "pointer position");
    }

    fn on_controller_state(&mut self, slot: usize, state: &ControllerState) {
        trace!(
            slot,
            left_stick = ?state.left_stick,
            right_stick = ?state.right_stick,
            "controller"
        );
    }

    fn on_direction(&mut self, transition: Transition, direction: Direction) {
        log_transition("direction", transition, &direction);
    }

    fn on_abstract_button(&mut self, transition: Transition, button: AbstractButton) {
        log_transition("abstract button", transition, &button);
    }
}

fn log_transition(kind: &str, transition: Transition, input: &dyn std::fmt::Debug) {
    match transition {
        Transition::Held => trace!(kind, ?input, "held"),
        _ => info!(kind, ?transition, ?input, "input"),
    }
}

struct Monitor {
    window: Option<Window>,
    collector: InputCollector,
    router: InputRouter,
    root: Option<LoggingRoot>,
    last_update: Instant,
}

impl Monitor {
    fn new(config: &RouterConfig) -> Self {
        Self {
            window: None,
            collector: InputCollector::new(),
            router: InputRouter::from_config(config),
            root: Some(LoggingRoot),
            last_update: Instant::now(),
        }
    }
}

impl ApplicationHandler for Monitor {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("Input Monitor")
                .with_inner_size(winit::dpi::LogicalSize::new(800.0, 600.0));

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    self.collector.set_scale_factor(window.scale_factor() as f32);
                    self.collector.set_focused(window.has_focus());
                    self.window = Some(window);
                    info!("Window created, routing input");
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta_time = (now - self.last_update).as_secs_f32();
        self.last_update = now;

        let snapshot = self.collector.snapshot(delta_time);
        self.router.update(&snapshot, &mut self.root);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.collector.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.collector.set_scale_factor(scale_factor as f32);
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = RouterConfig::load_from_env().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        RouterConfig::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut monitor = Monitor::new(&config);
    event_loop.run_app(&mut monitor)?;

    Ok(())
}
