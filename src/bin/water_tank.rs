//! Water Tank - Interactive Ripple Simulation
//!
//! Opens a window with a 3D water tank. Clicking the surface drops a
//! disturbance that spreads as damped ripples.
//!
//! Run with: `cargo run --bin water_tank`
//!
//! Controls:
//! - Left mouse: Disturb the water at the clicked point
//! - C: Toggle solid / wireframe surface display
//! - R: Reset the surface to rest
//! - ESC: Exit
//!
//! Settings are read from `ripple_tank.json` next to the working directory
//! if present; otherwise defaults apply.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use ripple_tank_engine::camera::Camera;
use ripple_tank_engine::config::AppConfig;
use ripple_tank_engine::input::{EdgeTrigger, MouseState};
use ripple_tank_engine::render::{
    BasinMesh, CameraUniforms, DisplayMode, GpuContext, GpuContextConfig, SurfaceMesh,
    TankRenderer,
};
use ripple_tank_engine::sim::WaterSurface;

/// Path of the optional settings file.
const CONFIG_PATH: &str = "ripple_tank.json";

// ============================================================================
// APPLICATION
// ============================================================================

struct WaterTankApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<TankRenderer>,
    water_mesh: Option<SurfaceMesh>,
    basin_mesh: Option<BasinMesh>,

    config: AppConfig,
    surface: WaterSurface,
    camera: Camera,

    // Input state
    mouse: MouseState,
    click_trigger: EdgeTrigger,
    display_mode: DisplayMode,

    // Timing
    start_time: Instant,
    last_frame: Instant,
}

impl WaterTankApp {
    fn new(config: AppConfig) -> Self {
        let surface = config.sim.build_surface();
        Self {
            window: None,
            gpu: None,
            renderer: None,
            water_mesh: None,
            basin_mesh: None,
            config,
            surface,
            camera: Camera::default(),
            mouse: MouseState::new(),
            click_trigger: EdgeTrigger::new(),
            display_mode: DisplayMode::Solid,
            start_time: Instant::now(),
            last_frame: Instant::now(),
        }
    }

    /// Initialize GPU state for a freshly created window.
    fn initialize(&mut self, window: Arc<Window>) {
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: self.config.window.vsync,
                ..Default::default()
            },
        );

        let renderer = TankRenderer::new(&gpu);
        if !renderer.wireframe_available() {
            println!("Wireframe mode unavailable on this adapter; C falls back to solid");
        }
        self.water_mesh = Some(SurfaceMesh::new(&gpu, &self.surface));
        self.basin_mesh = Some(BasinMesh::new(&gpu, &self.surface.extent()));
        self.renderer = Some(renderer);
        self.gpu = Some(gpu);
        self.window = Some(window);
        println!("GPU initialized successfully");
    }

    /// Aspect ratio of the current surface.
    fn aspect_ratio(&self) -> f32 {
        self.gpu
            .as_ref()
            .map(|gpu| {
                let (w, h) = gpu.dimensions();
                w as f32 / h.max(1) as f32
            })
            .unwrap_or(16.0 / 9.0)
    }

    /// A fresh left-button press: raycast through the cursor onto the rest
    /// plane and stamp a disturbance if it lands inside the tank.
    fn handle_click(&mut self) {
        let Some((u, v)) = self.mouse.normalized_position() else {
            return;
        };
        let aspect = self.aspect_ratio();
        if let Some(hit) = self.camera.raycast_to_surface((u, v), aspect) {
            if self.surface.poke_world(hit.x, hit.y).is_none() {
                println!(
                    "Click at ({:.2}, {:.2}) outside the water, ignored",
                    hit.x, hit.y
                );
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        match key {
            KeyCode::KeyC => {
                self.display_mode = self.display_mode.toggled();
                println!("Display mode: {:?}", self.display_mode);
            }
            KeyCode::KeyR => {
                self.surface.reset();
                println!("Surface reset");
            }
            _ => {}
        }
    }

    /// Advance the simulation and draw one frame.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.surface.update(elapsed);

        let (Some(gpu), Some(renderer), Some(water_mesh), Some(basin_mesh)) = (
            self.gpu.as_mut(),
            self.renderer.as_ref(),
            self.water_mesh.as_mut(),
            self.basin_mesh.as_ref(),
        ) else {
            return;
        };

        water_mesh.upload(gpu, &self.surface);

        let (w, h) = gpu.dimensions();
        let aspect = w as f32 / h.max(1) as f32;
        let time = now.duration_since(self.start_time).as_secs_f32();
        renderer.update_camera(gpu, &CameraUniforms::from_camera(&self.camera, aspect, time));

        match renderer.render(gpu, basin_mesh, water_mesh, self.display_mode) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = gpu.dimensions();
                gpu.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                eprintln!("Out of GPU memory!");
                event_loop.exit();
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for WaterTankApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Ripple Tank")
                .with_inner_size(PhysicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );
            self.initialize(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    self.handle_key(key, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if button == MouseButton::Left {
                    self.mouse.set_left_button(state == ElementState::Pressed);
                    // Fires once per press, never while held.
                    if self.click_trigger.update(self.mouse.left_down) {
                        self.handle_click();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (w, h) = self
                    .gpu
                    .as_ref()
                    .map(|gpu| gpu.dimensions())
                    .unwrap_or((1280, 720));
                self.mouse.set_position(position.x, position.y, w, h);
            }

            WindowEvent::CursorEntered { .. } => self.mouse.enter_window(),

            WindowEvent::CursorLeft { .. } => {
                self.mouse.leave_window();
                self.click_trigger.reset();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(ref mut gpu) = self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    let config = match AppConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            std::process::exit(1);
        }
    };

    println!("===========================================");
    println!("   Ripple Tank");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  Left mouse: Disturb the water");
    println!("  C: Toggle solid / wireframe display");
    println!("  R: Reset the surface");
    println!("  ESC: Exit");
    println!();
    println!(
        "Grid {}x{}, wave speed {}, damping {}",
        config.sim.resolution, config.sim.resolution, config.sim.wave_speed, config.sim.damping
    );
    println!();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WaterTankApp::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
