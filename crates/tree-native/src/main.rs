mod camera;
mod input;
mod mesh;
mod render;

use glam::Vec2;
use tree_core::{BlockFont, FrameClock, Scene, SceneConfig};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use camera::OrbitCamera;
use input::PointerState;
use render::GpuState;

// pixel-precise trackpads report in pixels; treat this many as one wheel line
const PIXELS_PER_LINE: f32 = 50.0;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed: u64 = rand::random();
    let mut scene = Scene::new(SceneConfig::default(), &BlockFont, seed)?;
    log::info!("[scene] seed {seed}, mode {}", scene.mode().label());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle Tree")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window, &scene))?;
    let mut camera = OrbitCamera::default();
    let mut pointer = PointerState::default();
    let mut clock = FrameClock::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(position.x as f32, position.y as f32);
                if let Some(delta) = pointer.moved(pos) {
                    camera.orbit(delta.x, delta.y);
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => pointer.press(),
                ElementState::Released => {
                    if pointer.release() {
                        scene.click();
                    }
                }
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_LINE,
                };
                camera.zoom(lines);
            }
            _ => {}
        },
        Event::AboutToWait => {
            let time = clock.tick();
            camera.update(scene.mode(), time.delta);
            scene.frame(time.delta, time.elapsed);
            match state.render(&mut scene, &camera) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
