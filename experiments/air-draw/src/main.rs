mod display;
mod settings;

use air_camera::{Camera, CameraConfig, V4l2Camera};
use air_canvas::{CanvasError, CanvasSession, SessionConfig};
use air_infer::{create_registry, Device, HandLandmarker, ModelSource};
use display::{frame_to_argb, title};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use settings::Settings;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env();
    match &settings.log_dir {
        Some(dir) => air_base::init_file_logger(dir)?,
        None => air_base::init_stdout_logger(),
    }

    log::info!("model: {}", settings.model_path.display());
    log::info!("camera: {} at {}x{}", settings.camera_device, WIDTH, HEIGHT);

    let config = CameraConfig::default()
        .with_device(settings.camera_device.clone())
        .with_width(WIDTH as u32)
        .with_height(HEIGHT as u32);
    let mut camera = V4l2Camera::new(config)?;

    let registry = create_registry(Device::Cpu);
    let backend = registry
        .get("onnx")
        .ok_or("onnx backend not available in this build")?;
    let landmarker = HandLandmarker::new(ModelSource::File(settings.model_path.clone()), backend)?;
    let mut session = CanvasSession::new(landmarker, SessionConfig::default());

    let mut running = true;
    let mut window = Window::new(
        &title(running, session.config().annotate()),
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            running = !running;
            if !running {
                session.end_stroke();
            }
            log::info!("{}", if running { "started" } else { "paused" });
            window.set_title(&title(running, session.config().annotate()));
        }
        if window.is_key_pressed(Key::A, KeyRepeat::No) {
            let annotate = !session.config().annotate();
            session.set_annotate(annotate);
            window.set_title(&title(running, annotate));
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            session.clear();
        }
        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            if let Err(e) = session.export(&settings.export_path) {
                log::error!("export to {} failed: {}", settings.export_path.display(), e);
            }
        }

        let mut frame = match camera.recv().await {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("camera failed: {}", e);
                return Err(e.into());
            }
        };

        let shown = if running {
            match session.step(frame) {
                Ok(output) => output.composite,
                Err(CanvasError::EmptyFrame) => {
                    log::warn!("skipping empty frame");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            if session.config().mirror() {
                frame.mirror_horizontal();
            }
            frame
        };

        window.update_with_buffer(&frame_to_argb(&shown), shown.width(), shown.height())?;
    }

    session.close();
    log::info!("exiting");
    Ok(())
}
