use air_camera::{Camera, CameraConfig, CameraError, ReplayCamera};
use air_image::{ChannelOrder, Frame, ImageError};

fn solid(value: u8) -> Frame {
    Frame::new(2, 2, ChannelOrder::Bgr, vec![value; 12]).unwrap()
}

#[tokio::test]
async fn test_replay_camera_plays_frames_in_order() {
    let mut cam = ReplayCamera::new(vec![solid(1), solid(2)]);

    assert_eq!(cam.recv().await.unwrap().data()[0], 1);
    assert_eq!(cam.recv().await.unwrap().data()[0], 2);
    assert!(matches!(cam.recv().await, Err(CameraError::Ended)));
    assert_eq!(cam.position(), 2);
}

#[tokio::test]
async fn test_replay_camera_looping() {
    let mut cam = ReplayCamera::new(vec![solid(1), solid(2)]).looping();

    let values: Vec<u8> = {
        let mut out = Vec::new();
        for _ in 0..5 {
            out.push(cam.recv().await.unwrap().data()[0]);
        }
        out
    };
    assert_eq!(values, vec![1, 2, 1, 2, 1]);
}

#[tokio::test]
async fn test_replay_camera_empty_ends_immediately() {
    let mut cam = ReplayCamera::new(Vec::new()).looping();
    assert!(matches!(cam.recv().await, Err(CameraError::Ended)));
}

#[tokio::test]
async fn test_camera_trait_polymorphism() {
    async fn capture(camera: &mut impl Camera, count: usize) -> Result<Vec<Frame>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(camera.recv().await?);
        }
        Ok(frames)
    }

    let mut cam = ReplayCamera::new(vec![solid(9)]).looping();
    let frames = capture(&mut cam, 3).await.unwrap();
    assert_eq!(frames.len(), 3);
    assert!(frames.iter().all(|f| f.order() == ChannelOrder::Bgr));
}

#[test]
fn test_config_defaults() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), "/dev/video0");
    assert_eq!(config.width(), 640);
    assert_eq!(config.height(), 480);
    assert_eq!(config.fps(), 30);
    assert_eq!(config.buffer_count(), 4);
}

#[test]
fn test_config_builder() {
    let config = CameraConfig::default()
        .with_device_index(2)
        .with_width(1280)
        .with_height(720)
        .with_fps(60)
        .with_buffer_count(2);
    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.fps(), 60);
    assert_eq!(config.buffer_count(), 2);
}

#[test]
fn test_error_conversions_and_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no /dev/video0");
    match CameraError::from(io_err) {
        CameraError::Device(msg) => assert!(msg.contains("no /dev/video0")),
        other => panic!("expected Device, got {:?}", other),
    }

    let err: CameraError = ImageError::Decode("truncated JPEG".to_string()).into();
    assert!(matches!(err, CameraError::Decode(_)));
    assert!(err.to_string().contains("truncated JPEG"));
    assert!(std::error::Error::source(&err).is_some());

    assert_eq!(CameraError::Ended.to_string(), "camera stream ended");
}
