use crate::convert::yuyv_to_rgb;
use crate::{Camera, CameraConfig, CameraError};
use air_image::{ChannelOrder, Frame};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Mjpeg,
    Yuyv,
}

/// V4L2 webcam.
///
/// Capture runs on the caller's thread: `recv` blocks until the driver
/// hands over the next buffer.
pub struct V4l2Camera {
    config: CameraConfig,
    encoding: Encoding,
    width: u32,
    height: u32,
    stream: Option<MmapStream<'static>>,
    device: Device,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("config", &self.config)
            .field("encoding", &self.encoding)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("streaming", &self.stream.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        self.ensure_streaming()?;
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| CameraError::Stream("stream not started".to_string()))?;

        let (buf, meta) = CaptureStream::next(stream)
            .map_err(|e| CameraError::Stream(e.to_string()))?;
        let used = match meta.bytesused as usize {
            0 => buf.len(),
            n => n.min(buf.len()),
        };
        let bytes = &buf[..used];

        match self.encoding {
            Encoding::Mjpeg => Ok(air_image::decode_frame(bytes)?),
            Encoding::Yuyv => {
                let rgb = yuyv_to_rgb(bytes, self.width, self.height).ok_or_else(|| {
                    CameraError::Stream(format!("short YUYV buffer: {} bytes", bytes.len()))
                })?;
                Ok(Frame::new(
                    self.width as usize,
                    self.height as usize,
                    ChannelOrder::Rgb,
                    rgb,
                )?)
            }
        }
    }
}

impl V4l2Camera {
    /// Open the device at `config.device()`.
    ///
    /// Asks for MJPEG at the requested resolution and falls back to YUYV when
    /// the driver refuses it. The driver may pick a different resolution; use
    /// [`width`](Self::width) and [`height`](Self::height) for what it chose.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the device cannot be opened, supports
    /// neither encoding, or rejects the format or frame rate.
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        let mjpg = FourCC::new(b"MJPG");
        let yuyv = FourCC::new(b"YUYV");

        let mut format = Capture::set_format(
            &device,
            &Format::new(config.width(), config.height(), mjpg),
        )?;
        if format.fourcc != mjpg {
            format = Capture::set_format(
                &device,
                &Format::new(config.width(), config.height(), yuyv),
            )?;
        }
        let encoding = if format.fourcc == mjpg {
            Encoding::Mjpeg
        } else if format.fourcc == yuyv {
            Encoding::Yuyv
        } else {
            return Err(CameraError::Device(format!(
                "unsupported pixel format {}",
                format.fourcc
            )));
        };

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        Capture::set_params(&device, &params)?;

        log::info!(
            "opened {} at {}x{} ({:?})",
            config.device(),
            format.width,
            format.height,
            encoding
        );

        Ok(Self {
            config,
            encoding,
            width: format.width,
            height: format.height,
            stream: None,
            device,
        })
    }

    fn ensure_streaming(&mut self) -> Result<(), CameraError> {
        if self.stream.is_none() {
            let stream = MmapStream::with_buffers(
                &self.device,
                Type::VideoCapture,
                self.config.buffer_count(),
            )?;
            self.stream = Some(stream);
        }
        Ok(())
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
