use air_image::{decode_frame, encode_png, save_png, Alpha, ChannelOrder, Frame, ImageError};
use std::fs;

fn sample() -> Frame {
    let mut frame = Frame::blank(4, 3, ChannelOrder::Bgr).unwrap();
    frame.put_rgb(1, 1, [255, 0, 128]);
    frame
}

#[test]
fn test_encode_png_opaque_decodes_back_to_rgb() {
    let bytes = encode_png(&sample(), Alpha::Opaque).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let decoded = decode_frame(&bytes).unwrap();
    assert_eq!(decoded.order(), ChannelOrder::Rgb);
    assert_eq!(decoded.width(), 4);
    assert_eq!(decoded.height(), 3);
    assert_eq!(decoded.rgb_at(1, 1), Some([255, 0, 128]));
    assert_eq!(decoded.rgb_at(0, 0), Some([0, 0, 0]));
}

#[test]
fn test_encode_png_black_is_transparent() {
    let bytes = encode_png(&sample(), Alpha::BlackIsTransparent).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 128, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(3, 2).0[3], 0);
}

#[test]
fn test_decode_frame_rejects_garbage() {
    let result = decode_frame(&[0x00, 0x01, 0x02, 0x03]);
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_save_png_writes_file() {
    let path = std::env::temp_dir().join(format!("air-image-{}-save.png", std::process::id()));
    let _ = fs::remove_file(&path);

    save_png(&sample(), Alpha::Opaque, &path).unwrap();
    let decoded = decode_frame(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(decoded.rgb_at(1, 1), Some([255, 0, 128]));

    fs::remove_file(&path).ok();
}

#[test]
fn test_save_png_unwritable_path_is_io_error() {
    let path = std::env::temp_dir()
        .join(format!("air-image-{}-missing", std::process::id()))
        .join("nested")
        .join("out.png");

    let result = save_png(&sample(), Alpha::Opaque, &path);
    assert!(matches!(result, Err(ImageError::Io(_))));
}

#[test]
fn test_image_error_display() {
    let err = ImageError::Encode("bad".to_string());
    assert_eq!(err.to_string(), "encode error: bad");

    let err: ImageError = air_base::TensorError::ShapeOverflow.into();
    assert!(err.to_string().contains("tensor error"));
}
