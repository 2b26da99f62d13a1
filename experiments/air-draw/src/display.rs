use air_image::Frame;

/// Pack a frame into the `0x00RRGGBB` pixels a minifb window takes.
pub fn frame_to_argb(frame: &Frame) -> Vec<u32> {
    let order = frame.order();
    frame
        .data()
        .chunks_exact(Frame::CHANNELS)
        .map(|px| {
            let [r, g, b] = order.to_rgb([px[0], px[1], px[2]]);
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        })
        .collect()
}

/// Window title for the current run state.
pub fn title(running: bool, annotate: bool) -> String {
    let state = if running { "drawing" } else { "paused" };
    let skeleton = if annotate { ", skeleton" } else { "" };
    format!("Air Canvas ({state}{skeleton}) - Space start/stop, S save, C clear, A skeleton, Esc quit")
}
