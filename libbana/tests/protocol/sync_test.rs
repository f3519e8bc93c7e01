#[path = "../common/mod.rs"]
mod common;

use std::time::{Duration, Instant};

use libbana::protocol::FrameSync;
use libbana::test_support::request_frame;

fn collect(sync: &mut FrameSync, bytes: &[u8], now: Instant) -> Vec<Vec<u8>> {
    bytes
        .iter()
        .filter_map(|&b| sync.push(b, now).map(|f| f.as_bytes().to_vec()))
        .collect()
}

#[test]
fn back_to_back_frames() {
    let mut sync = FrameSync::default();
    let a = request_frame(0x18, &[0x01]);
    let b = request_frame(0x4A, &[0x01, 0x00]);
    let mut stream = a.clone();
    stream.extend_from_slice(&b);
    assert_eq!(collect(&mut sync, &stream, Instant::now()), vec![a, b]);
}

#[test]
fn wake_tones_and_garbage_between_frames() {
    let mut sync = FrameSync::default();
    let frame = request_frame(0x0C, &[]);
    let mut stream = vec![0x55, 0x55, 0x55, 0x00, 0x00];
    stream.extend_from_slice(&frame);
    stream.extend_from_slice(&[0x55, 0xAB, 0xCD]);
    stream.extend_from_slice(&frame);
    assert_eq!(
        collect(&mut sync, &stream, Instant::now()),
        vec![frame.clone(), frame]
    );
}

#[test]
fn stale_partial_then_fresh_frame() {
    let mut sync = FrameSync::new(Duration::from_millis(100));
    let t0 = Instant::now();
    let frame = request_frame(0x4A, &[0x01, 0x00]);
    assert!(collect(&mut sync, &frame[..6], t0).is_empty());

    let t1 = t0 + Duration::from_millis(250);
    assert_eq!(collect(&mut sync, &frame, t1), vec![frame]);
}
