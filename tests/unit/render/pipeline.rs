use super::*;
use crate::ReelBuilder;

fn reel() -> Reel {
    ReelBuilder::new("source.mp4")
        .window(0.0, 5.0)
        .word("hi", 0.0, 0.5)
        .word("there", 0.6, 1.0)
        .word("world", 3.0, 3.5)
        .hook_line("HOOK")
        .build()
        .unwrap()
}

fn full(reel: &Reel) -> FrameRange {
    reel.frame_range()
}

#[test]
fn sequential_range_covers_every_frame() {
    let reel = reel();
    let trees = render_frames(&reel, full(&reel)).unwrap();
    assert_eq!(trees.len(), 150);
    for (i, t) in trees.iter().enumerate() {
        assert_eq!(t.frame, FrameIndex(i as u64));
    }
}

#[test]
fn parallel_matches_sequential() {
    let reel = reel();
    let (seq, seq_stats) =
        render_frames_with_stats(&reel, full(&reel), &RenderThreading::default()).unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 7,
        threads: Some(2),
    };
    let (par, par_stats) = render_frames_with_stats(&reel, full(&reel), &threading).unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq_stats, par_stats);
}

#[test]
fn stats_count_caption_frames() {
    let reel = reel();
    let (_, stats) =
        render_frames_with_stats(&reel, full(&reel), &RenderThreading::default()).unwrap();
    assert_eq!(stats.frames_total, 150);
    // Page 1 spans frames 0..30, page 2 spans 90..105.
    assert_eq!(stats.frames_with_captions, 45);
    // "hi" 0..15, "there" 18..30, "world" 90..105.
    assert_eq!(stats.frames_with_active_token, 42);
}

#[test]
fn rejects_empty_or_overlong_ranges() {
    let reel = reel();
    let empty = FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap();
    assert!(render_frames(&reel, empty).is_err());

    let long = FrameRange::new(FrameIndex(0), FrameIndex(151)).unwrap();
    assert!(render_frames(&reel, long).is_err());
}

#[test]
fn zero_threads_is_rejected() {
    let reel = reel();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 0,
        threads: Some(0),
    };
    assert!(render_frames_with_stats(&reel, full(&reel), &threading).is_err());
}

#[test]
fn single_frame_helper_matches_renderer() {
    let reel = reel();
    let a = render_frame(&reel, FrameIndex(20)).unwrap();
    let b = FrameRenderer::eval_frame(&reel, FrameIndex(20)).unwrap();
    assert_eq!(a, b);
}

#[derive(Clone, Default)]
struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn range_event_is_logged_in_both_modes() {
    let reel = reel();
    for parallel in [false, true] {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let threading = RenderThreading {
            parallel,
            ..RenderThreading::default()
        };
        tracing::subscriber::with_default(subscriber, || {
            render_frames_with_stats(&reel, full(&reel), &threading).unwrap();
        });

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("evaluated frame range"), "parallel={parallel}");
        assert!(text.contains(&format!("parallel={parallel}")));
    }
}
