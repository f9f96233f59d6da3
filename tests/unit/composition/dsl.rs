use super::*;

#[test]
fn builder_sets_props_and_config() {
    let reel = ReelBuilder::new("source.mp4")
        .window(1.0, 4.0)
        .word("one", 1.0, 1.4)
        .word("two", 1.5, 1.9)
        .hook_line("WAIT FOR IT")
        .fps(Fps::new(24, 1).unwrap())
        .combine_within_ms(500.0)
        .public_dir("public")
        .build()
        .unwrap();

    assert_eq!(reel.props().words.len(), 2);
    assert_eq!(reel.hook_line(), Some("WAIT FOR IT"));
    assert_eq!(reel.fps(), Fps::new(24, 1).unwrap());
    assert_eq!(reel.duration_frames(), 72);
    assert_eq!(reel.video_src(), "public/source.mp4");
    assert_eq!(reel.config().captions.combine_within_ms, 500.0);
}

#[test]
fn builder_rejects_inverted_window() {
    assert!(ReelBuilder::new("a.mp4").window(4.0, 1.0).build().is_err());
}

#[test]
fn builder_rejects_negative_threshold() {
    assert!(
        ReelBuilder::new("a.mp4")
            .combine_within_ms(-1.0)
            .build()
            .is_err()
    );
}

#[test]
fn build_cached_reuses_pages() {
    let mut cache = PageCache::default();
    let make = || {
        ReelBuilder::new("a.mp4")
            .window(0.0, 5.0)
            .words(vec![WordTimestamp::new("x", 0.5, 1.0)])
    };
    let a = make().build_cached(&mut cache).unwrap();
    let b = make().hook_line("different banner").build_cached(&mut cache).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a.shared_pages(), &b.shared_pages()));
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn clamp_overrun_applies_to_pages() {
    let reel = ReelBuilder::new("a.mp4")
        .window(0.0, 2.0)
        .word("tail", 1.5, 3.0)
        .overrun(WordOverrun::Clamp)
        .build()
        .unwrap();
    assert_eq!(reel.pages()[0].tokens[0].to_ms, 2000.0);
}
