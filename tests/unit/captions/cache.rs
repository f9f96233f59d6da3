use super::*;

fn words() -> Vec<WordTimestamp> {
    vec![
        WordTimestamp::new("hi", 0.0, 0.5),
        WordTimestamp::new("there", 0.6, 1.0),
        WordTimestamp::new("world", 3.0, 3.5),
    ]
}

#[test]
fn key_is_deterministic() {
    let o = CaptionOptions::default();
    assert_eq!(
        PagesKey::new(&words(), 0.0, 10.0, &o),
        PagesKey::new(&words(), 0.0, 10.0, &o)
    );
}

#[test]
fn key_changes_with_any_input() {
    let o = CaptionOptions::default();
    let base = PagesKey::new(&words(), 0.0, 10.0, &o);

    assert_ne!(base, PagesKey::new(&words(), 0.5, 10.0, &o));
    assert_ne!(base, PagesKey::new(&words(), 0.0, 9.0, &o));

    let mut w = words();
    w[1].word = "their".to_string();
    assert_ne!(base, PagesKey::new(&w, 0.0, 10.0, &o));

    let clamp = CaptionOptions {
        overrun: WordOverrun::Clamp,
        ..o
    };
    assert_ne!(base, PagesKey::new(&words(), 0.0, 10.0, &clamp));
}

#[test]
fn key_separates_word_boundaries() {
    let o = CaptionOptions::default();
    let a = vec![
        WordTimestamp::new("ab", 0.0, 1.0),
        WordTimestamp::new("c", 1.0, 2.0),
    ];
    let b = vec![
        WordTimestamp::new("a", 0.0, 1.0),
        WordTimestamp::new("bc", 1.0, 2.0),
    ];
    assert_ne!(PagesKey::new(&a, 0.0, 5.0, &o), PagesKey::new(&b, 0.0, 5.0, &o));
}

#[test]
fn cache_shares_pages_on_hit() {
    let mut cache = PageCache::default();
    let o = CaptionOptions::default();
    let a = cache.get_or_compute(&words(), 0.0, 10.0, &o);
    let b = cache.get_or_compute(&words(), 0.0, 10.0, &o);

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 2);
    assert_eq!(cache.stats(), PageCacheStats { hits: 1, misses: 1 });
    assert_eq!(cache.len(), 1);
}

#[test]
fn cached_pages_match_direct_grouping() {
    let mut cache = PageCache::default();
    let o = CaptionOptions::default();
    let cached = cache.get_or_compute(&words(), 0.0, 10.0, &o);
    let direct = pages_for_window(&words(), 0.0, 10.0, &o);
    assert_eq!(&cached[..], &direct[..]);
}

#[test]
fn cache_clears_when_full() {
    let mut cache = PageCache::new(2);
    let o = CaptionOptions::default();
    cache.get_or_compute(&words(), 0.0, 10.0, &o);
    cache.get_or_compute(&words(), 0.0, 11.0, &o);
    assert_eq!(cache.len(), 2);
    cache.get_or_compute(&words(), 0.0, 12.0, &o);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().misses, 3);
}
