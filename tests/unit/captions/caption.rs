use super::*;

fn w(word: &str, start: f64, end: f64) -> WordTimestamp {
    WordTimestamp::new(word, start, end)
}

#[test]
fn filters_by_word_start_half_open() {
    let words = vec![
        w("before", 0.5, 1.2),
        w("edge", 1.0, 1.5),
        w("inside", 2.0, 2.5),
        w("at_end", 4.0, 4.5),
        w("after", 5.0, 5.5),
    ];
    let caps = captions_for_window(&words, 1.0, 4.0, WordOverrun::Allow);
    let texts: Vec<_> = caps.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["edge", "inside"]);
}

#[test]
fn never_keeps_words_starting_outside_window() {
    let words: Vec<_> = (0..100)
        .map(|i| {
            let s = f64::from(i) * 0.37;
            w("x", s, s + 0.2)
        })
        .collect();
    let (start, end) = (7.3, 19.1);
    let caps = captions_for_window(&words, start, end, WordOverrun::Allow);
    assert!(!caps.is_empty());
    for c in &caps {
        let abs_start = c.start_ms / 1000.0 + start;
        assert!(abs_start >= start - 1e-9 && abs_start < end + 1e-9);
    }
    let expected = words
        .iter()
        .filter(|x| word_in_window(x, start, end))
        .count();
    assert_eq!(caps.len(), expected);
}

#[test]
fn rebases_to_clip_relative_milliseconds() {
    let words = vec![w("hi", 2.5, 3.0), w("there", 3.25, 4.0)];
    let caps = captions_for_window(&words, 2.0, 10.0, WordOverrun::Allow);
    assert_eq!(caps[0].start_ms, 500.0);
    assert_eq!(caps[0].end_ms, 1000.0);
    assert_eq!(caps[1].start_ms, 1250.0);
    assert_eq!(caps[1].end_ms, 2000.0);
    assert!(caps.iter().all(|c| c.confidence == 1.0));
    assert!(caps.iter().all(|c| c.timestamp_ms.is_none()));
}

#[test]
fn preserves_input_order() {
    let words = vec![w("b", 3.0, 3.5), w("a", 1.0, 1.5)];
    let caps = captions_for_window(&words, 0.0, 10.0, WordOverrun::Allow);
    assert_eq!(caps[0].text, "b");
    assert_eq!(caps[1].text, "a");
}

#[test]
fn overrun_is_kept_unless_clamped() {
    let words = vec![w("long", 9.5, 11.0)];
    let allow = captions_for_window(&words, 8.0, 10.0, WordOverrun::Allow);
    assert_eq!(allow[0].end_ms, 3000.0);

    let clamp = captions_for_window(&words, 8.0, 10.0, WordOverrun::Clamp);
    assert_eq!(clamp[0].start_ms, 1500.0);
    assert_eq!(clamp[0].end_ms, 2000.0);
}

#[test]
fn empty_words_give_no_captions() {
    assert!(captions_for_window(&[], 0.0, 10.0, WordOverrun::Allow).is_empty());
}

#[test]
fn malformed_word_is_kept_as_is() {
    let caps = captions_for_window(&[w("odd", 2.0, 1.5)], 0.0, 10.0, WordOverrun::Allow);
    assert_eq!(caps.len(), 1);
    assert!(caps[0].end_ms < caps[0].start_ms);
}

#[test]
fn default_options_use_switch_threshold() {
    let o = CaptionOptions::default();
    assert_eq!(o.combine_within_ms, SWITCH_CAPTIONS_EVERY_MS);
    assert_eq!(o.overrun, WordOverrun::Allow);
}
