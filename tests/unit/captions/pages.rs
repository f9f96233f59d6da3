use super::*;
use crate::captions::caption::{SWITCH_CAPTIONS_EVERY_MS, WordOverrun, captions_for_window};
use crate::props::model::WordTimestamp;

fn cap(text: &str, start_ms: f64, end_ms: f64) -> Caption {
    Caption {
        text: text.to_string(),
        start_ms,
        end_ms,
        confidence: 1.0,
        timestamp_ms: None,
    }
}

#[test]
fn gap_above_threshold_splits_pages() {
    let words = vec![
        WordTimestamp::new("hi", 0.0, 0.5),
        WordTimestamp::new("there", 0.6, 1.0),
        WordTimestamp::new("world", 3.0, 3.5),
    ];
    let caps = captions_for_window(&words, 0.0, 10.0, WordOverrun::Allow);
    let pages = create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].text, "hi there");
    assert_eq!(pages[0].start_ms, 0.0);
    assert_eq!(pages[0].duration_ms, 1000.0);
    assert_eq!(
        pages[0].tokens,
        vec![
            Token {
                text: "hi".to_string(),
                from_ms: 0.0,
                to_ms: 500.0
            },
            Token {
                text: "there".to_string(),
                from_ms: 600.0,
                to_ms: 1000.0
            },
        ]
    );
    assert_eq!(pages[1].text, "world");
    assert_eq!(pages[1].start_ms, 3000.0);
    assert_eq!(pages[1].duration_ms, 500.0);
}

#[test]
fn gap_equal_to_threshold_stays_on_page() {
    let caps = vec![cap("a", 0.0, 100.0), cap("b", 1600.0, 1700.0)];
    let pages = create_pages(&caps, 1500.0);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].duration_ms, 1700.0);
}

#[test]
fn empty_captions_give_no_pages() {
    assert!(create_pages(&[], SWITCH_CAPTIONS_EVERY_MS).is_empty());
}

#[test]
fn single_word_spanning_window_is_one_page() {
    let words = vec![WordTimestamp::new("everything", 2.0, 6.0)];
    let caps = captions_for_window(&words, 2.0, 6.0, WordOverrun::Allow);
    let pages = create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].tokens.len(), 1);
    assert_eq!(pages[0].start_ms, 0.0);
    assert_eq!(pages[0].duration_ms, 4000.0);
}

#[test]
fn pages_partition_captions_in_order() {
    let caps: Vec<_> = (0..40)
        .map(|i| {
            let i = f64::from(i);
            // Every fifth word follows a 2 s pause.
            let start = i * 400.0 + (i / 5.0).floor() * 2000.0;
            cap(&format!("w{i}"), start, start + 300.0)
        })
        .collect();
    let pages = create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS);
    assert!(pages.len() > 1);

    let flattened: Vec<_> = pages.iter().flat_map(|p| p.tokens.iter()).collect();
    assert_eq!(flattened.len(), caps.len());
    for (t, c) in flattened.iter().zip(&caps) {
        assert_eq!(t.text, c.text);
        assert_eq!(t.from_ms, c.start_ms);
        assert_eq!(t.to_ms, c.end_ms);
    }
}

#[test]
fn pages_do_not_overlap() {
    let caps: Vec<_> = [0.0, 300.0, 2500.0, 2700.0, 6000.0, 9000.0]
        .iter()
        .map(|&s| cap("x", s, s + 200.0))
        .collect();
    let pages = create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS);
    assert_eq!(pages.len(), 4);
    for pair in pages.windows(2) {
        assert!(pair[0].end_ms() <= pair[1].start_ms);
    }
}

#[test]
fn at_most_one_token_active() {
    let caps = vec![
        cap("a", 0.0, 250.0),
        cap("b", 250.0, 500.0),
        cap("c", 700.0, 900.0),
    ];
    let page = &create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS)[0];
    let mut t = -50.0;
    while t < 1000.0 {
        let active = page.tokens.iter().filter(|tok| tok.is_active(t)).count();
        assert!(active <= 1, "t={t}");
        t += 5.0;
    }
    assert_eq!(page.active_token(0.0), Some(0));
    assert_eq!(page.active_token(250.0), Some(1));
    assert_eq!(page.active_token(600.0), None);
    assert_eq!(page.active_token(900.0), None);
}

#[test]
fn page_text_trims_transcriber_whitespace() {
    let caps = vec![cap(" hello", 0.0, 100.0), cap(" world", 100.0, 200.0)];
    let pages = create_pages(&caps, SWITCH_CAPTIONS_EVERY_MS);
    assert_eq!(pages[0].text, "hello world");
    assert_eq!(pages[0].tokens[0].text, " hello");
}

#[test]
fn serializes_camel_case() {
    let pages = create_pages(&[cap("a", 0.0, 100.0)], SWITCH_CAPTIONS_EVERY_MS);
    let v = serde_json::to_value(&pages[0]).unwrap();
    assert_eq!(v["startMs"], 0.0);
    assert_eq!(v["durationMs"], 100.0);
    assert_eq!(v["tokens"][0]["fromMs"], 0.0);
    assert_eq!(v["tokens"][0]["toMs"], 100.0);
}
