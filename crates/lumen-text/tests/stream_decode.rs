//! Stream and batch decoding through the public API.

use lumen_text::{CodePoint, DecodeState, Utf8Decoder, decode_utf8};

fn stream(decoder: &mut Utf8Decoder, bytes: &[u8]) -> Vec<CodePoint> {
    bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
}

fn code_points(text: &str) -> Vec<CodePoint> {
    text.chars().map(CodePoint::from).collect()
}

#[test]
fn test_byte_at_a_time_round_trip() {
    let text = "Mintaka · Alnilam · Alnitak\n獵戶座 🌌";
    let mut decoder = Utf8Decoder::new();

    assert_eq!(stream(&mut decoder, text.as_bytes()), code_points(text));
    assert_eq!(decoder.state(), DecodeState::AwaitingSequenceStart);
}

#[test]
fn test_invalid_lead_then_ascii() {
    let mut decoder = Utf8Decoder::new();
    assert_eq!(stream(&mut decoder, &[0xFF, b'A']), vec![CodePoint::from('A')]);
}

#[test]
fn test_abandoned_sequence_drops_interrupting_byte() {
    let mut decoder = Utf8Decoder::new();
    assert!(stream(&mut decoder, &[0xE2, 0x41]).is_empty());
    assert_eq!(decoder.state(), DecodeState::AwaitingSequenceStart);

    assert_eq!(stream(&mut decoder, b"B"), vec![CodePoint::from('B')]);
}

#[test]
fn test_sequence_split_over_writes() {
    let bytes = "→".as_bytes();
    let mut decoder = Utf8Decoder::new();

    for &b in &bytes[..bytes.len() - 1] {
        assert_eq!(decoder.feed(b), None);
    }
    assert_eq!(decoder.state(), DecodeState::InMultibyteSequence);
    assert_eq!(decoder.feed(bytes[bytes.len() - 1]), Some(CodePoint::from('→')));
}

#[test]
fn test_batch_matches_stream_on_valid_text() {
    let text = "Σ 2.5e6 K, ε Eri ✓";
    let mut decoder = Utf8Decoder::new();

    let batched: Vec<CodePoint> = decode_utf8(text.as_bytes()).collect();
    assert_eq!(batched, stream(&mut decoder, text.as_bytes()));
}

#[test]
fn test_batch_keeps_byte_after_broken_sequence() {
    // the batch decoder sees the whole buffer, so the interrupting byte is kept
    let batched: Vec<CodePoint> = decode_utf8(&[0xE2, 0x41, 0x42]).collect();
    assert_eq!(batched, code_points("AB"));

    let mut decoder = Utf8Decoder::new();
    assert_eq!(stream(&mut decoder, &[0xE2, 0x41, 0x42]), code_points("B"));
}
