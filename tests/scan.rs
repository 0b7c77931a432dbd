//! Host-level tests for the scan interrupt handlers, through a recording port.

use rate_led4::{
    Digit, DisplayCode, DisplayContext, FrameBuffer, LABELS, Label, SegmentPattern, SegmentPort,
};

/// Tracks the levels a real display would see, and checks the one-digit rule on every change.
#[derive(Default)]
struct DisplayProbe {
    enabled: [bool; 4],
    segments: SegmentPattern,
    max_enabled: usize,
    /// Segment pattern on show each time a digit line was asserted.
    lit: Vec<(Digit, SegmentPattern)>,
}

impl DisplayProbe {
    fn enabled_digits(&self) -> Vec<usize> {
        (0..4).filter(|&index| self.enabled[index]).collect()
    }
}

impl SegmentPort for DisplayProbe {
    fn set_segments(&mut self, pattern: SegmentPattern) {
        self.segments = pattern;
    }

    fn enable_digit(&mut self, digit: Digit) {
        self.enabled[usize::from(digit.index())] = true;
        self.max_enabled = self.max_enabled.max(self.enabled_digits().len());
        self.lit.push((digit, self.segments));
    }

    fn disable_all(&mut self) {
        self.enabled = [false; 4];
        self.segments = SegmentPattern::BLANK;
    }
}

struct Code(u8);

impl rate_led4::CodeInput for Code {
    fn read_code(&mut self) -> DisplayCode {
        DisplayCode::from_bits_truncate(self.0)
    }
}

#[test]
fn cursor_visits_every_digit_in_order() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    let order: Vec<u8> = (0..12).map(|_| context.on_tick(&mut probe).index()).collect();
    assert_eq!(order, [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(context.current_digit().index(), 3);
}

#[test]
fn cursor_order_ignores_frame_content() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    let mut order = Vec::new();
    for code in [0, 12, 8, 9, 15, 4] {
        context.poll(&mut Code(code));
        order.extend((0..4).map(|_| context.on_tick(&mut probe).index()));
    }
    for chunk in order.chunks(4) {
        assert_eq!(chunk, [0, 1, 2, 3]);
    }
}

#[test]
fn at_most_one_digit_enabled() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    context.poll(&mut Code(8));
    for _ in 0..40 {
        context.on_tick(&mut probe);
        assert_eq!(probe.enabled_digits().len(), 1);
        context.on_blank(&mut probe);
        assert_eq!(probe.enabled_digits().len(), 1);
    }
    assert_eq!(probe.max_enabled, 1);
}

#[test]
fn each_digit_shows_its_own_slot() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    context.poll(&mut Code(0));
    let frame_buffer = FrameBuffer::from_label(Label::new(" 44.1"));
    for _ in 0..8 {
        context.on_tick(&mut probe);
    }
    for &(digit, pattern) in &probe.lit {
        assert_eq!(pattern, frame_buffer[digit]);
    }
    // The point rides on the second digit from the right.
    assert!(probe.lit.iter().any(|&(digit, pattern)| digit.index() == 1 && pattern.has_dot()));
}

#[test]
fn blank_turns_segments_off_and_keeps_digit() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    context.poll(&mut Code(8));
    let digit = context.on_tick(&mut probe);
    assert!(!probe.segments.is_blank());

    context.on_blank(&mut probe);
    assert!(probe.segments.is_blank());
    assert_eq!(probe.enabled_digits(), [usize::from(digit.index())]);
    assert_eq!(context.current_digit(), digit);
}

#[test]
fn startup_frame_is_blank() {
    let context = DisplayContext::new();
    let mut probe = DisplayProbe::default();
    for _ in 0..4 {
        context.on_tick(&mut probe);
    }
    assert!(probe.lit.iter().all(|&(_, pattern)| pattern.is_blank()));
    assert_eq!(context.frame(), FrameBuffer::BLANK);
}

#[test]
fn custom_label_table() {
    static TABLE: rate_led4::LabelTable = rate_led4::LabelTable::new([
        Some(Label::new("12:34")),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ]);
    let context = DisplayContext::with_labels(&TABLE);
    context.poll(&mut Code(0));
    assert_eq!(context.frame(), FrameBuffer::from_label(Label::new("12:34")));
    assert!(context.frame()[Digit::new(2).expect("in range")].has_dot());
    assert_eq!(LABELS.lookup(DisplayCode::from_bits_truncate(0)), Some(Label::new(" 44.1")));
}

#[test]
fn lowercase_letter_in_custom_label_scans_blank() {
    static TABLE: rate_led4::LabelTable = rate_led4::LabelTable::new([
        Some(Label::new("d64 ")),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ]);
    let context = DisplayContext::with_labels(&TABLE);
    let mut probe = DisplayProbe::default();
    context.poll(&mut Code(0));
    for _ in 0..4 {
        context.on_tick(&mut probe);
    }
    let leftmost = probe
        .lit
        .iter()
        .find(|&&(digit, _)| digit == Digit::LEFTMOST)
        .map(|&(_, pattern)| pattern);
    assert_eq!(leftmost, Some(SegmentPattern::BLANK));
    assert_eq!(context.frame()[Digit::new(2).expect("in range")], rate_led4::glyph(6));
}
