//! Seven-segment encoding and box-drawing glyphs
//!
//! ```text
//!  ┌─┐   ╷ ╶─┐ ╶─┐ ╷ ╷ ┌─╴ ┌─╴ ╶─┐ ┌─┐ ┌─┐
//!  │ │   │ ┌─┘ ╶─┤ └─┤ └─┐ ├─┐   │ ├─┤ └─┤
//!  └─┘.  ╵.└─╴.╶─┘.  ╵.╶─┘.└─┘.  ╵.└─┘.╶─┘.
//! ```
//!
//! Segment bits, lowest first: a (top), b (upper right), c (lower right),
//! d (bottom), e (lower left), f (upper left), g (middle), h (decimal point).

pub const SEG_A: u8 = 1 << 0;
pub const SEG_B: u8 = 1 << 1;
pub const SEG_C: u8 = 1 << 2;
pub const SEG_D: u8 = 1 << 3;
pub const SEG_E: u8 = 1 << 4;
pub const SEG_F: u8 = 1 << 5;
pub const SEG_G: u8 = 1 << 6;
pub const SEG_H: u8 = 1 << 7;

/// Blank digit (no segments lit)
pub const BLANK: u8 = 0;

/// Segment masks for the digits 0-9
pub const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Width of one rendered digit, decimal point column included
pub const GLYPH_WIDTH: usize = 4;

/// Segment mask for `digit`, or `None` above 9
pub fn encode_digit(digit: u8) -> Option<u8> {
    DIGIT_SEGMENTS.get(digit as usize).copied()
}

/// Digit shown by `mask`, ignoring the decimal point
pub fn decode_digit(mask: u8) -> Option<u8> {
    let mask = mask & !SEG_H;
    DIGIT_SEGMENTS
        .iter()
        .position(|&segments| segments == mask)
        .map(|digit| digit as u8)
}

#[derive(Clone, Copy)]
struct Lit(u8);

impl Lit {
    fn on(self, segment: u8) -> bool {
        self.0 & segment != 0
    }
}

/// Render one digit as three rows of [`GLYPH_WIDTH`] characters
pub fn glyph(mask: u8) -> [String; 3] {
    let s = Lit(mask);
    let (a, b, c, d) = (s.on(SEG_A), s.on(SEG_B), s.on(SEG_C), s.on(SEG_D));
    let (e, f, g) = (s.on(SEG_E), s.on(SEG_F), s.on(SEG_G));

    let top = [
        match (a, f) {
            (true, true) => '┌',
            (true, false) => '╶',
            (false, true) => '╷',
            (false, false) => ' ',
        },
        if a { '─' } else { ' ' },
        match (a, b) {
            (true, true) => '┐',
            (true, false) => '╴',
            (false, true) => '╷',
            (false, false) => ' ',
        },
        ' ',
    ];

    let middle = [
        match (f, e, g) {
            (true, true, true) => '├',
            (true, true, false) => '│',
            (true, false, true) => '└',
            (true, false, false) => '╵',
            (false, true, true) => '┌',
            (false, true, false) => '╷',
            (false, false, true) => '╶',
            (false, false, false) => ' ',
        },
        if g { '─' } else { ' ' },
        match (b, c, g) {
            (true, true, true) => '┤',
            (true, true, false) => '│',
            (true, false, true) => '┘',
            (true, false, false) => '╵',
            (false, true, true) => '┐',
            (false, true, false) => '╷',
            (false, false, true) => '╴',
            (false, false, false) => ' ',
        },
        ' ',
    ];

    let bottom = [
        match (d, e) {
            (true, true) => '└',
            (true, false) => '╶',
            (false, true) => '╵',
            (false, false) => ' ',
        },
        if d { '─' } else { ' ' },
        match (d, c) {
            (true, true) => '┘',
            (true, false) => '╴',
            (false, true) => '╵',
            (false, false) => ' ',
        },
        if s.on(SEG_H) { '.' } else { ' ' },
    ];

    [
        top.iter().collect(),
        middle.iter().collect(),
        bottom.iter().collect(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(glyph(DIGIT_SEGMENTS[8]), ["┌─┐ ", "├─┤ ", "└─┘ "]);
        assert_eq!(glyph(DIGIT_SEGMENTS[1]), ["  ╷ ", "  │ ", "  ╵ "]);
        assert_eq!(glyph(DIGIT_SEGMENTS[2]), ["╶─┐ ", "┌─┘ ", "└─╴ "]);
        assert_eq!(glyph(DIGIT_SEGMENTS[4]), ["╷ ╷ ", "└─┤ ", "  ╵ "]);
        assert_eq!(glyph(DIGIT_SEGMENTS[7]), ["╶─┐ ", "  │ ", "  ╵ "]);
    }

    #[test]
    fn test_blank_and_point() {
        assert_eq!(glyph(BLANK), ["    ", "    ", "    "]);
        assert_eq!(glyph(SEG_H), ["    ", "    ", "   ."]);
        assert_eq!(glyph(DIGIT_SEGMENTS[0] | SEG_H)[2], "└─┘.");
    }

    #[test]
    fn test_decode_round_trip() {
        for digit in 0..10 {
            let mask = encode_digit(digit).unwrap();
            assert_eq!(decode_digit(mask), Some(digit));
            assert_eq!(decode_digit(mask | SEG_H), Some(digit));
        }
        assert_eq!(encode_digit(10), None);
        assert_eq!(decode_digit(BLANK), None);
        assert_eq!(decode_digit(SEG_G), None);
    }
}
