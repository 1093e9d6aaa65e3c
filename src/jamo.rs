//! Decomposition of Hangul syllables into their jamo slots.
//!
//! A precomposed syllable in the U+AC00..=U+D7A3 block encodes its lead
//! consonant, vowel and optional trailing consonant as a single index:
//! `(lead * 21 + vowel) * 28 + trail`, where trail slot 0 means "none".
//! [`decompose`] reverses that arithmetic against three fixed ordered
//! tables; [`recompose`] is the exact inverse.

use serde::{Deserialize, Serialize};

/// First code point of the precomposed syllable block ('가').
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last code point of the precomposed syllable block ('힣').
pub const SYLLABLE_END: u32 = 0xD7A3;

const COMPAT_JAMO_FIRST: u32 = 0x3131; // 'ㄱ'
const COMPAT_JAMO_LAST: u32 = 0x3163; // 'ㅣ'

/// Lead consonants in syllable-block index order.
pub const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels in syllable-block index order.
pub const VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Trailing consonants in syllable-block index order. Slot 0 ("no trail")
/// is not part of this table; a raw trail index of `n > 0` maps to
/// `TRAILS[n - 1]`.
pub const TRAILS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Number of trailing slots including "none".
const TRAIL_SLOTS: usize = TRAILS.len() + 1;

/// The resolved slots of one drawable character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Syllable {
    /// A bare jamo outside the precomposed block, drawn as-is.
    Single(char),
    /// A precomposed syllable: lead consonant, vowel, optional trailing
    /// consonant, in fixed positional order.
    Composed {
        lead: char,
        vowel: char,
        trail: Option<char>,
    },
}

/// Splits one character into its jamo slots.
///
/// Precomposed syllables decompose into lead/vowel/optional-trail; bare
/// compatibility jamo become a [`Syllable::Single`]. Any other character
/// yields `None` — it contributes no strokes but is never an error.
pub fn decompose(c: char) -> Option<Syllable> {
    let cp = c as u32;
    if (SYLLABLE_BASE..=SYLLABLE_END).contains(&cp) {
        let i = (cp - SYLLABLE_BASE) as usize;
        let lead = LEADS[i / (VOWELS.len() * TRAIL_SLOTS)];
        let vowel = VOWELS[(i % (VOWELS.len() * TRAIL_SLOTS)) / TRAIL_SLOTS];
        let trail_index = i % TRAIL_SLOTS;
        let trail = (trail_index > 0).then(|| TRAILS[trail_index - 1]);
        Some(Syllable::Composed { lead, vowel, trail })
    } else if (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&cp) {
        Some(Syllable::Single(c))
    } else {
        None
    }
}

/// Recombines jamo slots into the precomposed code point.
///
/// Returns `None` if any slot character is not in its table. Inverse of
/// [`decompose`] for every syllable in the block.
pub fn recompose(lead: char, vowel: char, trail: Option<char>) -> Option<char> {
    let l = LEADS.iter().position(|&c| c == lead)?;
    let v = VOWELS.iter().position(|&c| c == vowel)?;
    let t = match trail {
        None => 0,
        Some(tc) => TRAILS.iter().position(|&c| c == tc)? + 1,
    };
    char::from_u32(SYLLABLE_BASE + ((l * VOWELS.len() + v) * TRAIL_SLOTS + t) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_two_slot() {
        assert_eq!(
            decompose('가'),
            Some(Syllable::Composed {
                lead: 'ㄱ',
                vowel: 'ㅏ',
                trail: None,
            })
        );
    }

    #[test]
    fn test_decompose_three_slot() {
        assert_eq!(
            decompose('한'),
            Some(Syllable::Composed {
                lead: 'ㅎ',
                vowel: 'ㅏ',
                trail: Some('ㄴ'),
            })
        );
    }

    #[test]
    fn test_block_boundaries() {
        assert_eq!(
            decompose('힣'),
            Some(Syllable::Composed {
                lead: 'ㅎ',
                vowel: 'ㅣ',
                trail: Some('ㅎ'),
            })
        );
        // One below the block is a bare-jamo / unsupported region, not a syllable.
        assert!(!matches!(
            decompose(char::from_u32(SYLLABLE_BASE - 1).unwrap()),
            Some(Syllable::Composed { .. })
        ));
    }

    #[test]
    fn test_bare_jamo_passes_through() {
        assert_eq!(decompose('ㄱ'), Some(Syllable::Single('ㄱ')));
        assert_eq!(decompose('ㅢ'), Some(Syllable::Single('ㅢ')));
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(decompose('A'), None);
        assert_eq!(decompose('7'), None);
        assert_eq!(decompose(' '), None);
    }

    #[test]
    fn test_round_trip_entire_block() {
        for cp in SYLLABLE_BASE..=SYLLABLE_END {
            let c = char::from_u32(cp).unwrap();
            let Some(Syllable::Composed { lead, vowel, trail }) = decompose(c) else {
                panic!("U+{cp:04X} did not decompose");
            };
            assert_eq!(recompose(lead, vowel, trail), Some(c), "U+{cp:04X}");
        }
    }
}
