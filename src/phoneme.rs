use smallvec::SmallVec;

/// Boundary between two phonemes within a syllable.
pub const PHONE_BOUNDARY: char = '_';
/// Boundary between two phonemes that is also a syllable break.
pub const SYLLABLE_BOUNDARY: char = '.';

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub(crate) fn is_vowel_char(c: char) -> bool {
    VOWELS.contains(&c)
}

pub(crate) fn is_boundary_char(c: char) -> bool {
    c == PHONE_BOUNDARY || c == SYLLABLE_BOUNDARY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cv {
    Vowel,
    Consonant,
}

/// Words are short; the signature stays on the stack in practice.
pub(crate) type CvSignature = SmallVec<[Cv; 24]>;

/// A phonemic transcription split into its tokens and the boundary markers
/// between them. `seps.len() == tokens.len() - 1` for a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhonemeSeq<'a> {
    pub(crate) tokens: Vec<&'a str>,
    pub(crate) seps: Vec<char>,
}

impl<'a> PhonemeSeq<'a> {
    pub(crate) fn parse(text: &'a str) -> Self {
        if text.is_empty() {
            return Self {
                tokens: vec![],
                seps: vec![],
            };
        }
        let mut tokens = vec![];
        let mut seps = vec![];
        let mut start = 0;
        for (i, c) in text.char_indices() {
            if is_boundary_char(c) {
                tokens.push(&text[start..i]);
                seps.push(c);
                start = i + c.len_utf8();
            }
        }
        tokens.push(&text[start..]);
        Self { tokens, seps }
    }

    /// One symbol per phoneme, decided by the token's first character.
    pub(crate) fn cv_signature(&self) -> CvSignature {
        self.tokens
            .iter()
            .map(|t| {
                if t.chars().next().map(is_vowel_char).unwrap_or(false) {
                    Cv::Vowel
                } else {
                    Cv::Consonant
                }
            })
            .collect()
    }

    pub(crate) fn render(&self, seps: &[char]) -> String {
        let mut r = String::new();
        for (i, t) in self.tokens.iter().enumerate() {
            if i > 0 {
                r.push(seps[i - 1]);
            }
            r.push_str(t);
        }
        r
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_parse_round_trip() {
        let seq = PhonemeSeq::parse("s_t_aa.r_t");
        assert_eq!(seq.tokens, vec!["s", "t", "aa", "r", "t"]);
        assert_eq!(seq.seps, vec!['_', '_', '.', '_']);
        assert_eq!(seq.render(&seq.seps), "s_t_aa.r_t");
    }

    #[test]
    fn t_parse_empty() {
        let seq = PhonemeSeq::parse("");
        assert!(seq.tokens.is_empty());
        assert!(seq.seps.is_empty());
    }

    #[test]
    fn t_single_phoneme() {
        let seq = PhonemeSeq::parse("sh");
        assert_eq!(seq.tokens, vec!["sh"]);
        assert!(seq.seps.is_empty());
    }

    #[test]
    fn t_cv_signature() {
        let seq = PhonemeSeq::parse("k_a_t");
        assert_eq!(
            seq.cv_signature().as_slice(),
            &[Cv::Consonant, Cv::Vowel, Cv::Consonant]
        );
        // Multi-character tokens classify by their first character.
        let seq = PhonemeSeq::parse("sh_er");
        assert_eq!(seq.cv_signature().as_slice(), &[Cv::Consonant, Cv::Vowel]);
    }
}
