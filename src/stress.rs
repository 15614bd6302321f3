use crate::phoneme::{is_boundary_char, is_vowel_char};
use crate::{LexStressError, LexStressResult};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

const MAX_SYLLS: usize = 100;
const STRESS_MARKER: char = '\'';

/// How a suffix shifts primary stress, counted from the suffix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StressClass {
    /// Stress falls on the suffix itself.
    Autostressed,
    /// Stress falls one syllable before the suffix.
    Prestress1,
    /// Stress falls two syllables before the suffix.
    Prestress2,
    /// One or two syllables before the suffix; syllable weight decides.
    Prestress1Or2,
    /// The suffix does not attract stress; its syllables are ignored.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub class: StressClass,
    pub sylls: u8,
}

const fn rule(suffix: &'static str, class: StressClass, sylls: u8) -> SuffixRule {
    SuffixRule {
        suffix,
        class,
        sylls,
    }
}

/// Ordered by authored precedence: earlier entries win even when a later
/// entry also matches, so specific suffixes must stay listed before the
/// general ones they end with.
pub(crate) const SUFFIX_RULES: &[SuffixRule] = &[
    rule("ade", StressClass::Autostressed, 1),
    rule("aire", StressClass::Autostressed, 1),
    rule("aise", StressClass::Autostressed, 1),
    rule("arian", StressClass::Autostressed, 1),
    rule("arium", StressClass::Autostressed, 1),
    rule("cidal", StressClass::Autostressed, 2),
    rule("cratic", StressClass::Autostressed, 2),
    rule("ee", StressClass::Autostressed, 1),
    rule("een", StressClass::Autostressed, 1),
    rule("eer", StressClass::Autostressed, 1),
    rule("elle", StressClass::Autostressed, 1),
    rule("enne", StressClass::Autostressed, 1),
    rule("ential", StressClass::Autostressed, 2),
    rule("esce", StressClass::Autostressed, 1),
    rule("escence", StressClass::Autostressed, 2),
    rule("escent", StressClass::Autostressed, 2),
    rule("ese", StressClass::Autostressed, 1),
    rule("esque", StressClass::Autostressed, 1),
    rule("esse", StressClass::Autostressed, 1),
    rule("et", StressClass::Autostressed, 1),
    rule("ette", StressClass::Autostressed, 1),
    rule("eur", StressClass::Autostressed, 1),
    rule("faction", StressClass::Autostressed, 2),
    rule("ician", StressClass::Autostressed, 2),
    rule("icious", StressClass::Autostressed, 2),
    rule("icity", StressClass::Autostressed, 3),
    rule("ation", StressClass::Autostressed, 2),
    rule("self", StressClass::Autostressed, 1),
    rule("cracy", StressClass::Prestress1, 2),
    rule("erie", StressClass::Prestress1, 2),
    rule("ety", StressClass::Prestress1, 2),
    rule("ic", StressClass::Prestress1, 1),
    rule("ical", StressClass::Prestress1, 2),
    rule("ssion", StressClass::Prestress1, 1),
    rule("ia", StressClass::Prestress1, 1),
    rule("metry", StressClass::Prestress1, 2),
    rule("able", StressClass::Prestress2, 1),
    rule("ast", StressClass::Prestress2, 1),
    rule("ate", StressClass::Prestress2, 1),
    rule("atory", StressClass::Prestress2, 3),
    rule("cide", StressClass::Prestress2, 1),
    rule("ene", StressClass::Prestress2, 1),
    rule("fy", StressClass::Prestress2, 1),
    rule("gon", StressClass::Prestress2, 1),
    rule("tude", StressClass::Prestress2, 1),
    rule("gram", StressClass::Prestress2, 1),
    rule("ad", StressClass::Prestress1Or2, 1),
    rule("al", StressClass::Prestress1Or2, 1),
    rule("an", StressClass::Prestress1Or2, 1),
    rule("ancy", StressClass::Prestress1Or2, 2),
    rule("ant", StressClass::Prestress1Or2, 1),
    rule("ar", StressClass::Prestress1Or2, 1),
    rule("ary", StressClass::Prestress1Or2, 2),
    rule("ative", StressClass::Prestress1Or2, 2),
    rule("ator", StressClass::Prestress1Or2, 2),
    rule("ature", StressClass::Prestress1Or2, 2),
    rule("ence", StressClass::Prestress1Or2, 1),
    rule("ency", StressClass::Prestress1Or2, 2),
    rule("ent", StressClass::Prestress1Or2, 1),
    rule("ery", StressClass::Prestress1Or2, 2),
    rule("ible", StressClass::Prestress1Or2, 1),
    rule("is", StressClass::Prestress1Or2, 1),
    rule("acy", StressClass::Neutral, 2),
    rule("age", StressClass::Neutral, 1),
    rule("ance", StressClass::Neutral, 1),
    rule("edly", StressClass::Neutral, 2),
    rule("edness", StressClass::Neutral, 2),
    rule("en", StressClass::Neutral, 1),
    rule("er", StressClass::Neutral, 1),
    rule("ess", StressClass::Neutral, 1),
    rule("ful", StressClass::Neutral, 1),
    rule("hood", StressClass::Neutral, 1),
    rule("less", StressClass::Neutral, 1),
    rule("ness", StressClass::Neutral, 1),
    rule("ish", StressClass::Neutral, 1),
    rule("dom", StressClass::Neutral, 1),
];

/// Prefixes that repel stress movement caused by a matched suffix.
pub(crate) const STRESS_REPELLENT_PREFIXES: &[&str] = &["ex", "ac", "af", "de", "in", "non"];

/// First rule in declaration order whose suffix text ends `orthography`.
/// First-match, not longest-match: table order is the precedence contract.
pub fn suffix_stress_lookup(orthography: &str) -> Option<&'static SuffixRule> {
    SUFFIX_RULES
        .iter()
        .find(|r| orthography.ends_with(r.suffix))
}

pub fn has_stress_repellent_prefix(orthography: &str) -> bool {
    STRESS_REPELLENT_PREFIXES
        .iter()
        .any(|p| orthography.starts_with(p))
}

/// A syllable is light when its vowel is followed by at most one consonant
/// before the next syllable boundary. The walk may be handed the whole tail
/// of a word starting at the syllable; it never looks past the first phoneme
/// of the following syllable.
pub fn is_light_syllable(syllable: &str) -> LexStressResult<bool> {
    let b: Vec<char> = syllable.chars().collect();
    let mut i = 0;
    while i < b.len() && !is_vowel_char(b[i]) {
        i += 1;
    }
    if i == b.len() {
        return Err(LexStressError::MalformedSyllable(syllable.to_string()));
    }
    while i < b.len() && (is_vowel_char(b[i]) || is_boundary_char(b[i])) {
        i += 1;
    }
    if i == b.len() {
        return Ok(true);
    }
    while i < b.len() && !is_boundary_char(b[i]) {
        i += 1;
    }
    if i == b.len() {
        return Ok(true);
    }
    while i < b.len() && is_boundary_char(b[i]) {
        i += 1;
    }
    if i == b.len() {
        return Ok(true);
    }
    Ok(is_vowel_char(b[i]))
}

/// Byte offsets where each syllable starts: position 0 plus the position
/// after every syllable boundary.
fn syllable_starts(phonemes: &str) -> Vec<usize> {
    let mut starts = vec![];
    let mut last_was_break = true;
    for (i, c) in phonemes.char_indices() {
        if last_was_break {
            last_was_break = false;
            starts.push(i);
        }
        if c == crate::phoneme::SYLLABLE_BOUNDARY {
            last_was_break = true;
        }
    }
    starts
}

/// Insert the primary-stress marker `'` before the syllable selected by the
/// suffix table, the prefix list, and syllable weight. `phonemes` must
/// already carry its syllable boundaries.
pub fn apply_stress(phonemes: &str, orthography: &str) -> LexStressResult<String> {
    if phonemes.is_empty() {
        return Err(LexStressError::EmptyWord);
    }

    let starts = syllable_starts(phonemes);
    let mut num_sylls = starts.len();
    if num_sylls > MAX_SYLLS {
        return Err(LexStressError::TooManySyllables(num_sylls));
    }

    let mut syll: i32 = -1;
    if let Some(r) = suffix_stress_lookup(orthography) {
        let n = num_sylls as i32;
        let s = r.sylls as i32;
        match r.class {
            StressClass::Autostressed => syll = n - s,
            StressClass::Prestress1 => syll = n - s - 1,
            StressClass::Prestress2 => syll = n - s - 2,
            StressClass::Prestress1Or2 => {
                syll = n - s - 1;
                if syll >= 0 && is_light_syllable(&phonemes[starts[syll as usize]..])? {
                    syll -= 1;
                }
            }
            StressClass::Neutral => num_sylls -= (r.sylls as usize).min(num_sylls),
        }
    }

    if syll < 0 && has_stress_repellent_prefix(orthography) && num_sylls >= 2 {
        syll = 1;
    }

    if syll < 0 {
        syll = num_sylls as i32 - 2;
        if syll < 0 {
            syll = 0;
        }
        if is_light_syllable(&phonemes[starts[syll as usize]..])? {
            syll -= 1;
        }
    }

    if syll < 0 {
        syll = 0;
    }

    let at = starts[syll as usize];
    let mut marked = String::with_capacity(phonemes.len() + 1);
    marked.push_str(&phonemes[..at]);
    marked.push(STRESS_MARKER);
    marked.push_str(&phonemes[at..]);
    Ok(marked)
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn t_suffix_lookup_concrete() {
        let r = suffix_stress_lookup("operation").unwrap();
        assert_eq!(r.suffix, "ation");
        assert_eq!(r.class, StressClass::Autostressed);
        assert_eq!(r.sylls, 2);
    }

    #[test]
    fn t_suffix_lookup_first_match_wins() {
        // "metric" ends with both "ic" and "cratic"-style entries; "ic"
        // appears first, so it must win regardless of length.
        let r = suffix_stress_lookup("metric").unwrap();
        assert_eq!(r.suffix, "ic");
        assert_eq!(r.class, StressClass::Prestress1);
        // "democratic" ends with "cratic" (listed before "ic") and "ic".
        let r = suffix_stress_lookup("democratic").unwrap();
        assert_eq!(r.suffix, "cratic");
        assert_eq!(r.class, StressClass::Autostressed);
    }

    #[test]
    fn t_suffix_lookup_no_match() {
        assert!(suffix_stress_lookup("cat").is_none());
        assert!(suffix_stress_lookup("").is_none());
    }

    #[test]
    fn t_suffix_shorter_than_word_required() {
        // "et" matches only as a trailing substring of a word at least as long.
        assert!(suffix_stress_lookup("et").is_some());
        assert!(suffix_stress_lookup("e").is_none());
    }

    #[test]
    fn t_every_class_is_represented() {
        for class in StressClass::iter() {
            assert!(
                SUFFIX_RULES.iter().any(|r| r.class == class),
                "no rule with class {:?}",
                class
            );
        }
    }

    #[test]
    fn t_prefix_check() {
        assert!(has_stress_repellent_prefix("exclude"));
        assert!(has_stress_repellent_prefix("nonsense"));
        assert!(has_stress_repellent_prefix("include"));
        assert!(!has_stress_repellent_prefix("occlude"));
        assert!(!has_stress_repellent_prefix(""));
    }

    #[test]
    fn t_light_open_syllable() {
        assert!(is_light_syllable("k_a").unwrap());
        assert!(is_light_syllable("a").unwrap());
    }

    #[test]
    fn t_light_single_coda_consonant() {
        // Vowel then one consonant then end of word.
        assert!(is_light_syllable("k_a_t").unwrap());
        // Vowel, one consonant, then a boundary ending the text.
        assert!(is_light_syllable("k_a_t.").unwrap());
        // Next syllable starts with a vowel: still light.
        assert!(is_light_syllable("k_a_t.a_n").unwrap());
    }

    #[test]
    fn t_heavy_when_cluster_follows() {
        // Next syllable starts with a consonant.
        assert!(!is_light_syllable("k_a_t.t_a").unwrap());
    }

    #[test]
    fn t_light_errors_without_vowel() {
        assert!(matches!(
            is_light_syllable("s_t"),
            Err(LexStressError::MalformedSyllable(_))
        ));
        assert!(matches!(
            is_light_syllable(""),
            Err(LexStressError::MalformedSyllable(_))
        ));
    }

    #[test]
    fn t_apply_stress_autostressed() {
        // 4 syllables, "ation" is autostressed with 2 suffix syllables:
        // stress lands on syllable index 4 - 2 = 2 (the third).
        let marked = apply_stress("o.p_e.r_a.sh_u_n", "operation").unwrap();
        assert_eq!(marked, "o.p_e.'r_a.sh_u_n");
    }

    #[test]
    fn t_apply_stress_empty_word() {
        assert!(matches!(
            apply_stress("", "word"),
            Err(LexStressError::EmptyWord)
        ));
    }

    #[test]
    fn t_apply_stress_default_penultimate() {
        // No suffix rule, no repellent prefix, heavy penult: stress stays
        // on the penultimate syllable.
        let marked = apply_stress("m_o_n.s_t_e_r", "xmonstr").unwrap();
        assert_eq!(marked, "'m_o_n.s_t_e_r");
    }

    #[test]
    fn t_apply_stress_single_syllable() {
        let marked = apply_stress("k_a_t", "xcat").unwrap();
        assert_eq!(marked, "'k_a_t");
    }

    #[test]
    fn t_apply_stress_prestress1() {
        // "ic" pulls stress onto the syllable just before the suffix:
        // a.TOM.ic, not the default-light first syllable.
        let marked = apply_stress("a.t_o_m.i_k", "atomic").unwrap();
        assert_eq!(marked, "a.'t_o_m.i_k");
    }

    #[test]
    fn t_apply_stress_prestress2() {
        // "fy" pulls stress two syllables before the suffix: i.DEN.ti.fy.
        let marked = apply_stress("i.d_e_n.t_i.f_ai", "identify").unwrap();
        assert_eq!(marked, "i.'d_e_n.t_i.f_ai");
    }

    #[test]
    fn t_apply_stress_prestress1or2_weight_tie_break() {
        // "ent" stresses the syllable before the suffix when it is heavy
        // ("pen" closed by a following cluster)...
        let marked = apply_stress("d_i.p_e_n.d_e_n_t", "dependent").unwrap();
        assert_eq!(marked, "d_i.'p_e_n.d_e_n_t");
        // ...but one syllable further left when it is light (open "zi").
        let marked = apply_stress("p_r_e.z_i.d_e_n_t", "president").unwrap();
        assert_eq!(marked, "'p_r_e.z_i.d_e_n_t");
    }

    #[test]
    fn t_apply_stress_neutral_discards_suffix_syllable() {
        // "er" is stress-neutral: its syllable drops out before the
        // penultimate default, so the heavy first syllable wins over
        // "sul", which would be the penult of the full word.
        let marked = apply_stress("k_o_n.s_a_l.t_er", "consulter").unwrap();
        assert_eq!(marked, "'k_o_n.s_a_l.t_er");
    }

    #[test]
    fn t_apply_stress_repellent_prefix() {
        // "exclude" carries "ex"; suffix table has no hit for it, so the
        // second syllable takes the stress.
        let marked = apply_stress("e_k_s.k_l_u_d", "exclude").unwrap();
        assert_eq!(marked, "e_k_s.'k_l_u_d");
    }
}
