use crate::phoneme::{Cv, CvSignature, PhonemeSeq, SYLLABLE_BOUNDARY};
use itertools::Itertools;

/// Phoneme clusters that can begin a syllable.
pub(crate) const SYLLABLE_ONSETS: &[&str] = &[
    "s_p_l", "s_p_r", "s_p_y", "s_p", "s_t_r", "s_t_y", "s_t", "s_k_l", "s_k_r", "s_k_y", "s_k_w",
    "s_k", "p_l", "p_r", "p_y", "t_r", "k_l", "k_r", "k_y", "k_w", "sh_r", "sh_l", "sh", "b_l",
    "b_r", "b_y", "b_w", "d_r", "d_y", "d_w", "g_l", "g_r", "g_y", "g_w", "dh", "b", "d", "f",
    "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "y", "z",
];

/// Phoneme clusters that can end a syllable.
pub(crate) const SYLLABLE_CODAS: &[&str] = &[
    "b", "d", "er", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "f_t", "s_k", "s_p",
    "r_b", "r_d", "r_g", "l_b", "l_d", "n_d", "ng_k", "ng_z", "n_z", "l_f", "r_f", "l_v", "r_v",
    "l_th", "r_th", "m_th", "ng_th", "r_dh", "p_s", "t_s", "l_p", "r_p", "m_p", "l_ch", "r_ch",
    "n_ch", "l_k", "r_k", "l_j", "r_j", "n_j", "r_l", "r_l_d", "r_n_d", "r_n_t", "r_l_z",
    "r_n_z", "r_m_z", "r_m_th", "r_n", "r_m", "r_s", "l_s", "r_t", "l_t", "k_s", "d_z", "t_th",
    "k_t", "p_t", "s_t", "th", "sh", "zh", "t", "v", "w", "y", "z",
];

/// Index of the next consonant cluster that sits between two vowel runs,
/// scanning from `start`. `None` once no internal cluster remains: either
/// the word is exhausted or the remaining consonants run to the end.
pub(crate) fn next_cluster_offset(cv: &CvSignature, start: usize) -> Option<usize> {
    let mut i = start;
    while i < cv.len() && cv[i] == Cv::Consonant {
        i += 1;
    }
    while i < cv.len() && cv[i] == Cv::Vowel {
        i += 1;
    }
    let mut j = i;
    while j < cv.len() && cv[j] == Cv::Consonant {
        j += 1;
    }
    if i < cv.len() && j < cv.len() {
        Some(i)
    } else {
        None
    }
}

fn in_table(cluster: &str, table: &[&str]) -> bool {
    cluster.is_empty() || table.contains(&cluster)
}

fn locate_break_at(tokens: &[&str]) -> Option<usize> {
    (0..=tokens.len()).find(|&k| {
        let left = tokens[..k].iter().join("_");
        let right = tokens[k..].iter().join("_");
        in_table(&left, SYLLABLE_CODAS) && in_table(&right, SYLLABLE_ONSETS)
    })
}

/// Leftmost split of a consonant cluster whose left part is a legal coda and
/// whose right part is a legal onset; either side may be empty. The offset
/// counts phonemes before the break, so 0 puts the whole cluster in the
/// onset and `len` puts it all in the coda. `None` when no split is legal.
pub fn locate_break(cluster: &str) -> Option<usize> {
    let seq = PhonemeSeq::parse(cluster);
    locate_break_at(&seq.tokens)
}

/// Number of syllables in a boundary-marked phoneme string.
pub fn syllable_count(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    word.chars().filter(|c| *c == SYLLABLE_BOUNDARY).count() + 1
}

/// Rewrite the `_` at the legal break point of every internal consonant
/// cluster to `.`. Clusters touching either end of the word belong wholly to
/// their adjacent syllable and are left alone, as are clusters already
/// carrying a syllable boundary. A cluster with no legal break is left
/// unsplit; the phoneme sequence itself is never altered.
pub fn syllabify(word: &str) -> String {
    let seq = PhonemeSeq::parse(word);
    let cv = seq.cv_signature();
    let mut seps = seq.seps.clone();

    let mut pos = 0;
    while let Some(start) = next_cluster_offset(&cv, pos) {
        let mut end = start;
        while end < cv.len() && cv[end] == Cv::Consonant {
            end += 1;
        }
        // Separators flanking and inside the cluster: start-1 ..= end-1.
        // Both exist because the cluster is vowel-bounded on each side.
        let already_marked = seps[start - 1..end].contains(&SYLLABLE_BOUNDARY);
        if !already_marked {
            match locate_break_at(&seq.tokens[start..end]) {
                Some(k) => seps[start - 1 + k] = SYLLABLE_BOUNDARY,
                None => log::warn!(
                    "no legal break for cluster {:?} in {:?}",
                    seq.tokens[start..end].iter().join("_"),
                    word
                ),
            }
        }
        pos = end;
    }

    seq.render(&seps)
}
