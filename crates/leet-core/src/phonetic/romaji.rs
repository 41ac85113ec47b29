use crate::unicode::katakana_to_hiragana;

use super::table::{digraph_romaji, kana_romaji};

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Romanize a run of kana (hiragana or katakana) in a single greedy pass.
///
/// - two-kana yōon (`きょ` → `kyo`) win over single kana
/// - `っ` doubles the first letter of the next mora (`がっこう` → `gakkou`)
/// - `ー` repeats the last vowel written so far, or `-` if there is none
/// - `ん` becomes `n'` before a vowel or y-initial mora (`けんい` → `ken'i`)
/// - anything unmapped (kanji, punctuation) passes through unchanged
pub fn kana_to_romaji(kana: &str) -> String {
    let chars: Vec<char> = katakana_to_hiragana(kana).chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut geminate = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == 'っ' {
            geminate = true;
            i += 1;
            continue;
        }

        let digraph = chars
            .get(i + 1)
            .and_then(|&next| digraph_romaji(ch, next));
        let roma = match digraph {
            Some(r) => {
                i += 2;
                Some(r)
            }
            None => {
                i += 1;
                kana_romaji(ch)
            }
        };

        let Some(roma) = roma else {
            out.push(ch);
            geminate = false;
            continue;
        };

        if roma == "-" {
            match out.chars().rev().find(|&c| is_vowel(c)) {
                Some(v) => out.push(v),
                None => out.push('-'),
            }
            geminate = false;
            continue;
        }

        if ch == 'ん' {
            let next_onset = chars
                .get(i)
                .and_then(|&c| kana_romaji(c))
                .and_then(|r| r.chars().next());
            if next_onset.is_some_and(|c| is_vowel(c) || c == 'y') {
                out.push_str("n'");
            } else {
                out.push('n');
            }
            geminate = false;
            continue;
        }

        if geminate {
            if let Some(onset) = roma.chars().next().filter(char::is_ascii_lowercase) {
                out.push(onset);
            }
        }
        geminate = false;
        out.push_str(roma);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youon() {
        assert_eq!(kana_to_romaji("きょう"), "kyou");
        assert_eq!(kana_to_romaji("ジャンヌ"), "jannu");
        assert_eq!(kana_to_romaji("ふぁいる"), "fairu");
    }

    #[test]
    fn test_moraic_n() {
        assert_eq!(kana_to_romaji("けんい"), "ken'i");
        assert_eq!(kana_to_romaji("しんよう"), "shin'you");
        assert_eq!(kana_to_romaji("ほんや"), "hon'ya");
        assert_eq!(kana_to_romaji("こんにちは"), "konnichiha");
        assert_eq!(kana_to_romaji("ん"), "n");
    }

    #[test]
    fn test_gemination() {
        assert_eq!(kana_to_romaji("がっこう"), "gakkou");
        assert_eq!(kana_to_romaji("ちょっと"), "chotto");
        assert_eq!(kana_to_romaji("きって"), "kitte");
        assert_eq!(kana_to_romaji("まっちゃ"), "maccha");
        // trailing small tsu has nothing to double
        assert_eq!(kana_to_romaji("あっ"), "a");
        assert_eq!(kana_to_romaji("っ"), "");
    }

    #[test]
    fn test_long_vowel_mark() {
        assert_eq!(kana_to_romaji("コーヒー"), "koohii");
        assert_eq!(kana_to_romaji("ラーメン"), "raamen");
        assert_eq!(kana_to_romaji("ぱーてぃー"), "paateii");
        assert_eq!(kana_to_romaji("ー"), "-");
    }

    #[test]
    fn test_katakana_and_passthrough() {
        assert_eq!(kana_to_romaji("ヴァイオリン"), "vuaiorin");
        assert_eq!(kana_to_romaji("漢字かな"), "漢字kana");
        assert_eq!(kana_to_romaji(""), "");
    }
}
