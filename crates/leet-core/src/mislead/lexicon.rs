//! Confusion tables. Every target is itself a dictionary entry, so a
//! misheard word still translates to something real.

/// Upper-case jargon → a lower-case word that sounds like it.
pub(super) static MANUAL_CONFUSIONS: &[(&str, &str)] = &[
    ("CRUD", "cruel"),
    ("SQL", "sequel"),
    ("API", "ape"),
    ("GUI", "gooey"),
    ("JSON", "jason"),
    ("URL", "earl"),
    ("CSS", "chess"),
    ("YAML", "camel"),
    ("AWS", "paws"),
    ("RAM", "lamb"),
];

/// Words a sloppy listener confuses with each other. Lower-case.
pub(super) static FUZZY_LEXICON: &[&str] = &[
    "hello", "hell", "love", "lose", "live", "hate", "hare", "hat", "great", "greet", "world",
    "word", "would", "worm", "please", "pleased", "coffee", "coffer", "coffin", "deadline",
    "dateline", "morning", "mourning", "dessert", "desert", "beer", "bear", "bread", "break",
    "friend", "fiend", "happy", "hippy", "code", "coke", "test", "text", "meeting", "melting",
    "lunch", "launch", "server", "sever", "serve", "cloud", "clout", "thanks", "thinks", "tanks",
];

/// Japanese dajare: an exact kana or kanji run → a similar-sounding one.
pub(super) static PUNS: &[(&str, &str)] = &[
    ("コーヒー", "コピー"),
    ("世界", "正解"),
    ("アプリ", "アヒル"),
    ("ありがとう", "蟻が十"),
    ("こんにちは", "こんにゃく"),
    ("すみません", "住みません"),
    ("ごめん", "ご麺"),
    ("布団", "吹っ飛んだ"),
    ("カレー", "辛え"),
    ("イルカ", "居るか"),
];

pub(super) fn manual_target(key: &str) -> Option<&'static str> {
    MANUAL_CONFUSIONS
        .iter()
        .find(|&&(k, _)| k == key)
        .map(|&(_, v)| v)
}

pub(super) fn pun_target(token: &str) -> Option<&'static str> {
    PUNS.iter().find(|&&(k, _)| k == token).map(|&(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::PhraseTable;

    #[test]
    fn every_latin_target_is_in_dictionary() {
        let en = PhraseTable::english();
        for &(_, target) in MANUAL_CONFUSIONS {
            assert!(en.lookup_word(target).is_some(), "missing {target}");
        }
        for &word in FUZZY_LEXICON {
            assert!(en.lookup_word(word).is_some(), "missing {word}");
        }
    }

    #[test]
    fn every_pun_target_is_in_dictionary() {
        let ja = PhraseTable::japanese();
        for &(_, target) in PUNS {
            assert!(ja.lookup_exact(target).is_some(), "missing {target}");
        }
    }

    #[test]
    fn lexicon_is_lowercase_letters() {
        for &word in FUZZY_LEXICON {
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
        for &(key, _) in MANUAL_CONFUSIONS {
            assert!(key.len() >= 2 && key.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
