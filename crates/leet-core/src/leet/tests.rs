use proptest::prelude::*;

use super::*;
use crate::settings::Settings;

fn en(text: &str, level: i64) -> String {
    let level = Level::new(level);
    let mut rng = SeededRng::for_output(level.get(), text);
    leetify_english(text, level, &Settings::default().leet_en, &mut rng)
}

fn ja(text: &str, level: i64) -> String {
    let level = Level::new(level);
    let mut rng = SeededRng::for_output(level.get(), text);
    leetify_japanese(text, level, &Settings::default().leet_ja, &mut rng)
}

#[test]
fn english_golden_streams() {
    let text = "Hello world! This app translates English.";
    assert_eq!(en(text, 1), "H3llo world! 7his app 7r4n5l47es Engli5h.");
    assert_eq!(
        en(text, 2),
        r"#3||0 \/\/0|2||)! T#15_ 4pp~ 7-r4|\|5l4t3s~ 3ng|15#."
    );
    assert_eq!(
        en(text, 3),
        r"[#3|-|0 \/\/0|2||)! 7#15. 4|*|* 7|24_|\|5|4735_ 3-|\|6|15#*.]"
    );

    let text = "I love coffee, but I hate deadlines.";
    assert_eq!(en(text, 1), "I l0ve coffe:3, bu7 I h4te de4dl1n3s.");
    assert_eq!(en(text, 2), r"i l0v*3 c0ffe3, b(_)7 I #at3 |)ea|)|1|\|35.");
    assert_eq!(en(text, 3), r"1 |0\/3 (0:phph33;, 8(_)7 1 h4t3 |)3a|)|I|\|35.");
}

#[test]
fn japanese_golden_streams() {
    let text = "こんにちは世界！コーヒーは好き。";
    assert_eq!(ja(text, 1), text);
    assert_eq!(ja(text, 2), "コンニチ・ハ♪世界！コーヒーハ好キ♡。");
    assert_eq!(ja(text, 3), "ｺｿ=ﾁﾊ世界！ｺｰﾋｰﾊ好ｷｗ。");

    let text = "ありがとう、よろしくお願いします。ノートとロール";
    assert_eq!(ja(text, 2), "ｱﾘｶﾞﾄｳ、ョﾛ･ｼｸｵ願ｲｼﾏｽ。ﾉｰﾄﾄﾛｰﾙ");
    assert_eq!(
        ja(text, 3),
        "【ァʀɪガトウ、ョロシクオ願イ⚡シマス☆。ノｰ|-|-□ｰル】"
    );
}

#[test]
fn english_without_chaos_is_identity() {
    let mut s = Settings::default().leet_en;
    s.substitute.0 = [0.0; 3];
    s.separator.0 = [0.0; 3];
    s.recase_base = 0.0;
    s.recase_step = 0.0;
    s.brackets = 0.0;
    s.strip_vowels = 0.0;
    for level in 1..=3 {
        let mut rng = SeededRng::new(7);
        let text = "Plain text, 42 times.";
        assert_eq!(leetify_english(text, Level::new(level), &s, &mut rng), text);
    }
}

#[test]
fn english_full_substitution() {
    let mut s = Settings::default().leet_en;
    s.substitute.0 = [1.0; 3];
    s.separator.0 = [0.0; 3];
    let mut rng = SeededRng::new(1);
    assert_eq!(leetify_english("tease", Level::new(1), &s, &mut rng), "73453");
}

#[test]
fn english_separators_skip_whitespace() {
    let mut s = Settings::default().leet_en;
    s.substitute.0 = [0.0; 3];
    s.separator.0 = [1.0; 3];
    let mut rng = SeededRng::new(3);
    let out = leetify_english("a b", Level::new(1), &s, &mut rng);
    let chars: Vec<char> = out.chars().collect();
    assert_eq!(chars.len(), 5, "{out}");
    assert_eq!(chars[0], 'a');
    assert_eq!(chars[2], ' ');
    assert_eq!(chars[3], 'b');
}

#[test]
fn english_level_three_finishers() {
    let mut s = Settings::default().leet_en;
    s.substitute.0 = [0.0; 3];
    s.separator.0 = [0.0; 3];
    s.recase_base = 0.0;
    s.recase_step = 0.0;
    s.brackets = 1.0;
    s.strip_vowels = 1.0;
    let mut rng = SeededRng::new(5);
    assert_eq!(leetify_english("Audio cue", Level::new(3), &s, &mut rng), "[d c]");
    let mut rng = SeededRng::new(5);
    assert_eq!(leetify_english("", Level::new(3), &s, &mut rng), "");
}

#[test]
fn japanese_without_chaos_keeps_script_per_level() {
    let mut s = Settings::default().leet_ja;
    s.small_kana.0 = [0.0; 3];
    s.separator.0 = [0.0; 3];
    s.half_width = 0.0;
    s.lookalike = 0.0;
    s.dakuten = 0.0;
    s.corner_brackets = 0.0;
    let mut rng = SeededRng::new(2);
    assert_eq!(leetify_japanese("ねこです", Level::new(1), &s, &mut rng), "ねこです");
    assert_eq!(leetify_japanese("ねこです", Level::new(2), &s, &mut rng), "ネコデス");
}

#[test]
fn japanese_half_width_and_brackets() {
    let mut s = Settings::default().leet_ja;
    s.small_kana.0 = [0.0; 3];
    s.separator.0 = [0.0; 3];
    s.half_width = 1.0;
    s.lookalike = 0.0;
    s.dakuten = 0.0;
    s.corner_brackets = 1.0;
    let mut rng = SeededRng::new(2);
    assert_eq!(
        leetify_japanese("がっこう", Level::new(3), &s, &mut rng),
        "【ｶﾞッｺｳ】"
    );
    let mut rng = SeededRng::new(2);
    assert_eq!(leetify_japanese("", Level::new(3), &s, &mut rng), "");
}

#[test]
fn japanese_dakuten_only_on_kana() {
    let mut s = Settings::default().leet_ja;
    s.small_kana.0 = [0.0; 3];
    s.separator.0 = [0.0; 3];
    s.half_width = 0.0;
    s.lookalike = 0.0;
    s.dakuten = 1.0;
    s.dakuten_per_char = 1.0;
    s.corner_brackets = 0.0;
    let mut rng = SeededRng::new(4);
    assert_eq!(
        leetify_japanese("カ世A", Level::new(3), &s, &mut rng),
        "カ\u{3099}世A"
    );
}

#[test]
fn dispatch_follows_output_language() {
    let settings = Settings::default();
    let level = Level::new(2);
    let text = "hello";
    let mut a = SeededRng::for_output(2, text);
    let mut b = SeededRng::for_output(2, text);
    assert_eq!(
        leetify(OutputLanguage::En, text, level, &settings, &mut a),
        leetify_english(text, level, &settings.leet_en, &mut b)
    );
}

proptest! {
    #[test]
    fn english_level_one_only_adds_known_glyphs(text in "[a-z ]{0,30}") {
        let out = en(&text, 1);
        let allowed = "abcdefghijklmnopqrstuvwxyz 431057_-.~*=:;";
        prop_assert!(out.chars().all(|c| allowed.contains(c)), "{}", out);
    }

    #[test]
    fn stylizers_are_deterministic(text in "\\PC{0,30}", level in 1i64..=3) {
        prop_assert_eq!(en(&text, level), en(&text, level));
        prop_assert_eq!(ja(&text, level), ja(&text, level));
    }
}
