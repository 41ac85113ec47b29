//! Phonetic fallbacks for words the phrase dictionaries do not cover.
//!
//! Kana runs are romanized with a greedy left-to-right automaton handling
//! sokuon (っ), hatsuon (ん), yōon (きゃ) and the prolonged sound mark;
//! English words are spelled out in rough katakana.

mod katakana;
mod romaji;
mod table;

pub use katakana::en_word_to_katakanaish;
pub use romaji::kana_to_romaji;
