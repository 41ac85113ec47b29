//! Canned sentences for trying the translator out.

use crate::rng::SeededRng;
use crate::types::{Direction, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Direction the sentence is written for.
    pub direction: Direction,
    pub text: &'static str,
}

pub static SAMPLES: &[Sample] = &[
    Sample {
        direction: Direction::EnToJa,
        text: "Hello world! This app translates English into impossible Japanese Leet.",
    },
    Sample {
        direction: Direction::EnToJa,
        text: "Please translate: I love coffee, but I hate deadlines.",
    },
    Sample {
        direction: Direction::JaToEn,
        text: "こんにちは世界！このアプリは文脈的にあり得ない翻訳をします。",
    },
    Sample {
        direction: Direction::JaToEn,
        text: "締め切りは嫌いだけど、コーヒーは好き。よろしくお願いします。",
    },
];

/// Pick a sample deterministically from `seed_material` and `level`.
pub fn pick_sample(seed_material: &str, level: Level) -> &'static Sample {
    let mut rng = SeededRng::for_source(level.get(), seed_material);
    rng.pick(SAMPLES).unwrap_or(&SAMPLES[0])
}
