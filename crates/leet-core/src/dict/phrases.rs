//! Phrase tables. Sources are stored lower-case for English; order only
//! matters as a tie-break between sources of equal length.

pub(super) static EN_PHRASES: &[(&str, &str)] = &[
    ("thank you", "ありがとう"),
    ("thanks", "ありがとう"),
    ("good morning", "おはよう"),
    ("good night", "おやすみ"),
    ("i love you", "愛してる"),
    ("i love", "大好き"),
    ("i hate", "嫌い"),
    ("hello", "こんにちは"),
    ("hi", "やあ"),
    ("bye", "じゃあね"),
    ("please", "お願い"),
    ("sorry", "ごめん"),
    ("excuse me", "すみません"),
    ("coffee", "コーヒー"),
    ("deadline", "締め切り"),
    ("translate", "翻訳する"),
    ("app", "アプリ"),
    ("world", "世界"),
    ("good", "いい"),
    ("morning", "朝"),
    ("night", "夜"),
    ("love", "愛"),
    ("hate", "嫌い"),
    ("great", "最高"),
    ("cat", "猫"),
    ("dog", "犬"),
    // acronym confusions
    ("cruel", "残酷"),
    ("sequel", "続編"),
    ("ape", "猿"),
    ("gooey", "ベトベト"),
    ("jason", "ジェイソン"),
    ("earl", "伯爵"),
    ("chess", "チェス"),
    ("camel", "ラクダ"),
    ("paws", "肉球"),
    ("lamb", "子羊"),
    // near-miss spellings
    ("hell", "地獄"),
    ("lose", "失う"),
    ("live", "生きる"),
    ("hare", "ウサギ"),
    ("hat", "帽子"),
    ("greet", "挨拶"),
    ("word", "単語"),
    ("would", "だろう"),
    ("worm", "ミミズ"),
    ("pleased", "嬉しい"),
    ("coffer", "金庫"),
    ("coffin", "棺桶"),
    ("dateline", "日付変更線"),
    ("mourning", "喪中"),
    ("dessert", "デザート"),
    ("desert", "砂漠"),
    ("beer", "ビール"),
    ("bear", "熊"),
    ("bread", "パン"),
    ("break", "休憩"),
    ("friend", "友達"),
    ("fiend", "悪魔"),
    ("happy", "幸せ"),
    ("hippy", "ヒッピー"),
    ("code", "コード"),
    ("coke", "コーラ"),
    ("test", "テスト"),
    ("text", "テキスト"),
    ("meeting", "会議"),
    ("melting", "溶ける"),
    ("lunch", "昼ご飯"),
    ("launch", "発射"),
    ("server", "サーバー"),
    ("sever", "切断"),
    ("serve", "仕える"),
    ("cloud", "クラウド"),
    ("clout", "影響力"),
    ("thinks", "思う"),
    ("tanks", "戦車"),
];

pub(super) static JA_PHRASES: &[(&str, &str)] = &[
    ("ありがとうございます", "thank you"),
    ("ありがとう", "thanks"),
    ("おはよう", "good morning"),
    ("おやすみ", "good night"),
    ("こんにちは", "hello"),
    ("やあ", "hi"),
    ("じゃあね", "bye"),
    ("お願い", "please"),
    ("ごめん", "sorry"),
    ("すみません", "excuse me"),
    ("コーヒー", "coffee"),
    ("締め切り", "deadline"),
    ("翻訳", "translate"),
    ("アプリ", "app"),
    ("世界", "world"),
    ("愛してる", "i love you"),
    ("大好き", "love"),
    ("嫌い", "hate"),
    ("最高", "great"),
    ("猫", "cat"),
    ("犬", "dog"),
    // pun targets
    ("コピー", "copy"),
    ("正解", "correct answer"),
    ("アヒル", "duck"),
    ("蟻が十", "ten ants"),
    ("こんにゃく", "konjac"),
    ("住みません", "i won't live here"),
    ("ご麺", "noodles"),
    ("布団", "futon"),
    ("吹っ飛んだ", "blew away"),
    ("カレー", "curry"),
    ("辛え", "so spicy"),
    ("イルカ", "dolphin"),
    ("居るか", "anyone there"),
];
