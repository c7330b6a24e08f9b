// ============================================
// src/script.rs (かな文字判定)
// ============================================

/// ひらがなの文字集合（濁点・半濁点・拗音の小書き文字を含む）
const HIRAGANA_CHARS: &[char] = &[
    'あ', 'い', 'う', 'え', 'お',
    'か', 'き', 'く', 'け', 'こ', 'が', 'ぎ', 'ぐ', 'げ', 'ご',
    'さ', 'し', 'す', 'せ', 'そ', 'ざ', 'じ', 'ず', 'ぜ', 'ぞ',
    'た', 'ち', 'つ', 'て', 'と', 'だ', 'ぢ', 'づ', 'で', 'ど',
    'な', 'に', 'ぬ', 'ね', 'の',
    'ま', 'み', 'む', 'め', 'も',
    'は', 'ひ', 'ふ', 'へ', 'ほ', 'ば', 'び', 'ぶ', 'べ', 'ぼ', 'ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ',
    'ら', 'り', 'る', 'れ', 'ろ',
    'や', 'ゆ', 'よ',
    'わ', 'を',
    'ん',
    // 拗音
    'ゃ', 'ゅ', 'ょ',
];

/// カタカナの文字集合（濁点・半濁点・拗音の小書き文字を含む）
const KATAKANA_CHARS: &[char] = &[
    'ア', 'イ', 'ウ', 'エ', 'オ',
    'カ', 'キ', 'ク', 'ケ', 'コ', 'ガ', 'ギ', 'グ', 'ゲ', 'ゴ',
    'サ', 'シ', 'ス', 'セ', 'ソ', 'ザ', 'ジ', 'ズ', 'ゼ', 'ゾ',
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ダ', 'ヂ', 'ヅ', 'デ', 'ド',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ',
    'マ', 'ミ', 'ム', 'メ', 'モ',
    'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'バ', 'ビ', 'ブ', 'ベ', 'ボ', 'パ', 'ピ', 'プ', 'ペ', 'ポ',
    'ラ', 'リ', 'ル', 'レ', 'ロ',
    'ヤ', 'ユ', 'ヨ',
    'ワ', 'ヲ',
    'ン',
    // 拗音
    'ャ', 'ュ', 'ョ',
];

/// 文字列の全ての文字がひらがなかどうかを判定する
///
/// 空文字列は true を返す（0文字に対する全称判定）。
/// この挙動は漢字表示の判定に使われるため変更しないこと。
pub fn is_hiragana(s: &str) -> bool {
    s.chars().all(|c| HIRAGANA_CHARS.contains(&c))
}

/// 文字列の全ての文字がカタカナかどうかを判定する
///
/// 空文字列は true を返す（`is_hiragana` と同じ規約）。
pub fn is_katakana(s: &str) -> bool {
    s.chars().all(|c| KATAKANA_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_hiragana_is_hiragana() {
        assert!(is_hiragana("ねこ"));
        assert!(is_hiragana("ちゅうしゃじょう"));
        assert!(!is_katakana("ねこ"));
    }

    #[test]
    fn pure_katakana_is_katakana() {
        assert!(is_katakana("アメリカ"));
        assert!(is_katakana("キャベツ"));
        assert!(!is_hiragana("アメリカ"));
    }

    #[test]
    fn one_foreign_char_fails() {
        // 1文字でも集合外の文字があれば false
        assert!(!is_hiragana("ねこです。"));
        assert!(!is_hiragana("neko"));
        assert!(!is_katakana("ネコだ"));
        assert!(!is_hiragana("日本"));
    }

    #[test]
    fn empty_string_is_vacuously_true() {
        assert!(is_hiragana(""));
        assert!(is_katakana(""));
    }
}
