// ============================================
// src/questions.rs (問題の定義と正誤判定)
// ============================================

use std::io::Result;

use crate::script::{is_hiragana, is_katakana};
use crate::session::QuizIo;

/// 1問分の出題データ（かな・語彙クイズ共通）
///
/// `alternates` は構築時に小文字へ正規化される。
/// 漢字表記は `kanji` に分離して保持する（判定は完全一致）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    alternates: Vec<String>,
    pub kanji: Option<String>,
    /// 同音の問題を区別するためのヒント（例:「を」の "particle"）
    pub context: Option<String>,
}

impl Question {
    /// 新しい問題を作成する。`answer` は空であってはならない
    pub fn new(prompt: &str, answer: &str) -> Self {
        debug_assert!(!answer.is_empty());
        Self {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            alternates: Vec::new(),
            kanji: None,
            context: None,
        }
    }

    /// 別解を追加する（小文字へ正規化して保持する）
    pub fn alternates(mut self, alternates: &[&str]) -> Self {
        self.alternates = alternates.iter().map(|a| a.to_lowercase()).collect();
        self
    }

    /// 漢字表記を追加する
    pub fn kanji(mut self, kanji: &str) -> Self {
        self.kanji = Some(kanji.to_string());
        self
    }

    /// 出題時に添えるヒントを追加する
    pub fn context(mut self, hint: &str) -> Self {
        self.context = Some(hint.to_string());
        self
    }

    /// 回答が正解かどうかを判定する
    ///
    /// 正解・別解は大文字小文字を区別しない。
    /// 漢字には大文字小文字の概念がないので完全一致のみ。
    pub fn is_correct(&self, response: &str) -> bool {
        let folded = response.to_lowercase();
        if folded == self.answer.to_lowercase() {
            return true;
        }
        if self.alternates.iter().any(|a| *a == folded) {
            return true;
        }
        matches!(&self.kanji, Some(k) if k == response)
    }

    /// 正解時のフィードバックを出力する
    ///
    /// 英語で出題して日本語で答えさせた問題（`asked_in_japanese` = false）で、
    /// 回答がかなで書かれていて漢字表記があれば、漢字も併せて表示する。
    pub fn on_correct(
        &self,
        response: &str,
        asked_in_japanese: bool,
        io: &mut dyn QuizIo,
    ) -> Result<()> {
        io.success("Correct! :)")?;

        if !asked_in_japanese
            && (is_hiragana(response) || is_katakana(response))
            && let Some(kanji) = &self.kanji
        {
            io.write_line(&format!("The Kanji (漢字) for this word is {kanji}"))?;
        }
        Ok(())
    }

    /// 不正解時のフィードバックを出力する
    ///
    /// 正解と別解を表示する。日本語で出題して英語で答えさせた問題では
    /// 漢字表記も表示する。
    pub fn on_incorrect(&self, asked_in_japanese: bool, io: &mut dyn QuizIo) -> Result<()> {
        io.failure("Incorrect! :/")?;
        io.write_line(&format!("The correct answer was {}", self.answer))?;

        if !self.alternates.is_empty() {
            io.write_line(&format!(
                "{} were also accepted answers!",
                self.alternates.join(", ")
            ))?;
        }
        if asked_in_japanese
            && let Some(kanji) = &self.kanji
        {
            io.write_line(&format!("The Kanji (漢字) for this word is {kanji}"))?;
        }
        Ok(())
    }

    /// かなクイズ用の逆方向の問題を作る（prompt と answer の入れ替えのみ）
    ///
    /// 2回適用すると元に戻る。
    pub fn reversed_kana(&self) -> Self {
        let mut reversed = self.clone();
        std::mem::swap(&mut reversed.prompt, &mut reversed.answer);
        reversed
    }

    /// 語彙クイズ用の逆方向の問題を作る
    ///
    /// 日本語を出題文にして（漢字表記があれば括弧書きで添える）、
    /// 元の出題文の "/" 区切りの英語の意味を正解の集合にする。
    pub fn reversed_vocab(&self) -> Self {
        let mut prompt = self.answer.clone();
        if let Some(kanji) = &self.kanji {
            prompt.push_str(&format!("({kanji})"));
        }

        let mut senses = self.prompt.split('/');
        // answer は空でない不変条件があるため、意味は必ず1つ以上ある
        let answer = senses.next().unwrap_or(&self.prompt).to_string();
        let alternates = senses.map(|s| s.to_lowercase()).collect();

        Self {
            prompt,
            answer,
            alternates,
            kanji: self.kanji.clone(),
            context: self.context.clone(),
        }
    }
}

/// どちら側を間違えたか（読みを先に判定・報告する）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missed {
    Reading,
    Meaning,
}

/// 漢字クイズ1問分の出題データ
///
/// `meaning` は "/" 区切りで複数の意味を持てる（例: "Above/On"）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiQuestion {
    pub glyph: String,
    pub reading: String,
    alternate_readings: Vec<String>,
    pub meaning: String,
}

impl KanjiQuestion {
    pub fn new(glyph: &str, reading: &str, meaning: &str) -> Self {
        debug_assert!(meaning.split('/').all(|s| !s.is_empty()));
        Self {
            glyph: glyph.to_string(),
            reading: reading.to_string(),
            alternate_readings: Vec::new(),
            meaning: meaning.to_string(),
        }
    }

    /// 別の読みを追加する
    pub fn readings(mut self, readings: &[&str]) -> Self {
        self.alternate_readings = readings.iter().map(|r| r.to_string()).collect();
        self
    }

    /// 読みと意味をそれぞれ採点する（各1点、最大2点）
    ///
    /// 読みはかな同士の完全一致、意味は大文字小文字を区別しない。
    /// 両方間違えた場合は読みの間違いを報告する。
    pub fn grade(&self, reading_response: &str, meaning_response: &str) -> (u32, Option<Missed>) {
        let reading_ok = reading_response == self.reading
            || self.alternate_readings.iter().any(|r| r == reading_response);

        let folded = meaning_response.to_lowercase();
        let meaning_ok = self.meaning.split('/').any(|s| s.to_lowercase() == folded);

        let points = reading_ok as u32 + meaning_ok as u32;
        let missed = if !reading_ok {
            Some(Missed::Reading)
        } else if !meaning_ok {
            Some(Missed::Meaning)
        } else {
            None
        };
        (points, missed)
    }

    /// 逆方向（意味から漢字を答えさせる）の判定。完全一致のみ
    pub fn matches_glyph(&self, response: &str) -> bool {
        response == self.glyph
    }

    /// 読みまたは意味を間違えたときのフィードバックを出力する
    pub fn on_missed(&self, missed: Missed, io: &mut dyn QuizIo) -> Result<()> {
        io.failure("Incorrect! :/")?;
        match missed {
            Missed::Reading => {
                io.write_line(&format!("The reading was {}", self.reading))?;
                if !self.alternate_readings.is_empty() {
                    io.write_line(&format!(
                        "{} were also accepted readings!",
                        self.alternate_readings.join(", ")
                    ))?;
                }
            }
            Missed::Meaning => {
                io.write_line(&format!("The meaning was {}", self.meaning))?;
            }
        }
        Ok(())
    }

    /// 意味から漢字を答えさせる方向で間違えたときのフィードバック
    pub fn on_glyph_incorrect(&self, io: &mut dyn QuizIo) -> Result<()> {
        io.failure("Incorrect! :/")?;
        io.write_line(&format!("The correct answer was {}", self.glyph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_answers_are_case_insensitive() {
        let q = Question::new("ふ", "fu").alternates(&["hu"]);
        assert!(q.is_correct("HU"));
        assert!(q.is_correct("Fu"));
        assert!(!q.is_correct("ho"));
    }

    #[test]
    fn kanji_form_matches_exactly() {
        let q = Question::new("Waterfall", "たき")
            .alternates(&["taki"])
            .kanji("滝");
        assert!(q.is_correct("たき"));
        assert!(q.is_correct("TAKI"));
        assert!(q.is_correct("滝"));
        assert!(!q.is_correct("沢"));
    }

    #[test]
    fn empty_response_is_incorrect() {
        let q = Question::new("あ", "a");
        assert!(!q.is_correct(""));
    }

    #[test]
    fn reversed_kana_is_self_inverse() {
        let q = Question::new("ふ", "fu").alternates(&["hu"]);
        let reversed = q.reversed_kana();
        assert_eq!(reversed.prompt, "fu");
        assert_eq!(reversed.answer, "ふ");
        assert_eq!(reversed.reversed_kana(), q);
    }

    #[test]
    fn reversed_vocab_collapses_to_english_senses() {
        let q = Question::new("Home/House/My Place", "いえ")
            .alternates(&["ie", "uchi", "うち"])
            .kanji("家");
        let reversed = q.reversed_vocab();

        assert_eq!(reversed.prompt, "いえ(家)");
        assert_eq!(reversed.answer, "Home");
        assert!(reversed.is_correct("home"));
        assert!(reversed.is_correct("house"));
        assert!(reversed.is_correct("MY PLACE"));
        assert!(!reversed.is_correct("ie"));
    }

    #[test]
    fn reversed_vocab_without_kanji_keeps_plain_prompt() {
        let q = Question::new("Um", "あの").alternates(&["ano"]);
        let reversed = q.reversed_vocab();
        assert_eq!(reversed.prompt, "あの");
        assert_eq!(reversed.answer, "Um");
    }

    #[test]
    fn grade_awards_partial_credit_per_side() {
        let q = KanjiQuestion::new("上", "うえ", "Above/On").readings(&["じょう", "うわ"]);

        assert_eq!(q.grade("うえ", "above"), (2, None));
        assert_eq!(q.grade("じょう", "On"), (2, None));
        assert_eq!(q.grade("うえ", "below"), (1, Some(Missed::Meaning)));
        assert_eq!(q.grade("した", "above"), (1, Some(Missed::Reading)));
        // 両方間違えた場合は読みの間違いとして報告する
        assert_eq!(q.grade("した", "below"), (0, Some(Missed::Reading)));
    }

    #[test]
    fn glyph_match_is_exact() {
        let q = KanjiQuestion::new("上", "うえ", "Above/On");
        assert!(q.matches_glyph("上"));
        assert!(!q.matches_glyph("下"));
        assert!(!q.matches_glyph(""));
    }
}
