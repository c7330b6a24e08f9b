// ============================================
// src/session.rs (クイズ進行ロジック)
// ============================================

use std::io::Result;

use console::{Term, style};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::questions::{KanjiQuestion, Question};

// --------------------------------------------------
// 入出力の境界
// --------------------------------------------------

/// セッションと端末の間の入出力境界
///
/// テストではこのトレイトを実装したダブルで入力列を流し込む。
pub trait QuizIo {
    /// プロンプトを表示して1行読み込む
    fn read_line(&mut self, prompt: &str) -> Result<String>;
    /// 1行出力する
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// 正解時の出力（装飾は実装側の自由）
    fn success(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }
    /// 不正解時の出力（装飾は実装側の自由）
    fn failure(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }
}

/// 実際の端末に接続する `QuizIo` 実装
pub struct ConsoleIo {
    term: Term,
}

impl ConsoleIo {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleIo {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizIo for ConsoleIo {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(&format!("{prompt}: "))?;
        self.term.read_line()
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.term.write_line(text)
    }

    fn success(&mut self, text: &str) -> Result<()> {
        self.term.write_line(&style(text).green().to_string())
    }

    fn failure(&mut self, text: &str) -> Result<()> {
        self.term.write_line(&style(text).red().to_string())
    }
}

// --------------------------------------------------
// スコア
// --------------------------------------------------

/// 1セッション分の得点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub score: u32,
    pub max_score: u32,
}

impl ScoreCard {
    /// 得点率（%）。空のセッションは 100% とする
    pub fn percent(&self) -> f64 {
        if self.max_score == 0 {
            100.0
        } else {
            (self.score as f64 / self.max_score as f64) * 100.0
        }
    }

    /// 最終スコアを表示する
    pub fn report(&self, io: &mut dyn QuizIo) -> Result<()> {
        let percent = self.percent();
        io.write_line(&format!("\n[!] Congrats you scored {percent:.2}!"))?;
        io.write_line(&format!(
            "[!] You got {} wrong!",
            self.max_score - self.score
        ))?;

        // 高い方から順に判定する
        let feedback = if percent >= 90.0 {
            "[!] Excellent! You know this set well!"
        } else if percent >= 80.0 {
            "[!] Great work! A little more practice and you'll have it down!"
        } else if percent >= 70.0 {
            "[!] Not bad! Keep drilling!"
        } else {
            "[!] Keep practicing! Repetition is the key!"
        };
        io.write_line(feedback)
    }
}

// --------------------------------------------------
// セッション本体
// --------------------------------------------------

/// 1回のクイズを進行するセッション
///
/// 乱数源は呼び出し側から注入する（シード固定で再現可能にするため）。
pub struct QuizSession<'a, R: Rng> {
    io: &'a mut dyn QuizIo,
    rng: R,
    /// 日本語キーボードが使えるか（逆方向の出題を許可するか）
    keyboard: bool,
}

impl<'a, R: Rng> QuizSession<'a, R> {
    pub fn new(io: &'a mut dyn QuizIo, rng: R, keyboard: bool) -> Self {
        Self { io, rng, keyboard }
    }

    /// 出題文を表示する（ヒントがあれば括弧書きで添える）
    fn present(&mut self, prompt: &str, context: Option<&str>) -> Result<()> {
        match context {
            Some(hint) => self.io.write_line(&format!("\n{prompt} ({hint})")),
            None => self.io.write_line(&format!("\n{prompt}")),
        }
    }

    /// かなクイズ（全問正解するまで繰り返すモード）
    ///
    /// 各パスでその時点の出題リストを全て出題し、正解した問題だけを
    /// 取り除く。リストが空になるまでパスを繰り返す。得点は初回の正解
    /// でのみ入るため、満点は最初のリストの大きさで固定。
    ///
    /// 一度も正解できない学習者がいる限りループは終わらないが、これは
    /// 仕様どおりの挙動であり上限は設けない。
    ///
    /// 出題方向はキーボードの有無に関わらず毎回ランダムに反転する。
    pub fn run_mastery(&mut self, mut bank: Vec<Question>) -> Result<ScoreCard> {
        let max_score = bank.len() as u32;
        let mut score = 0;

        while !bank.is_empty() {
            bank.shuffle(&mut self.rng);

            let mut i = 0;
            while i < bank.len() {
                let reversed = self.rng.random_bool(0.5);
                let asked = if reversed {
                    bank[i].reversed_kana()
                } else {
                    bank[i].clone()
                };
                // 反転していなければ、かなを見せてローマ字を答えさせる方向
                let asked_in_japanese = !reversed;

                self.present(&asked.prompt, asked.context.as_deref())?;
                let prompt = if reversed {
                    "What is the kana for this sound?"
                } else {
                    "What character is this?"
                };
                let answer = self.io.read_line(prompt)?;

                if asked.is_correct(&answer) {
                    asked.on_correct(&answer, asked_in_japanese, self.io)?;
                    score += 1;
                    // 正解した問題は次のパスに持ち越さない
                    bank.remove(i);
                } else {
                    asked.on_incorrect(asked_in_japanese, self.io)?;
                    i += 1;
                }
            }
        }

        Ok(ScoreCard { score, max_score })
    }

    /// 語彙クイズ（各問1回だけ出題するモード）
    ///
    /// 日本語キーボードがある場合のみ、問題ごとに 50/50 で
    /// 逆方向（日本語を見せて英語を答えさせる）に切り替える。
    pub fn run_single_pass(&mut self, mut bank: Vec<Question>) -> Result<ScoreCard> {
        let max_score = bank.len() as u32;
        let mut score = 0;

        bank.shuffle(&mut self.rng);
        for item in &bank {
            let reversed = self.keyboard && self.rng.random_bool(0.5);
            let (asked, prompt) = if reversed {
                (
                    item.reversed_vocab(),
                    "What is the English for the word above?",
                )
            } else {
                (item.clone(), "What is the Japanese for the word above?")
            };

            self.present(&asked.prompt, asked.context.as_deref())?;
            let answer = self.io.read_line(prompt)?;

            if asked.is_correct(&answer) {
                asked.on_correct(&answer, reversed, self.io)?;
                score += 1;
            } else {
                asked.on_incorrect(reversed, self.io)?;
            }
        }

        Ok(ScoreCard { score, max_score })
    }

    /// 漢字クイズ（各問1回だけ出題するモード）
    ///
    /// 読みと意味を答えさせる方向は2点、意味から漢字を書かせる方向は
    /// 1点。配点は出題時に決まるため、満点は出題のたびに積み上がる。
    /// 逆方向はキーボードがある場合のみ出題する。
    pub fn run_kanji(&mut self, mut bank: Vec<KanjiQuestion>) -> Result<ScoreCard> {
        let mut score = 0;
        let mut max_score = 0;

        bank.shuffle(&mut self.rng);
        for item in &bank {
            let from_meaning = self.keyboard && self.rng.random_bool(0.5);

            if from_meaning {
                max_score += 1;
                self.present(&item.meaning, None)?;
                let answer = self.io.read_line("What is the Kanji for the meaning above?")?;

                if item.matches_glyph(&answer) {
                    self.io.success("Correct! :)")?;
                    score += 1;
                } else {
                    item.on_glyph_incorrect(self.io)?;
                }
            } else {
                max_score += 2;
                self.present(&item.glyph, None)?;
                let reading = self.io.read_line("What is the reading (hiragana)?")?;
                let meaning = self.io.read_line("What is the meaning?")?;

                let (points, missed) = item.grade(&reading, &meaning);
                score += points;
                match missed {
                    None => self.io.success("Correct! :)")?,
                    Some(missed) => item.on_missed(missed, self.io)?,
                }
            }
        }

        Ok(ScoreCard { score, max_score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::{HashMap, VecDeque};

    /// 出題方向のコインを固定する乱数源。`random_bool(0.5)` は u64 を
    /// 引くので、u64::MAX なら常に false、0 なら常に true になる。
    /// シャッフルが引く u32 は小さな定数を返す（結果は決定的になる）。
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            2
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    /// 決まった入力列を順に返す入出力ダブル
    struct ScriptedIo {
        inputs: VecDeque<String>,
        transcript: Vec<String>,
    }

    impl ScriptedIo {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                transcript: Vec::new(),
            }
        }
    }

    impl QuizIo for ScriptedIo {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.inputs.pop_front().expect("ran out of scripted inputs"))
        }

        fn write_line(&mut self, text: &str) -> Result<()> {
            self.transcript.push(text.to_string());
            Ok(())
        }
    }

    /// 出題文を見て答えるダブル。シャッフル順や出題方向に依存せずに
    /// 「n回目の出題から正解する」計画を実行できる。
    struct DrillBot {
        /// 表示された出題文 -> (問題番号, その方向の正答)
        answers: HashMap<String, (usize, String)>,
        /// 問題ごとの出題回数
        asks: Vec<u32>,
        /// この回数目の出題から正解する（1始まり）
        correct_from: Vec<u32>,
        last_prompt: String,
        total_asked: u32,
    }

    impl DrillBot {
        fn new(items: &[(&str, &str)], correct_from: &[u32]) -> Self {
            let mut answers = HashMap::new();
            for (id, (prompt, answer)) in items.iter().enumerate() {
                // どちらの方向で出題されても答えられるように両方登録する
                answers.insert(prompt.to_string(), (id, answer.to_string()));
                answers.insert(answer.to_string(), (id, prompt.to_string()));
            }
            Self {
                answers,
                asks: vec![0; items.len()],
                correct_from: correct_from.to_vec(),
                last_prompt: String::new(),
                total_asked: 0,
            }
        }
    }

    impl QuizIo for DrillBot {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            let (id, correct) = self.answers[&self.last_prompt].clone();
            self.asks[id] += 1;
            self.total_asked += 1;
            if self.asks[id] >= self.correct_from[id] {
                Ok(correct)
            } else {
                Ok("zzz".to_string())
            }
        }

        fn write_line(&mut self, text: &str) -> Result<()> {
            if let Some(prompt) = text.strip_prefix('\n') {
                self.last_prompt = prompt.to_string();
            }
            Ok(())
        }
    }

    fn kana_bank() -> Vec<Question> {
        vec![
            Question::new("あ", "a"),
            Question::new("い", "i"),
            Question::new("う", "u"),
        ]
    }

    #[test]
    fn mastery_requeues_missed_items_until_bank_is_empty() {
        // 1問目は1パス目で正解、残り2問は2パス目で正解する計画。
        // 2パスで終了し、出題は 3 + 2 = 5 回になる。
        let mut io = DrillBot::new(&[("あ", "a"), ("い", "i"), ("う", "u")], &[1, 2, 2]);
        let rng = StdRng::seed_from_u64(7);
        let card = QuizSession::new(&mut io, rng, false).run_mastery(kana_bank()).unwrap();

        assert_eq!(card, ScoreCard { score: 3, max_score: 3 });
        assert_eq!(io.total_asked, 5);
    }

    #[test]
    fn mastery_scores_single_item_after_one_miss() {
        // 不正解 -> 再出題 -> 正解 で 1/1 になるシナリオ。
        // FixedRng(u64::MAX) で出題方向を順方向に固定する。
        let mut io = ScriptedIo::new(&["x", "a"]);
        let rng = FixedRng(u64::MAX);
        let bank = vec![Question::new("あ", "a")];
        let card = QuizSession::new(&mut io, rng, false).run_mastery(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 1 });

        let incorrect = io
            .transcript
            .iter()
            .position(|l| l == "Incorrect! :/")
            .expect("incorrect feedback missing");
        let correct = io
            .transcript
            .iter()
            .position(|l| l == "Correct! :)")
            .expect("correct feedback missing");
        assert!(incorrect < correct);
    }

    #[test]
    fn mastery_reverses_direction_even_without_keyboard() {
        // FixedRng(0) は常に反転方向を選ぶ。キーボードなしでも
        // ローマ字を見せてかなを答えさせる出題になる。
        let mut io = ScriptedIo::new(&["あ"]);
        let rng = FixedRng(0);
        let bank = vec![Question::new("あ", "a")];
        let card = QuizSession::new(&mut io, rng, false).run_mastery(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 1 });
        assert!(io.transcript.contains(&"\na".to_string()));
    }

    #[test]
    fn single_pass_asks_each_item_exactly_once() {
        let bank: Vec<Question> = vec![
            Question::new("Moon", "つき").alternates(&["tsuki"]).kanji("月"),
            Question::new("Water", "みず").alternates(&["mizu"]).kanji("水"),
            Question::new("Enemy", "てき").alternates(&["teki"]),
            Question::new("Now", "いま").alternates(&["ima"]).kanji("今"),
            Question::new("Um", "あの").alternates(&["ano"]),
        ];

        // キーボードの有無に関わらず、出題は必ず5回で満点は5点
        for keyboard in [false, true] {
            let mut io = ScriptedIo::new(&["zzz", "zzz", "zzz", "zzz", "zzz"]);
            let rng = StdRng::seed_from_u64(42);
            let card = QuizSession::new(&mut io, rng, keyboard)
                .run_single_pass(bank.clone())
                .unwrap();

            assert_eq!(card, ScoreCard { score: 0, max_score: 5 });
            assert!(io.inputs.is_empty());
        }
    }

    #[test]
    fn single_pass_reveals_kanji_for_kana_response() {
        let bank = vec![
            Question::new("Waterfall", "たき")
                .alternates(&["taki"])
                .kanji("滝"),
        ];
        // キーボードなし -> 常に順方向（英語を見せて日本語で答えさせる）
        let mut io = ScriptedIo::new(&["たき"]);
        let rng = StdRng::seed_from_u64(1);
        let card = QuizSession::new(&mut io, rng, false).run_single_pass(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 1 });
        assert!(
            io.transcript
                .contains(&"The Kanji (漢字) for this word is 滝".to_string())
        );
    }

    #[test]
    fn single_pass_accepts_romaji_alternate() {
        let bank = vec![Question::new("Moon", "つき").alternates(&["tsuki"]).kanji("月")];
        let mut io = ScriptedIo::new(&["TSUKI"]);
        let rng = StdRng::seed_from_u64(1);
        let card = QuizSession::new(&mut io, rng, false).run_single_pass(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 1 });
    }

    fn kanji_bank() -> Vec<KanjiQuestion> {
        vec![
            KanjiQuestion::new("上", "うえ", "Above/On").readings(&["じょう", "うわ"]),
            KanjiQuestion::new("水", "みず", "Water").readings(&["すい"]),
            KanjiQuestion::new("山", "やま", "Mountain").readings(&["さん"]),
        ]
    }

    /// 漢字クイズ用のダブル。表示された漢字に対して読みと意味を
    /// 順に答える。
    struct KanjiBot {
        answers: HashMap<String, (String, String)>,
        last_prompt: String,
    }

    impl QuizIo for KanjiBot {
        fn read_line(&mut self, prompt: &str) -> Result<String> {
            let (reading, meaning) = self.answers[&self.last_prompt].clone();
            if prompt.contains("reading") {
                Ok(reading)
            } else {
                Ok(meaning)
            }
        }

        fn write_line(&mut self, text: &str) -> Result<()> {
            if let Some(prompt) = text.strip_prefix('\n') {
                self.last_prompt = prompt.to_string();
            }
            Ok(())
        }
    }

    #[test]
    fn kanji_drill_without_keyboard_is_two_points_per_item() {
        let mut io = KanjiBot {
            answers: HashMap::from([
                ("上".to_string(), ("じょう".to_string(), "on".to_string())),
                ("水".to_string(), ("みず".to_string(), "Water".to_string())),
                ("山".to_string(), ("やま".to_string(), "mountain".to_string())),
            ]),
            last_prompt: String::new(),
        };
        let rng = StdRng::seed_from_u64(3);
        let card = QuizSession::new(&mut io, rng, false).run_kanji(kanji_bank()).unwrap();

        // キーボードなしでは全問が読み+意味の2点問題になる
        assert_eq!(card, ScoreCard { score: 6, max_score: 6 });
    }

    #[test]
    fn kanji_drill_awards_partial_credit() {
        let bank = vec![KanjiQuestion::new("上", "うえ", "Above/On").readings(&["じょう"])];
        let mut io = ScriptedIo::new(&["した", "above"]);
        let rng = StdRng::seed_from_u64(3);
        let card = QuizSession::new(&mut io, rng, false).run_kanji(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 2 });
        assert!(io.transcript.contains(&"The reading was うえ".to_string()));
    }

    #[test]
    fn kanji_drill_glyph_direction_is_one_point() {
        // FixedRng(0) は常に逆方向（意味から漢字）を選ぶ
        let bank = vec![KanjiQuestion::new("上", "うえ", "Above/On")];
        let mut io = ScriptedIo::new(&["上"]);
        let rng = FixedRng(0);
        let card = QuizSession::new(&mut io, rng, true).run_kanji(bank).unwrap();

        assert_eq!(card, ScoreCard { score: 1, max_score: 1 });
        assert!(io.transcript.contains(&"\nAbove/On".to_string()));
    }

    #[test]
    fn score_report_prints_percentage_and_wrong_count() {
        let mut io = ScriptedIo::new(&[]);
        ScoreCard { score: 3, max_score: 4 }.report(&mut io).unwrap();

        assert!(io.transcript.contains(&"\n[!] Congrats you scored 75.00!".to_string()));
        assert!(io.transcript.contains(&"[!] You got 1 wrong!".to_string()));
    }

    #[test]
    fn empty_session_scores_full_marks() {
        assert_eq!(ScoreCard { score: 0, max_score: 0 }.percent(), 100.0);
    }
}
