// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::io::{Error, Result};

// クイズ本体のモジュール
mod banks;
mod questions;
mod script;
mod session;

use clap::Parser;
use dialoguer::{Confirm, Select};
use rand::SeedableRng;
use rand::rngs::StdRng;

use session::{ConsoleIo, QuizIo, QuizSession};

/// Japanese Quiz (日本語クイズ) - terminal drill for kana, kanji and vocabulary.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// シャッフルのシード値（指定すると出題順を再現できる）
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut io = ConsoleIo::new();

    io.write_line("Japanese Quiz (日本語クイズ)")?;
    io.write_line("[!] Please make sure you can see this: ひらがな・カタカナ・漢字")?;
    io.write_line("[!] A Japanese keyboard isn't required, but it is strongly recommended!")?;

    loop {
        let choices = [
            "Hiragana Quiz (ひらがな)",
            "Katakana Quiz (カタカナ)",
            "Kanji Quiz (漢字)",
            "Vocab Quiz (MLJP201)",
            "Exit",
        ];
        let choice = Select::new()
            .with_prompt("[+] What quiz would you like to take?")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(Error::other)?;

        let card = match choice {
            0 => {
                let keyboard = ask_keyboard(&mut io)?;
                pause(&mut io)?;
                QuizSession::new(&mut io, &mut rng, keyboard).run_mastery(banks::hiragana())?
            }
            1 => {
                let keyboard = ask_keyboard(&mut io)?;
                pause(&mut io)?;
                QuizSession::new(&mut io, &mut rng, keyboard).run_mastery(banks::katakana())?
            }
            2 => {
                let keyboard = ask_keyboard(&mut io)?;
                pause(&mut io)?;
                QuizSession::new(&mut io, &mut rng, keyboard).run_kanji(banks::kanji())?
            }
            3 => {
                let chapters = [
                    "Chapter 1 Vocabulary",
                    "Chapter 3 Vocabulary",
                    "Chapter 4 Vocabulary",
                ];
                let chapter = Select::new()
                    .with_prompt("[+] What chapter would you like to be quizzed on?")
                    .items(&chapters)
                    .default(0)
                    .interact()
                    .map_err(Error::other)?;
                let bank = match chapter {
                    0 => banks::vocab_chapter1(),
                    1 => banks::vocab_chapter3(),
                    _ => banks::vocab_chapter4(),
                };

                let keyboard = ask_keyboard(&mut io)?;
                pause(&mut io)?;
                QuizSession::new(&mut io, &mut rng, keyboard).run_single_pass(bank)?
            }
            _ => break,
        };

        card.report(&mut io)?;
        io.read_line("[!] Press enter to continue...")?;
    }

    io.write_line("\n[!] The program has concluded.")?;
    Ok(())
}

/// 日本語キーボードが使えるかをセッション開始前に1回だけ確認する
///
/// この結果が逆方向（日本語を見せて答えさせる）の出題を出すかどうかを
/// 決める。
fn ask_keyboard(io: &mut ConsoleIo) -> Result<bool> {
    let keyboard = Confirm::new()
        .with_prompt("Do you have a Japanese keyboard installed?")
        .interact()
        .map_err(Error::other)?;

    if keyboard {
        io.write_line("[!] You will be asked to type in Japanese Writing Script(s) and Romaji!")?;
    } else {
        io.write_line("[!] You will only be asked to type Romaji!")?;
        io.write_line("[!] Set up a Japanese keyboard for the full experience! :)")?;
    }
    Ok(keyboard)
}

fn pause(io: &mut ConsoleIo) -> Result<()> {
    io.read_line("\nThe quiz is about to begin! Press enter to start...")?;
    Ok(())
}
