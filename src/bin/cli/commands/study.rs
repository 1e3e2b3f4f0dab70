//! Interactive study loops for the three modes.
//!
//! Presentation only: card selection, scheduling, and persistence all
//! happen in `mnemo_lib::study`. Quitting mid-question just drops the
//! question; nothing about the card is committed until it is answered.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mnemo_lib::srs::algorithm::{format_interval, preview_intervals, Rating};
use mnemo_lib::srs::models::Card;
use mnemo_lib::srs::session::ReviewSession;
use mnemo_lib::study::{choice, flashcard, pick_question_card, typing};

use crate::app::App;
use crate::StudyModeArg;

pub fn run(app: &mut App, mode: &StudyModeArg, answer_with: Option<&str>) -> Result<()> {
    // Fail early with the import hint if there is nothing to study
    app.active_deck()?;

    let mut session = ReviewSession::new();
    let mut rng = StdRng::from_entropy();

    match mode {
        StudyModeArg::Flash => run_flash(app, &mut session, &mut rng)?,
        StudyModeArg::Choice => run_choice(app, &mut session, &mut rng)?,
        StudyModeArg::Typing => {
            let typing_mode = match answer_with {
                Some(choice) => {
                    let mode = typing::TypingMode::from_input(choice);
                    typing::save_mode(&mut app.store, mode)?;
                    mode
                }
                None => typing::load_mode(&app.store),
            };
            run_typing(app, &mut session, typing_mode, &mut rng)?;
        }
    }

    println!(
        "Session streak: {}   Lifetime: {}",
        session.streak(),
        app.store.lifetime_streak()
    );
    Ok(())
}

fn run_flash(app: &mut App, session: &mut ReviewSession, rng: &mut StdRng) -> Result<()> {
    session.rebuild(app.active_deck()?, Utc::now(), rng);

    loop {
        let now = Utc::now();
        let deck = app.active_deck()?;
        let Some(card) = flashcard::current_card(deck, session) else {
            println!("All done! Nothing due right now.");
            break;
        };

        println!();
        println!("({} due)", session.due_count());
        print_front(card);
        if !prompt_continue("[Enter] show answer, [q] quit: ")? {
            break;
        }

        print_back(card);
        let previews = preview_intervals(card, now);
        println!(
            "1 Again ({})  2 Hard ({})  3 Good ({})  4 Easy ({})",
            format_interval(previews[0]),
            format_interval(previews[1]),
            format_interval(previews[2]),
            format_interval(previews[3]),
        );
        let Some(line) = prompt("rate [1-4, q quits]: ")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let rating = Rating::from_input(&line);
        flashcard::rate(&mut app.store, session, rating, now, rng)?;
    }
    Ok(())
}

fn run_choice(app: &mut App, session: &mut ReviewSession, rng: &mut StdRng) -> Result<()> {
    session.rebuild(app.active_deck()?, Utc::now(), rng);

    loop {
        let now = Utc::now();
        let deck = app.active_deck()?;
        let Some(question) = choice::next_question(deck, session, rng) else {
            println!("No cards in this deck.");
            break;
        };
        let card = &deck.cards[question.card_idx];

        println!();
        println!("({} due)", session.due_count());
        print_front(card);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }

        let Some(line) = prompt("answer [number, q quits]: ")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        let picked = match line.trim().parse::<usize>() {
            Ok(n) if (1..=question.options.len()).contains(&n) => n - 1,
            _ => {
                println!("Pick a number between 1 and {}.", question.options.len());
                continue;
            }
        };

        let question_card = question.card_idx;
        let correct = choice::answer(&mut app.store, session, &question, picked, now, rng)?;
        let deck = app.active_deck()?;
        report_outcome(correct, &deck.cards[question_card]);

        if !prompt_continue("[Enter] next, [q] quit: ")? {
            break;
        }
    }
    Ok(())
}

fn run_typing(
    app: &mut App,
    session: &mut ReviewSession,
    mode: typing::TypingMode,
    rng: &mut StdRng,
) -> Result<()> {
    session.rebuild(app.active_deck()?, Utc::now(), rng);

    loop {
        let now = Utc::now();
        let deck = app.active_deck()?;
        let Some(card_idx) = pick_question_card(deck, session, rng) else {
            println!("No cards in this deck.");
            break;
        };
        let card = &deck.cards[card_idx];
        let expected = typing::expected_answer(card, mode).to_string();

        println!();
        println!("({} due)", session.due_count());
        print_front(card);
        println!("{}", mode.prompt());

        let Some(line) = prompt("> ")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let correct = typing::check_answer(&line, &expected);
        typing::submit(&mut app.store, session, card_idx, correct, now, rng)?;
        let deck = app.active_deck()?;
        report_outcome(correct, &deck.cards[card_idx]);

        if !prompt_continue("[Enter] next, [q] quit: ")? {
            break;
        }
    }
    Ok(())
}

fn print_front(card: &Card) {
    println!("  {}", card.content.hakka_chars);
    println!("  Hakka Pronunciation: {}", card.content.pronunciation);
}

fn print_back(card: &Card) {
    if !card.content.mandarin.is_empty() {
        println!("  普通中文: {}", card.content.mandarin);
    }
    if !card.content.english.is_empty() {
        println!("  Eng: {}", card.content.english);
    }
}

fn report_outcome(correct: bool, card: &Card) {
    if correct {
        println!("Correct!");
    } else {
        println!("Incorrect.");
    }
    print_back(card);
}

/// Read one prompt line; `None` on EOF
fn prompt(text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Enter continues, q (or EOF) stops
fn prompt_continue(text: &str) -> Result<bool> {
    match prompt(text)? {
        Some(line) => Ok(!line.trim().eq_ignore_ascii_case("q")),
        None => Ok(false),
    }
}
