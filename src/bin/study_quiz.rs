//! Interactive terminal front end for the quiz engine.
//!
//! Run with: `cargo run --bin study_quiz`
//!
//! Everything here is presentation: menus, prompts, and plain-text tables.
//! All quiz behavior (shuffling, scoring, persistence) lives in the
//! library, which only ever hands back data. The driver decides recovery
//! per error kind — a corrupt stats file stops the program with a message,
//! a failed persist is reported with the score kept on screen, and bad
//! menu input is simply re-prompted.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use study_quiz::{builtin_bank, QuestionBank, QuizError, QuizSession, SessionState, StatsStore};

const STATS_FILE: &str = "study_stats.json";

fn main() {
    println!("==============================");
    println!("   PREWORK STUDY GUIDE");
    println!("   Interactive Programming Quiz");
    println!("==============================");

    let bank = builtin_bank();
    let mut stats = match StatsStore::open(STATS_FILE) {
        Ok(stats) => stats,
        Err(e @ QuizError::CorruptStats { .. }) => {
            eprintln!("{e}");
            eprintln!("Refusing to overwrite existing history; fix or move the file.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("could not open stats file: {e}");
            std::process::exit(1);
        }
    };

    loop {
        println!();
        println!("Main Menu");
        println!("  1. Start Quiz by Category");
        println!("  2. Random Mixed Quiz");
        println!("  3. View Study Statistics");
        println!("  4. Help");
        println!("  5. Exit");

        match prompt_number("Choose an option", 1, 5) {
            Some(1) => category_quiz(&bank, &mut stats),
            Some(2) => mixed_quiz(&bank, &mut stats),
            Some(3) => show_statistics(&stats),
            Some(4) => show_help(),
            Some(5) | None => {
                println!("Thanks for studying! Keep up the great work!");
                return;
            }
            Some(_) => unreachable!(),
        }
    }
}

/// Read one line; `None` means stdin closed (treat as exit).
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompt until the user enters an integer in `[min, max]`.
fn prompt_number(prompt: &str, min: usize, max: usize) -> Option<usize> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => return Some(n),
            _ => println!("Please enter a number from {min} to {max}."),
        }
    }
}

fn category_quiz(bank: &QuestionBank, stats: &mut StatsStore) {
    println!();
    println!("Study Categories");
    let listing = bank.list_categories();
    for (i, (_, name, count)) in listing.iter().enumerate() {
        println!("  {}. {name} ({count} questions)", i + 1);
    }

    let Some(choice) = prompt_number("Select a category", 1, listing.len()) else {
        return;
    };
    let key = listing[choice - 1].0.to_string();

    // The key came from the listing, so the lookup cannot miss; report and
    // bail rather than panic if it somehow does.
    let category = match bank.get_category(&key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!();
    println!("Starting {} Quiz!", category.display_name);
    let label = category.display_name.clone();
    run_session(category.questions.clone(), None, &label, None, stats);
}

fn mixed_quiz(bank: &QuestionBank, stats: &mut StatsStore) {
    let Some(count) = prompt_number("How many questions (1-20)", 1, 20) else {
        return;
    };

    let tagged = bank.all_questions();
    // Shuffling loses the question->category pairing, so keep a lookup by
    // question text for the per-question category line.
    let labels: HashMap<String, String> = tagged
        .iter()
        .map(|(q, label)| (q.text.clone(), label.clone()))
        .collect();
    let pool = tagged.into_iter().map(|(q, _)| q).collect();

    println!();
    println!("Starting Mixed Quiz!");
    run_session(pool, Some(count), "Mixed Topics", Some(&labels), stats);
}

/// Play one session to completion and fold the result into the stats file.
fn run_session(
    pool: Vec<study_quiz::Question>,
    count: Option<usize>,
    label: &str,
    category_of: Option<&HashMap<String, String>>,
    stats: &mut StatsStore,
) {
    let mut rng = rand::thread_rng();
    let mut session = match QuizSession::start(pool, count, &mut rng) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("could not start session: {e}");
            return;
        }
    };
    println!("You'll answer {} questions", session.total());

    while session.state() == SessionState::InProgress {
        let question = match session.current_question() {
            Ok(q) => q.clone(),
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };

        println!();
        println!("Question {}/{}", session.position(), session.total());
        if let Some(labels) = category_of {
            if let Some(cat) = labels.get(&question.text) {
                println!("Category: {cat}");
            }
        }
        println!("{}", question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }

        let Some(answer) = prompt_number("Your answer", 1, question.options.len()) else {
            println!("Quiz abandoned; nothing recorded.");
            return;
        };

        match session.submit_answer(answer - 1) {
            Ok(outcome) if outcome.is_correct => println!("Correct!"),
            Ok(outcome) => println!(
                "Wrong! The correct answer is: {}",
                question.options[outcome.correct_index]
            ),
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        }
        println!("  {}", question.explanation);
    }

    let result = match session.result(label) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    let percentage = result.score as f64 / result.total as f64 * 100.0;
    println!();
    println!("Quiz Complete!");
    println!("Category: {}", result.category_label);
    println!("Score: {}/{}", result.score, result.total);
    println!("Percentage: {percentage:.1}%");
    println!(
        "{}",
        match percentage {
            p if p >= 80.0 => "Excellent work!",
            p if p >= 60.0 => "Good job!",
            _ => "Keep studying!",
        }
    );

    // The score survives a failed persist; retry once before giving up.
    if let Err(e) = stats.add_session(&result.category_label, result.score, result.total) {
        eprintln!("could not save statistics: {e}");
        if let Err(e) = stats.persist() {
            eprintln!("retry failed, session kept in memory only: {e}");
        }
    }
}

fn show_statistics(stats: &StatsStore) {
    let summary = stats.summary();
    if summary.total_questions == 0 {
        println!("No quiz data yet! Take some quizzes first.");
        return;
    }

    println!();
    println!("Overall Statistics");
    println!("  Total Questions   {}", summary.total_questions);
    println!("  Correct Answers   {}", summary.correct_answers);
    println!("  Overall Accuracy  {:.1}%", summary.overall_accuracy);
    println!("  Quiz Sessions     {}", summary.session_count);

    println!();
    println!("Category Performance");
    for row in stats.category_breakdown() {
        println!(
            "  {:<22} {:>3}/{:<3} {:>5.1}%",
            row.label, row.correct, row.total, row.accuracy
        );
    }

    println!();
    println!("Recent Sessions (Last 5)");
    for entry in stats.recent_sessions(5) {
        println!(
            "  {}  {:<22} {}/{} ({:.1}%)",
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.category,
            entry.score,
            entry.total,
            entry.percentage
        );
    }
}

fn show_help() {
    println!();
    println!("How to Use the Study Quiz Tool");
    println!();
    println!("Quiz modes:");
    println!("  - Category Quiz: focus on one topic");
    println!("  - Mixed Quiz: random questions from all categories");
    println!();
    println!("Statistics:");
    println!("  - Progress is saved to {STATS_FILE} after every quiz");
    println!("  - Review accuracy per category and recent sessions");
    println!();
    println!("Tips:");
    println!("  - Take quizzes regularly to reinforce learning");
    println!("  - Focus on categories where you score lower");
    println!("  - Read explanations carefully after each question");
}
