//! # Terminal Session
//!
//! Line-oriented presentation layer over a [`QuizController`].
//!
//! Reads one command per line from any `BufRead` and renders each screen to
//! any `Write`, so the same session drives stdin/stdout in the binary and
//! in-memory buffers in tests. The session only issues controller commands;
//! every rule (gating, write-once answers, scoring) stays in the engine.

use certquiz_core::{
    Advance, OptionState, QuestionView, QuizController, QuizError, Screen, StageCard, StageId,
    primitives::option_index,
};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player asked to quit.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

type Step = io::Result<ControlFlow<SessionEnd>>;

/// Interactive session bound to one controller and one input/output pair.
pub struct TerminalSession<'a, R, W> {
    quiz: &'a mut QuizController,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> TerminalSession<'a, R, W> {
    /// Create a session.
    pub fn new(quiz: &'a mut QuizController, input: R, output: W) -> Self {
        Self {
            quiz,
            input,
            output,
        }
    }

    /// Drive the controller until the player quits or input ends.
    pub fn run(&mut self) -> Result<SessionEnd, QuizError> {
        self.run_screens()
            .map_err(|e| QuizError::Io(format!("Terminal session failed: {}", e)))
    }

    fn run_screens(&mut self) -> io::Result<SessionEnd> {
        loop {
            let step = match self.quiz.screen() {
                Screen::Landing => self.landing()?,
                Screen::StageSelect => self.stage_select()?,
                Screen::Question => self.question()?,
                Screen::StageResult => self.stage_result()?,
                Screen::FinalResult => self.final_result()?,
            };
            if let ControlFlow::Break(end) = step {
                self.output.flush()?;
                return Ok(end);
            }
        }
    }

    // =========================================================================
    // SCREENS
    // =========================================================================

    fn landing(&mut self) -> Step {
        let stages = self.quiz.catalog().stage_count();
        let questions = self.quiz.catalog().question_count();

        writeln!(self.output)?;
        writeln!(self.output, "=== Certification Quiz ===")?;
        writeln!(self.output, "{} stages, {} questions.", stages, questions)?;
        writeln!(
            self.output,
            "Pass each stage to unlock the next one. Your rank is awarded on the total."
        )?;
        writeln!(self.output, "Press Enter to start, q to quit.")?;

        let Some(command) = self.read_command()? else {
            return Ok(ControlFlow::Break(SessionEnd::EndOfInput));
        };
        if is_quit(&command) {
            return Ok(ControlFlow::Break(SessionEnd::Quit));
        }
        self.quiz.navigate_to(Screen::StageSelect);
        Ok(ControlFlow::Continue(()))
    }

    fn stage_select(&mut self) -> Step {
        let cards = self.quiz.stage_cards();
        let completed = self.quiz.all_stages_completed();

        writeln!(self.output)?;
        writeln!(self.output, "--- Stages ---")?;
        for card in &cards {
            writeln!(
                self.output,
                "  {}. {} [{}]",
                card.id,
                card.title,
                card_status(card)
            )?;
            if let Some(subtitle) = &card.subtitle {
                writeln!(self.output, "     {}", subtitle)?;
            }
        }
        if completed {
            writeln!(self.output, "  r. Final results")?;
        }
        writeln!(
            self.output,
            "Choose a stage number, b to go back, q to quit."
        )?;

        let Some(command) = self.read_command()? else {
            return Ok(ControlFlow::Break(SessionEnd::EndOfInput));
        };
        if is_quit(&command) {
            return Ok(ControlFlow::Break(SessionEnd::Quit));
        }

        match command.as_str() {
            "b" | "B" => {
                self.quiz.navigate_to(Screen::Landing);
            }
            "r" | "R" => {
                if !self.quiz.navigate_to(Screen::FinalResult) {
                    writeln!(
                        self.output,
                        "Finish every stage to see the final results."
                    )?;
                }
            }
            other => match other.parse::<u32>() {
                Ok(id) => {
                    if !self.quiz.begin_stage(StageId(id)) {
                        writeln!(self.output, "Stage {} is not available.", id)?;
                    }
                }
                Err(_) => writeln!(self.output, "Unknown command '{}'.", other)?,
            },
        }
        Ok(ControlFlow::Continue(()))
    }

    fn question(&mut self) -> Step {
        let Some(view) = self.quiz.question_view() else {
            self.quiz.navigate_to(Screen::StageSelect);
            return Ok(ControlFlow::Continue(()));
        };
        self.render_question(&view)?;

        if view.selected.is_some() {
            writeln!(
                self.output,
                "{}",
                if view.is_last {
                    "Press Enter to see the stage result."
                } else {
                    "Press Enter for the next question."
                }
            )?;
        } else {
            let last = view.options.last().map_or('A', |option| option.letter);
            writeln!(
                self.output,
                "Answer with a letter (A-{}), or q to leave the stage.",
                last
            )?;
        }

        let Some(command) = self.read_command()? else {
            return Ok(ControlFlow::Break(SessionEnd::EndOfInput));
        };
        if is_quit(&command) {
            self.quiz.end_stage_session();
            return Ok(ControlFlow::Continue(()));
        }

        if view.selected.is_some() {
            if let Advance::StageEnded(_) = self.quiz.advance() {
                self.quiz.navigate_to(Screen::StageResult);
            }
            return Ok(ControlFlow::Continue(()));
        }

        let mut letters = command.chars();
        let option = match (letters.next(), letters.next()) {
            (Some(letter), None) => option_index(letter),
            _ => None,
        };
        let recorded = option
            .is_some_and(|option| self.quiz.record_answer(view.stage_id, view.index, option));
        if !recorded {
            writeln!(self.output, "Choose one of the listed letters.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn stage_result(&mut self) -> Step {
        let Some(end) = self.quiz.pending_stage_end().copied() else {
            self.quiz.acknowledge_stage_end();
            return Ok(ControlFlow::Continue(()));
        };
        let title = self
            .quiz
            .catalog()
            .stage(end.stage_id)
            .map(|stage| stage.title.clone())
            .unwrap_or_default();

        writeln!(self.output)?;
        writeln!(
            self.output,
            "=== Stage {}: {} {} ===",
            end.stage_id,
            title,
            if end.passed { "passed" } else { "failed" }
        )?;
        writeln!(
            self.output,
            "Score: {}/{} ({}%), passing score {}",
            end.score, end.total, end.percentage, end.passing_score
        )?;
        if let Some(next) = end.unlocked {
            writeln!(self.output, "Stage {} unlocked.", next)?;
        } else if !end.passed {
            writeln!(
                self.output,
                "You need {} correct answers to pass. Try again.",
                end.passing_score
            )?;
        }
        writeln!(self.output, "Press Enter to continue.")?;

        if self.read_command()?.is_none() {
            return Ok(ControlFlow::Break(SessionEnd::EndOfInput));
        }
        self.quiz.acknowledge_stage_end();
        Ok(ControlFlow::Continue(()))
    }

    fn final_result(&mut self) -> Step {
        let Some(report) = self.quiz.final_report() else {
            self.quiz.navigate_to(Screen::StageSelect);
            return Ok(ControlFlow::Continue(()));
        };

        writeln!(self.output)?;
        writeln!(self.output, "=== Final Results ===")?;
        for summary in &report.stages {
            let result = summary.result;
            writeln!(
                self.output,
                "  {}. {}: {}/{} ({}%) {}",
                summary.id,
                summary.title,
                result.score,
                result.total,
                result.percentage(),
                if result.passed { "passed" } else { "failed" }
            )?;
        }
        writeln!(
            self.output,
            "Total: {}/{} ({}%)",
            report.score, report.total, report.percentage
        )?;
        writeln!(
            self.output,
            "Rank: {} {}",
            report.rank.icon, report.rank.title
        )?;
        if let Some(razryad) = &report.rank.razryad {
            writeln!(self.output, "Qualification: {}", razryad)?;
        }
        if !report.rank.description.is_empty() {
            writeln!(self.output, "{}", report.rank.description)?;
        }
        if report.all_passed {
            writeln!(self.output, "All stages passed.")?;
        }
        writeln!(
            self.output,
            "Press s to revisit stages, r to start over, anything else to quit."
        )?;

        match self.read_command()? {
            None => Ok(ControlFlow::Break(SessionEnd::EndOfInput)),
            Some(command) if command.eq_ignore_ascii_case("s") => {
                self.quiz.navigate_to(Screen::StageSelect);
                Ok(ControlFlow::Continue(()))
            }
            Some(command) if command.eq_ignore_ascii_case("r") => {
                self.quiz.reset();
                Ok(ControlFlow::Continue(()))
            }
            Some(_) => Ok(ControlFlow::Break(SessionEnd::Quit)),
        }
    }

    // =========================================================================
    // RENDERING HELPERS
    // =========================================================================

    fn render_question(&mut self, view: &QuestionView) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "[Stage {} of {}] {} | Question {}/{} | Score {}",
            view.stage_id,
            view.stage_count,
            view.stage_title,
            view.number(),
            view.total,
            view.score
        )?;
        writeln!(self.output, "{}", view.prompt)?;
        for option in &view.options {
            writeln!(
                self.output,
                "  {} {}) {}",
                option_marker(option.state),
                option.letter,
                option.text
            )?;
        }

        if let Some(correct) = view.correct {
            writeln!(
                self.output,
                "{}",
                if correct { "Correct!" } else { "Incorrect." }
            )?;
        }
        if let Some(explanation) = &view.explanation {
            writeln!(self.output, "Explanation: {}", explanation)?;
        }
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn read_command(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_quit(command: &str) -> bool {
    command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit")
}

fn card_status(card: &StageCard) -> String {
    if !card.unlocked {
        return "locked".to_string();
    }
    match card.result {
        Some(result) if result.passed => format!("passed {}/{}", result.score, result.total),
        Some(result) => format!("failed {}/{}", result.score, result.total),
        None => format!(
            "{} questions, pass at {}",
            card.question_count, card.passing_score
        ),
    }
}

fn option_marker(state: OptionState) -> char {
    match state {
        OptionState::Correct => '+',
        OptionState::Incorrect => 'x',
        OptionState::Neutral | OptionState::Dimmed => ' ',
    }
}
