//! Toy shell: a line editor, a scrollback, and a handful of canned commands.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indoc::indoc;

use super::neofetch;
use crate::window::AppId;

pub const PROMPT: &str = "arch@desktop:~$";
const SCROLLBACK_LIMIT: usize = 500;

const HELP: &str = "Commands: help, neofetch, ls, cat <file>, whoami, uname -a, clear";
const UNAME: &str =
    "Linux arch-desktop 6.x.x-arch1-1 #1 SMP PREEMPT_DYNAMIC x86_64 GNU/Linux (pretend)";

const FAKE_FILES: [(&str, &str); 2] = [
    (
        "notes.txt",
        indoc! {"
            Remember: pacman -Syu
            Also: read the Arch Wiki.
        "},
    ),
    (
        "pkglist.txt",
        "base linux linux-firmware networkmanager firefox\n",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermLine {
    /// Echo of a submitted command after the prompt.
    Command(String),
    Output(String),
}

/// Something the terminal needs done outside itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEffect {
    None,
    OpenApp(AppId),
}

#[derive(Debug, Clone, Default)]
pub struct TerminalApp {
    input: String,
    lines: Vec<TermLine>,
    focused: bool,
}

impl TerminalApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn lines(&self) -> &[TermLine] {
        &self.lines
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Edits the input line. Enter runs it. Returns `None` for keys the
    /// terminal does not use.
    pub fn handle_key(&mut self, key: &KeyEvent, uptime: Duration) -> Option<TerminalEffect> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                Some(TerminalEffect::None)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Some(TerminalEffect::None)
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                Some(self.run(&line, uptime))
            }
            _ => None,
        }
    }

    /// Runs one command line. Blank input does nothing.
    pub fn run(&mut self, raw: &str, uptime: Duration) -> TerminalEffect {
        let cmd = raw.trim();
        if cmd.is_empty() {
            return TerminalEffect::None;
        }
        self.push(TermLine::Command(cmd.to_string()));
        tracing::trace!(cmd, "terminal command");

        let lower = cmd.to_lowercase();
        match lower.as_str() {
            "help" => self.print(HELP),
            "clear" => self.lines.clear(),
            "neofetch" => {
                for line in neofetch::art(uptime) {
                    self.push(TermLine::Output(line));
                }
                return TerminalEffect::OpenApp(AppId::Neofetch);
            }
            "ls" => {
                let names: Vec<&str> = FAKE_FILES.iter().map(|(name, _)| *name).collect();
                self.print(&names.join("  "));
            }
            "whoami" => self.print("arch"),
            "uname -a" => self.print(UNAME),
            _ if lower.starts_with("cat ") => {
                let file = cat_argument(cmd.get(4..).unwrap_or_default());
                match FAKE_FILES.iter().find(|(name, _)| *name == file) {
                    Some((_, contents)) => {
                        for line in contents.lines() {
                            self.print(line);
                        }
                    }
                    None => self.print(&format!("cat: {file}: No such file")),
                }
            }
            _ => self.print(&format!("{cmd}: command not found")),
        }
        TerminalEffect::None
    }

    fn print(&mut self, text: &str) {
        self.push(TermLine::Output(text.to_string()));
    }

    fn push(&mut self, line: TermLine) {
        self.lines.push(line);
        if self.lines.len() > SCROLLBACK_LIMIT {
            let excess = self.lines.len() - SCROLLBACK_LIMIT;
            self.lines.drain(..excess);
        }
    }
}

/// A single shell word (quotes allowed), or the raw text when it does not
/// split into exactly one word.
fn cat_argument(rest: &str) -> String {
    match shell_words::split(rest) {
        Ok(words) if words.len() == 1 => words.into_iter().next().unwrap_or_default(),
        _ => rest.trim().to_string(),
    }
}
