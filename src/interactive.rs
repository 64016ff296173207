//! Interactive preference browser
//!
//! A line-driven stand-in for the editor window: each redraw prints a
//! toolbar, the current page of the filtered list as `key | value` rows, and
//! a prompt. Input lines either run a toolbar command or replace the search
//! text.
//!
//! | Input            | Effect                                   |
//! |------------------|------------------------------------------|
//! | `:r`, `:refresh` | re-read the store                        |
//! | `:n`, `:next`    | scroll one page down                     |
//! | `:p`, `:prev`    | scroll one page up                       |
//! | `:c`, `:clear`   | clear the search text                    |
//! | `:q`, `:quit`    | leave (end of input does the same)       |
//! | `::text`         | search for `:text`                       |
//! | anything else    | search for the line, scroll back to top  |

use crate::model::PrefList;
use crate::normalize::KeyNormalizer;
use crate::output::write_table;
use crate::session::Session;
use crate::store::PreferenceStore;
use std::io::{self, BufRead, Write};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Search text and scroll offset, kept across redraws and refreshes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    /// Index of the first visible row in the filtered list
    pub scroll: usize,
}

/// Outcome of handling one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct Browser<S, N> {
    session: Session<S, N>,
    view: ViewState,
    page_size: usize,
    last_error: Option<String>,
}

impl<S: PreferenceStore, N: KeyNormalizer> Browser<S, N> {
    pub fn new(session: Session<S, N>, page_size: usize) -> Self {
        Self {
            session,
            view: ViewState::default(),
            page_size: page_size.max(1),
            last_error: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn session(&self) -> &Session<S, N> {
        &self.session
    }

    /// Message of the last failed refresh, cleared by a successful one
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply one line of input
    pub fn handle(&mut self, line: &str) -> Action {
        match line {
            ":q" | ":quit" => return Action::Quit,
            ":r" | ":refresh" => self.refresh(),
            ":n" | ":next" => self.view.scroll = self.view.scroll.saturating_add(self.page_size),
            ":p" | ":prev" => self.view.scroll = self.view.scroll.saturating_sub(self.page_size),
            ":c" | ":clear" => self.set_search(String::new()),
            _ => {
                let search = line.strip_prefix(':').filter(|rest| rest.starts_with(':'));
                self.set_search(search.unwrap_or(line).to_string());
            }
        }
        Action::Continue
    }

    fn set_search(&mut self, search: String) {
        self.view.search = search;
        self.view.scroll = 0;
    }

    /// Re-read the store; a failure is kept for the error line of the next redraw
    pub fn refresh(&mut self) {
        match self.session.refresh() {
            Ok(count) => {
                tracing::debug!(count, "browser refresh");
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "browser refresh failed");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Draw the toolbar and the current page
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let list: &PrefList = self.session.model();
        let visible = list.filter(&self.view.search).count();
        self.view.scroll = clamp_scroll(self.view.scroll, visible, self.page_size);

        writeln!(
            out,
            "[:r refresh] [:p prev] [:n next] [:c clear] [:q quit]  search: {:?}",
            self.view.search
        )?;
        if let Some(error) = &self.last_error {
            writeln!(out, "error: {}", error)?;
        }

        let first = if visible == 0 { 0 } else { self.view.scroll + 1 };
        let last = self.view.scroll.saturating_add(self.page_size).min(visible);
        writeln!(
            out,
            "{} | showing {}-{} of {} ({} total)",
            self.session.location(),
            first,
            last,
            visible,
            list.len()
        )?;

        if list.is_empty() {
            writeln!(out, "(no preferences)")?;
        } else if visible == 0 {
            writeln!(out, "(no matches)")?;
        }

        let page = list
            .filter(&self.view.search)
            .skip(self.view.scroll)
            .take(self.page_size);
        write_table(out, page)
    }

    /// Run until `:q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            self.render(&mut output)?;
            write!(output, "> ")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(());
            }
            // invalid UTF-8 from the terminal becomes U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim_end_matches(['\r', '\n']);
            if self.handle(trimmed) == Action::Quit {
                return Ok(());
            }
        }
    }
}

/// Keep the scroll offset inside the filtered list, snapped to a page start
fn clamp_scroll(scroll: usize, visible: usize, page_size: usize) -> usize {
    if visible == 0 {
        0
    } else if scroll >= visible {
        (visible - 1) / page_size * page_size
    } else {
        scroll
    }
}
