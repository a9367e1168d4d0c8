use std::io::Write;

use anyhow::Context;
use menugen_core::{aggregate, sample_menu};
use rand::Rng;

use crate::command::{Command, CommandSource};
use crate::render::{self, GOODBYE, INVALID_INPUT, PROMPT};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Rendering,
    Terminated,
}

/// Tally of one interactive session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub menus_generated: usize,
    pub sampling_failures: usize,
    pub invalid_inputs: usize,
}

/// Prompt, generate, print, repeat until the user says no
pub struct Session<'a, C, R, W> {
    state: &'a AppState,
    commands: C,
    rng: R,
    out: W,
    summary: SessionSummary,
}

impl<'a, C, R, W> Session<'a, C, R, W>
where
    C: CommandSource,
    R: Rng,
    W: Write,
{
    pub fn new(state: &'a AppState, commands: C, rng: R, out: W) -> Self {
        Self {
            state,
            commands,
            rng,
            out,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(mut self) -> anyhow::Result<SessionSummary> {
        let mut state = SessionState::AwaitingCommand;
        while state != SessionState::Terminated {
            state = self.step(state)?;
        }
        self.out.flush().context("failed to flush output")?;
        Ok(self.summary)
    }

    /// Advance the state machine by one transition
    pub fn step(&mut self, state: SessionState) -> anyhow::Result<SessionState> {
        let next = match state {
            SessionState::AwaitingCommand => self.await_command()?,
            SessionState::Rendering => {
                self.generate()?;
                SessionState::AwaitingCommand
            }
            SessionState::Terminated => SessionState::Terminated,
        };
        tracing::trace!("session {:?} -> {:?}", state, next);
        Ok(next)
    }

    fn await_command(&mut self) -> anyhow::Result<SessionState> {
        write!(self.out, "{PROMPT}").context("failed to write prompt")?;
        self.out.flush().context("failed to flush prompt")?;

        let Some(input) = self
            .commands
            .next_command()
            .context("failed to read answer")?
        else {
            tracing::debug!("input exhausted, ending session");
            writeln!(self.out, "\n{GOODBYE}")?;
            return Ok(SessionState::Terminated);
        };

        match Command::parse(&input) {
            Command::Generate => Ok(SessionState::Rendering),
            Command::Quit => {
                writeln!(self.out, "{GOODBYE}")?;
                Ok(SessionState::Terminated)
            }
            Command::Invalid(answer) => {
                tracing::debug!("unrecognized answer: {:?}", answer);
                self.summary.invalid_inputs += 1;
                writeln!(self.out, "{INVALID_INPUT}")?;
                Ok(SessionState::AwaitingCommand)
            }
        }
    }

    fn generate(&mut self) -> anyhow::Result<()> {
        let state = self.state;
        let catalog = &state.catalog;
        let days = state.config.menu.days_per_menu;

        let menu = match sample_menu(catalog, days, &mut self.rng) {
            Ok(menu) => menu,
            Err(e) => {
                tracing::debug!("menu request failed: {e:?}");
                self.summary.sampling_failures += 1;
                writeln!(self.out, "Error: {e}")?;
                return Ok(());
            }
        };
        tracing::debug!("menu: {:?}", menu.dishes());

        let list = aggregate(&menu, catalog);
        render::render_menu(&mut self.out, &menu, catalog)?;
        render::render_shopping_list(&mut self.out, &list)?;

        self.summary.menus_generated += 1;
        Ok(())
    }
}
