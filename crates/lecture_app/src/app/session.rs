use std::collections::VecDeque;
use std::io::{self, Write};

use lecture_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::render::Renderer;

/// Drives the update loop: message in, state out, effects executed, follow-up
/// messages fed back until the queue drains.
pub struct Session<O: Write, E: Write> {
    state: AppState,
    runner: EffectRunner,
    renderer: Renderer<O, E>,
}

impl<O: Write, E: Write> Session<O, E> {
    pub fn new(state: AppState, runner: EffectRunner, renderer: Renderer<O, E>) -> Self {
        Self {
            state,
            runner,
            renderer,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&mut self) -> &mut Renderer<O, E> {
        &mut self.renderer
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            if self.state.consume_dirty() {
                // Render before running effects so "Processing..." shows while we wait.
                self.renderer.render(&self.state.view())?;
            }
            inbox.extend(self.runner.run(effects));
        }
        Ok(())
    }

    pub fn show(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.renderer.show(&view)
    }

    #[cfg(test)]
    pub fn into_renderer(self) -> Renderer<O, E> {
        self.renderer
    }
}
