use crate::runtime::app::App;
use crate::terminal::{Terminal, TerminalEvent};
use crate::ui::renderer::Renderer;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(120);

pub struct Runtime {
    app: App,
    terminal: Terminal,
    renderer: Renderer,
}

impl Runtime {
    pub fn new(app: App, terminal: Terminal) -> Self {
        Self {
            app,
            terminal,
            renderer: Renderer::default(),
        }
    }

    /// Runs until the app asks to exit and returns how many records were
    /// added. The terminal is restored even when the loop fails.
    pub fn run(&mut self) -> io::Result<usize> {
        self.terminal.enter()?;

        let run_result = (|| -> io::Result<()> {
            self.render()?;
            while !self.app.should_exit() {
                let event = self.terminal.poll_event(POLL_INTERVAL)?;
                self.dispatch(event)?;
            }
            Ok(())
        })();

        let exit_result = self.terminal.exit();
        run_result.and(exit_result)?;
        Ok(self.app.added())
    }

    fn dispatch(&mut self, event: TerminalEvent) -> io::Result<()> {
        match event {
            TerminalEvent::Resize(size) => {
                self.terminal.set_size(size);
                self.render()
            }
            TerminalEvent::Key(key) => {
                if self.app.handle_key(key) {
                    self.render()?;
                }
                Ok(())
            }
            TerminalEvent::Idle => Ok(()),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let form = self.app.form();
        let frame = self.renderer.render(&form.view(), form.caret());
        self.terminal.render_frame(&frame)
    }
}
