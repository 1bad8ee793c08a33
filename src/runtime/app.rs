use crate::form::{MovieForm, SubmitOutcome};
use crate::runtime::command::Command;
use crate::terminal::KeyEvent;

/// Terminal-independent session state: routes keys to commands and
/// commands to the form.
pub struct App {
    form: MovieForm,
    exit_after_submit: bool,
    should_exit: bool,
    added: usize,
}

impl App {
    pub fn new(form: MovieForm) -> Self {
        Self {
            form,
            exit_after_submit: false,
            should_exit: false,
            added: 0,
        }
    }

    pub fn exit_after_submit(mut self, enabled: bool) -> Self {
        self.exit_after_submit = enabled;
        self
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn added(&self) -> usize {
        self.added
    }

    /// Returns whether the screen needs redrawing.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.process_command(Command::from_key(key))
    }

    pub fn process_command(&mut self, command: Command) -> bool {
        if command == Command::Exit {
            tracing::debug!("exit requested");
            self.should_exit = true;
            return false;
        }

        let update = self.form.handle_command(command);
        if update.outcome == Some(SubmitOutcome::Added) {
            self.added += 1;
            tracing::debug!(added = self.added, "record accepted");
            if self.exit_after_submit {
                self.should_exit = true;
            }
        }
        update.render
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::form::{FieldName, MovieForm, MovieRecord};
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::plain(code))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn channel_app() -> (App, mpsc::Receiver<MovieRecord>) {
        let (tx, rx) = mpsc::channel();
        let form = MovieForm::new(move |record| {
            let _ = tx.send(record);
        });
        (App::new(form), rx)
    }

    #[test]
    fn keyboard_session_adds_a_movie() {
        let (mut app, rx) = channel_app();
        type_text(&mut app, "Inception");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "https://img");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "https://imdb");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "tt1");
        press(&mut app, KeyCode::Tab);
        assert!(app.form().submit_enabled());
        press(&mut app, KeyCode::Enter);

        let record = rx.try_recv().expect("record");
        assert_eq!(record.title, "Inception");
        assert_eq!(record.description, "");
        assert_eq!(record.imdb_id, "tt1");
        assert!(rx.try_recv().is_err());
        assert_eq!(app.added(), 1);
        assert!(!app.should_exit());
        for field in FieldName::ALL {
            assert_eq!(app.form().value(field), "");
        }
    }

    #[test]
    fn once_mode_exits_after_first_record() {
        let (app, _rx) = channel_app();
        let mut app = app.exit_after_submit(true);
        for (field, value) in [
            (FieldName::Title, "Inception"),
            (FieldName::ImgUrl, "https://img"),
            (FieldName::ImdbUrl, "https://imdb"),
            (FieldName::ImdbId, "tt1"),
        ] {
            app.form.change(field, value);
        }
        app.handle_key(KeyEvent::ctrl(KeyCode::Char('s')));
        assert!(app.should_exit());
    }

    #[test]
    fn rejected_submit_does_not_count() {
        let (mut app, rx) = channel_app();
        app.handle_key(KeyEvent::ctrl(KeyCode::Char('s')));
        assert_eq!(app.added(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn escape_and_ctrl_c_exit() {
        let (mut app, _rx) = channel_app();
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(app.should_exit());

        let (mut app, _rx) = channel_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_exit());
    }

    #[test]
    fn shift_tab_walks_backwards_and_touches() {
        let (mut app, _rx) = channel_app();
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(app.form().touched(FieldName::Title));
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(!app.form().touched(FieldName::ImdbId));
        app.handle_key(KeyEvent::plain(KeyCode::Up));
        assert!(app.form().touched(FieldName::ImdbId));
    }
}
