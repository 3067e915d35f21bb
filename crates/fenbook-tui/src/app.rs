use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use fenbook_client::{RenderClient, SubmissionController, SubmissionOutcome};
use fenbook_core::{AppConfig, FenbookError, FenbookResult, InputState, SelectionState};
use fenbook_domain::{
    build_payload, parse_import, ColorValue, DiagramCollection, DiagramId, RenderOptions,
    RichColor,
};

use crate::drag::{DragReorderController, RowBounds};
use crate::events::{Event, EventHandler};
use crate::notice::Notice;
use crate::ui;

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditFen,
    EditCaption,
    EditTitle,
    Import,
    Options,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub collection: DiagramCollection,
    pub options: RenderOptions,
    pub selection: SelectionState,
    pub drag: DragReorderController,
    pub notice: Option<Notice>,
    /// Geometry of the rows drawn on the last frame; the drag controller
    /// resolves pointer positions against it.
    pub list_rows: Vec<RowBounds>,
    pub output_path: PathBuf,
    pub board_theme: usize,
    controller: Arc<SubmissionController<RenderClient>>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl App {
    pub fn new(config: &AppConfig) -> FenbookResult<Self> {
        let client = RenderClient::new(config.effective_site_url())
            .map_err(|e| FenbookError::Internal(e.to_string()))?;
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let mut selection = SelectionState::new();
        selection.set(Some(0));

        Ok(Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            collection: DiagramCollection::new(),
            options: RenderOptions::default(),
            selection,
            drag: DragReorderController::new(),
            notice: None,
            list_rows: Vec::new(),
            output_path: PathBuf::from(config.effective_default_output()),
            board_theme: 0,
            controller: Arc::new(SubmissionController::new(client)),
            outcome_tx,
            outcome_rx,
        })
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    pub async fn run(&mut self) -> FenbookResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            tokio::select! {
                event = events.next() => {
                    match event {
                        Some(Event::Key(key)) => self.handle_key_event(key),
                        Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse),
                        Some(Event::Tick) => {}
                        None => break,
                    }
                }
                Some(outcome) = self.outcome_rx.recv() => {
                    self.handle_outcome(outcome);
                }
            }

            self.expire_notice();
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.is_expired(NOTICE_TTL) {
                self.notice = None;
            }
        }
    }

    fn selected_id(&self) -> Option<DiagramId> {
        self.selection
            .get()
            .and_then(|idx| self.collection.records().get(idx))
            .map(|record| record.id)
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Options => self.handle_options_key(key),
            AppMode::Import => self.handle_import_key(key),
            AppMode::EditFen | AppMode::EditCaption | AppMode::EditTitle => {
                self.handle_edit_key(key)
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(self.collection.len()),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            KeyCode::Char('a') => {
                self.collection.add(String::new(), String::new());
                self.selection.set(Some(self.collection.len() - 1));
                self.input.clear();
                self.mode = AppMode::EditFen;
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.collection.remove(id);
                    self.selection.clamp(self.collection.len());
                }
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_id() {
                    if let Some(record) = self.collection.get(id) {
                        self.input.set(record.fen.clone());
                        self.mode = AppMode::EditFen;
                    }
                }
            }
            KeyCode::Char('c') => {
                if let Some(id) = self.selected_id() {
                    if let Some(record) = self.collection.get(id) {
                        self.input.set(record.description.clone());
                        self.mode = AppMode::EditCaption;
                    }
                }
            }
            KeyCode::Char('t') => {
                self.input.set(self.options.title.clone());
                self.mode = AppMode::EditTitle;
            }
            KeyCode::Char('i') => {
                self.input.clear();
                self.mode = AppMode::Import;
            }
            KeyCode::Char('o') => self.mode = AppMode::Options,
            KeyCode::Char('J') => self.move_selected(1),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('g') => self.start_submission(),
            _ => {}
        }
    }

    /// Keyboard fallback for reordering; one step up or down.
    fn move_selected(&mut self, delta: i64) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(current) = self.collection.index_of(id) else {
            return;
        };
        let target = current as i64 + delta;
        let target = target.clamp(0, i64::MAX) as usize;
        self.collection.reorder(id, target);
        self.selection.set(self.collection.index_of(id));
    }

    fn handle_options_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('q') => self.mode = AppMode::Normal,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.options.diagrams_per_page += 1;
            }
            KeyCode::Char('-') => {
                self.options.diagrams_per_page = self.options.diagrams_per_page.max(2) - 1;
            }
            KeyCode::Char('p') => self.options.padding += 0.5,
            KeyCode::Char('P') => self.options.padding = (self.options.padding - 0.5).max(0.0),
            KeyCode::Char('1') => {
                self.options.show_turn_indicator = !self.options.show_turn_indicator;
            }
            KeyCode::Char('2') => {
                self.options.show_page_numbers = !self.options.show_page_numbers;
            }
            KeyCode::Char('3') => {
                self.options.show_coordinates = !self.options.show_coordinates;
            }
            KeyCode::Char(']') => self.options.single_column_max += 1,
            KeyCode::Char('[') => {
                self.options.single_column_max = self.options.single_column_max.max(2) - 1;
            }
            KeyCode::Char('}') => self.options.two_column_max += 1,
            KeyCode::Char('{') => {
                self.options.two_column_max = self.options.two_column_max.max(2) - 1;
            }
            KeyCode::Char('b') => self.cycle_board_theme(),
            _ => {}
        }
    }

    /// Built-in board themes; the picker itself is outside this editor, so
    /// themes are how rich color values enter the options in the TUI.
    fn cycle_board_theme(&mut self) {
        self.board_theme = (self.board_theme + 1) % 3;
        let (light, dark) = match self.board_theme {
            0 => (
                ColorValue::raw("#f0d9b5"),
                ColorValue::raw("#b58863"),
            ),
            1 => (
                ColorValue::Rich(RichColor::new(0xde, 0xe3, 0xe6)),
                ColorValue::Rich(RichColor::new(0x8c, 0xa2, 0xad)),
            ),
            _ => (
                ColorValue::Rich(RichColor::new(0xff, 0xff, 0xdd)),
                ColorValue::Rich(RichColor::new(0x86, 0xa6, 0x66)),
            ),
        };
        self.options.light_squares = light;
        self.options.dark_squares = dark;
    }

    fn handle_import_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => self.input.push_line(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.commit_import();
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    fn commit_import(&mut self) {
        let entries = parse_import(self.input.as_str());
        let count = entries.len();
        self.collection.replace_all(entries);
        self.selection.set(if count > 0 { Some(0) } else { None });
        self.input.clear();
        self.mode = AppMode::Normal;
        self.notice = Some(if count > 0 {
            Notice::success(format!("Imported {count} diagram(s)"))
        } else {
            Notice::info("Import contained no entries")
        });
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let text = self.input.as_str().to_string();
        match self.mode {
            AppMode::EditFen => {
                if let Some(id) = self.selected_id() {
                    if let Some(record) = self.collection.get_mut(id) {
                        record.update_fen(text);
                    }
                }
            }
            AppMode::EditCaption => {
                if let Some(id) = self.selected_id() {
                    if let Some(record) = self.collection.get_mut(id) {
                        record.update_description(text);
                    }
                }
            }
            AppMode::EditTitle => self.options.title = text,
            _ => {}
        }
        self.input.clear();
        self.mode = AppMode::Normal;
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mode != AppMode::Normal {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(row) = self.row_at(mouse.row) {
                    self.selection.set(self.collection.index_of(row.id));
                    self.drag.drag_start(row.id);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let rows = self.list_rows.clone();
                self.drag.update(mouse.row, &rows);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some((dragged, target)) = self.drag.drag_end() {
                    if let Some(target_index) = self.collection.index_of(target) {
                        self.collection.reorder(dragged, target_index);
                        self.selection.set(self.collection.index_of(dragged));
                    }
                }
            }
            _ => {}
        }
    }

    fn row_at(&self, row: u16) -> Option<RowBounds> {
        self.list_rows.iter().copied().find(|r| r.contains(row))
    }

    fn start_submission(&mut self) {
        if self.controller.is_submitting() {
            self.notice = Some(Notice::info("A submission is already in flight"));
            return;
        }

        let payload = match build_payload(&self.collection, &self.options) {
            Ok(payload) => payload,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return;
            }
        };

        tracing::debug!(diagrams = payload.fens.len(), "spawning submission task");
        let controller = Arc::clone(&self.controller);
        let output = self.output_path.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.submit(&payload, &output).await;
            let _ = tx.send(outcome);
        });
        self.notice = Some(Notice::info("Generating document..."));
    }

    pub fn handle_outcome(&mut self, outcome: SubmissionOutcome) {
        self.notice = Some(match outcome {
            SubmissionOutcome::Saved { path, bytes } => {
                Notice::success(format!("Saved {} ({bytes} bytes)", path.display()))
            }
            SubmissionOutcome::RejectedInFlight => {
                Notice::info("A submission is already in flight")
            }
            SubmissionOutcome::Failed(err) => Notice::error(err.user_message()),
        });
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn test_app() -> App {
        App::new(&AppConfig::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn populate_rows(app: &mut App) {
        app.list_rows = app
            .collection
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| RowBounds {
                id: record.id,
                top: i as u16,
                height: 1,
            })
            .collect();
    }

    #[test]
    fn test_add_then_delete_keeps_selection_valid() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('a')));
        assert_eq!(app.mode, AppMode::EditFen);
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.collection.len(), 2);

        app.handle_key_event(key(KeyCode::Char('d')));
        app.handle_key_event(key(KeyCode::Char('d')));
        assert_eq!(app.collection.len(), 0);
        assert!(app.selection.get().is_none());
    }

    #[test]
    fn test_edit_fen_commits_to_selected_record() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('e')));
        assert_eq!(app.mode, AppMode::EditFen);
        app.input.set("8/8/8/8/8/8/8/8 w - - 0 1".to_string());
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.collection.records()[0].fen, "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_import_replaces_collection() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('i')));
        assert_eq!(app.mode, AppMode::Import);
        app.input.set("a // one\nb".to_string());
        app.handle_key_event(KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.collection.len(), 2);
        assert_eq!(app.collection.records()[0].description, "one");
        assert_eq!(app.selection.get(), Some(0));
    }

    #[test]
    fn test_mouse_drag_reorders_via_collection() {
        let mut app = test_app();
        app.collection.add("second".to_string(), String::new());
        app.collection.add("third".to_string(), String::new());
        populate_rows(&mut app);
        let dragged = app.collection.records()[2].id;

        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2));
        assert!(app.drag.is_dragging());
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 0));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 0));

        assert_eq!(app.collection.index_of(dragged), Some(0));
        assert!(!app.drag.is_dragging());
        assert_eq!(app.selection.get(), Some(0));
    }

    #[test]
    fn test_mouse_release_over_source_changes_nothing() {
        let mut app = test_app();
        app.collection.add("second".to_string(), String::new());
        populate_rows(&mut app);
        let order_before: Vec<_> = app.collection.records().iter().map(|r| r.id).collect();

        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1));
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1));
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1));

        let order_after: Vec<_> = app.collection.records().iter().map(|r| r.id).collect();
        assert_eq!(order_before, order_after);
    }

    #[test]
    fn test_shift_j_moves_selected_down() {
        let mut app = test_app();
        app.collection.add("second".to_string(), String::new());
        let first = app.collection.records()[0].id;

        app.handle_key_event(key(KeyCode::Char('J')));
        assert_eq!(app.collection.index_of(first), Some(1));
        assert_eq!(app.selection.get(), Some(1));
    }

    #[test]
    fn test_options_toggles_and_bounds() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('o')));
        assert_eq!(app.mode, AppMode::Options);

        app.handle_key_event(key(KeyCode::Char('3')));
        assert!(!app.options.show_coordinates);

        for _ in 0..10 {
            app.handle_key_event(key(KeyCode::Char('-')));
        }
        assert_eq!(app.options.diagrams_per_page, 1);

        for _ in 0..20 {
            app.handle_key_event(key(KeyCode::Char('P')));
        }
        assert_eq!(app.options.padding, 0.0);
    }

    #[test]
    fn test_theme_cycle_reaches_rich_colors() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('o')));
        app.handle_key_event(key(KeyCode::Char('b')));
        assert!(matches!(app.options.light_squares, ColorValue::Rich(_)));
    }

    #[test]
    fn test_submission_outcome_sets_notice() {
        let mut app = test_app();
        app.handle_outcome(SubmissionOutcome::Saved {
            path: PathBuf::from("out.pdf"),
            bytes: 42,
        });
        assert!(app.notice.as_ref().unwrap().message.contains("out.pdf"));
    }
}
