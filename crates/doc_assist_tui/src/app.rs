//! Application state and the operations that drive it.
//!
//! All UI state lives in [`App`]. Operations spawn tokio tasks that resolve
//! to a [`UiEvent`]; the render loop feeds completed events back through
//! [`App::apply_event`]. Nothing here touches the terminal, so the whole
//! state machine runs headless under test.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use doc_assist_client::{Answer, Client, Document, RequestError};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Completed background request, delivered over the event channel.
#[derive(Debug)]
pub enum UiEvent {
    Documents(Result<Vec<Document>, RequestError>),
    UploadDone(Result<(), RequestError>),
    AnswerReady(Result<Answer, RequestError>),
}

/// Handles shared with every spawned operation: the REST client and the
/// sender side of the event channel. Built once in `main`, passed by
/// reference everywhere else.
pub struct AppContext {
    pub client: Arc<Client>,
    pub events: UnboundedSender<UiEvent>,
}

impl AppContext {
    /// Wrap `client` and open the event channel; returns the receiver the
    /// render loop drains.
    pub fn new(client: Client) -> (Self, UnboundedReceiver<UiEvent>) {
        let (events, rx) = tokio::sync::mpsc::unbounded_channel();
        (
            Self {
                client: Arc::new(client),
                events,
            },
            rx,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Single-slot transient notification. The dismissal deadline travels with
/// the toast: replacing the slot replaces the deadline, so an old toast's
/// expiry can never clear a newer one.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub deadline: Instant,
}

/// Which input currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    File,
    Question,
}

/// Per-operation in-flight flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadingFlags {
    pub upload: bool,
    pub ask: bool,
}

/// Root UI state.
pub struct App {
    pub documents: Vec<Document>,
    /// Path of the file picked for upload; empty means nothing selected.
    pub file: String,
    pub question: String,
    pub answer: Option<Answer>,
    pub loading: LoadingFlags,
    pub toast: Option<Toast>,
    pub focus: Focus,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            file: String::new(),
            question: String::new(),
            answer: None,
            loading: LoadingFlags::default(),
            toast: None,
            focus: Focus::File,
            should_quit: false,
        }
    }
}

impl App {
    /// Put `message` in the toast slot with a fresh dismissal deadline.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            deadline: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop the toast once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now >= toast.deadline)
        {
            self.toast = None;
        }
    }

    /// Fetch the document list. Runs once at startup and again after every
    /// successful upload.
    pub fn fetch_documents(&self, ctx: &AppContext) {
        let client = ctx.client.clone();
        let events = ctx.events.clone();
        tokio::spawn(async move {
            let result = client.list_documents().await;
            let _ = events.send(UiEvent::Documents(result));
        });
    }

    /// Upload the selected file, unless nothing is selected. The file is
    /// read from disk inside the task; a read failure is an upload failure.
    pub fn request_upload(&mut self, ctx: &AppContext) {
        if self.loading.upload {
            return;
        }
        if self.file.trim().is_empty() {
            self.show_toast("Please select a file first", ToastKind::Error);
            return;
        }
        self.loading.upload = true;
        let path = PathBuf::from(self.file.trim());
        let client = ctx.client.clone();
        let events = ctx.events.clone();
        tokio::spawn(async move {
            let result = client.upload_file(&path).await;
            let _ = events.send(UiEvent::UploadDone(result));
        });
    }

    /// Ask the current question, unless it is blank. The previous answer is
    /// cleared for the duration of the request.
    pub fn request_ask(&mut self, ctx: &AppContext) {
        if self.loading.ask {
            return;
        }
        let question = self.question.trim().to_string();
        if question.is_empty() {
            self.show_toast("Please enter a question", ToastKind::Error);
            return;
        }
        self.loading.ask = true;
        self.answer = None;
        let client = ctx.client.clone();
        let events = ctx.events.clone();
        tokio::spawn(async move {
            let result = client.ask(&question).await;
            let _ = events.send(UiEvent::AnswerReady(result));
        });
    }

    /// Fold a completed request back into the state.
    pub fn apply_event(&mut self, ctx: &AppContext, event: UiEvent) {
        match event {
            UiEvent::Documents(Ok(documents)) => {
                self.documents = documents;
            }
            UiEvent::Documents(Err(err)) => {
                tracing::warn!(%err, "document listing failed");
                self.documents.clear();
                self.show_toast("Failed to load documents", ToastKind::Error);
            }
            UiEvent::UploadDone(Ok(())) => {
                self.loading.upload = false;
                self.file.clear();
                self.show_toast("Document uploaded successfully", ToastKind::Success);
                self.fetch_documents(ctx);
            }
            UiEvent::UploadDone(Err(err)) => {
                tracing::warn!(%err, "upload failed");
                self.loading.upload = false;
                self.show_toast("Upload failed", ToastKind::Error);
            }
            UiEvent::AnswerReady(Ok(answer)) => {
                self.loading.ask = false;
                self.answer = Some(answer);
            }
            UiEvent::AnswerReady(Err(err)) => {
                tracing::warn!(%err, "ask failed");
                self.loading.ask = false;
                self.show_toast("Failed to get answer", ToastKind::Error);
            }
        }
    }

    /// Apply one key event from the terminal.
    pub fn handle_key(&mut self, ctx: &AppContext, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::File => Focus::Question,
                    Focus::Question => Focus::File,
                };
            }
            KeyCode::Enter => match self.focus {
                Focus::File => self.request_upload(ctx),
                Focus::Question => self.request_ask(ctx),
            },
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
            }
            KeyCode::Char(c) => {
                self.focused_field_mut().push(c);
            }
            _ => {}
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::File => &mut self.file,
            Focus::Question => &mut self.question,
        }
    }
}
