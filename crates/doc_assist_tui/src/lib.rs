//! Terminal UI for the RAG document assistant: one screen with an upload
//! card, the uploaded-document list, a question box, and the answer panel
//! with its sources.

pub mod app;
pub mod logging;
pub mod ui;
