use crate::app::Model;
use crate::sample;

/// Events from the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The editor now holds this text
    SourceEdited(String),
    /// Editor emptied
    Cleared,
    /// Editor reset to the welcome document
    ResetToSample,
}

/// Apply a message. Every message triggers one full compile and sanitize pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::SourceEdited(source) => model.replace_source(source),
        Message::Cleared => model.replace_source(String::new()),
        Message::ResetToSample => model.replace_source(sample::WELCOME.to_string()),
    }
    model
}
