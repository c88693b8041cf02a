pub mod editor;

pub use editor::{
    EditorMode, EditorPhase, LoadOutcome, Notice, ProductEditor, SaveAction, SubmitOutcome,
    SubmitRequest, DEFAULT_LISTING_PATH,
};
