//! Document editor with a line-oriented text mode and a raw block-JSON mode.
//!
//! The text is the single source of truth. The JSON mode shows its encoding
//! and feeds valid edits back through [`codec::decode_blocks`]; a malformed
//! edit is kept on screen with an error and blocks saving until it is fixed
//! or the editor goes back to text mode.

use dioxus::prelude::*;
use domain::{codec, Document, DocumentPatch};

use crate::modal::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Simple,
    Json,
}

/// Editable copy of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDraft {
    pub title: String,
    pub icon: String,
    pub text: String,
    mode: EditorMode,
    raw_json: String,
    json_error: Option<String>,
}

impl EditorDraft {
    pub fn from_document(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            icon: document.icon.clone(),
            text: codec::decode(&document.content),
            mode: EditorMode::Simple,
            raw_json: String::new(),
            json_error: None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn raw_json(&self) -> &str {
        &self.raw_json
    }

    pub fn json_error(&self) -> Option<&str> {
        self.json_error.as_deref()
    }

    /// Switch modes. Entering JSON mode shows the encoded text; leaving it
    /// discards any pending raw edit, valid or not.
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.raw_json = match mode {
            EditorMode::Json => codec::encode(&self.text),
            EditorMode::Simple => String::new(),
        };
        self.json_error = None;
        self.mode = mode;
    }

    /// Take a raw JSON edit. The text follows only when the edit is an object
    /// with a `blocks` array.
    pub fn edit_json(&mut self, raw: String) {
        self.json_error = if !codec::is_well_formed(&raw) {
            Some("Invalid JSON".to_string())
        } else if let Some(document) = codec::parse(&raw) {
            self.text = codec::decode_blocks(&document.blocks);
            None
        } else {
            Some("JSON must be an object with a \"blocks\" array".to_string())
        };
        self.raw_json = raw;
    }

    /// The update to send, or the reason it cannot be sent.
    pub fn to_patch(&self) -> Result<DocumentPatch, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if let Some(e) = &self.json_error {
            return Err(e.clone());
        }
        Ok(DocumentPatch {
            title: Some(self.title.trim().to_string()),
            icon: Some(self.icon.trim().to_string()),
            content: Some(codec::encode(&self.text)),
        })
    }
}

#[component]
pub fn DocumentEditor(
    document: Document,
    #[props(default)] saving: bool,
    on_save: EventHandler<DocumentPatch>,
) -> Element {
    let mut draft = use_signal({
        let initial = EditorDraft::from_document(&document);
        move || initial
    });
    let mut error = use_signal(|| Option::<String>::None);

    // Reset when a new revision of the document arrives (after a save).
    let mut seen = use_signal(|| document.clone());
    if *seen.peek() != document {
        seen.set(document.clone());
        draft.set(EditorDraft::from_document(&document));
        error.set(None);
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft.read().to_patch() {
            Ok(patch) => {
                error.set(None);
                on_save.call(patch);
            }
            Err(e) => {
                tracing::debug!(reason = %e, "document save blocked");
                error.set(Some(e));
            }
        }
    };

    let handle_undo = move |_| {
        draft.set(EditorDraft::from_document(&seen.read()));
        error.set(None);
    };

    let EditorDraft { title, icon, text, mode, raw_json, json_error } = draft();
    let mode_class = |m: EditorMode| if mode == m { "btn btn-primary" } else { "btn btn-outline" };

    rsx! {
        form {
            class: "editor-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                Notice { message: err }
            }

            label { class: "field-label", r#for: "doc-title", "Title" }
            input {
                id: "doc-title",
                class: "input",
                r#type: "text",
                value: "{title}",
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }

            label { class: "field-label", r#for: "doc-icon", "Icon (emoji)" }
            input {
                id: "doc-icon",
                class: "input",
                r#type: "text",
                value: "{icon}",
                oninput: move |evt: FormEvent| draft.write().icon = evt.value(),
            }

            div {
                class: "flex gap-2 my-4",
                button {
                    r#type: "button",
                    class: mode_class(EditorMode::Simple),
                    onclick: move |_| draft.write().set_mode(EditorMode::Simple),
                    "Simple editor"
                }
                button {
                    r#type: "button",
                    class: mode_class(EditorMode::Json),
                    onclick: move |_| draft.write().set_mode(EditorMode::Json),
                    "JSON editor"
                }
            }

            if mode == EditorMode::Simple {
                textarea {
                    class: "input editor-text",
                    rows: "15",
                    placeholder: "Write here. Start a line with # for a heading or ## for a subheading.",
                    value: "{text}",
                    oninput: move |evt: FormEvent| draft.write().text = evt.value(),
                }
            } else {
                textarea {
                    class: "input editor-json",
                    rows: "15",
                    value: "{raw_json}",
                    oninput: move |evt: FormEvent| draft.write().edit_json(evt.value()),
                }
                if let Some(err) = json_error {
                    small { class: "field-error", "{err}" }
                }
            }

            div {
                class: "flex gap-2 mt-5",
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: saving,
                    if saving { "Saving..." } else { "Save changes" }
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: handle_undo,
                    "Undo changes"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(content: &str) -> Document {
        Document {
            id: "d-1".to_string(),
            workspace_id: "ws-1".to_string(),
            title: "Plan".to_string(),
            icon: "📝".to_string(),
            content: content.to_string(),
            created_by_user_id: "u-1".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn test_draft_starts_from_decoded_content() {
        let draft = EditorDraft::from_document(&document(&codec::encode("# Goals\nShip it")));
        assert_eq!(draft.text, "# Goals\n\n\nShip it\n");
        assert_eq!(draft.mode(), EditorMode::Simple);
    }

    #[test]
    fn test_json_mode_round_trips_through_text() {
        let mut draft = EditorDraft::from_document(&document(""));
        draft.text = "# Title\nBody".to_string();
        draft.set_mode(EditorMode::Json);
        assert_eq!(draft.raw_json(), codec::encode("# Title\nBody"));

        draft.edit_json(r#"{"blocks":[{"type":"subheading","content":"Sub"}]}"#.to_string());
        assert_eq!(draft.json_error(), None);
        assert_eq!(draft.text, "Sub\n");
    }

    #[test]
    fn test_invalid_json_blocks_save_and_keeps_text() {
        let mut draft = EditorDraft::from_document(&document(""));
        draft.text = "Keep me".to_string();
        draft.set_mode(EditorMode::Json);

        draft.edit_json("{\"blocks\": [".to_string());
        assert_eq!(draft.json_error(), Some("Invalid JSON"));
        assert_eq!(draft.text, "Keep me");
        assert_eq!(draft.to_patch(), Err("Invalid JSON".to_string()));

        draft.edit_json("[1, 2]".to_string());
        assert!(draft.json_error().unwrap().contains("blocks"));

        draft.set_mode(EditorMode::Json);
        assert!(draft.to_patch().is_ok());
    }

    #[test]
    fn test_object_without_blocks_is_rejected() {
        let mut draft = EditorDraft::from_document(&document(""));
        draft.text = "Keep me".to_string();
        draft.set_mode(EditorMode::Json);

        for raw in [r#"{"foo": 1}"#, "{}", r#"{"blocks": "nope"}"#] {
            draft.edit_json(raw.to_string());
            assert_eq!(
                draft.json_error(),
                Some("JSON must be an object with a \"blocks\" array")
            );
            assert_eq!(draft.text, "Keep me");
        }
    }

    #[test]
    fn test_leaving_json_mode_drops_pending_error() {
        let mut draft = EditorDraft::from_document(&document(""));
        draft.text = "Keep me".to_string();
        draft.set_mode(EditorMode::Json);
        draft.edit_json("{".to_string());
        assert_eq!(draft.to_patch(), Err("Invalid JSON".to_string()));

        draft.set_mode(EditorMode::Simple);
        assert_eq!(draft.json_error(), None);
        assert_eq!(draft.raw_json(), "");
        let patch = draft.to_patch().unwrap();
        assert_eq!(patch.content, Some(codec::encode("Keep me")));
    }

    #[test]
    fn test_patch_requires_title_and_encodes_text() {
        let mut draft = EditorDraft::from_document(&document(""));
        draft.title = "   ".to_string();
        assert_eq!(draft.to_patch(), Err("Title is required".to_string()));

        draft.title = " Plan B ".to_string();
        draft.text = "## Risks\nNone".to_string();
        let patch = draft.to_patch().unwrap();
        assert_eq!(patch.title.as_deref(), Some("Plan B"));
        assert_eq!(patch.content, Some(codec::encode("## Risks\nNone")));
    }
}
