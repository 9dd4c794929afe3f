use std::time::Duration;

pub mod error;
pub mod form;
pub mod response;
pub mod state;

pub use error::GenerateError;
pub use form::{FormState, RequestPayload, parse_count};
pub use response::{CaptionResponse, ContentKind, extract_captions, split_captions};
pub use state::{Action, CaptionState, CopyTicket, Submission, UiStatus};

pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub fn submit_label(count: u32) -> &'static str {
    if count > 1 {
        "Generate Captions"
    } else {
        "Generate Caption"
    }
}

pub fn caption_heading(index: usize, total: usize) -> String {
    if total > 1 {
        format!("Caption #{}", index + 1)
    } else {
        "Caption".to_owned()
    }
}
