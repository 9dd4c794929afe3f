//! The page's whole UI state as one record, updated only through [`CaptionState::reduce`].

use crate::{FormState, GenerateError, parse_count};

/// Identifies one submission. Outcomes of superseded submissions are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission(u64);

/// Identifies the copy feedback a pending auto-clear belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditKeyword(String),
    EditCount(String),
    EditWordCount(String),
    SubmitStarted,
    SubmitSucceeded {
        submission: Submission,
        captions: Vec<String>,
    },
    SubmitFailed {
        submission: Submission,
        error: GenerateError,
    },
    CopySucceeded {
        submission: Submission,
        index: usize,
    },
    CopyExpired {
        ticket: CopyTicket,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiStatus {
    Idle,
    Loading,
    Error(String),
    Success(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionState {
    pub form: FormState,
    pub is_loading: bool,
    pub error: Option<String>,
    pub captions: Vec<String>,
    pub copied_index: Option<usize>,
    submission: Submission,
    copy_ticket: CopyTicket,
}

impl CaptionState {
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::EditKeyword(keyword) => Self {
                form: FormState {
                    keyword,
                    ..self.form
                },
                ..self
            },
            Action::EditCount(raw) => Self {
                form: FormState {
                    count: parse_count(&raw),
                    ..self.form
                },
                ..self
            },
            Action::EditWordCount(raw) => Self {
                form: FormState {
                    word_count: parse_count(&raw),
                    ..self.form
                },
                ..self
            },
            Action::SubmitStarted => Self {
                is_loading: true,
                error: None,
                captions: Vec::new(),
                copied_index: None,
                submission: Submission(self.submission.0 + 1),
                copy_ticket: CopyTicket(self.copy_ticket.0 + 1),
                ..self
            },
            Action::SubmitSucceeded {
                submission,
                captions,
            } if submission == self.submission => Self {
                is_loading: false,
                captions,
                ..self
            },
            Action::SubmitFailed { submission, error } if submission == self.submission => Self {
                is_loading: false,
                error: Some(error.user_message().to_owned()),
                captions: Vec::new(),
                ..self
            },
            Action::SubmitSucceeded { .. } | Action::SubmitFailed { .. } => self,
            Action::CopySucceeded { submission, index }
                if submission == self.submission
                    && !self.is_loading
                    && index < self.captions.len() =>
            {
                Self {
                    copied_index: Some(index),
                    copy_ticket: CopyTicket(self.copy_ticket.0 + 1),
                    ..self
                }
            }
            Action::CopySucceeded { .. } => self,
            Action::CopyExpired { ticket } if ticket == self.copy_ticket => Self {
                copied_index: None,
                ..self
            },
            Action::CopyExpired { .. } => self,
        }
    }

    /// Ticket of the most recent [`Action::SubmitStarted`].
    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Ticket of the most recent accepted [`Action::CopySucceeded`].
    pub fn copy_ticket(&self) -> CopyTicket {
        self.copy_ticket
    }

    pub fn status(&self) -> UiStatus {
        if self.is_loading {
            UiStatus::Loading
        } else if let Some(message) = &self.error {
            UiStatus::Error(message.clone())
        } else if !self.captions.is_empty() {
            UiStatus::Success(self.captions.clone())
        } else {
            UiStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ContentKind, error::USER_MESSAGE, extract_captions};

    fn started(state: CaptionState) -> (CaptionState, Submission) {
        let state = state.reduce(Action::SubmitStarted);
        let submission = state.submission();
        (state, submission)
    }

    fn copied(state: CaptionState, index: usize) -> CaptionState {
        let submission = state.submission();
        state.reduce(Action::CopySucceeded { submission, index })
    }

    fn with_captions(captions: &[&str]) -> CaptionState {
        let (state, submission) = started(CaptionState::default());
        state.reduce(Action::SubmitSucceeded {
            submission,
            captions: captions.iter().map(|c| c.to_string()).collect(),
        })
    }

    #[test]
    fn fresh_state_is_idle() {
        assert_eq!(CaptionState::default().status(), UiStatus::Idle);
    }

    #[test]
    fn edits_update_the_form() {
        let state = CaptionState::default()
            .reduce(Action::EditKeyword("coffee".into()))
            .reduce(Action::EditCount("2".into()))
            .reduce(Action::EditWordCount("thirty".into()));
        assert_eq!(
            state.form,
            FormState {
                keyword: "coffee".into(),
                count: 2,
                word_count: 0,
            }
        );
    }

    #[test]
    fn submit_clears_previous_outcome() {
        let state = copied(with_captions(&["old"]), 0).reduce(Action::SubmitStarted);
        assert_eq!(state.status(), UiStatus::Loading);
        assert!(state.captions.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.copied_index, None);
    }

    #[test]
    fn form_survives_submissions() {
        let state = CaptionState::default().reduce(Action::EditKeyword("tea".into()));
        let (state, submission) = started(state);
        let state = state.reduce(Action::SubmitFailed {
            submission,
            error: GenerateError::EmptyResult,
        });
        assert_eq!(state.form.keyword, "tea");
    }

    #[test]
    fn end_to_end_two_captions() {
        let state = CaptionState::default()
            .reduce(Action::EditKeyword("coffee".into()))
            .reduce(Action::EditCount("2".into()))
            .reduce(Action::EditWordCount("30".into()));
        let (state, submission) = started(state);
        let captions = extract_captions(
            ContentKind::Text,
            "Great morning coffee.\n\nStart your day right.",
        )
        .unwrap();
        let state = state.reduce(Action::SubmitSucceeded {
            submission,
            captions,
        });
        assert_eq!(
            state.status(),
            UiStatus::Success(vec![
                "Great morning coffee.".to_owned(),
                "Start your day right.".to_owned(),
            ])
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn request_failure_shows_generic_error_and_no_captions() {
        let (state, submission) = started(CaptionState::default());
        let state = state.reduce(Action::SubmitFailed {
            submission,
            error: GenerateError::Status { status: 500 },
        });
        assert_eq!(state.status(), UiStatus::Error(USER_MESSAGE.to_owned()));
        assert!(state.captions.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn whitespace_response_ends_in_error() {
        let (state, submission) = started(CaptionState::default());
        let error = extract_captions(ContentKind::Text, "   \n\n\n").unwrap_err();
        let state = state.reduce(Action::SubmitFailed { submission, error });
        assert_eq!(state.status(), UiStatus::Error(USER_MESSAGE.to_owned()));
        assert!(state.captions.is_empty());
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let (state, first) = started(CaptionState::default());
        let (state, second) = started(state);
        let state = state.reduce(Action::SubmitSucceeded {
            submission: first,
            captions: vec!["late".into()],
        });
        assert_eq!(state.status(), UiStatus::Loading);

        let state = state.reduce(Action::SubmitSucceeded {
            submission: second,
            captions: vec!["fresh".into()],
        });
        assert_eq!(state.status(), UiStatus::Success(vec!["fresh".into()]));
    }

    #[test]
    fn copy_feedback_clears_on_expiry() {
        let state = copied(with_captions(&["a", "b"]), 0);
        assert_eq!(state.copied_index, Some(0));

        let ticket = state.copy_ticket();
        let state = state.reduce(Action::CopyExpired { ticket });
        assert_eq!(state.copied_index, None);
    }

    #[test]
    fn earlier_expiry_does_not_clear_a_later_copy() {
        let state = copied(with_captions(&["a", "b"]), 0);
        let first = state.copy_ticket();
        let state = copied(state, 1);

        let state = state.reduce(Action::CopyExpired { ticket: first });
        assert_eq!(state.copied_index, Some(1));
    }

    #[test]
    fn copy_finishing_after_a_new_submit_is_dropped() {
        let state = with_captions(&["a", "b"]);
        let clicked_during = state.submission();
        let ticket = state.copy_ticket();

        let (state, submission) = started(state);
        let state = state.reduce(Action::CopySucceeded {
            submission: clicked_during,
            index: 1,
        });
        assert_eq!(state.copied_index, None);
        assert_ne!(state.copy_ticket(), ticket);
        let after_start = state.copy_ticket();

        let state = state.reduce(Action::SubmitSucceeded {
            submission,
            captions: vec!["x".into(), "y".into()],
        });
        assert_eq!(state.copied_index, None);
        assert_eq!(state.copy_ticket(), after_start);
    }

    #[test]
    fn copy_is_ignored_while_loading_or_out_of_range() {
        let (loading, _) = started(with_captions(&["a"]));
        assert_eq!(copied(loading, 0).copied_index, None);

        let state = with_captions(&["a"]);
        let ticket = state.copy_ticket();
        let state = copied(state, 3);
        assert_eq!(state.copied_index, None);
        assert_eq!(state.copy_ticket(), ticket);
    }

    #[test]
    fn copy_feedback_does_not_change_status() {
        let state = with_captions(&["a"]);
        let before = state.status();
        let state = copied(state, 0);
        assert_eq!(state.status(), before);
    }
}
