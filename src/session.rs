//! Session state for the shortener client.
//!
//! All client-observable state lives in [`SessionState`]: the draft URL,
//! the most recent result, the bounded history, the pending flag, the
//! last error, and the copy acknowledgment. Transitions are pure methods
//! so the whole submit/copy lifecycle can be unit tested without a
//! terminal, a network, or a clipboard.

use serde::Serialize;

/// Maximum number of history entries kept (oldest are dropped).
pub const HISTORY_LIMIT: usize = 5;

/// How long a "Copied ✓" acknowledgment stays visible.
pub const COPY_ACK_MS: u64 = 1500;

pub const MSG_EMPTY_URL: &str = "Please enter a valid URL";
pub const MSG_BACKEND_FAILED: &str = "Backend connection failed";
pub const MSG_COPY_FAILED: &str = "Copy failed";

/// The most recent successful conversion. `short` is the full
/// displayable URL (`<base>/<token>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenResult {
    pub original: String,
    pub short: String,
}

/// One history row. Unlike [`ShortenResult`], `short` holds the raw
/// response body token, exactly as received from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub original: String,
    pub short: String,
}

/// Which displayed row most recently had its text copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyTarget {
    /// The primary result row.
    Main,
    /// A history row, by ordinal index (0 = most recent).
    History(usize),
}

/// Outcome of a submit trigger, decided before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDisposition {
    /// A request is already outstanding; the trigger is inert.
    AlreadyPending,
    /// The trimmed draft was empty; a validation error was set.
    EmptyDraft,
    /// A request should be issued carrying this candidate URL.
    Started { url: String },
}

/// The serializable session state record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    /// Current text of the URL input field.
    pub draft: String,
    /// Most recent successful conversion, replaced wholesale.
    pub result: Option<ShortenResult>,
    /// Recent conversions, most-recent-first, length <= HISTORY_LIMIT.
    pub history: Vec<HistoryEntry>,
    /// Last failure message, if any.
    pub error: Option<String>,
    /// True strictly while one shorten request is outstanding.
    pub pending: bool,
    /// Active copy acknowledgment, if any.
    pub copy_ack: Option<CopyTarget>,
    /// Generation counter for acknowledgment expiry. Each successful
    /// copy bumps it; an expiry only clears the ack if its generation
    /// still matches, so a stale timer cannot clobber a newer copy.
    pub ack_gen: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission attempt from the current draft.
    ///
    /// Validation happens here: a whitespace-only draft sets the
    /// validation error and never reaches the network. On `Started`
    /// the error is cleared and the pending flag is raised; the caller
    /// must follow up with [`apply_success`](Self::apply_success) or
    /// [`apply_failure`](Self::apply_failure).
    pub fn begin_submit(&mut self) -> SubmitDisposition {
        if self.pending {
            return SubmitDisposition::AlreadyPending;
        }
        if self.draft.trim().is_empty() {
            self.error = Some(MSG_EMPTY_URL.to_string());
            return SubmitDisposition::EmptyDraft;
        }
        self.error = None;
        self.pending = true;
        SubmitDisposition::Started {
            url: self.draft.clone(),
        }
    }

    /// Record a successful shorten response.
    ///
    /// The result row gets the composed URL while the history row keeps
    /// the raw body token; both representations are displayed as stored.
    pub fn apply_success(&mut self, original: &str, token: &str, base_url: &str) {
        self.result = Some(ShortenResult {
            original: original.to_string(),
            short: compose_short_url(base_url, token),
        });
        self.history.insert(
            0,
            HistoryEntry {
                original: original.to_string(),
                short: token.to_string(),
            },
        );
        self.history.truncate(HISTORY_LIMIT);
        self.draft.clear();
        self.pending = false;
    }

    /// Record a failed shorten request. Result and history are left
    /// untouched; the user can retry.
    pub fn apply_failure(&mut self) {
        self.error = Some(MSG_BACKEND_FAILED.to_string());
        self.pending = false;
    }

    /// Record a successful clipboard write for `target`.
    ///
    /// Returns the generation the expiry timer must be keyed to.
    pub fn copy_succeeded(&mut self, target: CopyTarget) -> u64 {
        self.copy_ack = Some(target);
        self.error = None;
        self.ack_gen += 1;
        self.ack_gen
    }

    /// Record a failed clipboard write. The acknowledgment, if any,
    /// is left unchanged.
    pub fn copy_failed(&mut self) {
        self.error = Some(MSG_COPY_FAILED.to_string());
    }

    /// Expire the acknowledgment scheduled under `gen`. A stale
    /// generation (a newer copy happened since) is a no-op.
    pub fn ack_expired(&mut self, gen: u64) {
        if gen == self.ack_gen {
            self.copy_ack = None;
        }
    }

    /// Whether `target` currently shows the "Copied ✓" state.
    pub fn is_acknowledged(&self, target: CopyTarget) -> bool {
        self.copy_ack == Some(target)
    }
}

/// Compose the full displayable short URL from the service base
/// address and a response token.
pub fn compose_short_url(base_url: &str, token: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://quicklink.example";

    fn submitted(state: &mut SessionState, url: &str, token: &str) {
        state.draft = url.to_string();
        match state.begin_submit() {
            SubmitDisposition::Started { url } => state.apply_success(&url, token, BASE),
            other => panic!("expected Started, got {:?}", other),
        }
    }

    #[test]
    fn empty_draft_sets_validation_error_without_pending() {
        let mut state = SessionState::new();
        assert_eq!(state.begin_submit(), SubmitDisposition::EmptyDraft);
        assert_eq!(state.error.as_deref(), Some(MSG_EMPTY_URL));
        assert!(!state.pending);

        state.draft = "   \t ".to_string();
        assert_eq!(state.begin_submit(), SubmitDisposition::EmptyDraft);
        assert!(!state.pending);
    }

    #[test]
    fn validation_error_leaves_prior_results_intact() {
        let mut state = SessionState::new();
        submitted(&mut state, "example.com", "abc123");

        state.draft = "  ".to_string();
        state.begin_submit();
        assert!(state.result.is_some());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn begin_submit_clears_error_and_raises_pending() {
        let mut state = SessionState::new();
        state.error = Some(MSG_BACKEND_FAILED.to_string());
        state.draft = "example.com".to_string();

        match state.begin_submit() {
            SubmitDisposition::Started { url } => assert_eq!(url, "example.com"),
            other => panic!("expected Started, got {:?}", other),
        }
        assert!(state.error.is_none());
        assert!(state.pending);
    }

    #[test]
    fn submit_while_pending_is_inert() {
        let mut state = SessionState::new();
        state.draft = "example.com".to_string();
        state.begin_submit();
        assert_eq!(state.begin_submit(), SubmitDisposition::AlreadyPending);
        assert!(state.pending);
    }

    #[test]
    fn success_sets_result_history_and_clears_draft() {
        let mut state = SessionState::new();
        submitted(&mut state, "example.com", "abc123");

        assert_eq!(
            state.result,
            Some(ShortenResult {
                original: "example.com".to_string(),
                short: format!("{}/abc123", BASE),
            })
        );
        // The history row keeps the raw token, not the composed URL.
        assert_eq!(
            state.history,
            vec![HistoryEntry {
                original: "example.com".to_string(),
                short: "abc123".to_string(),
            }]
        );
        assert!(state.draft.is_empty());
        assert!(!state.pending);
        assert!(state.error.is_none());
    }

    #[test]
    fn history_is_most_recent_first_and_bounded() {
        let mut state = SessionState::new();
        for (i, url) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
            submitted(&mut state, url, &format!("t{}", i));
            assert_eq!(state.history.len(), (i + 1).min(HISTORY_LIMIT));
            assert_eq!(state.history[0].original, *url);
        }
        // Six submissions: "a" has been evicted.
        let originals: Vec<&str> = state.history.iter().map(|h| h.original.as_str()).collect();
        assert_eq!(originals, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn failure_preserves_result_and_history() {
        let mut state = SessionState::new();
        submitted(&mut state, "example.com", "abc123");
        let result_before = state.result.clone();
        let history_before = state.history.clone();

        state.draft = "other.com".to_string();
        state.begin_submit();
        state.apply_failure();

        assert_eq!(state.error.as_deref(), Some(MSG_BACKEND_FAILED));
        assert_eq!(state.result, result_before);
        assert_eq!(state.history, history_before);
        assert!(!state.pending);
        // The failed draft is kept so the user can retry.
        assert_eq!(state.draft, "other.com");
    }

    #[test]
    fn copy_acknowledgment_lifecycle() {
        let mut state = SessionState::new();
        let gen = state.copy_succeeded(CopyTarget::Main);
        assert!(state.is_acknowledged(CopyTarget::Main));

        state.ack_expired(gen);
        assert!(state.copy_ack.is_none());
    }

    #[test]
    fn stale_expiry_does_not_clobber_newer_ack() {
        let mut state = SessionState::new();
        let first = state.copy_succeeded(CopyTarget::Main);
        let second = state.copy_succeeded(CopyTarget::History(1));

        // The first copy's timer fires after the second copy happened.
        state.ack_expired(first);
        assert!(state.is_acknowledged(CopyTarget::History(1)));

        state.ack_expired(second);
        assert!(state.copy_ack.is_none());
    }

    #[test]
    fn only_latest_copy_is_acknowledged() {
        let mut state = SessionState::new();
        state.copy_succeeded(CopyTarget::Main);
        state.copy_succeeded(CopyTarget::History(0));
        assert!(!state.is_acknowledged(CopyTarget::Main));
        assert!(state.is_acknowledged(CopyTarget::History(0)));
    }

    #[test]
    fn copy_failure_keeps_ack_and_sets_error() {
        let mut state = SessionState::new();
        state.copy_succeeded(CopyTarget::Main);
        state.copy_failed();
        assert!(state.is_acknowledged(CopyTarget::Main));
        assert_eq!(state.error.as_deref(), Some(MSG_COPY_FAILED));
    }

    #[test]
    fn copy_success_clears_prior_error() {
        let mut state = SessionState::new();
        state.copy_failed();
        state.copy_succeeded(CopyTarget::Main);
        assert!(state.error.is_none());
    }

    #[test]
    fn untrimmed_draft_is_sent_and_recorded_as_is() {
        let mut state = SessionState::new();
        state.draft = " example.com ".to_string();
        let url = match state.begin_submit() {
            SubmitDisposition::Started { url } => url,
            other => panic!("expected Started, got {:?}", other),
        };
        assert_eq!(url, " example.com ");
        state.apply_success(&url, "abc123", BASE);
        assert_eq!(state.history[0].original, " example.com ");
    }

    #[test]
    fn compose_short_url_handles_trailing_slash() {
        assert_eq!(
            compose_short_url("https://x.dev/", "abc"),
            "https://x.dev/abc"
        );
        assert_eq!(
            compose_short_url("https://x.dev", "abc"),
            "https://x.dev/abc"
        );
    }
}
