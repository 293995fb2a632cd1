//! Conversation state carried between chat messages.

use crate::error::{CliError, Result};
use crate::users::{find_user, DemoUser};
use kickpredict_domain::{ChatMessage, CreatorProfile, PredictionResponse, ProjectRecord};
use kickpredict_extractor::ExtractionMethod;
use once_cell::sync::Lazy;
use std::collections::VecDeque;

static ANONYMOUS: Lazy<CreatorProfile> = Lazy::new(CreatorProfile::default);

/// The most recent project analysis
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Project that was scored
    pub record: ProjectRecord,
    /// Service answer
    pub prediction: PredictionResponse,
    /// How the record was extracted
    pub method: ExtractionMethod,
}

/// Per-conversation state
///
/// Holds the logged-in demo user, the last analyzed project and a rolling
/// window of chat turns.
#[derive(Debug)]
pub struct SessionContext {
    user: Option<&'static DemoUser>,
    analysis: Option<Analysis>,
    history: VecDeque<ChatMessage>,
    history_limit: usize,
}

impl SessionContext {
    /// Create a session keeping the last `turns` exchanges
    pub fn new(turns: usize) -> Self {
        Self {
            user: None,
            analysis: None,
            history: VecDeque::new(),
            history_limit: turns * 2,
        }
    }

    /// Log in as a demo user
    pub fn login(&mut self, email: &str) -> Result<&'static CreatorProfile> {
        let user = find_user(email).ok_or_else(|| CliError::UnknownUser(email.trim().to_string()))?;
        self.user = Some(user);
        Ok(&user.profile)
    }

    /// Log out, returning to the anonymous profile
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Email of the logged-in user
    pub fn email(&self) -> Option<&'static str> {
        self.user.map(|u| u.email)
    }

    /// Profile of the logged-in user, if any
    pub fn creator(&self) -> Option<&'static CreatorProfile> {
        self.user.map(|u| &u.profile)
    }

    /// Active profile, the anonymous one when logged out
    pub fn profile(&self) -> &CreatorProfile {
        self.creator().unwrap_or(&*ANONYMOUS)
    }

    /// Remember a completed analysis
    pub fn set_analysis(&mut self, analysis: Analysis) {
        self.analysis = Some(analysis);
    }

    /// Last completed analysis
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Append one user message and its reply, dropping the oldest turns
    pub fn record_turn(&mut self, message: &str, reply: &str) {
        self.history.push_back(ChatMessage::user(message));
        self.history.push_back(ChatMessage::assistant(reply));
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Recent messages, oldest first
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.history.iter()
    }

    /// Forget the conversation and the last analysis; the login is kept
    pub fn clear(&mut self) {
        self.history.clear();
        self.analysis = None;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(10)
    }
}
