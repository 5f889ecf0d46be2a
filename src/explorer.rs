//! Explorer panel state.
//!
//! Holds the current repository tree and load status for one explorer
//! panel, plus the chat history of the session. Passed explicitly to
//! whatever drives the panel; nothing here is global.

use crate::api::{ChatTurn, RepoStructureResponse, StructureClient};
use crate::tree::{IndentedTreeParser, Placeholder, Tree, TreeRenderer};
use tracing::{info, warn};

/// Load status of the explorer panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Tree),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ExplorerState {
    parser: IndentedTreeParser,
    load: LoadState,
    history: Vec<ChatTurn>,
}

impl ExplorerState {
    pub fn new(parser: IndentedTreeParser) -> Self {
        Self {
            parser,
            load: LoadState::NotLoaded,
            history: Vec::new(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn tree(&self) -> Option<&Tree> {
        match &self.load {
            LoadState::Loaded(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Apply a structure response, replacing any previous tree.
    pub fn apply_response(&mut self, response: RepoStructureResponse) {
        self.load = match response {
            RepoStructureResponse {
                file_structure: Some(listing),
                ..
            } => {
                let tree = self.parser.parse(&listing);
                info!(files = tree.files().len(), "Explorer tree replaced");
                LoadState::Loaded(tree)
            }
            RepoStructureResponse {
                error: Some(error), ..
            } => {
                warn!(error = %error, "Backend reported structure error");
                LoadState::Failed(error)
            }
            RepoStructureResponse { .. } => {
                LoadState::Failed("Response contained no file structure".to_string())
            }
        };
    }

    /// Record a transport failure for the current load.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(reason = %reason, "Structure load failed");
        self.load = LoadState::Failed(reason);
    }

    /// Fetch through `client` and apply the result. Errors end up in the
    /// load state rather than being returned.
    pub async fn refresh(&mut self, client: &StructureClient) {
        self.begin_load();
        match client.fetch().await {
            Ok(response) => self.apply_response(response),
            Err(err) => self.fail(err.to_string()),
        }
    }

    /// Markup for the current state.
    pub fn render(&self, renderer: &TreeRenderer) -> String {
        match &self.load {
            LoadState::NotLoaded => renderer.placeholder(Placeholder::NotLoaded),
            LoadState::Loading => renderer.placeholder(Placeholder::Loading),
            LoadState::Loaded(tree) => renderer.render(tree),
            LoadState::Failed(reason) => renderer.placeholder(Placeholder::Failed(reason)),
        }
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn record_turn(&mut self, turn: ChatTurn) {
        self.history.push(turn);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
