use crate::{
    chat::ChatSurface,
    config::{require_model, Config},
    dashboard::Dashboard,
    instruction::ChatMode,
    pyq::PyqAnalyzer,
    reviews::ReviewBoard,
    routine::{self, RoutinePlanner},
    session::Session,
    store::{FileStore, JsonStore},
    ScholarResult,
};
use cognipath_sdk::LanguageModel;
use std::sync::Arc;

/// Entry point tying the store and the model to each feature.
///
/// Without a model every feature still reads and edits stored data; only
/// the calls that need a reply fail with
/// [`ScholarError::Config`](crate::ScholarError::Config).
#[derive(Clone)]
pub struct Scholar {
    store: JsonStore,
    model: Option<Arc<dyn LanguageModel>>,
}

impl Scholar {
    pub fn new(store: JsonStore, model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { store, model }
    }

    /// File-backed store under the configured data directory. The model is
    /// attached only when an API key is available.
    pub fn from_config(config: &Config) -> Self {
        let store = JsonStore::new(Arc::new(FileStore::new(&config.data_dir)));
        let model = match config.language_model() {
            Ok(model) => Some(model),
            Err(error) => {
                tracing::debug!(%error, "running without a language model");
                None
            }
        };
        Self::new(store, model)
    }

    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    pub fn model(&self) -> ScholarResult<Arc<dyn LanguageModel>> {
        require_model(self.model.as_ref()).cloned()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.store.clone())
    }

    #[must_use]
    pub fn chat(&self, mode: ChatMode) -> ChatSurface {
        ChatSurface::new(mode, self.model.clone(), self.store.clone())
    }

    #[must_use]
    pub fn pyq(&self) -> PyqAnalyzer {
        PyqAnalyzer::new(self.model.clone(), self.store.clone())
    }

    #[must_use]
    pub fn routines(&self) -> RoutinePlanner {
        RoutinePlanner::new(self.model.clone(), self.store.clone())
    }

    #[must_use]
    pub fn reviews(&self) -> ReviewBoard {
        ReviewBoard::new(self.store.clone())
    }

    /// Home screen of the signed-in user.
    pub fn dashboard(&self) -> ScholarResult<Dashboard> {
        let user = self.session().require()?;
        let current = routine::latest(&self.store)?;
        Ok(Dashboard::build(&user, current))
    }
}
