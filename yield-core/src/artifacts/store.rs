use std::{fmt, sync::Arc};

use super::LoadedModels;
use crate::models::HistoricalTable;
use crate::pipeline::{Predictor, Preprocessor};

/// Everything loaded at startup: the fitted pipeline and the historical table.
///
/// Never mutated after construction; share it between sessions with an `Arc`.
#[derive(Clone)]
pub struct ArtifactStore {
    preprocessor: Arc<dyn Preprocessor>,
    predictor: Arc<dyn Predictor>,
    history: HistoricalTable,
}

impl ArtifactStore {
    pub fn new(models: LoadedModels, history: HistoricalTable) -> Self {
        Self {
            preprocessor: models.preprocessor,
            predictor: models.predictor,
            history,
        }
    }

    pub fn preprocessor(&self) -> &dyn Preprocessor {
        &*self.preprocessor
    }

    pub fn predictor(&self) -> &dyn Predictor {
        &*self.predictor
    }

    pub fn history(&self) -> &HistoricalTable {
        &self.history
    }
}

impl fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("history_rows", &self.history.len())
            .finish_non_exhaustive()
    }
}
