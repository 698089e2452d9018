use model_engine::ModelEngine;
use tracing::info;

/// The open host model, reached through its engine.
pub struct Model<E: ModelEngine> {
    engine: E,
}

impl<E: ModelEngine> Model<E> {
    pub fn new(engine: E) -> Self {
        info!(connected = engine.connection_status(), "opened model");
        Self { engine }
    }

    /// The engine's own connection status, unmodified.
    pub fn is_connected(&self) -> bool {
        self.engine.connection_status()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}
