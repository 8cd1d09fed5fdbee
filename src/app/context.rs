use crate::ports::AssetSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<A: AssetSource> {
    assets: A,
}

impl<A: AssetSource> AppContext<A> {
    /// Create a new application context.
    pub fn new(assets: A) -> Self {
        Self { assets }
    }

    /// Get a reference to the template asset source.
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
