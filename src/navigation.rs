use anyhow::Result;

// Routing collaborator behind "Read Now". The carousel never sees links.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&mut self, link: &str) -> Result<()>;
}

// Logs each destination and keeps the history
#[derive(Debug, Default)]
pub struct LogNavigator {
    visited: Vec<String>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for LogNavigator {
    fn navigate(&mut self, link: &str) -> Result<()> {
        tracing::info!("Navigating to {}", link);
        self.visited.push(link.to_string());
        Ok(())
    }
}
