// Navigation port - where the guide sends the supervisor next

use anyhow::Result;
use std::sync::Mutex;

#[cfg(any(test, feature = "testing"))]
use mockall::automock;

/// Routes the user to an application path
#[cfg_attr(any(test, feature = "testing"), automock)]
pub trait Navigator {
    fn navigate(&self, path: &str) -> Result<()>;
}

/// Prints the target path, for terminal use
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) -> Result<()> {
        tracing::info!(path = %path, "Navigating");
        println!("➡️  Next page: {}", path);
        Ok(())
    }
}

/// Remembers every path it was asked to open
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) -> Result<()> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());
        Ok(())
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) -> Result<()> {
        (**self).navigate(path)
    }
}
