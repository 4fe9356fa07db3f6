use std::{
    fmt::Display,
    sync::{Arc, Mutex},
};

/// `Console` is an append-only diagnostic sink shared between a component and whoever observes
/// it.
///
/// Each write records the value's [`Display`] form and forwards it to the [`log`] facade under
/// the `console` target. Clones share the same entries.
#[derive(Clone, Default)]
pub struct Console {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Console {
    /// Creates an empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a value.
    pub fn log<T: Display>(&self, value: T) {
        let entry = value.to_string();
        log::info!(target: "console", "{}", entry);
        self.entries.lock().unwrap().push(entry);
    }

    /// Returns a copy of everything written so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Returns how many writes produced exactly `text`.
    pub fn count(&self, text: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| *entry == text)
            .count()
    }

    /// Returns the last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        entries[entries.len().saturating_sub(n)..].to_vec()
    }

    /// Discards all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console() {
        let console = Console::new();
        let shared = console.clone();
        console.log(1);
        shared.log("2");
        console.log(1.5);
        console.log(1);

        assert_eq!(console.entries(), vec!["1", "2", "1.5", "1"]);
        assert_eq!(shared.count("1"), 2);
        assert_eq!(shared.count("3"), 0);
        assert_eq!(console.tail(2), vec!["1.5", "1"]);
        assert_eq!(console.tail(10).len(), 4);

        shared.clear();
        assert!(console.entries().is_empty());
    }
}
