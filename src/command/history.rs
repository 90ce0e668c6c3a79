/// Every command line submitted this session, oldest first.
///
/// Lines are recorded verbatim whether or not they interpreted cleanly; nothing is
/// ever removed.
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut history = CommandHistory::new();
        assert!(history.is_empty());

        history.record("forward 10");
        history.record("bogus");
        history.record("forward 10");

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), ["forward 10", "bogus", "forward 10"]);
        assert_eq!(history.last(), Some("forward 10"));
    }
}
