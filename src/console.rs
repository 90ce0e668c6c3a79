use std::collections::VecDeque;

/// Oldest lines are dropped past this many
pub const MAX_CONSOLE_LINES: usize = 500;

/// Transcript shown in the console row
#[derive(Debug, Default, Clone)]
pub struct Console {
    lines: VecDeque<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&mut self, line: impl Into<String>) {
        if self.lines.len() == MAX_CONSOLE_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.print(line);
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_lines() {
        let mut console = Console::new();
        for i in 0..MAX_CONSOLE_LINES + 3 {
            console.print(format!("line {i}"));
        }
        assert_eq!(console.len(), MAX_CONSOLE_LINES);
        assert_eq!(console.lines().next(), Some("line 3"));
        assert_eq!(console.last(), Some(format!("line {}", MAX_CONSOLE_LINES + 2).as_str()));
    }
}
