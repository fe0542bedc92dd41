use std::collections::VecDeque;

/// The most recent `limit` lines of a stream, oldest first.
#[derive(Debug, Clone)]
pub struct LineTail {
    lines: VecDeque<String>,
    limit: usize,
}

impl LineTail {
    pub fn new(limit: usize) -> Self {
        Self {
            // Capacity is bounded by the limit, but a large limit should not
            // preallocate for output that never arrives.
            lines: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Appends a line, evicting the oldest one once the limit is exceeded.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines.into()
    }
}
