//! Transient user-facing messages

/// How many notices the board keeps
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub style: NoticeStyle,
}

/// Most recent notices, oldest first
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, style: NoticeStyle) {
        self.notices.push(Notice {
            text: text.into(),
            style,
        });

        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, NoticeStyle::Info);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, NoticeStyle::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, NoticeStyle::Error);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Remove and return everything posted so far
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
