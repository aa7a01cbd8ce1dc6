#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// JSON pointer of the rewritten value, e.g. `/videos/0/youtube_url`
    pub pointer: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixReport {
    pub replacements: Vec<Replacement>,
}

impl FixReport {
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}
