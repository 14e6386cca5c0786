use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Exits(s) => s,
        }
    }
}

/// Everything one player action produced, in order. Front ends render it;
/// the engine never prints.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // only one Exits block per output; a later call replaces it in place
        match self
            .blocks
            .iter_mut()
            .find(|b| matches!(b, OutputBlock::Exits(_)))
        {
            Some(block) => *block = OutputBlock::Exits(s),
            None => self.blocks.push(OutputBlock::Exits(s)),
        }
    }

    pub fn extend(&mut self, other: Output) {
        self.blocks.extend(other.blocks);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text, one block per line.
    pub fn to_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text())
            .collect::<Vec<&str>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text().contains(needle))
    }
}
