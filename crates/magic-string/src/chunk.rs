//! Chunk list storage.
//!
//! The original text is covered by a doubly linked list of chunks. Chunks live in an
//! arena (`Vec<Chunk>`) and link to each other by index, so cloning a `MagicString`
//! is a plain deep copy. A chunk never owns its original text: unedited chunks render
//! `original[start..end]` straight from the owner.

/// Arena index of a chunk.
pub(crate) type ChunkId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Chunk {
    /// Inclusive start byte offset in the original text.
    pub(crate) start: usize,
    /// Exclusive end byte offset in the original text.
    pub(crate) end: usize,
    /// Text rendered before the content.
    pub(crate) intro: String,
    /// Text rendered after the content.
    pub(crate) outro: String,
    /// Replacement content; `None` while the chunk renders its original slice.
    pub(crate) edit: Option<String>,
    /// Whether the original text of this chunk is recorded as a sourcemap name.
    pub(crate) store_name: bool,
    pub(crate) previous: Option<ChunkId>,
    pub(crate) next: Option<ChunkId>,
}

impl Chunk {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            intro: String::new(),
            outro: String::new(),
            edit: None,
            store_name: false,
            previous: None,
            next: None,
        }
    }

    /// Returns `true` if `index` lies strictly inside the chunk.
    pub(crate) fn contains(&self, index: usize) -> bool {
        self.start < index && index < self.end
    }

    pub(crate) fn is_edited(&self) -> bool {
        self.edit.is_some()
    }

    /// The text this chunk renders between its intro and outro.
    pub(crate) fn content<'a>(&'a self, original: &'a str) -> &'a str {
        match &self.edit {
            Some(content) => content,
            None => original.get(self.start..self.end).unwrap_or_default(),
        }
    }

    /// Replace the content. Unless `content_only`, the intro and outro are dropped too.
    pub(crate) fn edit(&mut self, content: String, store_name: bool, content_only: bool) {
        self.edit = Some(content);
        if !content_only {
            self.intro.clear();
            self.outro.clear();
        }
        self.store_name = store_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unedited_content_reads_original() {
        let chunk = Chunk::new(2, 5);
        assert_eq!(chunk.content("0123456"), "234");
        assert!(!chunk.is_edited());
    }

    #[test]
    fn test_edit_clears_intro_and_outro() {
        let mut chunk = Chunk::new(0, 3);
        chunk.intro.push_str("<");
        chunk.outro.push_str(">");
        chunk.edit("x".to_string(), false, false);
        assert_eq!(chunk.content("abc"), "x");
        assert!(chunk.intro.is_empty());
        assert!(chunk.outro.is_empty());
    }

    #[test]
    fn test_content_only_edit_keeps_intro_and_outro() {
        let mut chunk = Chunk::new(0, 3);
        chunk.intro.push_str("<");
        chunk.outro.push_str(">");
        chunk.edit("x".to_string(), true, true);
        assert_eq!(chunk.intro, "<");
        assert_eq!(chunk.outro, ">");
        assert!(chunk.store_name);
    }

    #[test]
    fn test_contains_is_strict() {
        let chunk = Chunk::new(2, 5);
        assert!(!chunk.contains(2));
        assert!(chunk.contains(3));
        assert!(!chunk.contains(5));
    }
}
