//! The [`MagicString`] edit buffer.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::Range;

use regex::Regex;

use crate::chunk::{Chunk, ChunkId};
use crate::error::{MagicStringError, Result};
use crate::indent::{guess_indent, indent_lines};
use crate::locator::Locator;
use crate::mappings::Mappings;
use crate::options::{IndentOptions, MagicStringOptions, OverwriteOptions, SourceMapOptions};
use crate::sourcemap::{DecodedSourceMap, SourceMap, basename, relative_path};

#[derive(Debug, Clone, Copy)]
enum TrimSide {
    Start,
    End,
}

fn trim_pattern(char_type: Option<&str>, side: TrimSide) -> Result<Regex> {
    let class = char_type.unwrap_or(r"\s");
    let source = match side {
        TrimSide::Start => format!("^(?:{class})+"),
        TrimSide::End => format!("(?:{class})+$"),
    };
    Regex::new(&source).map_err(|err| MagicStringError::InvalidCharType {
        char_type: class.to_string(),
        message: err.to_string(),
    })
}

fn strip(text: &mut String, pattern: &Regex) {
    if let Cow::Owned(stripped) = pattern.replace(text, "") {
        *text = stripped;
    }
}

/// A string addressed by offsets into its immutable original text.
///
/// Edits (insertions, overwrites, removals, moves) are recorded against original
/// offsets, so later edits never need to account for earlier ones. The current text is
/// rendered on demand with [`fmt::Display`], and [`MagicString::generate_map`] relates
/// it back to the original.
///
/// All offsets are byte offsets and must fall on UTF-8 character boundaries.
///
/// ```
/// use magic_string::{MagicString, OverwriteOptions};
///
/// let mut s = MagicString::new("let answer = 41;");
/// s.overwrite(13, 15, "42", OverwriteOptions::default()).unwrap();
/// s.prepend("// generated\n");
/// assert_eq!(s.to_string(), "// generated\nlet answer = 42;");
/// ```
#[derive(Debug, Clone)]
pub struct MagicString {
    original: String,
    intro: String,
    outro: String,
    chunks: Vec<Chunk>,
    first_chunk: ChunkId,
    last_chunk: ChunkId,
    last_searched_chunk: ChunkId,
    by_start: HashMap<usize, ChunkId>,
    by_end: HashMap<usize, ChunkId>,
    filename: Option<String>,
    indent_exclusion_ranges: Vec<Range<usize>>,
    sourcemap_locations: BTreeSet<usize>,
    stored_names: Vec<String>,
}

impl MagicString {
    /// Create a buffer over `original` with default options.
    pub fn new(original: impl Into<String>) -> Self {
        Self::with_options(original, MagicStringOptions::default())
    }

    /// Create a buffer over `original`.
    pub fn with_options(original: impl Into<String>, options: MagicStringOptions) -> Self {
        let original = original.into();
        let len = original.len();
        Self {
            original,
            intro: String::new(),
            outro: String::new(),
            chunks: vec![Chunk::new(0, len)],
            first_chunk: 0,
            last_chunk: 0,
            last_searched_chunk: 0,
            by_start: HashMap::from([(0, 0)]),
            by_end: HashMap::from([(len, 0)]),
            filename: options.filename,
            indent_exclusion_ranges: options.indent_exclusion_ranges,
            sourcemap_locations: BTreeSet::new(),
            stored_names: Vec::new(),
        }
    }

    /// The text the buffer was created from.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The file name given at construction.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Ranges excluded from [`MagicString::indent`] by default.
    pub fn indent_exclusion_ranges(&self) -> &[Range<usize>] {
        &self.indent_exclusion_ranges
    }

    // ---- Insertion ----

    /// Append text after everything else.
    pub fn append(&mut self, content: &str) -> &mut Self {
        self.outro.push_str(content);
        self
    }

    /// Prepend text before everything else.
    pub fn prepend(&mut self, content: &str) -> &mut Self {
        self.intro.insert_str(0, content);
        self
    }

    /// Append text at `index`, attached to the chunk that ends there. It survives a
    /// removal of the text after `index` and moves with the text before it.
    pub fn append_left(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.by_end.get(&index) {
            Some(&id) => self.chunks[id].outro.push_str(content),
            None => self.intro.push_str(content),
        }
        Ok(self)
    }

    /// Like [`MagicString::append_left`], but the text goes before earlier left insertions.
    pub fn prepend_left(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.by_end.get(&index) {
            Some(&id) => self.chunks[id].outro.insert_str(0, content),
            None => self.intro.insert_str(0, content),
        }
        Ok(self)
    }

    /// Append text at `index`, attached to the chunk that starts there.
    pub fn append_right(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.by_start.get(&index) {
            Some(&id) => self.chunks[id].intro.push_str(content),
            None => self.outro.push_str(content),
        }
        Ok(self)
    }

    /// Like [`MagicString::append_right`], but the text goes before earlier right insertions.
    pub fn prepend_right(&mut self, index: usize, content: &str) -> Result<&mut Self> {
        self.check_index(index)?;
        self.split(index)?;
        match self.by_start.get(&index) {
            Some(&id) => self.chunks[id].intro.insert_str(0, content),
            None => self.outro.insert_str(0, content),
        }
        Ok(self)
    }

    // ---- Replacement ----

    /// Replace the original range `[start, end)` with `content`.
    ///
    /// Text inserted at the range edges is discarded unless `content_only` is set.
    /// Fails when the range is empty, when any part of it was already edited, or when
    /// an edge falls inside an earlier overwrite.
    pub fn overwrite(
        &mut self,
        start: usize,
        end: usize,
        content: &str,
        options: OverwriteOptions,
    ) -> Result<&mut Self> {
        self.replace_range(start, end, content, options.store_name, options.content_only)
    }

    /// Replace the original range `[start, end)` with `content`, keeping text inserted
    /// at the range edges.
    pub fn update(
        &mut self,
        start: usize,
        end: usize,
        content: &str,
        options: OverwriteOptions,
    ) -> Result<&mut Self> {
        self.replace_range(start, end, content, options.store_name, true)
    }

    fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        content: &str,
        store_name: bool,
        content_only: bool,
    ) -> Result<&mut Self> {
        if start == end {
            return Err(MagicStringError::ZeroLengthRange { index: start });
        }
        self.check_range(start, end)?;
        self.split(start)?;
        self.split(end)?;

        let (Some(&first), Some(&last)) = (self.by_start.get(&start), self.by_end.get(&end)) else {
            return Err(MagicStringError::InvalidRange { start, end });
        };

        let mut id = first;
        loop {
            let chunk = &self.chunks[id];
            if chunk.is_edited() {
                return Err(MagicStringError::AlreadyEdited { start, end });
            }
            if id == last {
                break;
            }
            match chunk.next {
                Some(next) if self.by_start.get(&chunk.end) == Some(&next) => id = next,
                _ => return Err(MagicStringError::AcrossSplitPoint { start, end }),
            }
        }

        if store_name {
            let name = &self.original[start..end];
            if !self.stored_names.iter().any(|stored| stored == name) {
                self.stored_names.push(name.to_string());
            }
        }

        if first != last {
            let mut cursor = self.chunks[first].next;
            while let Some(id) = cursor {
                self.chunks[id].edit(String::new(), false, false);
                if id == last {
                    break;
                }
                cursor = self.chunks[id].next;
            }
        }
        self.chunks[first].edit(content.to_string(), store_name, content_only);

        Ok(self)
    }

    /// Remove the original range `[start, end)` together with text inserted inside it.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<&mut Self> {
        self.check_range(start, end)?;
        if start == end {
            return Ok(self);
        }
        self.split(start)?;
        self.split(end)?;

        let mut cursor = self.by_start.get(&start).copied();
        while let Some(id) = cursor {
            let chunk = &mut self.chunks[id];
            chunk.edit(String::new(), false, false);
            cursor = if end > chunk.end {
                self.by_start.get(&chunk.end).copied()
            } else {
                None
            };
        }
        Ok(self)
    }

    /// Move the original range `[start, end)` to `index`. Moving to the original length
    /// places it at the end.
    pub fn move_range(&mut self, start: usize, end: usize, index: usize) -> Result<&mut Self> {
        self.check_range(start, end)?;
        self.check_index(index)?;
        if index >= start && index <= end {
            return Err(MagicStringError::MoveInsideSelection { start, end, index });
        }
        if start == end {
            return Ok(self);
        }

        self.split(start)?;
        self.split(end)?;
        self.split(index)?;

        let (Some(&first), Some(&last)) = (self.by_start.get(&start), self.by_end.get(&end)) else {
            return Err(MagicStringError::InvalidRange { start, end });
        };

        let old_left = self.chunks[first].previous;
        let old_right = self.chunks[last].next;

        let new_right = self.by_start.get(&index).copied();
        if new_right.is_none() && last == self.last_chunk {
            return Ok(self);
        }
        let new_left = match new_right {
            Some(right) => self.chunks[right].previous,
            None => Some(self.last_chunk),
        };
        // Already in place.
        if new_left == Some(last) {
            return Ok(self);
        }

        if let Some(left) = old_left {
            self.chunks[left].next = old_right;
        }
        if let Some(right) = old_right {
            self.chunks[right].previous = old_left;
        }
        if let Some(left) = new_left {
            self.chunks[left].next = Some(first);
        }
        if let Some(right) = new_right {
            self.chunks[right].previous = Some(last);
        }

        if old_left.is_none()
            && let Some(right) = old_right
        {
            self.first_chunk = right;
        }
        if old_right.is_none()
            && let Some(left) = old_left
        {
            self.last_chunk = left;
            self.chunks[left].next = None;
        }

        self.chunks[first].previous = new_left;
        self.chunks[last].next = new_right;

        if new_left.is_none() {
            self.first_chunk = first;
        }
        if new_right.is_none() {
            self.last_chunk = last;
        }

        tracing::trace!(start, end, index, "moved range");
        Ok(self)
    }

    // ---- Reading ----

    /// Rendered text of the original range `[start, end)`, including text inserted
    /// inside it. Fails when an edge falls inside an overwritten range.
    pub fn slice(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        let mut result = String::new();
        if start == end {
            return Ok(result);
        }

        let mut cursor = Some(self.first_chunk);
        while let Some(id) = cursor {
            let chunk = &self.chunks[id];
            if chunk.start <= start && chunk.end > start {
                break;
            }
            // The end was moved in front of the start.
            if chunk.start < end && chunk.end >= end {
                return Ok(result);
            }
            cursor = chunk.next;
        }

        let Some(start_id) = cursor else {
            return Ok(result);
        };
        if self.chunks[start_id].is_edited() && self.chunks[start_id].start != start {
            return Err(MagicStringError::SliceStartAnchor { index: start });
        }

        let mut cursor = Some(start_id);
        while let Some(id) = cursor {
            let chunk = &self.chunks[id];
            if !chunk.intro.is_empty() && (id != start_id || chunk.start == start) {
                result.push_str(&chunk.intro);
            }

            let contains_end = chunk.start < end && chunk.end >= end;
            if contains_end && chunk.is_edited() && chunk.end != end {
                return Err(MagicStringError::SliceEndAnchor { index: end });
            }

            let content = chunk.content(&self.original);
            let slice_start = if id == start_id { start - chunk.start } else { 0 };
            let slice_end = if contains_end {
                content.len() + end - chunk.end
            } else {
                content.len()
            };
            result.push_str(content.get(slice_start..slice_end).unwrap_or_default());

            if !chunk.outro.is_empty() && (!contains_end || chunk.end == end) {
                result.push_str(&chunk.outro);
            }
            if contains_end {
                break;
            }
            cursor = chunk.next;
        }

        Ok(result)
    }

    /// A copy with everything outside the original range `[start, end)` removed.
    pub fn snip(&self, start: usize, end: usize) -> Result<MagicString> {
        self.check_range(start, end)?;
        let mut snipped = self.clone();
        snipped.remove(0, start)?;
        snipped.remove(end, snipped.original.len())?;
        Ok(snipped)
    }

    /// Byte length of the rendered text.
    pub fn len(&self) -> usize {
        self.pieces().map(str::len).sum()
    }

    /// Returns `true` if the rendered text is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.pieces().all(|piece| piece.trim().is_empty())
    }

    /// Last character of the rendered text.
    pub fn last_char(&self) -> Option<char> {
        self.pieces()
            .filter(|piece| !piece.is_empty())
            .last()
            .and_then(|piece| piece.chars().last())
    }

    /// Rendered text after the last `\n`.
    pub fn last_line(&self) -> String {
        let rendered = self.to_string();
        match rendered.rfind('\n') {
            Some(index) => rendered[index + 1..].to_string(),
            None => rendered,
        }
    }

    // ---- Trimming ----

    /// Trim characters matching the regex class `char_type` (default `\s`) from both ends.
    pub fn trim(&mut self, char_type: Option<&str>) -> Result<&mut Self> {
        let start = trim_pattern(char_type, TrimSide::Start)?;
        let end = trim_pattern(char_type, TrimSide::End)?;
        self.trim_start_with(&start);
        self.trim_end_with(&end);
        Ok(self)
    }

    /// Trim characters matching `char_type` (default `\s`) from the start.
    pub fn trim_start(&mut self, char_type: Option<&str>) -> Result<&mut Self> {
        let pattern = trim_pattern(char_type, TrimSide::Start)?;
        self.trim_start_with(&pattern);
        Ok(self)
    }

    /// Trim characters matching `char_type` (default `\s`) from the end.
    pub fn trim_end(&mut self, char_type: Option<&str>) -> Result<&mut Self> {
        let pattern = trim_pattern(char_type, TrimSide::End)?;
        self.trim_end_with(&pattern);
        Ok(self)
    }

    /// Trim leading and trailing line breaks.
    pub fn trim_lines(&mut self) -> Result<&mut Self> {
        self.trim(Some(r"[\r\n]"))
    }

    fn trim_start_with(&mut self, pattern: &Regex) {
        strip(&mut self.intro, pattern);
        if !self.intro.is_empty() {
            return;
        }
        let mut cursor = Some(self.first_chunk);
        while let Some(id) = cursor {
            if self.trim_chunk_start(id, pattern) {
                return;
            }
            cursor = self.chunks[id].next;
        }
    }

    fn trim_end_with(&mut self, pattern: &Regex) {
        strip(&mut self.outro, pattern);
        if !self.outro.is_empty() {
            return;
        }
        let mut cursor = Some(self.last_chunk);
        while let Some(id) = cursor {
            if self.trim_chunk_end(id, pattern) {
                return;
            }
            cursor = self.chunks[id].previous;
        }
    }

    /// Returns `true` once non-trimmable text is reached.
    fn trim_chunk_start(&mut self, id: ChunkId, pattern: &Regex) -> bool {
        strip(&mut self.chunks[id].intro, pattern);
        if !self.chunks[id].intro.is_empty() {
            return true;
        }

        let (content_len, trimmed) = {
            let content = self.chunks[id].content(&self.original);
            (content.len(), pattern.replace(content, "").into_owned())
        };
        if !trimmed.is_empty() {
            if trimmed.len() != content_len {
                if self.chunks[id].is_edited() {
                    self.chunks[id].edit = Some(trimmed);
                } else {
                    let at = self.chunks[id].end - trimmed.len();
                    self.split_chunk_unchecked(id, at);
                    self.chunks[id].edit(String::new(), false, true);
                }
            }
            return true;
        }

        self.chunks[id].edit(String::new(), false, true);
        strip(&mut self.chunks[id].outro, pattern);
        !self.chunks[id].outro.is_empty()
    }

    /// Returns `true` once non-trimmable text is reached.
    fn trim_chunk_end(&mut self, id: ChunkId, pattern: &Regex) -> bool {
        strip(&mut self.chunks[id].outro, pattern);
        if !self.chunks[id].outro.is_empty() {
            return true;
        }

        let (content_len, trimmed) = {
            let content = self.chunks[id].content(&self.original);
            (content.len(), pattern.replace(content, "").into_owned())
        };
        if !trimmed.is_empty() {
            if trimmed.len() != content_len {
                if self.chunks[id].is_edited() {
                    self.chunks[id].edit = Some(trimmed);
                } else {
                    let at = self.chunks[id].start + trimmed.len();
                    let tail = self.split_chunk_unchecked(id, at);
                    self.chunks[tail].edit(String::new(), false, true);
                }
            }
            return true;
        }

        self.chunks[id].edit(String::new(), false, true);
        strip(&mut self.chunks[id].intro, pattern);
        !self.chunks[id].intro.is_empty()
    }

    // ---- Indentation ----

    /// The indentation unit guessed from the original text, or a tab.
    pub fn get_indent_string(&self) -> String {
        guess_indent(&self.original).unwrap_or_else(|| "\t".to_string())
    }

    /// Prefix every non-empty line with `indent_str` (default: [`MagicString::get_indent_string`]).
    ///
    /// Only the buffer intro/outro, overwritten content and original text are indented;
    /// text inserted at chunk edges is left as is.
    pub fn indent(&mut self, indent_str: Option<&str>, options: &IndentOptions) -> &mut Self {
        let indent_str = match indent_str {
            Some(indent_str) => indent_str.to_string(),
            None => self.get_indent_string(),
        };
        if indent_str.is_empty() {
            return self;
        }

        let exclusions = options
            .exclude
            .clone()
            .unwrap_or_else(|| self.indent_exclusion_ranges.clone());
        let is_excluded = |index: usize| exclusions.iter().any(|range| range.contains(&index));

        let mut should_indent = options.indent_start;
        self.intro = indent_lines(&self.intro, &indent_str, &mut should_indent);

        let mut char_index = 0;
        let mut cursor = Some(self.first_chunk);
        while let Some(mut id) = cursor {
            if self.chunks[id].is_edited() {
                if !is_excluded(char_index) {
                    let content = self.chunks[id].edit.take().unwrap_or_default();
                    let indented = indent_lines(&content, &indent_str, &mut should_indent);
                    if !indented.is_empty() {
                        should_indent = indented.ends_with('\n');
                    }
                    self.chunks[id].edit = Some(indented);
                }
            } else {
                let (start, end) = (self.chunks[id].start, self.chunks[id].end);
                let mut line_starts = Vec::new();
                for (offset, ch) in self.original[start..end].char_indices() {
                    let index = start + offset;
                    if is_excluded(index) {
                        continue;
                    }
                    if ch == '\n' {
                        should_indent = true;
                    } else if ch != '\r' && should_indent {
                        should_indent = false;
                        line_starts.push(index);
                    }
                }
                for index in line_starts {
                    if index != self.chunks[id].start {
                        id = self.split_chunk_unchecked(id, index);
                    }
                    self.chunks[id].intro.insert_str(0, &indent_str);
                }
            }
            char_index = self.chunks[id].end;
            cursor = self.chunks[id].next;
        }

        self.outro = indent_lines(&self.outro, &indent_str, &mut should_indent);
        self
    }

    // ---- Sourcemaps ----

    /// Force a mapping segment at original `index` in low-resolution maps.
    pub fn add_sourcemap_location(&mut self, index: usize) {
        self.sourcemap_locations.insert(index);
    }

    /// Generate a sourcemap with segment arrays.
    pub fn generate_decoded_map(&self, options: &SourceMapOptions) -> DecodedSourceMap {
        let names = self.stored_names.clone();
        let locator = Locator::new(&self.original);
        let mut mappings = Mappings::new(options.hires.unwrap_or(false));

        mappings.advance(&self.intro);
        for id in self.chunk_ids() {
            let chunk = &self.chunks[id];
            let loc = locator.locate(chunk.start);
            let original = &self.original[chunk.start..chunk.end];

            mappings.advance(&chunk.intro);
            match &chunk.edit {
                Some(content) => {
                    let name_index = if chunk.store_name {
                        names.iter().position(|name| name == original).map(|i| i as u32)
                    } else {
                        None
                    };
                    mappings.add_edit(0, content, loc, name_index);
                }
                None => mappings.add_unedited_chunk(
                    0,
                    original,
                    chunk.start,
                    loc,
                    &self.sourcemap_locations,
                ),
            }
            mappings.advance(&chunk.outro);
        }

        let file = options.file.as_deref().filter(|file| !file.is_empty());
        let source = match options.source.as_deref().filter(|source| !source.is_empty()) {
            Some(source) => relative_path(file.unwrap_or_default(), source),
            None => file.unwrap_or_default().to_string(),
        };

        DecodedSourceMap {
            file: file.map(|file| basename(file).to_string()),
            sources: vec![source],
            sources_content: options
                .include_content
                .unwrap_or(false)
                .then(|| vec![self.original.clone()]),
            names,
            mappings: mappings.into_lines(),
        }
    }

    /// Generate a VLQ-encoded sourcemap.
    pub fn generate_map(&self, options: &SourceMapOptions) -> SourceMap {
        self.generate_decoded_map(options).encode()
    }

    // ---- Internals ----

    fn check_index(&self, index: usize) -> Result<()> {
        if index > self.original.len() {
            return Err(MagicStringError::OutOfBounds {
                index,
                len: self.original.len(),
            });
        }
        if !self.original.is_char_boundary(index) {
            return Err(MagicStringError::NotCharBoundary { index });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        self.check_index(start)?;
        self.check_index(end)?;
        if start > end {
            return Err(MagicStringError::InvalidRange { start, end });
        }
        Ok(())
    }

    fn chunk_ids(&self) -> impl Iterator<Item = ChunkId> + '_ {
        std::iter::successors(Some(self.first_chunk), |&id| self.chunks[id].next)
    }

    /// Rendered pieces in output order.
    fn pieces(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.intro.as_str())
            .chain(self.chunk_ids().flat_map(move |id| {
                let chunk = &self.chunks[id];
                [
                    chunk.intro.as_str(),
                    chunk.content(&self.original),
                    chunk.outro.as_str(),
                ]
            }))
            .chain(std::iter::once(self.outro.as_str()))
    }

    /// Make `index` a chunk boundary.
    fn split(&mut self, index: usize) -> Result<()> {
        if self.by_start.contains_key(&index) || self.by_end.contains_key(&index) {
            return Ok(());
        }

        let mut id = self.last_searched_chunk;
        let forward = index > self.chunks[id].end;
        loop {
            let chunk = &self.chunks[id];
            if chunk.contains(index) {
                return self.split_chunk(id, index);
            }
            let next = if forward {
                self.by_start.get(&chunk.end)
            } else {
                self.by_end.get(&chunk.start)
            };
            id = *next.ok_or(MagicStringError::OutOfBounds {
                index,
                len: self.original.len(),
            })?;
        }
    }

    fn split_chunk(&mut self, id: ChunkId, index: usize) -> Result<()> {
        let chunk = &self.chunks[id];
        if chunk.is_edited() && !chunk.content(&self.original).is_empty() {
            let loc = Locator::new(&self.original).locate(index);
            return Err(MagicStringError::SplitEditedChunk {
                line: loc.line,
                column: loc.column,
                original: self.original[chunk.start..chunk.end].to_string(),
            });
        }
        self.split_chunk_unchecked(id, index);
        Ok(())
    }

    /// Split chunk `id` at `index`, returning the new right-hand chunk. The left part of
    /// an edited chunk keeps its content and the right part renders nothing.
    fn split_chunk_unchecked(&mut self, id: ChunkId, index: usize) -> ChunkId {
        let new_id = self.chunks.len();
        let chunk = &mut self.chunks[id];
        let end = chunk.end;
        let next = chunk.next;

        let mut tail = Chunk::new(index, end);
        tail.outro = std::mem::take(&mut chunk.outro);
        tail.previous = Some(id);
        tail.next = next;
        if chunk.is_edited() {
            tail.edit = Some(String::new());
        }

        chunk.end = index;
        chunk.next = Some(new_id);
        if let Some(next) = next {
            self.chunks[next].previous = Some(new_id);
        }
        self.chunks.push(tail);

        self.by_start.insert(index, new_id);
        self.by_end.insert(index, id);
        self.by_end.insert(end, new_id);
        if self.last_chunk == id {
            self.last_chunk = new_id;
        }
        self.last_searched_chunk = id;

        tracing::trace!(index, chunk = id, "split chunk");
        new_id
    }
}

impl fmt::Display for MagicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in self.pieces() {
            f.write_str(piece)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_lookup_tables_consistent() {
        let mut s = MagicString::new("abcdef");
        s.split(2).unwrap();
        s.split(4).unwrap();
        s.split(1).unwrap();

        let ranges: Vec<(usize, usize)> = s
            .chunk_ids()
            .map(|id| (s.chunks[id].start, s.chunks[id].end))
            .collect();
        assert_eq!(ranges, vec![(0, 1), (1, 2), (2, 4), (4, 6)]);
        for id in s.chunk_ids() {
            let chunk = &s.chunks[id];
            assert_eq!(s.by_start[&chunk.start], id);
            assert_eq!(s.by_end[&chunk.end], id);
        }
        assert_eq!(s.chunks[s.last_chunk].end, 6);
    }

    #[test]
    fn test_split_inside_edited_chunk_fails() {
        let mut s = MagicString::new("abcdef");
        s.overwrite(1, 5, "X", OverwriteOptions::default()).unwrap();
        let err = s.split(3).unwrap_err();
        assert_eq!(
            err,
            MagicStringError::SplitEditedChunk {
                line: 0,
                column: 3,
                original: "bcde".to_string(),
            }
        );
    }

    #[test]
    fn test_split_inside_removed_chunk_is_allowed() {
        let mut s = MagicString::new("abcdef");
        s.remove(1, 5).unwrap();
        s.split(3).unwrap();
        assert_eq!(s.to_string(), "af");
    }

    #[test]
    fn test_trim_pattern_rejects_invalid_class() {
        let err = trim_pattern(Some("[a"), TrimSide::Start).unwrap_err();
        assert!(matches!(err, MagicStringError::InvalidCharType { .. }));
    }
}
