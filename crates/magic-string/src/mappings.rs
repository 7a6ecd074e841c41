//! Incremental builder for decoded sourcemap segments.
//!
//! The builder walks the rendered output in order. Inserted text only advances the
//! generated position; edited chunks emit one segment per generated line; unedited
//! chunks emit a segment per line start (or per character in hi-res mode).

use std::collections::BTreeSet;

use crate::locator::Location;
use crate::sourcemap::Segment;

pub(crate) struct Mappings {
    hires: bool,
    generated_column: u32,
    lines: Vec<Vec<Segment>>,
    current: Vec<Segment>,
}

fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

impl Mappings {
    pub(crate) fn new(hires: bool) -> Self {
        Self {
            hires,
            generated_column: 0,
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    fn new_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.generated_column = 0;
    }

    fn segment(&self, source_index: u32, loc: Location, name_index: Option<u32>) -> Segment {
        Segment {
            generated_column: self.generated_column,
            source_index,
            original_line: loc.line as u32,
            original_column: loc.column as u32,
            name_index,
        }
    }

    /// Move the generated position past unmapped text.
    pub(crate) fn advance(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match text.rfind('\n') {
            Some(last_break) => {
                for _ in 0..text.matches('\n').count() {
                    self.new_line();
                }
                self.generated_column = utf16_len(&text[last_break + 1..]);
            }
            None => self.generated_column += utf16_len(text),
        }
    }

    /// Map replacement content back to the start of its original chunk.
    pub(crate) fn add_edit(
        &mut self,
        source_index: u32,
        content: &str,
        loc: Location,
        name_index: Option<u32>,
    ) {
        if content.is_empty() {
            return;
        }

        // A trailing newline does not open a mapped line of its own.
        let last = content.len() - 1;
        let mut tail_start = 0;
        while let Some(found) = content[tail_start..].find('\n') {
            let line_end = tail_start + found;
            if line_end >= last {
                break;
            }
            let segment = self.segment(source_index, loc, name_index);
            self.current.push(segment);
            self.new_line();
            tail_start = line_end + 1;
        }

        let segment = self.segment(source_index, loc, name_index);
        self.current.push(segment);
        self.advance(&content[tail_start..]);
    }

    /// Map an untouched slice of the original text starting at byte `start`.
    pub(crate) fn add_unedited_chunk(
        &mut self,
        source_index: u32,
        text: &str,
        start: usize,
        mut loc: Location,
        sourcemap_locations: &BTreeSet<usize>,
    ) {
        let mut first = true;
        for (offset, ch) in text.char_indices() {
            if ch == '\n' {
                loc.line += 1;
                loc.column = 0;
                self.new_line();
                first = true;
                continue;
            }

            if self.hires || first || sourcemap_locations.contains(&(start + offset)) {
                let segment = self.segment(source_index, loc, None);
                self.current.push(segment);
            }

            let width = ch.len_utf16();
            loc.column += width;
            self.generated_column += width as u32;
            first = false;
        }
    }

    pub(crate) fn into_lines(mut self) -> Vec<Vec<Segment>> {
        self.lines.push(self.current);
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(line: usize, column: usize) -> Location {
        Location { line, column }
    }

    fn columns(lines: &[Vec<Segment>]) -> Vec<Vec<(u32, u32, u32)>> {
        lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|s| (s.generated_column, s.original_line, s.original_column))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_lores_unedited_chunk_maps_line_starts() {
        let mut mappings = Mappings::new(false);
        mappings.add_unedited_chunk(0, "ab\ncd", 0, origin(0, 0), &BTreeSet::new());
        assert_eq!(
            columns(&mappings.into_lines()),
            vec![vec![(0, 0, 0)], vec![(0, 1, 0)]]
        );
    }

    #[test]
    fn test_hires_unedited_chunk_maps_every_char() {
        let mut mappings = Mappings::new(true);
        mappings.add_unedited_chunk(0, "abc", 0, origin(0, 0), &BTreeSet::new());
        assert_eq!(
            columns(&mappings.into_lines()),
            vec![vec![(0, 0, 0), (1, 0, 1), (2, 0, 2)]]
        );
    }

    #[test]
    fn test_sourcemap_locations_add_segments() {
        let mut mappings = Mappings::new(false);
        let locations = BTreeSet::from([12]);
        mappings.add_unedited_chunk(0, "abcd", 10, origin(0, 10), &locations);
        assert_eq!(
            columns(&mappings.into_lines()),
            vec![vec![(0, 0, 10), (2, 0, 12)]]
        );
    }

    #[test]
    fn test_multiline_edit_maps_each_line_to_chunk_start() {
        let mut mappings = Mappings::new(false);
        mappings.advance("//");
        mappings.add_edit(0, "x\ny\n", origin(3, 4), Some(0));
        let lines = mappings.into_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].generated_column, 2);
        assert_eq!(lines[0][0].name_index, Some(0));
        assert_eq!(lines[1][0].generated_column, 0);
        assert_eq!(lines[1][0].original_line, 3);
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_advance_counts_utf16_units() {
        let mut mappings = Mappings::new(false);
        mappings.advance("😀");
        mappings.add_unedited_chunk(0, "a", 0, origin(0, 0), &BTreeSet::new());
        assert_eq!(columns(&mappings.into_lines()), vec![vec![(2, 0, 0)]]);
    }
}
