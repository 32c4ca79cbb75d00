use std::{
    fmt::{Debug, Display},
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

/// Byte offset into a source text.
pub type Cursor1 = usize;

/// Human-facing position, both fields counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor2 {
    pub line: usize,
    pub column: usize,
}
impl Display for Cursor2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Cursor2 { line, column } = self;
        write!(f, "{line}:{column}",)
    }
}

/// Line table of one source text, used to translate byte offsets.
#[derive(Clone, Debug)]
pub struct FileInfo {
    /// byte offsets at which each line starts
    starts: Vec<usize>,
    len: usize,
    path: Option<Arc<PathBuf>>,
}

impl FileInfo {
    pub fn new(s: &str, path: Option<Arc<PathBuf>>) -> Self {
        let mut starts = vec![0];
        for (i, c) in s.char_indices() {
            if c == '\n' {
                starts.push(i + 1);
            }
        }
        FileInfo { starts, len: s.len(), path }
    }
    pub fn trans_span2(&self, offset: Cursor1) -> Cursor2 {
        let offset = offset.min(self.len);
        // index of the last line start that is <= offset
        let idx = match self.starts.binary_search(&offset) {
            | Ok(idx) => idx,
            | Err(idx) => idx - 1,
        };
        Cursor2 { line: idx + 1, column: offset - self.starts[idx] + 1 }
    }
    /// A name suitable for diagnostics; `<input>` when there is no backing file.
    pub fn display_name(&self) -> String {
        match &self.path {
            | Some(path) => path.display().to_string(),
            | None => format!("<input>"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Cursor1,
    end: Cursor1,
}

impl Span {
    pub fn new(l: Cursor1, r: Cursor1) -> Span {
        Span { start: l, end: r }
    }
    pub fn dummy() -> Span {
        Span::new(0, 0)
    }
    pub fn start(&self) -> Cursor1 {
        self.start
    }
    pub fn end(&self) -> Cursor1 {
        self.end
    }
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
    pub fn make<T>(&self, inner: T) -> Sp<T> {
        Sp { inner, info: *self }
    }
    /// Render as `line:col` pairs against a line table.
    pub fn locate(&self, info: &FileInfo) -> String {
        format!("{} - {}", info.trans_span2(self.start), info.trans_span2(self.end))
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::dummy()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { start, end } = self;
        write!(f, "{start}-{end}")
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Sp<T> {
    pub inner: T,
    pub info: Span,
}

impl<T> Sp<T> {
    #[inline]
    pub fn inner_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: PartialEq> PartialEq for Sp<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq(&other.inner)
    }
}

impl<T: Eq> Eq for Sp<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn offsets_translate_to_line_and_column() {
        let info = FileInfo::new("ab\ncd\n\nef", None);
        assert_eq!(info.trans_span2(0), Cursor2 { line: 1, column: 1 });
        assert_eq!(info.trans_span2(2), Cursor2 { line: 1, column: 3 });
        assert_eq!(info.trans_span2(3), Cursor2 { line: 2, column: 1 });
        assert_eq!(info.trans_span2(6), Cursor2 { line: 3, column: 1 });
        assert_eq!(info.trans_span2(8), Cursor2 { line: 4, column: 2 });
        // past the end clamps to the last position
        assert_eq!(info.trans_span2(100), Cursor2 { line: 4, column: 3 });
    }

    #[test]
    fn span_locates_against_file() {
        let info = FileInfo::new("x = 1;\ny = 2;", None);
        let span = Span::new(7, 12);
        assert_eq!(span.locate(&info), "2:1 - 2:6");
        assert_eq!(info.display_name(), "<input>");
    }
}
