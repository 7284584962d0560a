use core::{
    fmt,
    str::{self, Utf8Error},
};

/// Text that fits a fixed `N` byte field, terminator included.
///
/// At most `N - 1` bytes of content are kept. Longer input is cut at the
/// last character boundary that fits, so the stored value is always valid
/// UTF-8 and always leaves room for the NUL terminator. Input is also cut at
/// its first NUL, like a C string copy would.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedText<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedText<N> {
    /// Usable content bytes.
    pub const CAPACITY: usize = N - 1;

    pub const fn new() -> Self {
        return Self {
            bytes: [0; N],
            len: 0,
        };
    }

    /// Copies as much of `text` as fits.
    pub fn truncate_from(text: &str) -> Self {
        let text = match text.find('\0') {
            Some(nul) => &text[..nul],
            None => text,
        };
        let mut end = text.len().min(Self::CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let mut bounded = Self::new();
        bounded.bytes[..end].copy_from_slice(&text.as_bytes()[..end]);
        bounded.len = end;
        return bounded;
    }

    /// Reads a NUL-terminated field. Without a terminator the first
    /// `N - 1` bytes are taken.
    pub fn from_field(field: &[u8]) -> Result<Self, Utf8Error> {
        let field = &field[..field.len().min(Self::CAPACITY)];
        let end = field.iter().position(|b| *b == 0).unwrap_or(field.len());
        let text = match str::from_utf8(&field[..end]) {
            Ok(text) => text,
            // A sender that cut a multi-byte character at the bound
            Err(err) if err.error_len().is_none() => str::from_utf8(&field[..err.valid_up_to()])?,
            Err(err) => return Err(err),
        };
        return Ok(Self::truncate_from(text));
    }

    pub fn as_str(&self) -> &str {
        // Contents are only ever copied from a `&str` at a char boundary
        return str::from_utf8(&self.bytes[..self.len]).unwrap_or_default();
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// The whole field: content, terminator and zero padding.
    pub fn as_field(&self) -> &[u8; N] {
        return &self.bytes;
    }
}

impl<const N: usize> Default for BoundedText<N> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<const N: usize> From<&str> for BoundedText<N> {
    fn from(text: &str) -> Self {
        return Self::truncate_from(text);
    }
}

impl<const N: usize> PartialEq<str> for BoundedText<N> {
    fn eq(&self, other: &str) -> bool {
        return self.as_str() == other;
    }
}

impl<const N: usize> PartialEq<&str> for BoundedText<N> {
    fn eq(&self, other: &&str) -> bool {
        return self.as_str() == *other;
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.as_str());
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return fmt::Debug::fmt(self.as_str(), f);
    }
}
