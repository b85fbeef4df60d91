//! Compact byte ranges into the buffer being filtered.
//!
//! Ranges are how the filter hands recognized markup (HTML tags and
//! comments) to a [`MarkupBlanker`](crate::markup::MarkupBlanker).
//! Offsets are `u32`; see [`Range::from_usize`] for buffers past 4GB.

/// Half-open byte range `[start, end)` into a filter buffer.
///
/// # Example
/// ```
/// use mdblank::Range;
///
/// let input = b"<b>bold</b>";
/// let range = Range::new(0, 3);
/// assert_eq!(range.slice(input), b"<b>");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from buffer offsets.
    ///
    /// Offsets past `u32::MAX` saturate, so markup beyond the first 4GB of a
    /// buffer is reported as a range that stops short or is empty.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start: saturate(start),
            end: saturate(end),
        }
    }

    /// The bytes this range covers.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// The bytes this range covers, mutably. Blanking through this slice
    /// can never change the buffer length.
    #[inline]
    pub fn slice_mut<'a>(&self, input: &'a mut [u8]) -> &'a mut [u8] {
        &mut input[self.start_usize()..self.end_usize()]
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}

#[inline]
fn saturate(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_slice_mut_blanks_in_place() {
        let mut input = *b"a <i> b";
        let r = Range::from_usize(2, 5);
        for b in r.slice_mut(&mut input) {
            *b = b' ';
        }
        assert_eq!(&input, b"a     b");
    }

    #[test]
    fn test_range_offsets_saturate() {
        let max = u32::MAX as usize;
        assert_eq!(Range::from_usize(10, 20), Range::new(10, 20));
        assert_eq!(Range::from_usize(max - 1, max + 5), Range::new(u32::MAX - 1, u32::MAX));
        assert_eq!(Range::from_usize(max + 1, max + 5), Range::new(u32::MAX, u32::MAX));
    }
}
