//! Cursor-preserving text insertion shared by every insert-at-cursor action.

/// Result of a buffer mutation: the new text and the collapsed cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub buffer: String,
    pub cursor: usize,
}

/// Replace `buffer[start..end]` with `content`.
///
/// Offsets are byte positions; values past the end of the buffer or inside
/// a UTF-8 sequence are clamped to the nearest boundary at or below. The
/// returned cursor collapses to the end of the inserted content.
///
/// Entity registries are never touched here; callers register entities
/// before asking for their token to be inserted.
///
/// # Returns
/// The updated buffer and collapsed cursor position.
pub fn insert_at_cursor(buffer: &str, start: usize, end: usize, content: &str) -> Insertion {
    let start = clamp_to_boundary(buffer, start);
    let end = clamp_to_boundary(buffer, end).max(start);

    let mut out = String::with_capacity(buffer.len() - (end - start) + content.len());
    out.push_str(&buffer[..start]);
    out.push_str(content);
    out.push_str(&buffer[end..]);

    Insertion {
        buffer: out,
        cursor: start + content.len(),
    }
}

fn clamp_to_boundary(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while at > 0 && !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_cursor_inserts_in_place() {
        let result = insert_at_cursor("abcdef", 2, 2, "(( X ))");
        assert_eq!(result.buffer, "ab(( X ))cdef");
        assert_eq!(result.cursor, 2 + "(( X ))".len());
    }

    #[test]
    fn selection_is_replaced() {
        let result = insert_at_cursor("hello world", 6, 11, "mundo");
        assert_eq!(result.buffer, "hello mundo");
        assert_eq!(result.cursor, 11);
    }

    #[test]
    fn offsets_are_clamped_to_the_buffer() {
        let result = insert_at_cursor("abc", 10, 20, "!");
        assert_eq!(result.buffer, "abc!");
        assert_eq!(result.cursor, 4);
    }

    #[test]
    fn offsets_inside_a_char_snap_to_its_start() {
        // "é" is two bytes; offset 1 lands inside it.
        let result = insert_at_cursor("éa", 1, 1, "x");
        assert_eq!(result.buffer, "xéa");
        assert_eq!(result.cursor, 1);
    }

    #[test]
    fn inverted_range_collapses_to_start() {
        let result = insert_at_cursor("abcdef", 4, 2, "-");
        assert_eq!(result.buffer, "abcd-ef");
        assert_eq!(result.cursor, 5);
    }
}
