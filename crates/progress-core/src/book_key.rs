// File: crates/progress-core/src/book_key.rs
// Summary: Reversible mapping between book names and log file names.
//
// Names stay readable (non-ASCII included). These are written as `%XX` of
// their UTF-8 bytes:
// - `%` itself and control characters,
// - path and reserved characters `/ \ : * ? " < > |`,
// - a leading `.`, and a trailing `.` or space.
// The result gets the `.csv` extension. Only canonical file names map back
// to a book; anything else in the collection is ignored.

/// Extension of every progress log in the collection.
pub const LOG_EXTENSION: &str = "csv";

const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '%'];

fn needs_escape(c: char, index: usize, last: usize) -> bool {
    c.is_control()
        || RESERVED.contains(&c)
        || (index == 0 && c == '.')
        || (index == last && (c == '.' || c == ' '))
}

/// File name (no directory) holding the log for `book`.
pub fn file_name_for(book: &str) -> String {
    let last = book.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(book.len() + LOG_EXTENSION.len() + 1);
    for (i, c) in book.chars().enumerate() {
        if needs_escape(c, i, last) {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{b:02X}"));
            }
        } else {
            out.push(c);
        }
    }
    out.push('.');
    out.push_str(LOG_EXTENSION);
    out
}

/// Book name stored in `file_name`, if it is a canonical log file name.
pub fn book_for_file_name(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(LOG_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() {
        return None;
    }
    let book = unescape(stem)?;
    (file_name_for(&book) == file_name).then_some(book)
}

fn unescape(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = stem.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
