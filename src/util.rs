use std::{fs, io, path::Path};

/// Where CLI input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Literal,
}

/// Bytes to encode: the contents of `input` if it names a regular file,
/// otherwise the argument itself.
pub fn data_source(input: &str) -> io::Result<(Vec<u8>, Source)> {
    let path = Path::new(input);

    if path.is_file() {
        Ok((fs::read(path)?, Source::File))
    } else {
        // Not a real file → treat as literal string
        Ok((input.as_bytes().to_vec(), Source::Literal))
    }
}

/// Text to decode, trimmed. A file that is not valid UTF-8 (or cannot be
/// read) falls back to the literal argument.
pub fn text_source(input: &str) -> (String, Source) {
    match data_source(input) {
        Ok((bytes, Source::File)) => match String::from_utf8(bytes) {
            Ok(text) => (text.trim().to_string(), Source::File),
            Err(_) => (input.trim().to_string(), Source::Literal),
        },
        _ => (input.trim().to_string(), Source::Literal),
    }
}
