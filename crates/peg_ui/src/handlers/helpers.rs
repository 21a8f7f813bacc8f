//! Helper functions for handler modules.

/// Clean up a file URL (from drag-drop or paste) to a regular path.
pub fn clean_file_url(url: &str) -> String {
    let first_uri = url
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or("");

    let path = if let Some(without_prefix) = first_uri.strip_prefix("file://") {
        percent_decode(without_prefix)
    } else {
        return url.to_string();
    };

    path.trim().to_string()
}

/// Simple percent decoding for file paths.
fn percent_decode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() == 2 {
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    result.push(byte as char);
                    continue;
                }
            }
            result.push('%');
            result.push_str(&hex);
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through_untouched() {
        assert_eq!(clean_file_url("/data/E5.BIN"), "/data/E5.BIN");
        assert_eq!(clean_file_url("texto com espaço"), "texto com espaço");
    }

    #[test]
    fn file_url_is_decoded() {
        assert_eq!(
            clean_file_url("file:///data/pasta%20nova/E5.BIN"),
            "/data/pasta nova/E5.BIN"
        );
    }
}
