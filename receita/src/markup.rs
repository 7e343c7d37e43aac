//! Recipe text to modal markup, and back.
//!
//! Rendering escapes first and only then introduces `<br>` and `<strong>`,
//! so nothing in a recipe can turn into markup. Stripping inverts the line
//! structure exactly: each `<br>` becomes one `\n`.

use crate::config::SiteConfig;

/// Escape the characters that would otherwise start markup or an entity.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render plain recipe text as modal markup.
///
/// Lines matching a configured section label are wrapped in `<strong>`.
pub fn render_recipe_html(text: &str, config: &SiteConfig) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace("\r\n", "\n")
        .split('\n')
        .map(|line| {
            let escaped = escape_html(line);
            if config.is_section_label(line) {
                format!("<strong>{}</strong>", escaped)
            } else {
                escaped
            }
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Strip modal markup back to plain text with newlines, trimmed.
///
/// `<br>` (any spelling) and `</p>` become newlines, every other tag is
/// dropped, and entities are decoded.
pub fn strip_html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(pos) = rest.find(&['<', '&'][..]) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('<') {
            match tail.find('>') {
                Some(end) => {
                    if is_line_break_tag(&tail[1..end]) {
                        out.push('\n');
                    }
                    rest = &tail[end + 1..];
                }
                // Unterminated tag swallows the remainder
                None => rest = "",
            }
        } else {
            match decode_entity(tail) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    rest = &tail[consumed..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            }
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn is_line_break_tag(inner: &str) -> bool {
    let inner = inner.trim().to_ascii_lowercase();
    if inner == "/p" {
        return true;
    }
    match inner.strip_prefix("br") {
        Some(after) => after.is_empty() || after.starts_with(&[' ', '/', '\t', '\n'][..]),
        None => false,
    }
}

/// Decode the entity at the start of `s` (which begins with `&`).
/// Returns the character and the number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let end = s.char_indices().take(12).find(|&(_, c)| c == ';')?.0;
    let name = &s[1..end];
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                name.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_before_markup() {
        let html = render_recipe_html("<script>alert(1)</script> & mais", &SiteConfig::default());
        assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt; &amp; mais");
    }

    #[test]
    fn test_section_labels_are_bold() {
        let html = render_recipe_html(
            "Materiais:\n2 ovos\n1 xícara de farinha",
            &SiteConfig::default(),
        );
        assert_eq!(html, "<strong>Materiais:</strong><br>2 ovos<br>1 xícara de farinha");
        assert_eq!(html.matches("<br>").count(), 2);
    }

    #[test]
    fn test_crlf_normalised() {
        let html = render_recipe_html("a\r\nb", &SiteConfig::default());
        assert_eq!(html, "a<br>b");
    }

    #[test]
    fn test_round_trip_preserves_line_structure() {
        let config = SiteConfig::default();
        let samples = [
            "Materiais:\n2 ovos\n1 xícara de farinha",
            "\n\nModo de preparo:\n\nMisture tudo.\n",
            "  espaços  \n  nas bordas  ",
            "3 < 4 && 5 > 2",
            "texto com &amp; literal e &lt;tag&gt;",
            "linha única",
            "",
        ];
        for text in samples {
            let html = render_recipe_html(text, &config);
            assert_eq!(strip_html_to_text(&html), text.trim(), "round trip of {:?}", text);
        }
    }

    #[test]
    fn test_strip_handles_foreign_markup() {
        assert_eq!(strip_html_to_text("<p>um</p><p>dois</p>"), "um\ndois");
        assert_eq!(strip_html_to_text("a<BR/>b<br />c"), "a\nb\nc");
        assert_eq!(strip_html_to_text("<em>x</em>&nbsp;y"), "x y");
        assert_eq!(strip_html_to_text("&#233;&#xE9;"), "éé");
        assert_eq!(strip_html_to_text("a & b &unknown; c"), "a & b &unknown; c");
        assert_eq!(strip_html_to_text("<border>x"), "x");
        assert_eq!(strip_html_to_text("fim <b"), "fim");
    }
}
