//! Text normalisation applied before layout.
//!
//! Both transforms are total: they never fail and never panic, whatever the
//! input looks like.

/// Strip visual-only formatting so the rendered image is as small as possible.
///
/// Blank lines are dropped, markdown heading markers and `**`/`__` emphasis
/// markers are removed, and interior runs of spaces collapse to one. Lines
/// are then joined into continuous prose so that word wrap, not the source,
/// decides where rows break. A line keeps its own row only when it is a list
/// item (`-` or `*` followed by whitespace, optionally indented) or starts
/// with a space.
///
/// Leading indentation is rebuilt as one space per whitespace character, so
/// tab-indented lines also keep their row.
///
/// Emphasis removal is plain substring removal, so `a__b` becomes `ab` even
/// in code. Only lines blank in the input are dropped: a line holding nothing
/// but `**` still contributes a separator, so callers should check the result
/// with `trim()`. Input with no non-blank lines yields an empty string.
pub fn minify_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut first = true;
    for line in text.split('\n') {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        let cleaned = clean_line(trimmed);
        if first {
            first = false;
        } else if starts_new_row(&cleaned) {
            out.push('\n');
        } else {
            out.push(' ');
        }
        out.push_str(&cleaned);
    }
    out
}

fn clean_line(line: &str) -> String {
    let line = strip_heading_marker(line);
    let line = line.replace("**", "").replace("__", "");
    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();
    let mut out = String::with_capacity(line.len());
    out.extend(core::iter::repeat(' ').take(indent));
    let mut prev_space = false;
    for ch in body.chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out
}

/// `# Title` through `###### Title` lose the marker and the whitespace after it.
fn strip_heading_marker(line: &str) -> &str {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return line;
    }
    let rest = &line[hashes..];
    match rest.chars().next() {
        Some(ch) if ch.is_whitespace() => rest.trim_start(),
        _ => line,
    }
}

fn starts_new_row(line: &str) -> bool {
    if line.starts_with(' ') {
        return true;
    }
    let mut chars = line.trim_start().chars();
    matches!(chars.next(), Some('-' | '*')) && chars.next().is_some_and(char::is_whitespace)
}

/// Compact JSON by dropping insignificant whitespace.
///
/// Valid JSON is parsed and re-serialised with no whitespace, keeping object
/// key order. Anything that does not parse goes through a scanner that
/// collapses whitespace runs and removes whitespace around `{ } : , [ ]`.
pub fn compact_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => match serde_json::to_string(&value) {
            Ok(compact) => compact,
            Err(err) => {
                log::warn!("json re-serialisation failed, using scanner: {}", err);
                compact_json_fallback(text)
            }
        },
        Err(err) => {
            log::warn!("input is not valid json ({}), using scanner", err);
            compact_json_fallback(text)
        }
    }
}

fn compact_json_fallback(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    let mut after_punct = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        let punct = matches!(ch, '{' | '}' | ':' | ',' | '[' | ']');
        if pending_space && !punct && !after_punct {
            out.push(' ');
        }
        pending_space = false;
        after_punct = punct;
        out.push(ch);
    }
    out.trim().to_string()
}
