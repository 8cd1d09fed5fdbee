//! Page-list declaration inside the generated build config.
//!
//! The build config carries a single line of the form
//! `let svelte_apps = ["index", "about"];`. Everything else in the file is
//! opaque and passed through byte-for-byte, as is anything after the `;`
//! on the declaration line itself.

/// Name of the list variable registering pages in the build config.
pub const PAGE_LIST_VARIABLE: &str = "svelte_apps";

/// Entries declared by the first `let <variable> =` line, or `None` if the
/// content has no such line.
pub fn registered_entries(content: &str, variable: &str) -> Option<Vec<String>> {
    content
        .split_inclusive('\n')
        .find(|line| is_declaration(line.trim(), variable))
        .map(|line| parse_entries(split_terminator(line).0))
}

/// Append `entry` to the declared list and return the rewritten content.
///
/// Existing entries keep their order and duplicates; `entry` is appended even
/// if already present. Returns `None` when no declaration line exists.
pub fn append_entry(content: &str, variable: &str, entry: &str) -> Option<String> {
    let mut output = String::with_capacity(content.len() + entry.len() + 4);
    let mut replaced = false;

    for line in content.split_inclusive('\n') {
        if replaced || !is_declaration(line.trim(), variable) {
            output.push_str(line);
            continue;
        }

        let (body, terminator) = split_terminator(line);
        let indent = &body[..body.len() - body.trim_start().len()];
        let mut entries = parse_entries(body);
        entries.push(entry.to_string());

        output.push_str(indent);
        output.push_str(&render_declaration(variable, &entries));
        output.push_str(split_value(body).1);
        output.push_str(terminator);
        replaced = true;
    }

    replaced.then_some(output)
}

/// Canonical declaration line, without indentation or terminator.
pub fn render_declaration(variable: &str, entries: &[String]) -> String {
    let list = entries.iter().map(|e| format!("\"{}\"", e)).collect::<Vec<_>>().join(", ");
    format!("let {} = [{}];", variable, list)
}

/// Whether `entry` reads back as exactly itself once rendered into a
/// declaration. Entries containing separators or quotes do not.
pub fn is_representable(variable: &str, entry: &str) -> bool {
    let line = render_declaration(variable, &[entry.to_string()]);
    parse_entries(&line) == [entry]
}

/// Matches `let <variable> =` with any whitespace between the tokens.
fn is_declaration(trimmed: &str, variable: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix("let") else {
        return false;
    };
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let Some(rest) = rest.trim_start().strip_prefix(variable) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

/// Split a declaration body into the list text between `=` and the first
/// `;`, and whatever follows that `;`.
fn split_value(body: &str) -> (&str, &str) {
    let Some((_, rhs)) = body.split_once('=') else {
        return ("", "");
    };
    match rhs.split_once(';') {
        Some((list, tail)) => (list, tail),
        None => (rhs, ""),
    }
}

fn parse_entries(body: &str) -> Vec<String> {
    let rhs = split_value(body).0.trim();
    let inner = rhs.strip_prefix('[').unwrap_or(rhs);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\'').trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
