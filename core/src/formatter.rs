use crate::stripper::{LineInfo, StrippedFile};

/// Decide which blank lines survive comment removal. Non-blank lines keep
/// their original indentation; the formatter never re-indents, it only
/// drops lines and trims trailing whitespace left by deleted comments.
///
/// Policy, per line:
/// - lines overlapping a multi-line string body pass through untouched;
/// - a line that is blank only because its comment was deleted is removed
///   entirely, terminator included;
/// - a pre-existing blank line is dropped between a `)`/`}` line and a
///   following `.`-chain line, kept between two content lines when the
///   previous does not end with `{` and the next does not start with `}`,
///   and dropped otherwise (brace-adjacent, file start/end, or after
///   another kept blank, which collapses runs of blanks to one).
///
/// The policy is a fixed point: normalizing already-normalized text is the
/// identity.
pub fn normalize(stripped: &StrippedFile) -> String {
    let text = &stripped.text;
    let trailing_newline = text.ends_with('\n');
    let mut raw: Vec<&str> = text.split('\n').collect();
    if trailing_newline {
        raw.pop();
    }

    let mut kept: Vec<&str> = Vec::with_capacity(raw.len());
    for (i, &line) in raw.iter().enumerate() {
        let info = line_info(stripped, i);
        if info.protected {
            kept.push(line);
            continue;
        }
        if !line.trim().is_empty() {
            if info.comment_removed {
                // Trailing whitespace left where an end-of-line comment sat.
                kept.push(line.trim_end());
            } else {
                kept.push(line);
            }
            continue;
        }
        if info.comment_removed {
            // The line only existed to hold its comment.
            continue;
        }
        if keep_blank(&kept, &raw, &stripped.lines, i) {
            kept.push(line);
        }
    }

    let mut out = kept.join("\n");
    if trailing_newline && !out.is_empty() {
        out.push('\n');
    }
    out
}

fn keep_blank(kept: &[&str], raw: &[&str], infos: &[LineInfo], i: usize) -> bool {
    let prev = kept.last().map(|l| l.trim_end());
    let next = next_content(raw, infos, i);

    if let (Some(prev), Some(next)) = (prev, next) {
        // Method-chain continuation: the chain must stay visually adjacent
        // once the comment between the calls is gone.
        if (prev.ends_with(')') || prev.ends_with('}')) && next.trim_start().starts_with('.') {
            return false;
        }
    }

    match (prev, next) {
        (Some(prev), Some(next)) => {
            !prev.is_empty() && !prev.ends_with('{') && !next.trim_start().starts_with('}')
        }
        _ => false,
    }
}

/// First line after `i` that carries content. Multi-line string lines count
/// as content even when blank.
fn next_content<'a>(raw: &[&'a str], infos: &[LineInfo], i: usize) -> Option<&'a str> {
    raw.iter().enumerate().skip(i + 1).find_map(|(j, line)| {
        let protected = infos.get(j).is_some_and(|l| l.protected);
        if protected || !line.trim().is_empty() {
            Some(*line)
        } else {
            None
        }
    })
}

fn line_info(stripped: &StrippedFile, i: usize) -> LineInfo {
    stripped.lines.get(i).copied().unwrap_or_default()
}
