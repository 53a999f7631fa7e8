use regex::Regex;
use std::sync::OnceLock;

/// Additive/allergen references such as `(1)` or `(2,3a,12)`.
const CODE_GROUP: &str = r"\(\d+[a-z]*(?:,\d+[a-z]*)*\)";

fn code_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CODE_GROUP).expect("regex should be valid"))
}

/// Same groups plus the single space in front of them, for removal.
fn spaced_code_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(" ?{CODE_GROUP}")).expect("regex should be valid"))
}

/// `" |"` list separator, swallowing the space after the pipe.
fn separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" \|\s*").expect("regex should be valid"))
}

/// Strip or highlight the reference codes in `text`, then turn the
/// `" |"` separated parts into a bulleted list.
pub fn format_description(text: &str, show_allergies: bool) -> String {
    let text = if show_allergies {
        code_group().replace_all(text, "```$0```")
    } else {
        spaced_code_group().replace_all(text, "")
    };
    separator()
        .replace_all(text.trim(), "\n- ")
        .into_owned()
}
