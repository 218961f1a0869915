//! Prompt construction for the two lyric variants.

/// Stylistic directives steering the tone of each variant. Variant 1 uses
/// the serious directive, variant 2 the casual one.
pub const STYLE_DIRECTIVES: [&str; 2] = [
    "The song should have hard-hitting serious words.",
    "The song should be made with casual words.",
];

/// Build the prompt for one variant.
///
/// `lang` and `genre` are embedded verbatim with no validation; the
/// description clause is omitted entirely when `desc` is empty.
pub fn build_prompt(lang: &str, genre: &str, directive: &str, desc: &str) -> String {
    let mut prompt = format!(
        "Generate a song lyrics in {} language and {} genre. {}",
        lang, genre, directive
    );

    if !desc.is_empty() {
        prompt.push_str(&format!(
            " Here's a short description of the song: {}.",
            desc
        ));
    }

    prompt.push_str("\nImportant: Only give the lyrics as output.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_desc_omits_description_clause() {
        let prompt = build_prompt("English", "Rock", STYLE_DIRECTIVES[0], "");
        assert!(prompt.contains("English"));
        assert!(prompt.contains("Rock"));
        assert!(!prompt.contains("short description"));
    }

    #[test]
    fn desc_is_embedded_verbatim() {
        let prompt = build_prompt("French", "Pop", STYLE_DIRECTIVES[1], "a song about rain");
        assert!(prompt.contains("a song about rain"));
    }

    #[test]
    fn each_directive_is_included() {
        for directive in STYLE_DIRECTIVES {
            let prompt = build_prompt("English", "Jazz", directive, "");
            assert!(prompt.contains(directive));
        }
    }

    #[test]
    fn prompt_ends_with_lyrics_only_instruction() {
        let prompt = build_prompt("English", "Rock", STYLE_DIRECTIVES[0], "about heartbreak");
        assert!(prompt.ends_with("Only give the lyrics as output."));
    }
}
