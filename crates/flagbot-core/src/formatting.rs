/// Threaded reply body: `_Translation for :flag-fr:_\nBonjour`.
pub fn translation_reply(reaction: &str, translated: &str) -> String {
    format!("_Translation for :{reaction}:_\n{translated}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_italicizes_header_and_keeps_text_verbatim() {
        assert_eq!(
            translation_reply("flag-fr", "Bonjour"),
            "_Translation for :flag-fr:_\nBonjour"
        );
        assert_eq!(
            translation_reply("jp", "line 1\nline 2"),
            "_Translation for :jp:_\nline 1\nline 2"
        );
    }
}
