use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("Invalid regex pattern"))
}

/// Reduces a client-supplied filename to something safe to join onto the
/// upload directory.
///
/// The name is NFKD-normalized so accented letters keep their base letter,
/// then the remaining non-ASCII characters are dropped. Both `/` and `\`
/// become word breaks, whitespace runs become a single `_`, anything outside
/// `[A-Za-z0-9_.-]` is removed and leading/trailing dots and underscores are
/// trimmed. The result may be empty.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = unsafe_chars().replace_all(&joined, "");

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_kept() {
        assert_eq!(secure_filename("b.JPG"), "b.JPG");
        assert_eq!(secure_filename("my-shot_01.png"), "my-shot_01.png");
    }

    #[test]
    fn test_path_components_are_flattened() {
        assert_eq!(secure_filename("../../etc/passwd.png"), "etc_passwd.png");
        assert_eq!(secure_filename("C:\\Users\\me\\pic.gif"), "C_Users_me_pic.gif");
        assert_eq!(secure_filename("/var/www/x.png"), "var_www_x.png");
    }

    #[test]
    fn test_whitespace_and_unsafe_characters() {
        assert_eq!(secure_filename("my  cool\tpic.png"), "my_cool_pic.png");
        assert_eq!(secure_filename("a<b>c?.png"), "abc.png");
    }

    #[test]
    fn test_accented_letters_fold_to_ascii() {
        assert_eq!(secure_filename("café.png"), "cafe.png");
        assert_eq!(secure_filename("ñ.png"), "n.png");
        assert_eq!(secure_filename("Ｒésumé ｐhoto.JPG"), "Resume_photo.JPG");
        assert_eq!(secure_filename("日本.png"), "png");
    }

    #[test]
    fn test_leading_and_trailing_dots_are_stripped() {
        assert_eq!(secure_filename(".hidden.png"), "hidden.png");
        assert_eq!(secure_filename("__init__.py."), "init__.py");
        assert_eq!(secure_filename("..."), "");
    }
}
