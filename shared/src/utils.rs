use lol_html::{comments, doc_comments, element, HtmlRewriter, Settings};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::MESSAGE_MIN_CHARS;
use crate::errors::InputError;
use crate::types::ContactMessage;

// elements whose content is never shown as text
static DROP_WITH_CONTENT: [&str; 14] = [
    "script", "style", "iframe", "noscript", "noembed", "noframes",
    "template", "title", "xmp", "svg", "math", "head",
    "textarea", "plaintext",
];

// markup the rewriter passes through untouched: end tags without a start
// tag, doctypes and other `<!...>` declarations, half-open tags at the end
static RE_RESIDUAL_MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|<[!?][^>]*>?|</?[A-Za-z][^>]*>?").unwrap()
});

static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".+@.+\..+").unwrap()
});

/// Strips every tag, attribute and comment from `value`, leaving the text
/// content only.
pub fn sanitize(value: &str) -> String {
    if !value.contains('<') {
        return value.to_string();
    }

    let mut output = vec![];
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![
                element!("*", |el| {
                    if DROP_WITH_CONTENT.contains(&el.tag_name().as_str()) {
                        el.remove();
                    } else {
                        el.remove_and_keep_content();
                    }
                    Ok(())
                }),
                comments!("*", |c| {
                    c.remove();
                    Ok(())
                }),
            ],
            document_content_handlers: vec![
                doc_comments!(|c| {
                    c.remove();
                    Ok(())
                }),
            ],
            ..Settings::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    if let Err(err) = rewriter.write(value.as_bytes()) {
        log::warn!("sanitize[write]: {:?}", err);
        return String::new();
    }
    if let Err(err) = rewriter.end() {
        log::warn!("sanitize[end]: {:?}", err);
        return String::new();
    }

    match String::from_utf8(output) {
        Ok(text) => RE_RESIDUAL_MARKUP.replace_all(&text, "").into_owned(),
        Err(err) => {
            log::warn!("sanitize[utf8]: {:?}", err);
            String::new()
        }
    }
}

/// Coarse check: something, `@`, something, `.`, something.
pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

pub fn validate(message: &ContactMessage) -> Result<(), InputError> {
    if !is_valid_email(&message.user_email) {
        return Err(InputError::InvalidEmail);
    }
    // counted in UTF-16 units, as the browser's maxlength/minlength do
    if message.message.encode_utf16().count() < MESSAGE_MIN_CHARS {
        return Err(InputError::MessageTooShort { min: MESSAGE_MIN_CHARS });
    }
    Ok(())
}
