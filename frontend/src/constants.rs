pub static PROP_NAME: &'static str = "name";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_PATTERN: &'static str = "pattern";
pub static PROP_REQUIRED: &'static str = "required";
pub static PROP_MAX_LENGTH: &'static str = "maxlength";
pub static PROP_MIN_LENGTH: &'static str = "minlength";
pub static PROP_AUTOCOMPLETE: &'static str = "autocomplete";
pub static PROP_TAB_INDEX: &'static str = "tabindex";
pub static PROP_ARIA_HIDDEN: &'static str = "aria-hidden";
pub static PROP_ARIA_LABEL: &'static str = "aria-label";

pub static TAG_DIV: &'static str = "div";
pub static TAG_P: &'static str = "p";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_LABEL: &'static str = "label";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_IMG: &'static str = "img";

pub static EMAIL_PATTERN: &'static str = ".+@.+\\..+";

pub static SITE_TAG: &'static str = "trsctr.github.io";
pub static PAGE_TITLE: &'static str = "Hello, my name is Otto";
pub static PHOTO_URL: &'static str = "assets/meika.jpg";
