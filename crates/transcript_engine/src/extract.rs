use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Node;
use scraper::Html;

use crate::entities::unescape_entities;
use crate::normalize::normalize_plain_text;

/// Extraction failed in a way the strategy could not recover from.
///
/// Neither built-in strategy produces this in practice; the batch layer
/// maps it to a per-file parse failure as a safety net.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("text extraction failed: {message}")]
pub struct ExtractError {
    pub message: String,
}

/// A strategy turning one HTML document into normalized visible text.
///
/// Implementations are pure: same input, same output, no side effects.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<String, ExtractError>;
}

/// The strategy used when callers have no reason to pick one themselves.
pub fn default_extractor() -> &'static dyn Extractor {
    &DomExtractor
}

/// Elements whose entire subtree is invisible text.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Primary extractor backed by a real HTML parser.
///
/// Walks the parsed tree, skips `script`/`style`/`noscript` subtrees,
/// and emits one line per text node before normalizing. Entities are
/// already decoded by the parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomExtractor;

impl Extractor for DomExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractError> {
        let document = Html::parse_document(html);
        let mut buffer = String::new();
        for child in document.root_element().children() {
            visit_node(child, &mut buffer);
        }
        Ok(normalize_plain_text(&buffer))
    }
}

fn visit_node(node: NodeRef<'_, Node>, buffer: &mut String) {
    match node.value() {
        Node::Text(text) => {
            buffer.push_str(text);
            buffer.push('\n');
        }
        Node::Element(element) => {
            if SKIPPED_ELEMENTS.contains(&element.name()) {
                return;
            }
            for child in node.children() {
                visit_node(child, buffer);
            }
        }
        _ => {}
    }
}

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script\s*>").unwrap());
static STYLE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style\s*>").unwrap());
static NOSCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<noscript[^>]*>.*?</noscript\s*>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Fallback extractor with no parser behind it.
///
/// Tags are matched at the regex level only: an unterminated
/// `<script>` block or a stray `<` passes through as text. That is the
/// accepted limit of this strategy; the normalization guarantees are the
/// same as the primary's.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagStripExtractor;

impl Extractor for TagStripExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractError> {
        let text = SCRIPT_BLOCK.replace_all(html, "\n");
        let text = STYLE_BLOCK.replace_all(&text, "\n");
        let text = NOSCRIPT_BLOCK.replace_all(&text, "\n");
        let text = TAG.replace_all(&text, "\n");
        let text = unescape_entities(&text);
        Ok(normalize_plain_text(&text))
    }
}
