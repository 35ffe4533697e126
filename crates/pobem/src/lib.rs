//! BEM selector preprocessing for stylesheets.
//!
//! pobem rewrites a declarative BEM authoring syntax into flat class
//! selectors:
//!
//! - **Selectors**: `block(b).elem(e).mod(m v)` becomes `.b__e_m_v`
//! - **At-rules**: `@block(b) { ... }` is treated like `block(b) { ... }`
//! - **Delimiters**: element and modifier delimiters are configurable, and
//!   can be read from `BEM_ELEM_DELIM` / `BEM_MOD_DELIM`
//!
//! Everything around the BEM tokens (tag names, combinators, pseudo-classes,
//! attribute selectors) is kept verbatim.
//!
//! # Example
//!
//! ```
//! let css = pobem::process("block(menu).elem(item):hover { color: red }").unwrap();
//! assert_eq!(css, ".menu__item:hover { color: red }");
//! ```

pub mod bem;
pub mod config;
pub mod logging;
pub mod normalize;
pub mod transform;

mod error;

pub use bem::SelectorRewriter;
pub use config::BemConfig;
pub use error::{Error, Result};
pub use normalize::normalize_at_rules;
pub use transform::{BemTransform, TransformSummary};

pub use pobem_stylesheet::Stylesheet;

/// Transform a stylesheet with the default delimiters.
pub fn process(css: &str) -> Result<String> {
    BemTransform::default().process(css)
}

/// Rewrite a single selector.
///
/// ```
/// use pobem::BemConfig;
///
/// let config = BemConfig::new().with_element_delimiter("--");
/// assert_eq!(pobem::rewrite_selector("block(a) elem(b)", &config), ".a--b");
/// ```
pub fn rewrite_selector(selector: &str, config: &BemConfig) -> String {
    SelectorRewriter::new(config.clone()).rewrite(selector)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::bem::{BemContext, Keyword, SelectorRewriter, Token};
    pub use crate::config::BemConfig;
    pub use crate::transform::{BemTransform, TransformSummary};
    pub use crate::{Error, Result};
    pub use pobem_stylesheet::{AtRule, Node, Rule, Stylesheet};
}
