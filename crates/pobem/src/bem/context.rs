//! Accumulated block/element state for one selector.

use crate::config::BemConfig;

/// The block and element most recently named in a selector.
///
/// A new block always forgets the element. Flushing a pending class does
/// not reset anything, so a later `elem(...)` or `mod(...)` after a
/// combinator still composes against the last block seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BemContext {
    /// Current block name.
    pub block: Option<String>,
    /// Current element name.
    pub elem: Option<String>,
}

impl BemContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new block, forgetting any element.
    pub fn enter_block(&mut self, name: String) {
        self.block = non_empty(name);
        self.elem = None;
    }

    /// Enter an element of the current block.
    pub fn enter_elem(&mut self, name: String) {
        self.elem = non_empty(name);
    }

    /// Compose the class selector for the current state.
    ///
    /// The result is `.` followed by the block, the element delimiter and
    /// element, and the modifier delimiter and modifier, each part only when
    /// present. An empty context with no modifier yields a bare `.`.
    pub fn class_selector(&self, modifier: Option<&str>, config: &BemConfig) -> String {
        let mut selector = String::from(".");

        if let Some(block) = &self.block {
            selector.push_str(block);
        }
        if let Some(elem) = &self.elem {
            selector.push_str(&config.element_delimiter);
            selector.push_str(elem);
        }
        if let Some(modifier) = modifier.filter(|modifier| !modifier.is_empty()) {
            selector.push_str(&config.modifier_delimiter);
            selector.push_str(modifier);
        }

        selector
    }
}

fn non_empty(name: String) -> Option<String> {
    (!name.is_empty()).then_some(name)
}
