use crate::attributes::AttributeSpec;
use crate::model::Product;

pub mod attributes;
pub mod filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command produced. Matched products are borrowed from the catalog
/// the command ran against.
#[derive(Debug, Default)]
pub struct CmdResult<'a> {
    pub matched: Vec<&'a Product>,
    pub attributes: Vec<&'static AttributeSpec>,
    pub messages: Vec<CmdMessage>,
}

impl<'a> CmdResult<'a> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_matched(mut self, products: Vec<&'a Product>) -> Self {
        self.matched = products;
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<&'static AttributeSpec>) -> Self {
        self.attributes = attributes;
        self
    }
}
