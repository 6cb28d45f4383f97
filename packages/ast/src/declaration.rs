use crate::property::Property;
use crate::token::Token;

/// A `property: value` pair inside a rule body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: Property,
    pub value: Vec<Token>,
}

impl Declaration {
    pub fn new(property: Property, value: Vec<Token>) -> Self {
        Self { property, value }
    }

    /// Serialize back to `name:value` text, joining tokens verbatim
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        css.push_str(self.property.name());
        css.push(':');
        for token in &self.value {
            css.push_str(&token.text);
        }
        css
    }
}
