//! CSS Style Attributes: reading and rewriting `style="..."` attribute values.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use core::fmt;

/// A single CSS declaration parsed from a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value slice trimmed of surrounding ASCII whitespace. May contain spaces.
    pub value: String,
}

impl Declaration {
    /// Build a declaration, lowercasing the property name.
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: to_ascii_lowercase(property.trim_matches(is_ascii_whitespace)),
            value: value.trim_matches(is_ascii_whitespace).to_owned(),
        }
    }
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Trims ASCII whitespace and lowercases the property name.
/// - Skips empty or invalid items (no colon, empty property, or empty value after trimming).
///
/// Values containing `;` inside strings or `url(...)` are not supported.
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = raw_value.trim_matches(is_ascii_whitespace);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: to_ascii_lowercase(property_text),
            value: value_text.to_owned(),
        });
    }
    out
}

/// An ordered declaration block backing one element's inline style.
///
/// Mirrors the CSSOM `element.style` behavior the slider relies on: assigning a
/// property replaces it in place, assigning an empty value removes it, and
/// serialization keeps first-assignment order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<Declaration>,
}

impl StyleDeclarations {
    /// Parse an attribute value. Duplicate properties collapse to their last value.
    pub fn parse(input: &str) -> Self {
        let mut block = Self::default();
        for decl in parse_style_attribute(input) {
            block.set(&decl.property, &decl.value);
        }
        block
    }

    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        let needle = to_ascii_lowercase(property);
        self.declarations
            .iter()
            .find(|decl| decl.property == needle)
            .map(|decl| decl.value.as_str())
    }

    /// Set `property` to `value`. An empty value removes the declaration.
    pub fn set(&mut self, property: &str, value: &str) {
        let decl = Declaration::new(property, value);
        if decl.value.is_empty() {
            self.remove(&decl.property);
            return;
        }
        match self
            .declarations
            .iter_mut()
            .find(|existing| existing.property == decl.property)
        {
            Some(existing) => existing.value = decl.value,
            None => self.declarations.push(decl),
        }
    }

    /// Remove `property`. Returns whether it was present.
    pub fn remove(&mut self, property: &str) -> bool {
        let needle = to_ascii_lowercase(property);
        let before = self.declarations.len();
        self.declarations.retain(|decl| decl.property != needle);
        before != self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }
}

/// Serializes as `prop: value; prop: value;`, the same shape browsers emit for `cssText`.
impl fmt::Display for StyleDeclarations {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for decl in &self.declarations {
            if !first {
                formatter.write_str(" ")?;
            }
            first = false;
            write!(formatter, "{}: {};", decl.property, decl.value)?;
        }
        Ok(())
    }
}

impl<'decl> IntoIterator for &'decl StyleDeclarations {
    type Item = &'decl Declaration;
    type IntoIter = core::slice::Iter<'decl, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// Lowercase an ASCII identifier without allocating twice when already lowercase.
fn to_ascii_lowercase(text: &str) -> String {
    if !text.chars().any(|character| character.is_ascii_uppercase()) {
        return text.to_owned();
    }
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_invalid_items() {
        let decls = parse_style_attribute("Display: Block; ; color; :red; gap:  1rem ");
        assert_eq!(
            decls,
            vec![
                Declaration::new("display", "Block"),
                Declaration::new("gap", "1rem"),
            ]
        );
    }

    #[test]
    fn set_replaces_in_place_and_empty_removes() {
        let mut block = StyleDeclarations::parse("display: block; color: red");
        block.set("DISPLAY", "none");
        assert_eq!(block.to_string(), "display: none; color: red;");
        block.set("color", "");
        assert_eq!(block.to_string(), "display: none;");
        assert!(!block.remove("color"));
        assert!(block.remove("display"));
        assert!(block.is_empty());
        assert_eq!(block.to_string(), "");
    }

    #[test]
    fn duplicate_properties_keep_last_value() {
        let block = StyleDeclarations::parse("display: grid; display: flex");
        assert_eq!(block.get("display"), Some("flex"));
        assert_eq!(block.iter().count(), 1);
    }
}
