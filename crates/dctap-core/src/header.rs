//! Header classification.
//!
//! Each column header is classified once per parse and the result reused for
//! every row. Lookup order:
//!
//! 1. exact element name
//! 2. exact expected extra
//! 3. configured alias
//! 4. element name ignoring case
//! 5. element name ignoring case, spaces, underscores and dashes
//! 6. anything else is an extra column

use std::collections::HashMap;

use dctap_model::{
    Element, ElementScope, Header, HeaderMatch, StructuralError, TapConfig, Warning, WarningCode,
    WarningCollector,
};
use dctap_standards::{normalize_name, registry};

/// Header row number in warnings.
pub const HEADER_ROW: usize = 1;

/// Classifies raw header text against the element registry and the
/// configured extras and aliases.
#[derive(Debug)]
pub struct HeaderClassifier<'a> {
    config: &'a TapConfig,
    aliases: HashMap<String, &'static Element>,
}

impl<'a> HeaderClassifier<'a> {
    pub fn new(config: &'a TapConfig) -> Self {
        let registry = registry();
        let aliases = config
            .element_aliases
            .iter()
            .filter_map(|(alias, target)| {
                registry
                    .lookup(target.trim())
                    .map(|element| (normalize_name(alias), element))
            })
            .collect();
        Self { config, aliases }
    }

    /// Classify one header cell.
    ///
    /// `column` is 0-based. The returned warning, if any, is located on the
    /// header row.
    pub fn classify(&self, column: usize, raw_text: &str) -> (Header, Option<Warning>) {
        let name = clean_header(raw_text);
        let registry = registry();
        let header = |element: Option<&'static Element>, matched, extra_scope| Header {
            column,
            raw_text: raw_text.to_string(),
            name: name.to_string(),
            element,
            matched,
            extra_scope,
        };

        if let Some(element) = registry.lookup(name) {
            return (header(Some(element), HeaderMatch::Exact, None), None);
        }

        if self.config.expected_extras().any(|extra| extra.trim() == name) {
            let scope = self.extra_scope(name);
            return (header(None, HeaderMatch::ExpectedExtra, Some(scope)), None);
        }

        if let Some(element) = self.aliases.get(&normalize_name(name)).copied() {
            return (header(Some(element), HeaderMatch::Alias, None), None);
        }

        if let Some(element) = registry.lookup_ignore_case(name) {
            let warning = self.config.warn_on_nonstandard_case.then(|| {
                header_warning(
                    WarningCode::NonstandardCase,
                    name,
                    format!("nonstandard case: \"{name}\" read as {}", element.name),
                )
            });
            return (
                header(Some(element), HeaderMatch::CaseInsensitive, None),
                warning,
            );
        }

        if let Some(element) = registry.lookup_normalized(name) {
            let warning = self.config.warn_on_nonstandard_case.then(|| {
                header_warning(
                    WarningCode::NonstandardSpelling,
                    name,
                    format!("nonstandard spelling: \"{name}\" read as {}", element.name),
                )
            });
            return (
                header(Some(element), HeaderMatch::NormalizedSpelling, None),
                warning,
            );
        }

        let scope = self.extra_scope(name);
        if self.is_expected_ignore_case(name) {
            return (header(None, HeaderMatch::ExpectedExtra, Some(scope)), None);
        }
        let warning = self.config.warn_on_unrecognized.then(|| {
            header_warning(
                WarningCode::UnrecognizedHeader,
                name,
                "header not recognized as DCTAP element or configured extra",
            )
        });
        (
            header(None, HeaderMatch::UnrecognizedExtra, Some(scope)),
            warning,
        )
    }

    /// Classify a whole header row, pushing warnings in column order.
    pub fn classify_all(
        &self,
        headers: &[String],
        warnings: &mut WarningCollector,
    ) -> Result<Vec<Header>, StructuralError> {
        let mut classified: Vec<Header> = Vec::with_capacity(headers.len());
        let mut elements: HashMap<&'static str, usize> = HashMap::new();
        let mut extras: HashMap<String, usize> = HashMap::new();

        for (column, raw) in headers.iter().enumerate() {
            let (header, warning) = self.classify(column, raw);
            if let Some(element) = header.element {
                if let Some(&first) = elements.get(element.name) {
                    return Err(StructuralError::DuplicateElement {
                        element: element.name,
                        first: first + 1,
                        second: column + 1,
                        first_header: classified[first].name.clone(),
                        second_header: header.name,
                    });
                }
                elements.insert(element.name, column);
            } else if !header.name.is_empty() {
                if let Some(&first) = extras.get(&header.name) {
                    return Err(StructuralError::DuplicateColumn {
                        name: header.name,
                        first: first + 1,
                        second: column + 1,
                    });
                }
                extras.insert(header.name.clone(), column);
            }
            if let Some(warning) = warning {
                warnings.push(warning);
            }
            classified.push(header);
        }
        Ok(classified)
    }

    fn is_expected_ignore_case(&self, name: &str) -> bool {
        self.config
            .expected_extras()
            .any(|extra| extra.trim().eq_ignore_ascii_case(name))
    }

    fn extra_scope(&self, name: &str) -> ElementScope {
        let is_shape_extra = self
            .config
            .extra_shape_elements
            .iter()
            .any(|extra| extra.trim().eq_ignore_ascii_case(name));
        if is_shape_extra {
            ElementScope::Shape
        } else {
            ElementScope::Statement
        }
    }
}

/// Strip surrounding whitespace and any byte-order mark.
pub fn clean_header(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

fn header_warning(code: WarningCode, name: &str, message: impl Into<String>) -> Warning {
    Warning::new(code, HEADER_ROW, message).with_header(name)
}
