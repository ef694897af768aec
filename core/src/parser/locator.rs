//! # Declaration Locator
//!
//! A single pre-order walk over a parsed file. The walk starts in
//! [`ScanState::Seeking`]; a declaration with the requested name switches it to
//! [`ScanState::Capturing`], and every member field met from then on is
//! extracted until the next type declaration closes the capture.

use crate::error::{InspectError, InspectResult};
use crate::parser::extractors::extract_field;
use crate::parser::models::TypeDescription;
use syn::visit::{self, Visit};
use syn::{Field, Ident, ItemEnum, ItemStruct, ItemTrait, ItemType, ItemUnion};
use tracing::{debug, warn};

/// Where the walk currently is relative to the requested declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Looking for a declaration with the requested name.
    Seeking,
    /// Inside the requested declaration; member fields are extracted.
    Capturing,
}

/// `syn` visitor driving the locate-and-extract state machine.
pub(crate) struct Locator<'t> {
    target: &'t str,
    state: ScanState,
    found: Option<TypeDescription>,
    error: Option<InspectError>,
}

impl<'t> Locator<'t> {
    pub(crate) fn new(target: &'t str) -> Self {
        Self {
            target,
            state: ScanState::Seeking,
            found: None,
            error: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ScanState {
        self.state
    }

    /// Handles a type declaration and returns whether its children should be visited.
    fn enter_declaration(&mut self, ident: &Ident) -> bool {
        if self.error.is_some() {
            return false;
        }

        if ident == self.target {
            if self.found.is_some() {
                warn!(
                    type_name = self.target,
                    "declaration found again, the later one replaces the earlier"
                );
            }
            debug!(type_name = self.target, "found declaration");
            self.found = Some(TypeDescription::new(self.target));
            self.state = ScanState::Capturing;
            true
        } else if self.state == ScanState::Capturing {
            // a sibling declaration closes the one being captured
            self.state = ScanState::Seeking;
            false
        } else {
            true
        }
    }

    fn capture(&mut self, field: &Field) {
        let Some(found) = self.found.as_mut() else {
            return;
        };
        match extract_field(self.target, found.fields.len(), field) {
            Ok(description) => found.fields.push(description),
            Err(error) => {
                self.error = Some(error);
                self.state = ScanState::Seeking;
            }
        }
    }

    /// Consumes the walk and validates what it collected.
    pub(crate) fn finish(self) -> InspectResult<TypeDescription> {
        if let Some(error) = self.error {
            return Err(error);
        }
        match self.found {
            None => Err(InspectError::NotFound(self.target.to_string())),
            Some(found) if found.fields.is_empty() => Err(InspectError::EmptyType(found.name)),
            Some(found) => Ok(found),
        }
    }
}

impl<'ast> Visit<'ast> for Locator<'_> {
    fn visit_item_struct(&mut self, i: &'ast ItemStruct) {
        if self.enter_declaration(&i.ident) {
            visit::visit_item_struct(self, i);
        }
    }

    fn visit_item_enum(&mut self, i: &'ast ItemEnum) {
        if self.enter_declaration(&i.ident) {
            visit::visit_item_enum(self, i);
        }
    }

    fn visit_item_union(&mut self, i: &'ast ItemUnion) {
        if self.enter_declaration(&i.ident) {
            visit::visit_item_union(self, i);
        }
    }

    fn visit_item_type(&mut self, i: &'ast ItemType) {
        if self.enter_declaration(&i.ident) {
            visit::visit_item_type(self, i);
        }
    }

    fn visit_item_trait(&mut self, i: &'ast ItemTrait) {
        if self.enter_declaration(&i.ident) {
            visit::visit_item_trait(self, i);
        }
    }

    fn visit_field(&mut self, f: &'ast Field) {
        if self.state == ScanState::Capturing {
            self.capture(f);
        }
        visit::visit_field(self, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'t>(target: &'t str, code: &str) -> Locator<'t> {
        let file = syn::parse_file(code).unwrap();
        let mut locator = Locator::new(target);
        locator.visit_file(&file);
        locator
    }

    #[test]
    fn test_sibling_declaration_ends_capture() {
        let locator = walk(
            "Point",
            r#"
            struct Point { x: i32 }
            struct Other { ignored: u8 }
            "#,
        );
        assert_eq!(locator.state(), ScanState::Seeking);
        let found = locator.finish().unwrap();
        assert_eq!(found.fields.len(), 1);
    }

    #[test]
    fn test_capture_stays_open_at_end_of_file() {
        let locator = walk("Point", "struct Point { x: i32 }");
        assert_eq!(locator.state(), ScanState::Capturing);
    }

    #[test]
    fn test_fields_before_match_are_ignored() {
        let found = walk(
            "Point",
            r#"
            struct Before { a: u8, b: u8 }
            struct Point { x: i32 }
            "#,
        )
        .finish()
        .unwrap();
        assert_eq!(found.fields.len(), 1);
        assert_eq!(found.fields[0].name, "x");
    }

    #[test]
    fn test_pruned_declaration_does_not_hide_later_match() {
        let found = walk(
            "Point",
            r#"
            struct Point { x: i32 }
            enum Shape { Square { side: u32 } }
            mod nested {
                struct Point { y: i64 }
            }
            "#,
        )
        .finish()
        .unwrap();
        assert_eq!(found.fields.len(), 1);
        assert_eq!(found.fields[0].name, "y");
        assert_eq!(found.fields[0].declared_type, "i64");
    }

    #[test]
    fn test_impl_blocks_do_not_end_capture() {
        let found = walk(
            "Point",
            r#"
            struct Point { x: i32 }
            impl Point {
                fn new() -> Self { Point { x: 0 } }
            }
            "#,
        )
        .finish()
        .unwrap();
        assert_eq!(found.fields.len(), 1);
    }

    #[test]
    fn test_error_stops_capture() {
        let locator = walk("Pair", "struct Pair(u8, u8);");
        assert_eq!(locator.state(), ScanState::Seeking);
        assert!(matches!(
            locator.finish(),
            Err(InspectError::UnsupportedShape { .. })
        ));
    }
}
