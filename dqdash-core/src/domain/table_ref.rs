// dqdash-core/src/domain/table_ref.rs

use sqlparser::ast::ObjectNamePart;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;
use std::fmt;

use crate::domain::error::DomainError;

/// A validated `[catalog.][schema.]table` reference.
///
/// The configured table name ends up inside a SQL string, so it goes through
/// the SQL parser first and is re-emitted with every part double-quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    parts: Vec<String>,
}

impl TableRef {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidTableName {
            name: raw.to_string(),
            reason,
        };

        let dialect = GenericDialect {};
        let mut parser = Parser::new(&dialect)
            .try_with_sql(raw)
            .map_err(|e| invalid(e.to_string()))?;
        let object_name = parser
            .parse_object_name(false)
            .map_err(|e| invalid(e.to_string()))?;
        parser
            .expect_token(&Token::EOF)
            .map_err(|_| invalid("unexpected trailing input".into()))?;

        let mut parts = Vec::with_capacity(object_name.0.len());
        for part in object_name.0 {
            #[allow(unreachable_patterns)]
            match part {
                ObjectNamePart::Identifier(ident) => parts.push(ident.value),
                _ => return Err(invalid("only plain identifiers are allowed".into())),
            }
        }

        if parts.is_empty() || parts.len() > 3 {
            return Err(invalid(format!("expected 1 to 3 parts, got {}", parts.len())));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("empty identifier".into()));
        }

        Ok(Self { parts })
    }

    /// Same table seen through an attached catalog (`pg.schema.table`).
    pub fn in_catalog(&self, catalog: &str) -> Self {
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.push(catalog.to_string());
        parts.extend(self.parts.iter().cloned());
        Self { parts }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// `"schema"."table"`, safe to splice into a query.
    pub fn quoted(&self) -> String {
        self.parts
            .iter()
            .map(|p| format!("\"{}\"", p.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}
