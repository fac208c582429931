//! Plain, serializable view of a syntax tree for diagnostics and tests.

use core::fmt;

use serde::Serialize;

/// Rule name, token text and children of a node, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dump {
    /// Rule name, e.g. `selectStmt` or `fieldName`.
    pub rule: &'static str,
    /// Token text for terminals and call nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child dumps in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Dump>,
}

/// Single-line form: `rule`, `rule:text`, children in parentheses.
///
/// `condition(fieldName:id operator:= number:1)`
impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule)?;
        if let Some(text) = &self.text {
            write!(f, ":{text}")?;
        }
        if !self.children.is_empty() {
            f.write_str("(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(rule: &'static str, text: &str) -> Dump {
        Dump {
            rule,
            text: Some(text.to_owned()),
            children: vec![],
        }
    }

    #[test]
    fn test_single_line_form() {
        let dump = Dump {
            rule: "func",
            text: Some("MIN".to_owned()),
            children: vec![leaf("star", "*")],
        };
        assert_eq!(dump.to_string(), "func:MIN(star:*)");
    }

    #[test]
    fn test_json_skips_empty_parts() {
        let dump = Dump {
            rule: "orderByField",
            text: None,
            children: vec![
                leaf("fieldName", "text"),
                Dump {
                    rule: "orderByDesc",
                    text: None,
                    children: vec![],
                },
            ],
        };
        let json = serde_json::to_string(&dump).unwrap();
        assert_eq!(
            json,
            r#"{"rule":"orderByField","children":[{"rule":"fieldName","text":"text"},{"rule":"orderByDesc"}]}"#
        );
    }
}
