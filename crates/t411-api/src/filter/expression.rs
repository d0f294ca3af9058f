//! Condition expression parsing.

/// A parsed condition expression: an operator token and a value.
///
/// Parsing never fails; the operator token is validated later, when the
/// condition is actually evaluated against a record. An expression with no
/// whitespace-separated leading token (e.g. `"10"`) gets the default `==`
/// operator with the whole trimmed expression as its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The operator token (e.g. `">="`, `"=="`). Not yet validated.
    pub operator: String,
    /// The comparison value. May itself contain spaces.
    pub value: String,
}

impl Expression {
    /// Parses a raw expression string.
    ///
    /// The expression is trimmed; the first whitespace-free token becomes
    /// the operator and the trimmed remainder the value. Without a space
    /// the operator defaults to `==`.
    ///
    /// # Example
    ///
    /// ```
    /// use t411_api_rs::filter::Expression;
    ///
    /// let expr = Expression::parse(">= 5");
    /// assert_eq!(expr.operator, ">=");
    /// assert_eq!(expr.value, "5");
    ///
    /// let expr = Expression::parse("10");
    /// assert_eq!(expr.operator, "==");
    /// assert_eq!(expr.value, "10");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        match trimmed.split_once(' ') {
            Some((operator, value)) => Expression {
                operator: operator.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => Expression {
                operator: "==".to_string(),
                value: trimmed.to_string(),
            },
        }
    }
}
