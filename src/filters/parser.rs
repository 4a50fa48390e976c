//! Filter query parser for the explore search bar and the `list --filter` command.
//!
//! Turns a single line of user input into a [`FilterState`].
//!
//! # Syntax
//!
//! ```text
//! input      := (field_term | word)*
//! field_term := field_name:value | field_name:"quoted value"
//! word       := bare_word | "quoted phrase"
//! field_name := type | price | beds | baths | feature (case-insensitive)
//! ```
//!
//! Field terms set the matching criterion; every bare word or quoted phrase is
//! joined (single-space separated) into the free-text query.
//!
//! # Examples
//!
//! ```rust
//! # use property_explorer::filters::parser::parse_filter;
//! let state = parse_filter("miami beach").unwrap();
//! assert_eq!(state.query, "miami beach");
//!
//! let state = parse_filter("type:house price:500000-1000000 beds:3").unwrap();
//! assert!(state.query.is_empty());
//!
//! let state = parse_filter("feature:\"wine cellar\" feature:pool villa").unwrap();
//! assert_eq!(state.features.len(), 2);
//! ```
//!
//! # Validation
//!
//! - `type` must name a known property type
//! - `price` must be `any`, `min-max` or `min+` with `min <= max`
//! - `beds` / `baths` must be `any`, `N` or `N+`
//! - Unknown field names, empty values and unterminated quotes are rejected

use anyhow::{Context, Result, anyhow};

use super::state::FilterState;

/// Token types produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// field:value or field:"quoted value"
    FieldValue { field: String, value: String },
    /// Free-text word or "quoted phrase"
    Word(String),
}

/// Tokenize filter input into field terms and free-text words
fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);

        if word.starts_with('"') {
            let phrase = read_quoted_value(&mut chars, &word)?;
            if !phrase.trim().is_empty() {
                tokens.push(Token::Word(phrase));
            }
            continue;
        }

        if let Some(colon_pos) = word.find(':') {
            let field = word[..colon_pos].to_string();
            let mut value = word[colon_pos + 1..].to_string();

            if value.starts_with('"') {
                value = read_quoted_value(&mut chars, &value)?;
            }

            if field.is_empty() || value.trim().is_empty() {
                return Err(anyhow!("Invalid field:value format: {}", word));
            }

            tokens.push(Token::FieldValue { field, value });
        } else {
            tokens.push(Token::Word(word));
        }
    }

    Ok(tokens)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// Read a quoted value where `initial` already holds the opening quote
fn read_quoted_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    initial: &str,
) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        return Ok(value[..quote_pos].to_string());
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

/// Apply one `field:value` term to the state being built
fn apply_field(state: &mut FilterState, field: &str, value: &str) -> Result<()> {
    match field.to_lowercase().as_str() {
        "type" => state.property_type = Some(value.parse()?),
        "price" => state.price = value.parse()?,
        "beds" | "bedrooms" => state.beds = value.parse()?,
        "baths" | "bathrooms" => state.baths = value.parse()?,
        "feature" | "features" => {
            for tag in value.split(',') {
                if !state.features.iter().any(|f| f.eq_ignore_ascii_case(tag.trim())) {
                    state.toggle_feature(tag);
                }
            }
        }
        _ => {
            return Err(anyhow!(
                "Unknown field: '{}' (valid fields: type, price, beds, baths, feature)",
                field
            ));
        }
    }
    Ok(())
}

/// Parse a filter line into a [`FilterState`]
///
/// Examples:
/// - "brooklyn" → free-text query
/// - "type:condo" → property type only
/// - "price:2000000+ beds:4+" → open-ended price and bedroom minimum
/// - "feature:pool,gym" → two required features
pub fn parse_filter(input: &str) -> Result<FilterState> {
    let mut state = FilterState::new();

    if input.trim().is_empty() {
        return Ok(state);
    }

    let tokens = tokenize(input).context("Failed to tokenize filter")?;
    let mut words = Vec::new();

    for token in tokens {
        match token {
            Token::FieldValue { field, value } => {
                apply_field(&mut state, &field, &value)
                    .with_context(|| format!("Invalid filter '{}:{}'", field, value))?;
            }
            Token::Word(word) => words.push(word),
        }
    }

    state.query = words.join(" ");
    Ok(state)
}
