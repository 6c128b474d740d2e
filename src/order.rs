//! Order lines and conversion from stored legacy item shapes.
//!
//! Stored orders carry their `items` field in several shapes: a mapping of
//! display name to quantity, a mapping of display name to a detail object,
//! a list of line objects, or a bare product name for single-product orders.
//! [`LegacyItems`] accepts all of them and turns them into one uniform list
//! of [`OrderLine`] at the persistence boundary.

use crate::extension::VARIANT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit of measure for an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
  /// Sold by weight.
  #[serde(rename = "kg", alias = "ק\"ג", alias = "קג")]
  Kilogram,
  /// Sold by count.
  #[serde(rename = "units", alias = "יחידות", alias = "unit")]
  Units,
}

/// One product on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  /// Base product name, without the cutting instruction.
  pub name: String,
  /// Ordered amount, in `unit` when known.
  pub quantity: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unit: Option<Unit>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cutting_instruction: Option<String>,
}

impl OrderLine {
  /// Builds a line from a cart display name such as "חזה עוף - פרוס".
  ///
  /// The part after the first `" - "` becomes the cutting instruction.
  pub fn from_display_name(display: &str, quantity: f64) -> Self {
    let (name, cutting_instruction) = match display.split_once(VARIANT_SEPARATOR) {
      Some((name, cutting)) if !cutting.trim().is_empty() => {
        (name.trim(), Some(cutting.trim().to_string()))
      }
      Some((name, _)) => (name.trim(), None),
      None => (display.trim(), None),
    };

    Self {
      name: name.to_string(),
      quantity,
      unit: None,
      cutting_instruction,
    }
  }

  /// Sets the unit of measure.
  pub fn with_unit(mut self, unit: Unit) -> Self {
    self.unit = Some(unit);
    self
  }

  /// The name as shown in a cart: "name - cutting", or just the name.
  pub fn display_name(&self) -> String {
    match &self.cutting_instruction {
      Some(cutting) => format!("{}{}{}", self.name, VARIANT_SEPARATOR, cutting),
      None => self.name.clone(),
    }
  }
}

/// The `items` field of a stored order, in any of its historical shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyItems {
  /// Display name → quantity or detail object.
  Mapping(BTreeMap<String, LegacyQuantity>),
  /// A list of line objects or bare names.
  List(Vec<LegacyListItem>),
  /// A single product name.
  Single(String),
}

/// A mapping value: a bare quantity or a cart detail object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyQuantity {
  Plain(f64),
  Detailed {
    #[serde(default = "one")]
    quantity: f64,
    #[serde(default)]
    unit: Option<Unit>,
  },
}

/// A list element: a line object or a bare product name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyListItem {
  Line {
    #[serde(alias = "product")]
    name: String,
    #[serde(default = "one")]
    quantity: f64,
    #[serde(default)]
    unit: Option<Unit>,
    #[serde(default, alias = "cutting")]
    cutting_instruction: Option<String>,
  },
  Name(String),
}

fn one() -> f64 {
  1.0
}

impl LegacyItems {
  /// Parses the JSON text stored in an order's `items` column.
  ///
  /// `null` and empty text mean no items.
  pub fn parse(json: &str) -> Result<Vec<OrderLine>, serde_json::Error> {
    if json.trim().is_empty() {
      return Ok(Vec::new());
    }
    let items: Option<LegacyItems> = serde_json::from_str(json)?;
    Ok(items.map(LegacyItems::into_lines).unwrap_or_default())
  }

  /// Converts to uniform order lines.
  ///
  /// A bare product name becomes one line with quantity `1`. Blank names
  /// are dropped.
  pub fn into_lines(self) -> Vec<OrderLine> {
    let lines: Vec<OrderLine> = match self {
      LegacyItems::Mapping(map) => map
        .into_iter()
        .map(|(display, value)| match value {
          LegacyQuantity::Plain(quantity) => OrderLine::from_display_name(&display, quantity),
          LegacyQuantity::Detailed { quantity, unit } => OrderLine {
            unit,
            ..OrderLine::from_display_name(&display, quantity)
          },
        })
        .collect(),
      LegacyItems::List(items) => items
        .into_iter()
        .map(|item| match item {
          LegacyListItem::Line {
            name,
            quantity,
            unit,
            cutting_instruction,
          } => {
            let mut line = OrderLine::from_display_name(&name, quantity);
            line.unit = unit;
            if cutting_instruction.is_some() {
              line.cutting_instruction = cutting_instruction;
            }
            line
          }
          LegacyListItem::Name(name) => OrderLine::from_display_name(&name, 1.0),
        })
        .collect(),
      LegacyItems::Single(name) => vec![OrderLine::from_display_name(&name, 1.0)],
    };

    lines.into_iter().filter(|line| !line.name.is_empty()).collect()
  }
}

/// The distinct product names on a set of lines, in first-seen order.
pub fn product_names(lines: &[OrderLine]) -> Vec<&str> {
  let mut names: Vec<&str> = Vec::new();
  for line in lines {
    if !names.contains(&line.name.as_str()) {
      names.push(&line.name);
    }
  }
  names
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_display_name() {
    let line = OrderLine::from_display_name("חזה עוף - פרוס", 2.5);
    assert_eq!(line.name, "חזה עוף");
    assert_eq!(line.cutting_instruction.as_deref(), Some("פרוס"));
    assert_eq!(line.display_name(), "חזה עוף - פרוס");

    let plain = OrderLine::from_display_name("כנפיים", 1.0);
    assert_eq!(plain.cutting_instruction, None);
    assert_eq!(plain.display_name(), "כנפיים");
  }

  #[test]
  fn test_mapping_of_quantities() {
    let lines = LegacyItems::parse(r#"{"כנפיים": 2, "חזה עוף - קוביות": 1.5}"#).unwrap();
    assert_eq!(lines.len(), 2);
    let breast = lines.iter().find(|l| l.name == "חזה עוף").unwrap();
    assert_eq!(breast.quantity, 1.5);
    assert_eq!(breast.cutting_instruction.as_deref(), Some("קוביות"));
  }

  #[test]
  fn test_mapping_of_details() {
    let lines =
      LegacyItems::parse(r#"{"עוף שלם - שלם": {"quantity": 3, "price": 50.0, "unit": "יחידות"}}"#)
        .unwrap();
    assert_eq!(
      lines,
      vec![OrderLine {
        name: "עוף שלם".to_string(),
        quantity: 3.0,
        unit: Some(Unit::Units),
        cutting_instruction: Some("שלם".to_string()),
      }]
    );
  }

  #[test]
  fn test_list_and_single() {
    let lines = LegacyItems::parse(
      r#"[{"product": "סלמון", "quantity": 2, "unit": "kg"}, "טונה", {"name": "כבד עוף", "cutting": "נקי"}]"#,
    )
    .unwrap();
    assert_eq!(product_names(&lines), vec!["סלמון", "טונה", "כבד עוף"]);
    assert_eq!(lines[0].unit, Some(Unit::Kilogram));
    assert_eq!(lines[1].quantity, 1.0);
    assert_eq!(lines[2].cutting_instruction.as_deref(), Some("נקי"));

    let single = LegacyItems::parse(r#""המבורגר 160 גרם""#).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].name, "המבורגר 160 גרם");
  }

  #[test]
  fn test_empty_shapes() {
    assert!(LegacyItems::parse("").unwrap().is_empty());
    assert!(LegacyItems::parse("null").unwrap().is_empty());
    assert!(LegacyItems::parse("{}").unwrap().is_empty());
    assert!(LegacyItems::parse(r#""""#).unwrap().is_empty());
    assert!(LegacyItems::parse("42").is_err());
  }
}
