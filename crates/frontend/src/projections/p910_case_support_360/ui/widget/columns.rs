//! Column schema for the three record tables
//!
//! Static declarative tables mapping snapshot fields to display columns.
//! The presentation layer renders cells through [`ColumnDef::cell_text`],
//! so adding a column is a one-line change here.

use crate::shared::format::{format_date, format_datetime, format_money, format_number};
use serde_json::Value;

/// How a column value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Text,
    Number,
    Currency,
    /// Date with time component, shown as DD.MM.YYYY HH:MM
    Date,
    /// Local date without time component, shown as DD.MM.YYYY
    DateLocal,
}

/// Declarative mapping of one snapshot field to one display column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub label: &'static str,
    /// Field name in the wire (camelCase) representation of the record.
    pub field_name: &'static str,
    pub display_type: DisplayType,
}

impl ColumnDef {
    /// Render the cell text for one record serialized to JSON.
    ///
    /// Absent or mistyped fields render as an em dash, never an error.
    pub fn cell_text(&self, record: &Value) -> String {
        let field = record.get(self.field_name);
        match self.display_type {
            DisplayType::Text => field
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            DisplayType::Number => field.and_then(Value::as_f64).map(format_number),
            DisplayType::Currency => field.and_then(Value::as_f64).map(format_money),
            DisplayType::Date => field.and_then(Value::as_str).map(format_datetime),
            DisplayType::DateLocal => field.and_then(Value::as_str).map(format_date),
        }
        .unwrap_or_else(|| "—".to_string())
    }

    /// Horizontal alignment for the column cells.
    pub fn align(&self) -> &'static str {
        match self.display_type {
            DisplayType::Number | DisplayType::Currency => "right",
            _ => "left",
        }
    }
}

pub const ORDER_ITEM_COLUMNS: [ColumnDef; 4] = [
    ColumnDef {
        label: "Product",
        field_name: "productName",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Qty",
        field_name: "quantity",
        display_type: DisplayType::Number,
    },
    ColumnDef {
        label: "Unit Price",
        field_name: "unitPrice",
        display_type: DisplayType::Currency,
    },
    ColumnDef {
        label: "Total",
        field_name: "totalPrice",
        display_type: DisplayType::Currency,
    },
];

pub const RETURN_LINE_COLUMNS: [ColumnDef; 4] = [
    ColumnDef {
        label: "Product",
        field_name: "productName",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Qty",
        field_name: "quantity",
        display_type: DisplayType::Number,
    },
    ColumnDef {
        label: "Condition",
        field_name: "condition",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Notes",
        field_name: "notes",
        display_type: DisplayType::Text,
    },
];

pub const SHIPMENT_COLUMNS: [ColumnDef; 7] = [
    ColumnDef {
        label: "Shipment",
        field_name: "name",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Status",
        field_name: "deliveryStatus",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Carrier",
        field_name: "carrier",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "Tracking Number",
        field_name: "trackingNumber",
        display_type: DisplayType::Text,
    },
    ColumnDef {
        label: "ETA",
        field_name: "eta",
        display_type: DisplayType::DateLocal,
    },
    ColumnDef {
        label: "Last Update",
        field_name: "lastTrackingUpdate",
        display_type: DisplayType::Date,
    },
    ColumnDef {
        label: "Exception Reason",
        field_name: "exceptionReason",
        display_type: DisplayType::Text,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projections::p910_case_support_360::dto::{OrderItemDto, ShipmentDto};
    use serde_json::json;

    #[test]
    fn order_item_schema_matches_the_wire_fields() {
        let fields: Vec<&str> = ORDER_ITEM_COLUMNS.iter().map(|c| c.field_name).collect();
        assert_eq!(
            fields,
            vec!["productName", "quantity", "unitPrice", "totalPrice"]
        );
        assert_eq!(ORDER_ITEM_COLUMNS[2].display_type, DisplayType::Currency);
        assert_eq!(ORDER_ITEM_COLUMNS[3].display_type, DisplayType::Currency);
    }

    #[test]
    fn return_line_schema_matches_the_wire_fields() {
        let fields: Vec<&str> = RETURN_LINE_COLUMNS.iter().map(|c| c.field_name).collect();
        assert_eq!(
            fields,
            vec!["productName", "quantity", "condition", "notes"]
        );
    }

    #[test]
    fn shipment_schema_uses_both_date_display_types() {
        let eta = SHIPMENT_COLUMNS.iter().find(|c| c.field_name == "eta").unwrap();
        assert_eq!(eta.display_type, DisplayType::DateLocal);
        let update = SHIPMENT_COLUMNS
            .iter()
            .find(|c| c.field_name == "lastTrackingUpdate")
            .unwrap();
        assert_eq!(update.display_type, DisplayType::Date);
    }

    #[test]
    fn cells_render_through_the_schema() {
        let item = OrderItemDto {
            product_name: "Widget".to_string(),
            quantity: 1200.0,
            unit_price: Some(9.5),
            total_price: Some(11400.0),
        };
        let record = serde_json::to_value(&item).unwrap();

        assert_eq!(ORDER_ITEM_COLUMNS[0].cell_text(&record), "Widget");
        assert_eq!(ORDER_ITEM_COLUMNS[1].cell_text(&record), "1 200");
        assert_eq!(ORDER_ITEM_COLUMNS[2].cell_text(&record), "9.50");
        assert_eq!(ORDER_ITEM_COLUMNS[3].cell_text(&record), "11 400.00");
    }

    #[test]
    fn shipment_dates_render_per_display_type() {
        let shipment = ShipmentDto {
            name: "SHP-0001".to_string(),
            delivery_status: Some("In Transit".to_string()),
            carrier: None,
            tracking_number: None,
            eta: chrono::NaiveDate::from_ymd_opt(2026, 8, 14),
            last_tracking_update: Some(
                chrono::DateTime::parse_from_rfc3339("2026-08-07T16:45:00Z")
                    .unwrap()
                    .with_timezone(&chrono::Utc),
            ),
            exception_reason: None,
        };
        let record = serde_json::to_value(&shipment).unwrap();

        let cell = |field: &str| {
            SHIPMENT_COLUMNS
                .iter()
                .find(|c| c.field_name == field)
                .unwrap()
                .cell_text(&record)
        };
        assert_eq!(cell("eta"), "14.08.2026");
        assert_eq!(cell("lastTrackingUpdate"), "07.08.2026 16:45");
        assert_eq!(cell("carrier"), "—");
        assert_eq!(cell("exceptionReason"), "—");
    }

    #[test]
    fn absent_and_mistyped_fields_never_panic() {
        let record = json!({ "quantity": "not a number" });
        for column in ORDER_ITEM_COLUMNS
            .iter()
            .chain(RETURN_LINE_COLUMNS.iter())
            .chain(SHIPMENT_COLUMNS.iter())
        {
            assert_eq!(column.cell_text(&record), "—");
        }
        assert_eq!(ORDER_ITEM_COLUMNS[1].align(), "right");
        assert_eq!(ORDER_ITEM_COLUMNS[0].align(), "left");
    }
}
