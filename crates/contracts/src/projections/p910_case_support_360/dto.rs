use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Агрегированный снимок "Support 360" по одному обращению
///
/// Собирается бэкендом из связанных записей (позиции заказа, строки
/// возвратов, отправления). Снимок либо есть целиком, либо отсутствует;
/// частичных снимков не бывает, пустые коллекции — нормальное состояние.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Support360Snapshot {
    #[serde(default)]
    pub order_items: Vec<OrderItemDto>,
    #[serde(default)]
    pub return_lines: Vec<ReturnLineDto>,
    #[serde(default)]
    pub shipments: Vec<ShipmentDto>,
}

/// Позиция заказа, связанного с обращением
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_name: String,
    pub quantity: f64,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
}

/// Строка возврата по обращению
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLineDto {
    pub product_name: String,
    pub quantity: f64,
    pub condition: Option<String>,
    pub notes: Option<String>,
}

/// Отправление по обращению
///
/// `eta` — локальная дата без времени, `last_tracking_update` — момент
/// последнего события трекинга в UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDto {
    pub name: String,
    pub delivery_status: Option<String>,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub eta: Option<NaiveDate>,
    pub last_tracking_update: Option<DateTime<Utc>>,
    pub exception_reason: Option<String>,
}
