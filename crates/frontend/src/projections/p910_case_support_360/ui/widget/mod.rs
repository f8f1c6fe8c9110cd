//! Case Support 360 dashboard widget
//!
//! Thin presentation seam over the ViewModel: all control flow lives in
//! [`view_model::CaseSupport360Vm`], this component only reads the outbound
//! surface (view state, derived flags, column schema).

pub mod columns;
pub mod view_model;

use columns::{ColumnDef, ORDER_ITEM_COLUMNS, RETURN_LINE_COLUMNS, SHIPMENT_COLUMNS};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;
use view_model::CaseSupport360Vm;

/// Dashboard widget showing order items, return lines, and shipments
/// aggregated for one case.
#[component]
pub fn CaseSupport360(#[prop(into)] case_id: Signal<Option<String>>) -> impl IntoView {
    let vm = CaseSupport360Vm::new();
    vm.bind(case_id);

    let loading = vm.loading;
    let error_message = vm.error_message;
    let snapshot = vm.snapshot;
    let has_order_items = vm.has_order_items();
    let has_return_lines = vm.has_return_lines();
    let has_shipments = vm.has_shipments();

    view! {
        <div class="widget widget--case-support-360">
            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 40px;">
                            <Spinner />
                            <span>"Загрузка..."</span>
                        </Flex>
                    }
                    .into_any()
                } else if let Some(err) = error_message.get() {
                    view! {
                        <div style="padding: 12px; background: #f8d7da; border: 1px solid #f5c6cb; border-radius: 4px; color: #721c24;">
                            <strong>"Ошибка: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div>
                            <Show when=move || has_order_items.get()>
                                <h3>"Order Items"</h3>
                                {move || {
                                    snapshot
                                        .get()
                                        .map(|s| record_table(to_records(&s.order_items), &ORDER_ITEM_COLUMNS))
                                }}
                            </Show>

                            <Show when=move || has_return_lines.get()>
                                <h3>"Return Lines"</h3>
                                {move || {
                                    snapshot
                                        .get()
                                        .map(|s| record_table(to_records(&s.return_lines), &RETURN_LINE_COLUMNS))
                                }}
                            </Show>

                            <Show when=move || has_shipments.get()>
                                <h3>"Shipments"</h3>
                                {move || {
                                    snapshot
                                        .get()
                                        .map(|s| record_table(to_records(&s.shipments), &SHIPMENT_COLUMNS))
                                }}
                            </Show>

                            <Show when=move || {
                                !has_order_items.get() && !has_return_lines.get()
                                    && !has_shipments.get()
                            }>
                                <div style="text-align: center; padding: 40px; color: #999;">
                                    "Нет связанных записей"
                                </div>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn to_records<T: serde::Serialize>(records: &[T]) -> Vec<Value> {
    records
        .iter()
        .filter_map(|record| serde_json::to_value(record).ok())
        .collect()
}

/// Render one record collection as a table driven by its column schema.
fn record_table(records: Vec<Value>, columns: &'static [ColumnDef]) -> impl IntoView {
    view! {
        <div style="overflow-x: auto; margin-bottom: 24px;">
            <table style="width: 100%; border-collapse: collapse; font-size: 0.875rem;">
                <thead>
                    <tr style="border-bottom: 2px solid #dee2e6;">
                        {columns
                            .iter()
                            .map(|column| {
                                view! {
                                    <th style=format!(
                                        "padding: 12px; font-weight: 600; text-align: {};",
                                        column.align(),
                                    )>{column.label}</th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|record| {
                            view! {
                                <tr style="border-bottom: 1px solid #eee;">
                                    {columns
                                        .iter()
                                        .map(|column| {
                                            view! {
                                                <td style=format!(
                                                    "padding: 10px; text-align: {};",
                                                    column.align(),
                                                )>{column.cell_text(&record)}</td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
