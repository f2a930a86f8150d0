use log::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, HtmlElement, NodeList, Url};
use yew::prelude::*;

use crate::csv::rows_to_csv;

pub const CSV_FILENAME: &str = "hackignite_problems.csv";
const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8;";
const CLEAR_PROMPT: &str = "Clear all problem cells to placeholder text? This cannot be undone.";

pub const PLACEHOLDER_POINTS: &str = "100";

/// Editable title placeholder for a 0-indexed body row.
pub fn placeholder_title(row: usize) -> String {
    format!("Problem {} — (edit this cell)", row + 1)
}

/// Categories cycle 1, 2, 3 down the table.
pub fn placeholder_category(row: usize) -> String {
    format!("Category {}", row % 3 + 1)
}

/// Reads the rendered text of every row, header included. Cells that
/// fail to cast contribute an empty string so column counts stay stable.
fn collect_rows(table: &Element) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let row_nodes = match table.query_selector_all("tr") {
        Ok(nodes) => nodes,
        Err(_) => return rows,
    };
    for i in 0..row_nodes.length() {
        let row_el = match row_nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let cell_nodes = match row_el.query_selector_all("th, td") {
            Ok(nodes) => nodes,
            Err(_) => continue,
        };
        let mut cells = Vec::with_capacity(cell_nodes.length() as usize);
        for j in 0..cell_nodes.length() {
            let text = cell_nodes
                .get(j)
                .and_then(|n| n.dyn_into::<HtmlElement>().ok())
                .map(|el| el.inner_text())
                .unwrap_or_default();
            cells.push(text);
        }
        rows.push(cells);
    }
    rows
}

/// Object URL lives only for the duration of the synthetic click.
fn trigger_download(csv: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MEDIA_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(CSV_FILENAME);
    anchor.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

fn set_cell(cells: &NodeList, index: u32, text: &str) {
    if let Some(cell) = cells.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
        cell.set_inner_text(text);
    }
}

/// Rewrites every body row with at least 4 cells back to placeholder
/// text. The row-number cell (index 0) is left alone.
fn reset_placeholders(table: &Element) {
    let row_nodes = match table.query_selector_all("tbody tr") {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    for i in 0..row_nodes.length() {
        let row_el = match row_nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let cells = match row_el.query_selector_all("td") {
            Ok(cells) => cells,
            Err(_) => continue,
        };
        if cells.length() < 4 {
            continue;
        }
        set_cell(&cells, 1, &placeholder_title(i as usize));
        set_cell(&cells, 2, &placeholder_category(i as usize));
        set_cell(&cells, 3, PLACEHOLDER_POINTS);
    }
}

/// Problem statements table. Cells are contenteditable; the DOM is the
/// only copy of what organizers type, so export and reset both walk the
/// live table through a NodeRef.
#[function_component(ProblemsTable)]
pub fn problems_table() -> Html {
    let table_ref = use_node_ref();

    let on_export = {
        let table_ref = table_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(table) = table_ref.cast::<Element>() {
                let csv = rows_to_csv(&collect_rows(&table));
                debug!("Exporting {} bytes of CSV", csv.len());
                if let Err(err) = trigger_download(&csv) {
                    error!("CSV download failed: {:?}", err);
                }
            }
        })
    };

    let on_clear = {
        let table_ref = table_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if !gloo::dialogs::confirm(CLEAR_PROMPT) {
                return;
            }
            if let Some(table) = table_ref.cast::<Element>() {
                reset_placeholders(&table);
            }
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap gap-3">
                <button
                    id="exportCsv"
                    onclick={on_export}
                    class="inline-flex items-center px-4 py-2 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-indigo-600 rounded-lg shadow hover:shadow-md transition-all duration-200"
                >
                    {"Export CSV"}
                </button>
                <button
                    id="clearTable"
                    onclick={on_clear}
                    class="inline-flex items-center px-4 py-2 text-sm font-semibold text-gray-700 bg-white border border-gray-300 rounded-lg shadow-sm hover:bg-gray-50 transition-all duration-200"
                >
                    {"Reset Placeholders"}
                </button>
            </div>
            <div class="overflow-x-auto rounded-xl border border-gray-200 shadow-sm">
                <table ref={table_ref} id="problemsTable" class="min-w-full divide-y divide-gray-200 text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-4 py-3 text-left font-semibold text-gray-600">{"#"}</th>
                            <th class="px-4 py-3 text-left font-semibold text-gray-600">{"Problem Statement"}</th>
                            <th class="px-4 py-3 text-left font-semibold text-gray-600">{"Category"}</th>
                            <th class="px-4 py-3 text-left font-semibold text-gray-600">{"Points"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100 bg-white">
                        {
                            (0..3).map(|i| html! {
                                <tr key={i}>
                                    <td class="px-4 py-3 text-gray-500">{ i + 1 }</td>
                                    <td class="px-4 py-3" contenteditable="true">{ placeholder_title(i) }</td>
                                    <td class="px-4 py-3" contenteditable="true">{ placeholder_category(i) }</td>
                                    <td class="px-4 py-3" contenteditable="true">{ PLACEHOLDER_POINTS }</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_one_based() {
        assert_eq!(placeholder_title(0), "Problem 1 — (edit this cell)");
        assert_eq!(placeholder_title(1), "Problem 2 — (edit this cell)");
        assert_eq!(placeholder_title(2), "Problem 3 — (edit this cell)");
    }

    #[test]
    fn categories_cycle_every_three_rows() {
        let cycle: Vec<String> = (0..6).map(placeholder_category).collect();
        assert_eq!(
            cycle,
            vec![
                "Category 1",
                "Category 2",
                "Category 3",
                "Category 1",
                "Category 2",
                "Category 3"
            ]
        );
    }

    #[test]
    fn points_placeholder_is_fixed() {
        assert_eq!(PLACEHOLDER_POINTS, "100");
    }
}
